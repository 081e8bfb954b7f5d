mod common;

use axum::{Router, http::StatusCode};
use axum_test::TestServer;
use serde_json::Value;
use url_alias::api::routes::api_routes;

use common::test_context;

fn api_server(state: url_alias::AppState) -> TestServer {
    let app = Router::new().nest("/api", api_routes()).with_state(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_stats_list_sorted_all_time_by_default() {
    let ctx = test_context();
    ctx.stats.seed_stats("aaa111", "https://example.com/1", 5, 10, 20);
    ctx.stats.seed_stats("bbb222", "https://example.com/2", 1, 2, 50);
    let server = api_server(ctx.state);

    let response = server.get("/api/stats").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    // Highest all-time count first.
    assert_eq!(items[0]["all_clicks"], 50);
    assert_eq!(
        items[0]["short_url"],
        format!("{}/bbb222", common::BASE_URL)
    );
    assert_eq!(items[1]["all_clicks"], 20);
}

#[tokio::test]
async fn test_stats_list_sorted_by_hour_window() {
    let ctx = test_context();
    ctx.stats.seed_stats("aaa111", "https://example.com/1", 5, 10, 20);
    ctx.stats.seed_stats("bbb222", "https://example.com/2", 1, 2, 50);
    let server = api_server(ctx.state);

    let response = server.get("/api/stats?sort_by=hour").await;

    let body: Value = response.json();
    let items = body["items"].as_array().unwrap();
    assert_eq!(items[0]["last_hour_clicks"], 5);
    assert_eq!(items[1]["last_hour_clicks"], 1);
}

#[tokio::test]
async fn test_stats_list_honors_top_limit() {
    let ctx = test_context();
    ctx.stats.seed_stats("aaa111", "https://example.com/1", 0, 0, 3);
    ctx.stats.seed_stats("bbb222", "https://example.com/2", 0, 0, 2);
    ctx.stats.seed_stats("ccc333", "https://example.com/3", 0, 0, 1);
    let server = api_server(ctx.state);

    let response = server.get("/api/stats?top=2").await;

    let body: Value = response.json();
    assert_eq!(body["items"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_stats_for_single_link() {
    let ctx = test_context();
    ctx.stats.seed_stats("aaa111", "https://example.com/1", 5, 10, 20);
    let server = api_server(ctx.state);

    let response = server.get("/api/stats/aaa111").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["orig_url"], "https://example.com/1");
    assert_eq!(body["short_url"], format!("{}/aaa111", common::BASE_URL));
    assert_eq!(body["last_hour_clicks"], 5);
    assert_eq!(body["last_day_clicks"], 10);
    assert_eq!(body["all_clicks"], 20);
}

#[tokio::test]
async fn test_stats_for_unknown_link_returns_not_found() {
    let ctx = test_context();
    let server = api_server(ctx.state);

    let response = server.get("/api/stats/nosuch").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert!(body["detail"].is_string());
}
