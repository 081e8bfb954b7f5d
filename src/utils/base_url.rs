//! Frontend origin resolution from forwarded headers.

use axum::http::HeaderMap;

/// Scheme assumed when `x-forwarded-host` is present without
/// `x-forwarded-proto`. The service itself always terminates plain HTTP; a
/// proxy that terminates TLS is expected to set `x-forwarded-proto`.
const FALLBACK_SCHEME: &str = "http";

/// Resolves the public-facing frontend origin for error-page redirects.
///
/// Reverse-proxy aware: when either `x-forwarded-proto` or `x-forwarded-host`
/// is present, the origin is reconstructed from them, taking the first
/// comma-separated token of each (proxies append to these headers hop by
/// hop). The `host` header backs up a missing `x-forwarded-host`.
///
/// Falls back to `configured_default` (already slash-stripped at startup)
/// when no forwarding headers are present or the host resolves empty.
///
/// Pure function; no side effects.
pub fn frontend_base_url(headers: &HeaderMap, configured_default: &str) -> String {
    let forwarded_proto = header_str(headers, "x-forwarded-proto");
    let forwarded_host = header_str(headers, "x-forwarded-host");

    if forwarded_proto.is_some() || forwarded_host.is_some() {
        let scheme = forwarded_proto.map_or(FALLBACK_SCHEME, first_token);
        let host = forwarded_host
            .or_else(|| header_str(headers, "host"))
            .map_or("", first_token);

        if !host.is_empty() {
            return format!("{scheme}://{host}")
                .trim_end_matches('/')
                .to_string();
        }
    }

    configured_default.to_string()
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

fn first_token(value: &str) -> &str {
    value.split(',').next().unwrap_or(value).trim()
}
