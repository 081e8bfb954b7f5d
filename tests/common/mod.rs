//! Shared test fixtures: in-memory repository fakes and state builders.

#![allow(dead_code)]

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicBool, AtomicI64, Ordering},
};

use async_trait::async_trait;
use chrono::{Duration, Utc};
use url_alias::AppState;
use url_alias::application::services::{LinkService, StatsService, UserService};
use url_alias::domain::entities::{Link, NewLink, NewUser, User};
use url_alias::domain::repositories::{
    LinkClickStats, LinkFilter, LinkRepository, StatsOrder, StatsRepository, UserRepository,
};
use url_alias::error::{AppError, ClickLogError};

pub const FRONTEND_URL: &str = "https://front.example";
pub const BASE_URL: &str = "https://sho.rt";

/// In-memory [`LinkRepository`] backed by a `Vec`.
#[derive(Default)]
pub struct InMemoryLinkRepository {
    links: Mutex<Vec<Link>>,
    next_id: AtomicI64,
}

impl InMemoryLinkRepository {
    /// Seeds a link directly, bypassing the service layer.
    pub fn insert(&self, short_id: &str, orig_url: &str, is_active: bool, expires_in_secs: i64) -> Link {
        let link = Link {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            short_id: short_id.to_string(),
            orig_url: orig_url.to_string(),
            is_active,
            created_at: Utc::now(),
            expire_at: Utc::now() + Duration::seconds(expires_in_secs),
        };
        self.links.lock().unwrap().push(link.clone());
        link
    }

    pub fn get(&self, short_id: &str) -> Option<Link> {
        self.links
            .lock()
            .unwrap()
            .iter()
            .find(|l| l.short_id == short_id)
            .cloned()
    }

    fn matches(link: &Link, filter: LinkFilter) -> bool {
        if let Some(active) = filter.is_active {
            if link.is_active != active {
                return false;
            }
        }
        if let Some(valid) = filter.is_valid {
            let is_valid = link.is_active && !link.is_expired_at(Utc::now());
            if is_valid != valid {
                return false;
            }
        }
        true
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let link = Link {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            short_id: new_link.short_id,
            orig_url: new_link.orig_url,
            is_active: true,
            created_at: Utc::now(),
            expire_at: new_link.expire_at,
        };
        self.links.lock().unwrap().push(link.clone());
        Ok(link)
    }

    async fn find_by_short_id(&self, short_id: &str) -> Result<Option<Link>, AppError> {
        Ok(self.get(short_id))
    }

    async fn list(
        &self,
        filter: LinkFilter,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Link>, AppError> {
        let links = self.links.lock().unwrap();
        let mut matching: Vec<Link> = links
            .iter()
            .filter(|l| Self::matches(l, filter))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matching
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    async fn count(&self, filter: LinkFilter) -> Result<i64, AppError> {
        let links = self.links.lock().unwrap();
        Ok(links.iter().filter(|l| Self::matches(l, filter)).count() as i64)
    }

    async fn deactivate(&self, short_id: &str) -> Result<Option<Link>, AppError> {
        let mut links = self.links.lock().unwrap();
        match links.iter_mut().find(|l| l.short_id == short_id) {
            Some(link) => {
                link.is_active = false;
                Ok(Some(link.clone()))
            }
            None => Ok(None),
        }
    }
}

/// In-memory [`UserRepository`] enforcing the username unique constraint
/// via a pre-insert scan.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
    next_id: AtomicI64,
}

impl InMemoryUserRepository {
    pub fn get(&self, username: &str) -> Option<User> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.username == username)
            .cloned()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.username == new_user.username) {
            return Err(AppError::Database(sqlx::Error::PoolClosed));
        }
        let user = User {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            username: new_user.username,
            password_hash: new_user.password_hash,
            is_active: true,
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        Ok(self.get(username))
    }
}

/// In-memory [`StatsRepository`] that records click link ids and serves
/// canned aggregates.
#[derive(Default)]
pub struct InMemoryStatsRepository {
    pub clicks: Mutex<Vec<i64>>,
    fail_clicks: AtomicBool,
    canned: Mutex<Vec<LinkClickStats>>,
}

impl InMemoryStatsRepository {
    /// Makes every subsequent `record_click` fail, simulating storage loss.
    pub fn fail_clicks(&self) {
        self.fail_clicks.store(true, Ordering::SeqCst);
    }

    pub fn recorded_clicks(&self) -> Vec<i64> {
        self.clicks.lock().unwrap().clone()
    }

    /// Seeds an aggregate row served by the stats queries.
    pub fn seed_stats(&self, short_id: &str, orig_url: &str, hour: i64, day: i64, all: i64) {
        self.canned.lock().unwrap().push(LinkClickStats {
            short_id: short_id.to_string(),
            orig_url: orig_url.to_string(),
            last_hour_clicks: hour,
            last_day_clicks: day,
            all_clicks: all,
        });
    }
}

#[async_trait]
impl StatsRepository for InMemoryStatsRepository {
    async fn record_click(&self, link_id: i64) -> Result<(), ClickLogError> {
        if self.fail_clicks.load(Ordering::SeqCst) {
            return Err(ClickLogError::from(sqlx::Error::PoolClosed));
        }
        self.clicks.lock().unwrap().push(link_id);
        Ok(())
    }

    async fn top_links(
        &self,
        order: StatsOrder,
        limit: i64,
    ) -> Result<Vec<LinkClickStats>, AppError> {
        let mut rows = self.canned.lock().unwrap().clone();
        rows.sort_by_key(|r| {
            std::cmp::Reverse(match order {
                StatsOrder::LastHour => r.last_hour_clicks,
                StatsOrder::LastDay => r.last_day_clicks,
                StatsOrder::AllTime => r.all_clicks,
            })
        });
        rows.truncate(limit as usize);
        Ok(rows)
    }

    async fn stats_by_short_id(&self, short_id: &str) -> Result<Option<LinkClickStats>, AppError> {
        Ok(self
            .canned
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.short_id == short_id)
            .cloned())
    }
}

/// An [`AppState`] over in-memory repositories, plus handles to the fakes
/// for seeding and inspection.
pub struct TestContext {
    pub state: AppState,
    pub links: Arc<InMemoryLinkRepository>,
    pub users: Arc<InMemoryUserRepository>,
    pub stats: Arc<InMemoryStatsRepository>,
}

pub fn test_context() -> TestContext {
    let links = Arc::new(InMemoryLinkRepository::default());
    let users = Arc::new(InMemoryUserRepository::default());
    let stats = Arc::new(InMemoryStatsRepository::default());

    let state = AppState {
        link_service: Arc::new(LinkService::new(links.clone())),
        user_service: Arc::new(UserService::new(users.clone())),
        stats_service: Arc::new(StatsService::new(stats.clone())),
        frontend_url: Arc::from(FRONTEND_URL),
        base_url: Arc::from(BASE_URL),
    };

    TestContext {
        state,
        links,
        users,
        stats,
    }
}
