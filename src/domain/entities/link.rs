//! Link entity representing a short alias for an original URL.

use chrono::{DateTime, Utc};

/// A short link with activity flag and expiry.
///
/// Read by the redirect resolver and never mutated by it; deactivation goes
/// through [`crate::domain::repositories::LinkRepository::deactivate`].
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Link {
    pub id: i64,
    /// Opaque token used as the path segment identifying this link.
    pub short_id: String,
    /// Stored verbatim; the resolver performs no normalization or re-encoding.
    pub orig_url: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub expire_at: DateTime<Utc>,
}

impl Link {
    /// Returns true if the link is expired at `now`.
    ///
    /// The boundary is inclusive: `expire_at == now` counts as expired.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expire_at <= now
    }
}

/// Input data for creating a new link.
///
/// `is_active` defaults to true and `created_at` to now() in storage.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub short_id: String,
    pub orig_url: String,
    pub expire_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn make_link(expire_at: DateTime<Utc>) -> Link {
        Link {
            id: 1,
            short_id: "abc123".to_string(),
            orig_url: "https://example.com".to_string(),
            is_active: true,
            created_at: Utc::now(),
            expire_at,
        }
    }

    #[test]
    fn test_future_expiry_is_not_expired() {
        let now = Utc::now();
        let link = make_link(now + Duration::hours(1));
        assert!(!link.is_expired_at(now));
    }

    #[test]
    fn test_past_expiry_is_expired() {
        let now = Utc::now();
        let link = make_link(now - Duration::seconds(1));
        assert!(link.is_expired_at(now));
    }

    #[test]
    fn test_expiry_boundary_is_inclusive() {
        // expire_at == now counts as expired
        let now = Utc::now();
        let link = make_link(now);
        assert!(link.is_expired_at(now));
    }
}
