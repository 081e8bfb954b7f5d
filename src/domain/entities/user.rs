//! User entity for account registration.

/// A registered user.
///
/// The password hash never leaves the service; API responses use
/// [`crate::api::dto::user::UserResponse`], which omits it.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub is_active: bool,
}

/// Input data for creating a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_construction() {
        let user = User {
            id: 7,
            username: "alice".to_string(),
            password_hash: "deadbeef$cafe".to_string(),
            is_active: true,
        };

        assert_eq!(user.id, 7);
        assert_eq!(user.username, "alice");
        assert!(user.is_active);
    }
}
