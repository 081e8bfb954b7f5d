//! User registration service.

use std::sync::Arc;

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::utils::password::hash_password;

/// Service for registering user accounts.
pub struct UserService {
    user_repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    /// Registers a new user.
    ///
    /// The plain password is hashed before it reaches storage. A taken
    /// username fails with a 400-mapped error whether it is caught by the
    /// pre-check or by the unique constraint on a concurrent insert.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BadRequest`] when the username already exists
    /// (message contains "already exists") and [`AppError::Database`] on
    /// other storage failures.
    pub async fn register(&self, username: &str, password: &str) -> Result<User, AppError> {
        if self
            .user_repository
            .find_by_username(username)
            .await?
            .is_some()
        {
            return Err(already_exists(username));
        }

        let new_user = NewUser {
            username: username.to_string(),
            password_hash: hash_password(password),
        };

        match self.user_repository.create(new_user).await {
            Ok(user) => Ok(user),
            // Lost the race against a concurrent registration
            Err(AppError::Database(e))
                if e.as_database_error()
                    .is_some_and(|db| db.is_unique_violation()) =>
            {
                Err(already_exists(username))
            }
            Err(e) => Err(e),
        }
    }
}

fn already_exists(username: &str) -> AppError {
    AppError::bad_request(format!("User '{username}' already exists"))
}
