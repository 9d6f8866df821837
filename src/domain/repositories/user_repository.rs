//! Repository trait for user data access.

use crate::domain::entities::{NewUser, User};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for registered users.
///
/// Email lookups are byte-exact: `Alice@x.com` and `alice@x.com` are distinct
/// users. This mirrors the observed behavior of the system and is preserved
/// deliberately.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persists a new user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the email is already registered.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_user: NewUser) -> Result<User, AppError>;

    /// Finds a user by email (case-sensitive).
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// Checks whether a user with the given email exists (case-sensitive).
    async fn email_exists(&self, email: &str) -> Result<bool, AppError>;

    /// Checks whether a user with the given stable owner id exists.
    async fn owner_exists(&self, owner_id: &str) -> Result<bool, AppError>;
}
