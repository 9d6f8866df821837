//! Repository trait for shortened URL data access.

use crate::domain::entities::{NewShortenedUrl, ShortenedUrl};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for shortened URL records.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Persists a new shortened URL with `active = true`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short code is already claimed —
    /// the store enforces a uniqueness constraint on `short_code`, which is
    /// the correctness guarantee under concurrent allocation.
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_url: NewShortenedUrl) -> Result<ShortenedUrl, AppError>;

    /// Finds a record by its store-assigned id.
    async fn find_by_id(&self, id: i64) -> Result<Option<ShortenedUrl>, AppError>;

    /// Finds a record by its short code.
    async fn find_by_code(&self, code: &str) -> Result<Option<ShortenedUrl>, AppError>;

    /// Checks whether any record (active or not) occupies the given code.
    ///
    /// Used by the allocator as a cheap pre-check before insertion.
    async fn code_exists(&self, code: &str) -> Result<bool, AppError>;

    /// Lists all records owned by `owner_id`, newest first by `created_at`.
    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<ShortenedUrl>, AppError>;

    /// Sets `active = false` on the record with the given id.
    ///
    /// A no-op when the record is already inactive. There is no reactivation
    /// path; the transition is one-way.
    async fn deactivate(&self, id: i64) -> Result<(), AppError>;
}
