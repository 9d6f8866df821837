//! Shortened URL lifecycle service: allocation, resolution, listing,
//! deactivation.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::json;

use crate::domain::entities::NewShortenedUrl;
use crate::domain::repositories::{UrlRepository, UserRepository};
use crate::error::AppError;
use crate::utils::code_generator::generate_code;

/// Maximum allocation attempts before giving up.
///
/// Repeated collision at Base62 6-8 character lengths signals a saturated code
/// space or a store that always reports "exists"; both are worth surfacing
/// quickly, so attempts are immediate with no backoff.
pub const MAX_COLLISION_RETRIES: usize = 5;

/// Result of a successful shorten operation.
#[derive(Debug, Clone)]
pub struct ShortUrlCreated {
    pub short_url: String,
    pub short_code: String,
    pub original_url: String,
}

/// One owned record in a listing, with the composed public short URL.
#[derive(Debug, Clone)]
pub struct UrlListEntry {
    pub id: i64,
    pub short_code: String,
    pub short_url: String,
    pub original_url: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

/// Service orchestrating the shortened URL lifecycle.
///
/// Creation allocates a collision-free code with bounded retries; mutation is
/// limited to owner-only deactivation; resolution is public and read-only.
pub struct UrlService {
    url_repository: Arc<dyn UrlRepository>,
    user_repository: Arc<dyn UserRepository>,
    base_url: String,
}

impl UrlService {
    /// Creates a new URL service.
    ///
    /// `base_url` is the externally visible origin used to compose short URLs;
    /// a trailing slash is tolerated.
    pub fn new(
        url_repository: Arc<dyn UrlRepository>,
        user_repository: Arc<dyn UserRepository>,
        base_url: String,
    ) -> Self {
        Self {
            url_repository,
            user_repository,
            base_url,
        }
    }

    /// Creates a shortened URL on behalf of `caller`.
    ///
    /// The caller id must resolve to an existing user — a defensive check
    /// against a stale or forged identity claim in an otherwise valid token.
    /// `original_url` is assumed pre-validated at the request boundary.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the caller does not exist.
    /// Returns [`AppError::Internal`] when no unique code is found within
    /// [`MAX_COLLISION_RETRIES`] attempts.
    pub async fn create_short_url(
        &self,
        original_url: String,
        caller: &str,
    ) -> Result<ShortUrlCreated, AppError> {
        if !self.user_repository.owner_exists(caller).await? {
            return Err(AppError::not_found(
                "User not found",
                json!({ "ownerId": caller }),
            ));
        }

        let short_code = self.allocate_code().await?;

        let record = self
            .url_repository
            .create(NewShortenedUrl {
                owner_id: caller.to_string(),
                short_code,
                original_url,
            })
            .await?;

        Ok(ShortUrlCreated {
            short_url: self.short_url_for(&record.short_code),
            short_code: record.short_code,
            original_url: record.original_url,
        })
    }

    /// Resolves a short code to its original URL. Public, read-only.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when no record has the code and
    /// [`AppError::Gone`] when the record exists but has been deactivated —
    /// a deleted link reads as gone, not as never-existed.
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        let record = self
            .url_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Short code not found", json!({ "shortCode": code }))
            })?;

        if !record.active {
            return Err(AppError::gone(
                "This URL has been deactivated",
                json!({ "shortCode": code }),
            ));
        }

        Ok(record.original_url)
    }

    /// Lists all records owned by `caller`, active and inactive, newest first.
    pub async fn list_urls(&self, caller: &str) -> Result<Vec<UrlListEntry>, AppError> {
        let records = self.url_repository.list_by_owner(caller).await?;

        Ok(records
            .into_iter()
            .map(|r| UrlListEntry {
                id: r.id,
                short_url: self.short_url_for(&r.short_code),
                short_code: r.short_code,
                original_url: r.original_url,
                active: r.active,
                created_at: r.created_at,
            })
            .collect())
    }

    /// Deactivates the record with the given id on behalf of `caller`.
    ///
    /// Existence is checked first, then ownership, then the record is
    /// mutated: a non-owner always receives [`AppError::Forbidden`] on a
    /// valid id, regardless of the record's current state. Idempotent —
    /// deactivating an already-inactive record succeeds silently.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when no record has the id.
    /// Returns [`AppError::Forbidden`] when the caller is not the owner.
    pub async fn deactivate_url(&self, id: i64, caller: &str) -> Result<(), AppError> {
        let record = self
            .url_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("URL not found", json!({ "id": id })))?;

        if !record.is_owned_by(caller) {
            return Err(AppError::forbidden(
                "You do not have permission to delete this URL",
                json!({ "id": id }),
            ));
        }

        self.url_repository.deactivate(id).await
    }

    /// Composes the externally visible short URL for a code.
    fn short_url_for(&self, code: &str) -> String {
        format!("{}/r/{}", self.base_url.trim_end_matches('/'), code)
    }

    /// Allocates a short code not currently present in the store.
    ///
    /// Bounded loop: generate, check existence, return the first free code.
    /// Failed attempts perform no writes. The existence pre-check is a latency
    /// optimization; the store's uniqueness constraint on `short_code` is the
    /// correctness guarantee under concurrent creation.
    async fn allocate_code(&self) -> Result<String, AppError> {
        for _ in 0..MAX_COLLISION_RETRIES {
            let code = generate_code();

            if !self.url_repository.code_exists(&code).await? {
                return Ok(code);
            }
        }

        Err(AppError::internal(
            "Failed to generate unique short code",
            json!({ "attempts": MAX_COLLISION_RETRIES }),
        ))
    }
}
