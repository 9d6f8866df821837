//! Shortened URL entity.

use chrono::{DateTime, Utc};

/// A shortened URL record.
///
/// `owner_id` is the opaque stable identifier of the creating user, not the
/// mutable email. `short_code` is globally unique across all records ever
/// created; deactivated records still occupy their code.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ShortenedUrl {
    pub id: i64,
    pub owner_id: String,
    pub short_code: String,
    pub original_url: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl ShortenedUrl {
    /// Creates a new ShortenedUrl instance.
    pub fn new(
        id: i64,
        owner_id: String,
        short_code: String,
        original_url: String,
        active: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            owner_id,
            short_code,
            original_url,
            active,
            created_at,
        }
    }

    /// Returns true if the record belongs to the given owner.
    pub fn is_owned_by(&self, owner_id: &str) -> bool {
        self.owner_id == owner_id
    }
}

/// Input data for creating a new shortened URL.
///
/// `active` is always true at creation and `created_at` is assigned by the
/// store, so neither appears here.
#[derive(Debug, Clone)]
pub struct NewShortenedUrl {
    pub owner_id: String,
    pub short_code: String,
    pub original_url: String,
}
