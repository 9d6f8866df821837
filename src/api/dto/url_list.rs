//! DTO for the URL listing endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::application::services::url_service::UrlListEntry;

/// One owned record in a listing response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlListResponse {
    pub id: i64,
    pub short_code: String,
    pub short_url: String,
    pub original_url: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<UrlListEntry> for UrlListResponse {
    fn from(entry: UrlListEntry) -> Self {
        Self {
            id: entry.id,
            short_code: entry.short_code,
            short_url: entry.short_url,
            original_url: entry.original_url,
            active: entry.active,
            created_at: entry.created_at,
        }
    }
}
