//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization and validator for input
//! validation. Wire field names are camelCase.

pub mod auth;
pub mod shorten;
pub mod url_list;
