//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic. Creation
//! payloads use separate `New*` structs so store-assigned fields (id,
//! timestamps) never appear in inputs.

pub mod short_url;
pub mod user;

pub use short_url::{NewShortenedUrl, ShortenedUrl};
pub use user::{NewUser, User};
