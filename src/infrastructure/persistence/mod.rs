//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx prepared
//! statements.
//!
//! - [`PgUrlRepository`] - Shortened URL storage and retrieval
//! - [`PgUserRepository`] - User storage and lookup

pub mod pg_url_repository;
pub mod pg_user_repository;

pub use pg_url_repository::PgUrlRepository;
pub use pg_user_repository::PgUserRepository;
