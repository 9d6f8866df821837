//! User entity.

use chrono::{DateTime, Utc};

/// A registered user.
///
/// `owner_id` is a stable identifier distinct from the database id, generated
/// at registration. It is the subject of authorization and the foreign key on
/// [`super::ShortenedUrl`]. Email uniqueness is byte-exact (case-sensitive).
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub owner_id: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Input data for creating a new user at registration.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub owner_id: String,
    pub email: String,
    pub password_hash: String,
}
