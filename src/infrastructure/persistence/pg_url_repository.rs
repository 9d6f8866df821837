//! PostgreSQL implementation of the URL repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewShortenedUrl, ShortenedUrl};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// PostgreSQL repository for shortened URL storage and retrieval.
///
/// Uses runtime-bound prepared statements so the crate builds without a live
/// database. The UNIQUE constraint on `short_code` makes concurrent
/// allocation race-safe: an insert losing the race fails with a unique
/// violation rather than creating a duplicate.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn create(&self, new_url: NewShortenedUrl) -> Result<ShortenedUrl, AppError> {
        let record = sqlx::query_as::<_, ShortenedUrl>(
            r#"
            INSERT INTO shortened_urls (owner_id, short_code, original_url)
            VALUES ($1, $2, $3)
            RETURNING id, owner_id, short_code, original_url, active, created_at
            "#,
        )
        .bind(&new_url.owner_id)
        .bind(&new_url.short_code)
        .bind(&new_url.original_url)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(record)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ShortenedUrl>, AppError> {
        let record = sqlx::query_as::<_, ShortenedUrl>(
            r#"
            SELECT id, owner_id, short_code, original_url, active, created_at
            FROM shortened_urls
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(record)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ShortenedUrl>, AppError> {
        let record = sqlx::query_as::<_, ShortenedUrl>(
            r#"
            SELECT id, owner_id, short_code, original_url, active, created_at
            FROM shortened_urls
            WHERE short_code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(record)
    }

    async fn code_exists(&self, code: &str) -> Result<bool, AppError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM shortened_urls WHERE short_code = $1)")
                .bind(code)
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(exists)
    }

    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<ShortenedUrl>, AppError> {
        let records = sqlx::query_as::<_, ShortenedUrl>(
            r#"
            SELECT id, owner_id, short_code, original_url, active, created_at
            FROM shortened_urls
            WHERE owner_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(owner_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(records)
    }

    async fn deactivate(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("UPDATE shortened_urls SET active = FALSE WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
