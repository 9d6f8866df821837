#![allow(dead_code)]

//! Shared test fixtures: in-memory repositories and application wiring.
//!
//! Integration tests exercise the real router, middleware, services, and
//! error mapping; only the persistence layer is swapped for in-memory
//! implementations of the repository traits.

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use axum::Router;
use axum_test::TestServer;
use chrono::{Duration, Utc};
use serde_json::json;

use shortlink::application::services::{AuthService, TokenService, UrlService};
use shortlink::domain::entities::{NewShortenedUrl, NewUser, ShortenedUrl, User};
use shortlink::domain::repositories::{UrlRepository, UserRepository};
use shortlink::error::AppError;
use shortlink::routes::app_router;
use shortlink::state::AppState;

pub const TEST_BASE_URL: &str = "http://localhost:3000";
pub const TEST_JWT_SECRET: &str = "test-jwt-secret";

/// In-memory [`UrlRepository`] backed by a mutex-guarded vector.
///
/// Timestamps are spaced one second apart so newest-first ordering is
/// deterministic even when records are created in the same instant.
#[derive(Default)]
pub struct InMemoryUrlRepository {
    urls: Mutex<Vec<ShortenedUrl>>,
    next_id: AtomicI64,
}

#[async_trait]
impl UrlRepository for InMemoryUrlRepository {
    async fn create(&self, new_url: NewShortenedUrl) -> Result<ShortenedUrl, AppError> {
        let mut urls = self.urls.lock().unwrap();
        if urls.iter().any(|u| u.short_code == new_url.short_code) {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": "shortened_urls_short_code_key" }),
            ));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let record = ShortenedUrl::new(
            id,
            new_url.owner_id,
            new_url.short_code,
            new_url.original_url,
            true,
            Utc::now() + Duration::seconds(id),
        );
        urls.push(record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ShortenedUrl>, AppError> {
        let urls = self.urls.lock().unwrap();
        Ok(urls.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ShortenedUrl>, AppError> {
        let urls = self.urls.lock().unwrap();
        Ok(urls.iter().find(|u| u.short_code == code).cloned())
    }

    async fn code_exists(&self, code: &str) -> Result<bool, AppError> {
        let urls = self.urls.lock().unwrap();
        Ok(urls.iter().any(|u| u.short_code == code))
    }

    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<ShortenedUrl>, AppError> {
        let urls = self.urls.lock().unwrap();
        let mut owned: Vec<ShortenedUrl> = urls
            .iter()
            .filter(|u| u.owner_id == owner_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(owned)
    }

    async fn deactivate(&self, id: i64) -> Result<(), AppError> {
        let mut urls = self.urls.lock().unwrap();
        if let Some(record) = urls.iter_mut().find(|u| u.id == id) {
            record.active = false;
        }
        Ok(())
    }
}

/// In-memory [`UserRepository`] with byte-exact email matching.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
    next_id: AtomicI64,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == new_user.email) {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": "users_email_key" }),
            ));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let user = User {
            id,
            owner_id: new_user.owner_id,
            email: new_user.email,
            password_hash: new_user.password_hash,
            created_at: Utc::now(),
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn email_exists(&self, email: &str) -> Result<bool, AppError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().any(|u| u.email == email))
    }

    async fn owner_exists(&self, owner_id: &str) -> Result<bool, AppError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().any(|u| u.owner_id == owner_id))
    }
}

/// Builds an [`AppState`] wired against fresh in-memory repositories.
pub fn test_state() -> AppState {
    let url_repository = Arc::new(InMemoryUrlRepository::default());
    let user_repository = Arc::new(InMemoryUserRepository::default());
    let token_service = Arc::new(TokenService::new(TEST_JWT_SECRET, 3600));

    AppState {
        url_service: Arc::new(UrlService::new(
            url_repository,
            user_repository.clone(),
            TEST_BASE_URL.to_string(),
        )),
        auth_service: Arc::new(AuthService::new(user_repository, token_service.clone())),
        token_service,
    }
}

/// Builds the full application router on in-memory state.
pub fn test_app() -> Router {
    app_router(test_state())
}

/// Starts a [`TestServer`] running the full application.
pub fn test_server() -> TestServer {
    TestServer::new(test_app()).unwrap()
}

/// Registers a user and returns the bearer token from the response.
pub async fn register_user(server: &TestServer, email: &str, password: &str) -> String {
    let response = server
        .post("/api/register")
        .json(&json!({ "email": email, "password": password }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);

    let body: serde_json::Value = response.json();
    body["accessToken"]
        .as_str()
        .expect("register response must contain accessToken")
        .to_string()
}
