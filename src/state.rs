//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::{AuthService, TokenService, UrlService};

/// Application state shared across all request handlers.
///
/// Services hold their repositories as trait objects, so the same state shape
/// serves both the PostgreSQL wiring in `server::run` and the in-memory
/// wiring used by handler tests.
#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<UrlService>,
    pub auth_service: Arc<AuthService>,
    pub token_service: Arc<TokenService>,
}
