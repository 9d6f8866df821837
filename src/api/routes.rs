//! API route configuration.

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::api::handlers::{
    deactivate_url_handler, list_urls_handler, login_handler, register_handler, shorten_handler,
};
use crate::state::AppState;

/// API routes that require no authentication.
///
/// - `POST /register` - Create an account, returns a bearer token
/// - `POST /login`    - Exchange credentials for a bearer token
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register_handler))
        .route("/login", post(login_handler))
}

/// API routes protected by Bearer token authentication.
///
/// - `POST   /shorten`    - Create a shortened URL
/// - `GET    /urls`       - List the caller's URLs
/// - `DELETE /urls/{id}`  - Deactivate an owned URL
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/urls", get(list_urls_handler))
        .route("/urls/{id}", delete(deactivate_url_handler))
}
