//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /r/{code}` - Short URL redirect (public)
//! - `GET /health`   - Liveness check (public)
//! - `/api/*`        - Registration, login (public); shorten, list,
//!   deactivate (Bearer token required)

use axum::routing::get;
use axum::{Router, middleware};

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::{auth, tracing};
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    let api_router = api::routes::public_routes().merge(
        api::routes::protected_routes()
            .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer)),
    );

    Router::new()
        .route("/r/{code}", get(redirect_handler))
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .with_state(state)
        .layer(tracing::layer())
}
