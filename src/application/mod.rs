//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers.
//!
//! - [`services::url_service::UrlService`] - Short URL allocation and lifecycle
//! - [`services::auth_service::AuthService`] - Registration and login
//! - [`services::token_service::TokenService`] - JWT issuance and verification

pub mod services;
