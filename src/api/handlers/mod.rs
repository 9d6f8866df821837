//! HTTP request handlers for API endpoints.

pub mod auth;
pub mod health;
pub mod redirect;
pub mod shorten;
pub mod urls;

pub use auth::{login_handler, register_handler};
pub use health::health_handler;
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
pub use urls::{deactivate_url_handler, list_urls_handler};
