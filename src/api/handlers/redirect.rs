//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /r/{code}` — public, no authentication.
///
/// Responds `302 Found` with the original URL in the `Location` header.
///
/// # Errors
///
/// Returns 404 when the code does not exist and 410 when the record exists
/// but has been deactivated — a deleted link reads as gone, not never-existed.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let original_url = state.url_service.resolve(&code).await?;

    Ok((StatusCode::FOUND, [(header::LOCATION, original_url)]))
}
