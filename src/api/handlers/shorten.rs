//! Handler for the URL shortening endpoint.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::api::middleware::CurrentUser;
use crate::application::services::Role;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a shortened URL for the authenticated caller.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Errors
///
/// Returns 400 on invalid URL, 401 when unauthenticated, 500 when no unique
/// code could be allocated.
pub async fn shorten_handler(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    user.require_any_role(&[Role::User, Role::Admin])?;
    payload.validate()?;

    let created = state
        .url_service
        .create_short_url(payload.original_url, &user.owner_id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            short_url: created.short_url,
            short_code: created.short_code,
            original_url: created.original_url,
        }),
    ))
}
