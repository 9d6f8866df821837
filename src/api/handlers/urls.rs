//! Handlers for listing and deactivating owned URLs.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::url_list::UrlListResponse;
use crate::api::middleware::CurrentUser;
use crate::application::services::Role;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all URLs owned by the caller, active and inactive, newest first.
///
/// # Endpoint
///
/// `GET /api/urls`
pub async fn list_urls_handler(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<Vec<UrlListResponse>>, AppError> {
    user.require_any_role(&[Role::User, Role::Admin])?;

    let entries = state.url_service.list_urls(&user.owner_id).await?;

    Ok(Json(entries.into_iter().map(UrlListResponse::from).collect()))
}

/// Deactivates a URL owned by the caller. Idempotent.
///
/// # Endpoint
///
/// `DELETE /api/urls/{id}`
///
/// # Errors
///
/// Returns 404 when no record has the id, 403 when the caller is not the
/// owner (checked after existence, so a non-owner on a valid id always sees
/// 403).
pub async fn deactivate_url_handler(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    user.require_any_role(&[Role::User, Role::Admin])?;

    state.url_service.deactivate_url(id, &user.owner_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
