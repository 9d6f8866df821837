//! Bearer token authentication middleware.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;
use serde_json::json;

use crate::application::services::token_service::{Claims, Role};
use crate::{error::AppError, state::AppState};

/// Verified caller identity, attached to the request by [`layer`].
///
/// Handlers receive it as an explicit extractor argument; there is no ambient
/// security context.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub owner_id: String,
    pub email: String,
    pub roles: Vec<Role>,
}

impl CurrentUser {
    /// Checks that the caller holds at least one of the given roles.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Forbidden`] otherwise — an authorization failure,
    /// distinct from the authentication failures raised by [`layer`].
    pub fn require_any_role(&self, allowed: &[Role]) -> Result<(), AppError> {
        if self.roles.iter().any(|role| allowed.contains(role)) {
            return Ok(());
        }

        Err(AppError::forbidden(
            "Insufficient role",
            json!({ "required": allowed }),
        ))
    }
}

impl From<Claims> for CurrentUser {
    fn from(claims: Claims) -> Self {
        Self {
            owner_id: claims.user_id,
            email: claims.email,
            roles: claims.roles,
        }
    }
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<CurrentUser>().cloned().ok_or_else(|| {
            AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "Missing authentication context" }),
            )
        })
    }
}

/// Authenticates requests using Bearer tokens from the Authorization header.
///
/// # Authentication Flow
///
/// 1. Extract token from `Authorization: Bearer <token>`
/// 2. Verify signature and expiry via the token service
/// 3. Attach [`CurrentUser`] to the request extensions
/// 4. Continue to the next middleware/handler
///
/// # Errors
///
/// Returns `401 Unauthorized` (with `WWW-Authenticate: Bearer` per RFC 6750)
/// if the header is missing, malformed, or the token is invalid or expired.
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBearer(token) = AuthBearer::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "Authorization header is missing or invalid" }),
            )
        })?;

    let claims = st.token_service.verify(&token)?;

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(CurrentUser::from(claims));

    Ok(next.run(req).await)
}
