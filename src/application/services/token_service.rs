//! JWT issuance and verification.

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::AppError;

/// Closed set of roles carried in token claims.
///
/// Checked explicitly per operation instead of comparing role strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "ROLE_USER")]
    User,
    #[serde(rename = "ROLE_ADMIN")]
    Admin,
}

/// Claims carried by every issued token.
///
/// `sub` duplicates the email for interoperability; authorization decisions
/// use `user_id` (the stable owner id), never the mutable email.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    pub email: String,
    pub roles: Vec<Role>,
    pub iat: i64,
    pub exp: i64,
}

/// Service for minting and verifying HS256 bearer tokens.
///
/// Tokens are time-bound. Verification rejects tampered and expired tokens
/// with [`AppError::Unauthorized`], distinguishable from ownership
/// ([`AppError::Forbidden`]) failures.
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_seconds: i64,
}

impl TokenService {
    /// Creates a token service from a shared signing secret and token lifetime.
    pub fn new(secret: &str, ttl_seconds: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl_seconds,
        }
    }

    /// Issues a signed token for the given identity and role set.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if signing fails.
    pub fn issue(&self, owner_id: &str, email: &str, roles: Vec<Role>) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: email.to_string(),
            user_id: owner_id.to_string(),
            email: email.to_string(),
            roles,
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.ttl_seconds)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding).map_err(|e| {
            tracing::error!("Failed to sign token: {e}");
            AppError::internal("Failed to issue token", json!({}))
        })
    }

    /// Verifies a token's signature and expiry and returns its claims.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] for tampered, malformed, or expired
    /// tokens.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding, &Validation::default())
            .map(|data| data.claims)
            .map_err(|e| {
                AppError::unauthorized(
                    "Unauthorized",
                    json!({ "reason": format!("Invalid token: {e}") }),
                )
            })
    }
}
