//! Registration and login service.

use std::sync::Arc;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use serde_json::json;
use uuid::Uuid;

use crate::application::services::token_service::{Role, TokenService};
use crate::domain::entities::NewUser;
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// Service for registering users and exchanging credentials for tokens.
///
/// Passwords are hashed with Argon2id and a random salt. Email matching is
/// byte-exact for both uniqueness and login, mirroring the observed behavior
/// of the system.
pub struct AuthService {
    user_repository: Arc<dyn UserRepository>,
    token_service: Arc<TokenService>,
}

impl AuthService {
    /// Creates a new authentication service.
    pub fn new(user_repository: Arc<dyn UserRepository>, token_service: Arc<TokenService>) -> Self {
        Self {
            user_repository,
            token_service,
        }
    }

    /// Registers a new user and returns a freshly issued bearer token.
    ///
    /// Generates a UUID v4 owner id as the stable authorization subject,
    /// distinct from the database id and the mutable email.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] when the email is already registered.
    pub async fn register(&self, email: &str, password: &str) -> Result<String, AppError> {
        if self.user_repository.email_exists(email).await? {
            return Err(AppError::conflict("Email already exists", json!({})));
        }

        let password_hash = hash_password(password)?;
        let owner_id = Uuid::new_v4().to_string();

        let user = self
            .user_repository
            .create(NewUser {
                owner_id,
                email: email.to_string(),
                password_hash,
            })
            .await?;

        tracing::info!(owner_id = %user.owner_id, "Registered new user");

        self.token_service
            .issue(&user.owner_id, &user.email, vec![Role::User])
    }

    /// Verifies credentials and returns a freshly issued bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] with the same message for an
    /// unknown email and for a wrong password, so the two cases are
    /// indistinguishable to a caller.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, AppError> {
        let user = self
            .user_repository
            .find_by_email(email)
            .await?
            .ok_or_else(invalid_credentials)?;

        verify_password(password, &user.password_hash)?;

        self.token_service
            .issue(&user.owner_id, &user.email, vec![Role::User])
    }
}

fn invalid_credentials() -> AppError {
    AppError::unauthorized("Invalid credentials", json!({}))
}

fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| {
            tracing::error!("Failed to hash password: {e}");
            AppError::internal("Failed to hash password", json!({}))
        })
}

fn verify_password(password: &str, stored_hash: &str) -> Result<(), AppError> {
    let parsed = PasswordHash::new(stored_hash).map_err(|e| {
        tracing::error!("Failed to parse stored password hash: {e}");
        AppError::internal("Corrupt credential record", json!({}))
    })?;

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .map_err(|_| invalid_credentials())
}
