//! Authentication service: credential checks, first-admin setup and token issuing.

use std::sync::Arc;

use domain::models::user::{LoginResponse, UserSummary};
use domain::models::User;
use persistence::repositories::UserRepository;
use shared::jwt::{JwtConfig, JwtError};
use shared::password::{hash_password, verify_password, PasswordError};
use sqlx::PgPool;
use thiserror::Error;

use crate::error::ApiError;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("User is disabled")]
    UserDisabled,

    #[error("Setup has already been completed")]
    AlreadyInitialized,

    #[error("Token error: {0}")]
    TokenError(#[from] JwtError),

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            // Both are reported identically so callers cannot probe account state.
            AuthError::InvalidCredentials | AuthError::UserDisabled => {
                ApiError::Unauthorized("Invalid username or password".to_string())
            }
            AuthError::AlreadyInitialized => {
                ApiError::Conflict("Setup has already been completed".to_string())
            }
            AuthError::DatabaseError(e) => ApiError::from(e),
            AuthError::PasswordError(e) => ApiError::Internal(format!("Password error: {}", e)),
            AuthError::TokenError(e) => ApiError::Internal(format!("Token error: {}", e)),
        }
    }
}

/// Authentication service.
pub struct AuthService {
    users: UserRepository,
    jwt: Arc<JwtConfig>,
}

impl AuthService {
    pub fn new(pool: PgPool, jwt: Arc<JwtConfig>) -> Self {
        Self {
            users: UserRepository::new(pool),
            jwt,
        }
    }

    /// Verify a username/password pair and issue a token.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, AuthError> {
        let user: User = self
            .users
            .find_by_username(username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?
            .into();

        if !verify_password(password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials);
        }

        if !user.is_active {
            return Err(AuthError::UserDisabled);
        }

        self.issue(&user)
    }

    /// Create the first admin account. Fails once any user exists.
    pub async fn setup_first_admin(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<LoginResponse, AuthError> {
        if self.users.count().await? > 0 {
            return Err(AuthError::AlreadyInitialized);
        }

        let password_hash = hash_password(password)?;

        // The insert re-checks emptiness so two concurrent setups cannot both succeed.
        let user: User = self
            .users
            .create_first_admin(username, email, &password_hash)
            .await?
            .ok_or(AuthError::AlreadyInitialized)?
            .into();

        self.issue(&user)
    }

    fn issue(&self, user: &User) -> Result<LoginResponse, AuthError> {
        let issued = self.jwt.issue(user.id, &user.username, user.role.as_str())?;
        Ok(LoginResponse {
            token: issued.token,
            expires_in: issued.expires_in,
            user: UserSummary::from(user),
        })
    }
}
