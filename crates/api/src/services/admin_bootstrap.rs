//! Admin bootstrap service for initial setup.
//!
//! Creates an admin account on startup from `admin.bootstrap_*` settings.
//! Idempotent: does nothing once a user with that username exists.

use domain::models::Role;
use persistence::repositories::UserRepository;
use shared::password::{hash_password, PasswordError};
use sqlx::PgPool;
use tracing::{info, warn};

use crate::config::AdminBootstrapConfig;

/// Minimum length for a bootstrap password.
const MIN_PASSWORD_LEN: usize = 8;

/// Error types for admin bootstrap.
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Password hashing error: {0}")]
    PasswordHash(#[from] PasswordError),
}

/// What `bootstrap_admin` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapOutcome {
    NotConfigured,
    AlreadyExists,
    Created,
}

/// Bootstrap an admin user if configured and not already present.
///
/// Call after migrations on startup.
pub async fn bootstrap_admin(
    pool: &PgPool,
    config: &AdminBootstrapConfig,
) -> Result<BootstrapOutcome, BootstrapError> {
    let username = config.bootstrap_username.trim();
    if username.is_empty() {
        return Ok(BootstrapOutcome::NotConfigured);
    }

    if config.bootstrap_password.len() < MIN_PASSWORD_LEN {
        warn!(
            "AS__ADMIN__BOOTSTRAP_USERNAME is set but AS__ADMIN__BOOTSTRAP_PASSWORD is missing or shorter than {} characters - skipping bootstrap",
            MIN_PASSWORD_LEN
        );
        return Ok(BootstrapOutcome::NotConfigured);
    }

    let users = UserRepository::new(pool.clone());
    if users.find_by_username(username).await?.is_some() {
        info!(username, "Bootstrap admin already exists - skipping bootstrap");
        return Ok(BootstrapOutcome::AlreadyExists);
    }

    let password_hash = hash_password(&config.bootstrap_password)?;
    let user = match users
        .create(username, config.bootstrap_email.trim(), &password_hash, Role::Admin)
        .await
    {
        Ok(user) => user,
        // Lost a race with another instance creating the same account.
        Err(sqlx::Error::Database(e)) if e.code().as_deref() == Some("23505") => {
            return Ok(BootstrapOutcome::AlreadyExists);
        }
        Err(e) => return Err(e.into()),
    };

    info!(
        username = %user.username,
        user_id = user.id,
        "Bootstrap admin user created successfully"
    );
    warn!(
        "SECURITY: Remove AS__ADMIN__BOOTSTRAP_PASSWORD from the environment now that the admin account exists"
    );

    Ok(BootstrapOutcome::Created)
}
