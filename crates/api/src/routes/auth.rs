//! Authentication routes: admin login and first-run setup.

use axum::{extract::State, http::StatusCode, Json};
use domain::models::user::{LoginRequest, LoginResponse, SetupAdminRequest};
use tracing::{info, warn};
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::ClientRateLimit;
use crate::services::auth::{AuthError, AuthService};

/// Exchange credentials for a bearer token.
///
/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    client: ClientRateLimit,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    request.validate()?;

    let service = AuthService::new(state.pool.clone(), state.jwt.clone());
    match service.login(&request.username, &request.password).await {
        Ok(response) => {
            info!(user_id = response.user.id, username = %response.user.username, "User logged in");
            Ok(Json(response))
        }
        Err(e @ (AuthError::InvalidCredentials | AuthError::UserDisabled)) => {
            warn!(
                username = %request.username,
                client = %client.client,
                reason = %e,
                "Login rejected"
            );
            Err(e.into())
        }
        Err(e) => Err(e.into()),
    }
}

/// Create the first admin account. Only allowed while no user exists.
///
/// POST /auth/setup
pub async fn setup(
    State(state): State<AppState>,
    client: ClientRateLimit,
    Json(request): Json<SetupAdminRequest>,
) -> Result<(StatusCode, Json<LoginResponse>), ApiError> {
    request.validate()?;

    let service = AuthService::new(state.pool.clone(), state.jwt.clone());
    let response = service
        .setup_first_admin(request.username.trim(), request.email.trim(), &request.password)
        .await
        .map_err(|e| {
            if matches!(e, AuthError::AlreadyInitialized) {
                warn!(client = %client.client, "Setup attempted after initialization");
            }
            ApiError::from(e)
        })?;

    info!(
        user_id = response.user.id,
        username = %response.user.username,
        "Initial admin account created"
    );

    Ok((StatusCode::CREATED, Json(response)))
}
