//! Admin JWT authorization extractor.
//!
//! Place it before any body extractor so unauthorized requests are rejected
//! without parsing their payload.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use domain::models::Role;
use shared::jwt::{extract_user_id, JwtError};

use crate::app::AppState;
use crate::error::ApiError;

/// An authenticated caller holding the `Admin` role.
///
/// Missing, malformed, invalid or expired tokens are rejected with 401; a
/// valid token for any other role is rejected with 403.
#[derive(Debug, Clone)]
pub struct AdminAuth {
    pub user_id: i32,
    pub username: String,
}

/// Pulls the token out of an `Authorization: Bearer <token>` header.
pub(crate) fn bearer_token(parts: &Parts) -> Result<&str, ApiError> {
    let value = parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| ApiError::Unauthorized("Missing Authorization header".to_string()))?;

    value
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::Unauthorized("Invalid Authorization header format".to_string()))
}

#[async_trait]
impl FromRequestParts<AppState> for AdminAuth {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?;

        let claims = state.jwt.validate(token).map_err(|e| match e {
            JwtError::TokenExpired => ApiError::Unauthorized("Token has expired".to_string()),
            _ => ApiError::Unauthorized("Invalid or expired token".to_string()),
        })?;

        let user_id = extract_user_id(&claims)
            .map_err(|_| ApiError::Unauthorized("Invalid token subject".to_string()))?;

        if claims.role != Role::Admin.as_str() {
            tracing::warn!(user_id, role = %claims.role, "Non-admin token rejected");
            return Err(ApiError::Forbidden("Admin role required".to_string()));
        }

        Ok(AdminAuth {
            user_id,
            username: claims.username,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn parts_with(auth: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri("/");
        if let Some(value) = auth {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        builder.body(()).unwrap().into_parts().0
    }

    #[test]
    fn test_bearer_token_extracted() {
        let parts = parts_with(Some("Bearer abc.def.ghi"));
        assert_eq!(bearer_token(&parts).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn test_missing_header() {
        let parts = parts_with(None);
        assert!(matches!(bearer_token(&parts), Err(ApiError::Unauthorized(_))));
    }

    #[test]
    fn test_wrong_scheme() {
        let parts = parts_with(Some("Basic dXNlcjpwYXNz"));
        assert!(matches!(bearer_token(&parts), Err(ApiError::Unauthorized(_))));
    }

    #[test]
    fn test_empty_token() {
        let parts = parts_with(Some("Bearer   "));
        assert!(matches!(bearer_token(&parts), Err(ApiError::Unauthorized(_))));
    }
}
