//! JWT token utilities.
//!
//! Tokens are signed with HS256 using a shared secret and carry the user's
//! role so the API can gate admin routes without a database round trip.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Error type for JWT operations.
#[derive(Debug, Error)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingError(String),

    #[error("Failed to decode token: {0}")]
    DecodingError(String),

    #[error("Token has expired")]
    TokenExpired,

    #[error("Invalid token")]
    InvalidToken,
}

/// JWT token claims.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Login name at the time the token was issued
    pub username: String,
    /// Role name (`Admin` or `User`)
    pub role: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// JWT ID
    pub jti: String,
    pub iss: String,
    pub aud: String,
}

/// A freshly issued token together with its lifetime.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub jti: String,
    pub expires_in: i64,
}

/// Configuration for JWT token generation and validation.
#[derive(Clone)]
pub struct JwtConfig {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    pub issuer: String,
    pub audience: String,
    /// Token lifetime in seconds
    pub expiry_secs: i64,
    /// Leeway in seconds for clock skew tolerance
    pub leeway_secs: u64,
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .field("expiry_secs", &self.expiry_secs)
            .field("leeway_secs", &self.leeway_secs)
            .field("encoding_key", &"[REDACTED]")
            .field("decoding_key", &"[REDACTED]")
            .finish()
    }
}

/// Default leeway in seconds for clock skew tolerance
pub const DEFAULT_LEEWAY_SECS: u64 = 30;

impl JwtConfig {
    /// Creates a new JwtConfig from a shared HMAC secret.
    pub fn new(
        secret: &str,
        issuer: impl Into<String>,
        audience: impl Into<String>,
        expiry_secs: i64,
        leeway_secs: u64,
    ) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            issuer: issuer.into(),
            audience: audience.into(),
            expiry_secs,
            leeway_secs,
        }
    }

    /// Issues an access token for the given user.
    pub fn issue(&self, user_id: i32, username: &str, role: &str) -> Result<IssuedToken, JwtError> {
        self.issue_with_expiry(user_id, username, role, self.expiry_secs)
    }

    fn issue_with_expiry(
        &self,
        user_id: i32,
        username: &str,
        role: &str,
        expiry_secs: i64,
    ) -> Result<IssuedToken, JwtError> {
        let now = Utc::now();
        let jti = Uuid::new_v4().to_string();

        let claims = Claims {
            sub: user_id.to_string(),
            username: username.to_string(),
            role: role.to_string(),
            exp: (now + Duration::seconds(expiry_secs)).timestamp(),
            iat: now.timestamp(),
            jti: jti.clone(),
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingError(e.to_string()))?;

        Ok(IssuedToken {
            token,
            jti,
            expires_in: expiry_secs,
        })
    }

    /// Validates a token (signature, expiry, issuer, audience) and returns its claims.
    pub fn validate(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = self.leeway_secs;
        validation.set_issuer(&[self.issuer.as_str()]);
        validation.set_audience(&[self.audience.as_str()]);

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => JwtError::TokenExpired,
                jsonwebtoken::errors::ErrorKind::InvalidToken
                | jsonwebtoken::errors::ErrorKind::InvalidSignature
                | jsonwebtoken::errors::ErrorKind::InvalidIssuer
                | jsonwebtoken::errors::ErrorKind::InvalidAudience => JwtError::InvalidToken,
                _ => JwtError::DecodingError(e.to_string()),
            }
        })?;

        Ok(token_data.claims)
    }
}

/// Extracts the numeric user ID from validated claims.
pub fn extract_user_id(claims: &Claims) -> Result<i32, JwtError> {
    claims.sub.parse().map_err(|_| JwtError::InvalidToken)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test_secret_key_for_jwt_testing_0123456789";

    fn test_config() -> JwtConfig {
        JwtConfig::new(SECRET, "apollospark", "apollospark", 900, 0)
    }

    #[test]
    fn test_issue_and_validate() {
        let config = test_config();
        let issued = config.issue(42, "admin", "Admin").unwrap();

        assert!(issued.token.contains('.'));
        assert_eq!(issued.expires_in, 900);

        let claims = config.validate(&issued.token).unwrap();
        assert_eq!(claims.sub, "42");
        assert_eq!(claims.username, "admin");
        assert_eq!(claims.role, "Admin");
        assert_eq!(claims.jti, issued.jti);
        assert_eq!(extract_user_id(&claims).unwrap(), 42);
    }

    #[test]
    fn test_expired_token() {
        let config = test_config();
        let issued = config.issue_with_expiry(1, "admin", "Admin", -120).unwrap();

        let result = config.validate(&issued.token);
        assert!(
            matches!(result, Err(JwtError::TokenExpired)),
            "Expected TokenExpired, got: {:?}",
            result
        );
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let issued = test_config().issue(1, "admin", "Admin").unwrap();
        let other = JwtConfig::new(
            "another_secret_key_that_is_long_enough!!",
            "apollospark",
            "apollospark",
            900,
            0,
        );

        assert!(matches!(other.validate(&issued.token), Err(JwtError::InvalidToken)));
    }

    #[test]
    fn test_wrong_audience_rejected() {
        let issued = test_config().issue(1, "admin", "Admin").unwrap();
        let other = JwtConfig::new(SECRET, "apollospark", "someone-else", 900, 0);

        assert!(matches!(other.validate(&issued.token), Err(JwtError::InvalidToken)));
    }

    #[test]
    fn test_malformed_token() {
        let config = test_config();
        assert!(config.validate("not_a_jwt").is_err());
        assert!(config.validate("invalid.token.here").is_err());
    }

    #[test]
    fn test_unique_jti_per_token() {
        let config = test_config();
        let first = config.issue(1, "admin", "Admin").unwrap();
        let second = config.issue(1, "admin", "Admin").unwrap();
        assert_ne!(first.jti, second.jti);
    }

    #[test]
    fn test_non_numeric_subject() {
        let claims = Claims {
            sub: "abc".to_string(),
            username: "x".to_string(),
            role: "User".to_string(),
            exp: 0,
            iat: 0,
            jti: String::new(),
            iss: String::new(),
            aud: String::new(),
        };
        assert!(matches!(extract_user_id(&claims), Err(JwtError::InvalidToken)));
    }

    #[test]
    fn test_debug_redacts_keys() {
        let debug = format!("{:?}", test_config());
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains(SECRET));
    }
}
