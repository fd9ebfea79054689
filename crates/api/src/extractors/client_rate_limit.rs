//! Rate limit guard for anonymous write endpoints.

use axum::{
    async_trait,
    extract::{ConnectInfo, FromRequestParts},
    http::request::Parts,
};
use std::net::SocketAddr;

use crate::app::AppState;
use crate::error::ApiError;

/// Consumes one request from the caller's bucket, or rejects with 429.
///
/// The client is identified by the first `X-Forwarded-For` entry, then the
/// peer address, then a shared `anonymous` bucket.
#[derive(Debug, Clone)]
pub struct ClientRateLimit {
    pub client: String,
}

pub(crate) fn client_key(parts: &Parts) -> String {
    let forwarded = parts
        .headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|s| !s.is_empty());

    if let Some(ip) = forwarded {
        return ip.to_string();
    }

    parts
        .extensions
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "anonymous".to_string())
}

#[async_trait]
impl FromRequestParts<AppState> for ClientRateLimit {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let client = client_key(parts);

        if let Some(limiter) = &state.rate_limiter {
            if let Err(retry_after) = limiter.check(&client) {
                tracing::warn!(
                    client = %client,
                    path = %parts.uri.path(),
                    retry_after,
                    "Rate limit exceeded"
                );
                metrics::counter!("rate_limited_requests_total").increment(1);
                return Err(ApiError::RateLimited { retry_after });
            }
        }

        Ok(ClientRateLimit { client })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    #[test]
    fn test_forwarded_for_first_entry() {
        let (parts, _) = Request::builder()
            .header("x-forwarded-for", "203.0.113.7, 10.0.0.1")
            .body(())
            .unwrap()
            .into_parts();
        assert_eq!(client_key(&parts), "203.0.113.7");
    }

    #[test]
    fn test_connect_info_fallback() {
        let (mut parts, _) = Request::builder().body(()).unwrap().into_parts();
        parts
            .extensions
            .insert(ConnectInfo(SocketAddr::from(([192, 0, 2, 1], 5555))));
        assert_eq!(client_key(&parts), "192.0.2.1");
    }

    #[test]
    fn test_anonymous_fallback() {
        let (parts, _) = Request::builder().body(()).unwrap().into_parts();
        assert_eq!(client_key(&parts), "anonymous");
    }
}
