//! Custom Axum extractors.

pub mod admin_auth;
pub mod client_rate_limit;

pub use admin_auth::AdminAuth;
pub use client_rate_limit::ClientRateLimit;
