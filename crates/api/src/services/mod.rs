//! Application services.

pub mod admin_bootstrap;
pub mod auth;

pub use auth::{AuthError, AuthService};
