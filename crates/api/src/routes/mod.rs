//! HTTP route handlers.

pub mod artists;
pub mod auth;
pub mod contact;
pub mod content;
pub mod events;
pub mod health;
