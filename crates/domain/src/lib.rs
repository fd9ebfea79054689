//! Domain layer for the ApolloSpark backend.
//!
//! This crate contains the domain models and the request/response shapes
//! exchanged over the HTTP API.

pub mod models;
