//! Shared utilities for the ApolloSpark backend.
//!
//! This crate provides functionality used across the other crates:
//! - JWT issuing and validation for the admin area
//! - Password hashing with Argon2id
//! - Validators for content keys and locale tags

pub mod jwt;
pub mod password;
pub mod validation;
