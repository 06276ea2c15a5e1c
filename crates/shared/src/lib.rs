//! Shared types, errors, and configuration for Pocketbook.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for users and financial events
//! - Amount serialization helpers
//! - Application-wide error types
//! - Configuration management
//! - Signed identity tokens (issue and verify)

pub mod auth;
pub mod config;
pub mod error;
pub mod jwt;
pub mod types;

#[cfg(test)]
mod jwt_tests;

pub use auth::{Claims, SignInRequest, SignInResponse, SignUpRequest};
pub use config::AppConfig;
pub use error::AppError;
pub use jwt::{JwtConfig, JwtError, JwtService};
pub use types::{FinancialEventId, UserId};
