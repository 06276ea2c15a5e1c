//! Core business logic for Pocketbook.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! Persistence is reached through the storage traits implemented by the db crate.
//!
//! # Modules
//!
//! - `auth` - Password hashing and the credential store (sign-up / sign-in)
//! - `ledger` - Financial events, validation, and balance aggregation
//! - `store` - Storage error shared by every repository trait
//! - `memory` - In-memory store for tests (feature `testing`)

pub mod auth;
pub mod ledger;
#[cfg(any(test, feature = "testing"))]
pub mod memory;
pub mod store;

pub use store::StoreError;
