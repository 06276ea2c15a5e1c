//! Authentication and credential storage.
//!
//! This module provides:
//! - Password hashing and verification with Argon2id
//! - The credential service behind sign-up and sign-in
//! - The `UserStore` trait the db crate implements

mod credentials;
mod password;

pub use credentials::{CredentialError, CredentialService, NewUser, User, UserStore};
pub use password::{
    PasswordError, burn_verification, burn_verification_blocking, hash_password,
    hash_password_blocking, verify_password, verify_password_blocking,
};
