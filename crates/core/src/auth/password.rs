//! Password hashing with Argon2id.
//!
//! Uses the Argon2id variant with fixed default parameters and a fresh random
//! salt per hash. Verification goes through the PHC verifier, which compares
//! digests in constant time.

use argon2::{
    Argon2, PasswordHash,
    password_hash::{PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use once_cell::sync::Lazy;
use thiserror::Error;

/// Errors that can occur during password operations.
#[derive(Debug, Error)]
pub enum PasswordError {
    /// Failed to hash password.
    #[error("failed to hash password: {0}")]
    HashError(String),

    /// Failed to verify password.
    #[error("failed to verify password: {0}")]
    VerifyError(String),

    /// Invalid password hash format.
    #[error("invalid password hash format")]
    InvalidHash,

    /// The blocking task running the hash was cancelled or panicked.
    #[error("password task failed: {0}")]
    TaskFailed(String),
}

/// Hash checked when no account matches an email, so an unknown email costs
/// the same as a wrong password.
static DUMMY_HASH: Lazy<Option<String>> =
    Lazy::new(|| hash_password("pocketbook-dummy-password").ok());

/// Hashes a password using Argon2id.
///
/// # Errors
///
/// Returns `PasswordError::HashError` if hashing fails.
///
/// # Example
///
/// ```
/// use pocketbook_core::auth::hash_password;
///
/// let hash = hash_password("my_secure_password").unwrap();
/// assert!(hash.starts_with("$argon2id$"));
/// ```
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| PasswordError::HashError(e.to_string()))
}

/// Verifies a password against a stored PHC hash.
///
/// Returns `true` if the password matches, `false` otherwise.
///
/// # Errors
///
/// Returns `PasswordError::InvalidHash` if the hash format is invalid.
/// Returns `PasswordError::VerifyError` if verification fails unexpectedly.
///
/// # Example
///
/// ```
/// use pocketbook_core::auth::{hash_password, verify_password};
///
/// let hash = hash_password("my_password").unwrap();
/// assert!(verify_password("my_password", &hash).unwrap());
/// assert!(!verify_password("wrong_password", &hash).unwrap());
/// ```
pub fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| PasswordError::InvalidHash)?;

    let argon2 = Argon2::default();

    match argon2.verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(PasswordError::VerifyError(e.to_string())),
    }
}

/// Runs a verification whose result is discarded.
pub fn burn_verification(password: &str) {
    if let Some(hash) = DUMMY_HASH.as_deref() {
        let _ = verify_password(password, hash);
    }
}

/// Runs Argon2 work on the blocking thread pool so it does not stall the
/// async executor.
async fn run_blocking<T, F>(task: F) -> Result<T, PasswordError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, PasswordError> + Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|e| PasswordError::TaskFailed(e.to_string()))?
}

/// [`hash_password`] on the blocking thread pool.
///
/// # Errors
///
/// Returns `PasswordError::HashError` if hashing fails and
/// `PasswordError::TaskFailed` if the task does not complete.
pub async fn hash_password_blocking(password: &str) -> Result<String, PasswordError> {
    let password = password.to_owned();
    run_blocking(move || hash_password(&password)).await
}

/// [`verify_password`] on the blocking thread pool.
///
/// # Errors
///
/// Same as [`verify_password`], plus `PasswordError::TaskFailed`.
pub async fn verify_password_blocking(password: &str, hash: &str) -> Result<bool, PasswordError> {
    let (password, hash) = (password.to_owned(), hash.to_owned());
    run_blocking(move || verify_password(&password, &hash)).await
}

/// [`burn_verification`] on the blocking thread pool.
pub async fn burn_verification_blocking(password: &str) {
    let password = password.to_owned();
    let _ = run_blocking(move || {
        burn_verification(&password);
        Ok(())
    })
    .await;
}
