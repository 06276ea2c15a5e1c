//! Credential store: account registration and password authentication.

use std::future::Future;
use std::sync::Arc;

use pocketbook_shared::{AppError, UserId};
use thiserror::Error;

use super::password::{
    PasswordError, burn_verification_blocking, hash_password_blocking, verify_password_blocking,
};
use crate::store::StoreError;

/// A registered user as persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Database-generated ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Login email, unique and compared exactly as stored.
    pub email: String,
    /// Argon2id PHC string. Never the plaintext password.
    pub password_hash: String,
}

/// A user about to be inserted.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Argon2id PHC string.
    pub password_hash: String,
}

/// Repository trait for user persistence.
///
/// This trait is implemented by the db crate to provide actual database operations.
pub trait UserStore: Send + Sync {
    /// Finds a user by exact email match.
    fn find_by_email(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<Option<User>, StoreError>> + Send;

    /// Checks if an email is already registered.
    fn email_exists(&self, email: &str) -> impl Future<Output = Result<bool, StoreError>> + Send;

    /// Inserts a user. Must report a duplicate email as `StoreError::UniqueViolation`.
    fn create(&self, user: NewUser) -> impl Future<Output = Result<User, StoreError>> + Send;
}

/// Errors from registration and authentication.
#[derive(Debug, Error)]
pub enum CredentialError {
    /// A required field was missing or empty.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// The email is already registered.
    #[error("an account with this email already exists")]
    DuplicateEmail,

    /// Unknown email or wrong password. Deliberately does not say which.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// Hashing or verification failed.
    #[error(transparent)]
    Password(#[from] PasswordError),

    /// Storage failed.
    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl From<CredentialError> for AppError {
    fn from(err: CredentialError) -> Self {
        match err {
            CredentialError::MissingField(_) => Self::Validation(err.to_string()),
            CredentialError::DuplicateEmail => Self::Conflict(err.to_string()),
            CredentialError::InvalidCredentials => Self::Unauthorized(err.to_string()),
            CredentialError::Password(e) => Self::Internal(e.to_string()),
            CredentialError::Storage(e) => e.into(),
        }
    }
}

fn require(value: &str, field: &'static str) -> Result<(), CredentialError> {
    if value.is_empty() {
        return Err(CredentialError::MissingField(field));
    }
    Ok(())
}

/// Credential service for sign-up and sign-in.
pub struct CredentialService<R: UserStore> {
    repo: Arc<R>,
}

impl<R: UserStore> CredentialService<R> {
    /// Creates a new credential service.
    #[must_use]
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Registers a new user and returns its ID.
    ///
    /// The email pre-check is an optimization; a concurrent registration that
    /// slips past it is caught by the store's uniqueness constraint and reported
    /// the same way.
    ///
    /// # Errors
    ///
    /// - `MissingField` if name, email, or password is empty
    /// - `DuplicateEmail` if the email is already registered
    /// - `Password` / `Storage` for unexpected failures
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<UserId, CredentialError> {
        require(name, "name")?;
        require(email, "email")?;
        require(password, "password")?;

        if self.repo.email_exists(email).await? {
            return Err(CredentialError::DuplicateEmail);
        }

        let password_hash = hash_password_blocking(password).await?;

        let user = self
            .repo
            .create(NewUser {
                name: name.to_string(),
                email: email.to_string(),
                password_hash,
            })
            .await
            .map_err(|e| match e {
                StoreError::UniqueViolation(_) => CredentialError::DuplicateEmail,
                other => CredentialError::Storage(other),
            })?;

        Ok(user.id)
    }

    /// Checks an email/password pair and returns the user's ID.
    ///
    /// # Errors
    ///
    /// - `MissingField` if email or password is empty
    /// - `InvalidCredentials` if the email is unknown or the password is wrong
    /// - `Password` / `Storage` for unexpected failures
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<UserId, CredentialError> {
        require(email, "email")?;
        require(password, "password")?;

        let Some(user) = self.repo.find_by_email(email).await? else {
            burn_verification_blocking(password).await;
            return Err(CredentialError::InvalidCredentials);
        };

        if verify_password_blocking(password, &user.password_hash).await? {
            Ok(user.id)
        } else {
            Err(CredentialError::InvalidCredentials)
        }
    }
}
