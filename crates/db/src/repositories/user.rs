//! User repository for database operations.

use pocketbook_core::StoreError;
use pocketbook_core::auth::{NewUser, User, UserStore};
use pocketbook_shared::UserId;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, Set,
};

use super::store_error;
use crate::entities::users;

/// User repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct UserRepository {
    db: DatabaseConnection,
}

impl UserRepository {
    /// Creates a new user repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a user by email. The match is exact (no case folding).
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<users::Model>, DbErr> {
        users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
    }

    /// Creates a new user.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails, including a unique
    /// violation on `email`.
    pub async fn create(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<users::Model, DbErr> {
        let user = users::ActiveModel {
            id: NotSet,
            name: Set(name.to_string()),
            email: Set(email.to_string()),
            password_hash: Set(password_hash.to_string()),
        };

        user.insert(&self.db).await
    }

    /// Checks if an email is already registered.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn email_exists(&self, email: &str) -> Result<bool, DbErr> {
        let count = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .count(&self.db)
            .await?;

        Ok(count > 0)
    }
}

impl UserStore for UserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let model = Self::find_by_email(self, email).await.map_err(store_error)?;
        Ok(model.map(to_domain))
    }

    async fn email_exists(&self, email: &str) -> Result<bool, StoreError> {
        Self::email_exists(self, email).await.map_err(store_error)
    }

    async fn create(&self, user: NewUser) -> Result<User, StoreError> {
        let model = Self::create(self, &user.name, &user.email, &user.password_hash)
            .await
            .map_err(store_error)?;
        Ok(to_domain(model))
    }
}

/// Convert database model to domain model.
fn to_domain(model: users::Model) -> User {
    User {
        id: UserId(model.id),
        name: model.name,
        email: model.email,
        password_hash: model.password_hash,
    }
}
