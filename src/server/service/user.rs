//! User service for business logic.
//!
//! Registration and lookup of users by email. Email is the caller identity
//! used throughout the API, so lookups by email are the common path.

use sea_orm::{DatabaseConnection, SqlErr};

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::{
        audit::{Audit, SYSTEM_ACTOR},
        user::{CreateUserParams, User},
    },
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new user.
    ///
    /// # Arguments
    /// - `params` - Email and name of the new user
    ///
    /// # Returns
    /// - `Ok(User)` - The registered user
    /// - `Err(AppError::BadRequest)` - A user with that email already exists
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn register(&self, params: CreateUserParams) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);
        let email = params.email.clone();

        // Duplicates are rejected by the unique index on `user.email`.
        let user = user_repo
            .create(params, Audit::stamp_new(SYSTEM_ACTOR))
            .await
            .map_err(|err| match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    AppError::BadRequest(format!("User with email {} already exists", email))
                }
                _ => err.into(),
            })?;

        tracing::info!(user_id = user.id, email = %user.email, "Registered user");

        Ok(user)
    }

    /// Retrieves a user by email.
    ///
    /// # Returns
    /// - `Ok(User)` - User registered with that email
    /// - `Err(AppError::NotFound)` - No user with that email
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_email(&self, email: &str) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with email {} not found", email)))
    }
}
