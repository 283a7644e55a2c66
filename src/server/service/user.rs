//! User service for business logic.

use sea_orm::DatabaseConnection;

use crate::server::{data::user::UserRepository, error::AppError, model::user::User};

/// Service providing business logic for users.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves all users.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - All users ordered by id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_all_users(&self) -> Result<Vec<User>, AppError> {
        let user_repo = UserRepository::new(self.db);
        let users = user_repo.get_all().await?;
        Ok(users)
    }

    /// Retrieves a user that must exist.
    ///
    /// # Returns
    /// - `Ok(User)` - User found
    /// - `Err(AppError::NotFound)` - No user with that id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn require_user(&self, id: i32) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("user not exist".to_string()))
    }
}
