//! User service for business logic.
//!
//! This module provides the `UserService` for listing users and aggregating the
//! favorites of a single user across all three catalog types.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        character::CharacterRepository, planet::PlanetRepository, user::UserRepository,
        vehicle::VehicleRepository,
    },
    error::AppError,
    model::user::{Favorites, User},
    service::NOT_FOUND_MSG,
};

/// Service providing business logic for users and their favorites.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves all users ordered by ID.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - At least one user
    /// - `Err(AppError::NotFound)` - No users exist
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        let users = UserRepository::new(self.db).get_all().await?;

        if users.is_empty() {
            return Err(AppError::NotFound(NOT_FOUND_MSG.to_string()));
        }

        Ok(users)
    }

    /// Retrieves a user by ID.
    ///
    /// # Returns
    /// - `Ok(User)` - The user
    /// - `Err(AppError::NotFound)` - No user with that ID
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_id(&self, user_id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND_MSG.to_string()))
    }

    /// Retrieves every character, planet and vehicle a user has favorited.
    ///
    /// Runs the existence check and the three listings in one transaction so the result
    /// reflects a single snapshot. Empty collections are a success, only a missing user
    /// is an error.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user
    ///
    /// # Returns
    /// - `Ok(Favorites)` - Possibly empty favorites grouped by type
    /// - `Err(AppError::NotFound)` - No user with that ID
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_favorites(&self, user_id: i32) -> Result<Favorites, AppError> {
        let txn = self.db.begin().await?;

        if UserRepository::new(&txn).find_by_id(user_id).await?.is_none() {
            return Err(AppError::NotFound(NOT_FOUND_MSG.to_string()));
        }

        let favorites = Favorites {
            characters: CharacterRepository::new(&txn)
                .get_favorited_by_user(user_id)
                .await?,
            planets: PlanetRepository::new(&txn)
                .get_favorited_by_user(user_id)
                .await?,
            vehicles: VehicleRepository::new(&txn)
                .get_favorited_by_user(user_id)
                .await?,
        };

        txn.commit().await?;

        Ok(favorites)
    }
}
