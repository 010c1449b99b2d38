//! Favorite service for business logic.
//!
//! This module provides the `FavoriteService` for adding and removing the link between
//! a user and a character, planet or vehicle. At most one link exists per
//! `(user_id, entity_id)` pair; the composite primary key of each junction table is the
//! final arbiter when two requests race past the existence check.

use sea_orm::{DatabaseConnection, DbErr, SqlErr, TransactionTrait};

use crate::server::{
    data::favorite::FavoriteRepository,
    error::AppError,
    model::favorite::{Favorite, FavoriteKind},
};

/// Service providing business logic for user favorites.
pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new FavoriteService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a catalog entity to a user's favorites.
    ///
    /// Checks for an existing link and inserts inside a single transaction. A duplicate
    /// found by the check leaves the store untouched. A duplicate rejected by the
    /// composite primary key (a concurrent add committed first) is reported the same way.
    ///
    /// # Arguments
    /// - `kind` - Type of the favorited entity
    /// - `user_id` - ID of the user
    /// - `entity_id` - ID of the character, planet or vehicle
    ///
    /// # Returns
    /// - `Ok(Favorite)` - The favorite was created and committed
    /// - `Err(AppError::AlreadyExists)` - The user already favorited this entity
    /// - `Err(AppError::ForeignKeyViolation)` - The user or entity does not exist
    /// - `Err(AppError::DbErr)` - Any other database error
    pub async fn add(
        &self,
        kind: FavoriteKind,
        user_id: i32,
        entity_id: i32,
    ) -> Result<Favorite, AppError> {
        let txn = self.db.begin().await?;
        let repo = FavoriteRepository::new(&txn);

        if repo.exists(kind, user_id, entity_id).await? {
            return Err(already_exists());
        }

        let favorite = repo
            .create(kind, user_id, entity_id)
            .await
            .map_err(|err| classify_insert_error(kind, err))?;

        txn.commit().await?;

        tracing::info!(
            "User {} added {} {} to favorites",
            favorite.user_id,
            favorite.kind,
            favorite.entity_id
        );

        Ok(favorite)
    }

    /// Removes a catalog entity from a user's favorites.
    ///
    /// # Arguments
    /// - `kind` - Type of the favorited entity
    /// - `user_id` - ID of the user
    /// - `entity_id` - ID of the character, planet or vehicle
    ///
    /// # Returns
    /// - `Ok(())` - The favorite was deleted and committed
    /// - `Err(AppError::NotFound)` - No favorite for that pair, nothing changed
    /// - `Err(AppError::DbErr)` - Database error during deletion
    pub async fn remove(
        &self,
        kind: FavoriteKind,
        user_id: i32,
        entity_id: i32,
    ) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let deleted = FavoriteRepository::new(&txn)
            .delete(kind, user_id, entity_id)
            .await?;

        if !deleted {
            return Err(AppError::NotFound("favorite not found".to_string()));
        }

        txn.commit().await?;

        tracing::info!(
            "User {} removed {} {} from favorites",
            user_id,
            kind,
            entity_id
        );

        Ok(())
    }
}

fn already_exists() -> AppError {
    AppError::AlreadyExists("already exists".to_string())
}

/// Maps a rejected favorite insert to the error kind callers see.
fn classify_insert_error(kind: FavoriteKind, err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            tracing::debug!("Duplicate {} favorite rejected by store: {}", kind, detail);
            already_exists()
        }
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
            AppError::ForeignKeyViolation(format!("user or {} not found", kind))
        }
        _ => AppError::DbErr(err),
    }
}
