//! Character data repository for database operations.
//!
//! This module provides the `CharacterRepository` for reading characters from the catalog,
//! including the characters a given user has favorited through the
//! `characters_favorites` junction table.

use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::character::Character;

/// Repository providing read access to catalog characters.
pub struct CharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CharacterRepository<'a, C> {
    /// Creates a new CharacterRepository instance.
    ///
    /// # Arguments
    /// - `db` - Connection or transaction to execute queries on
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Retrieves every character ordered by ID.
    ///
    /// # Returns
    /// - `Ok(Vec<Character>)` - All characters, empty if none exist
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Character>, DbErr> {
        let entities = entity::prelude::Character::find()
            .order_by_asc(entity::character::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Character::from_entity).collect())
    }

    /// Finds a character by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Character))` - Character found
    /// - `Ok(None)` - No character with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, character_id: i32) -> Result<Option<Character>, DbErr> {
        let entity = entity::prelude::Character::find_by_id(character_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Character::from_entity))
    }

    /// Retrieves the characters favorited by a user, ordered by character ID.
    ///
    /// Joins through `characters_favorites`. Does not check that the user exists; an
    /// unknown user simply has no favorites.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user whose favorites to load
    ///
    /// # Returns
    /// - `Ok(Vec<Character>)` - Favorited characters, empty if none
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_favorited_by_user(&self, user_id: i32) -> Result<Vec<Character>, DbErr> {
        let entities = entity::prelude::Character::find()
            .inner_join(entity::prelude::CharacterFavorite)
            .filter(entity::character_favorite::Column::UserId.eq(user_id))
            .order_by_asc(entity::character::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Character::from_entity).collect())
    }
}
