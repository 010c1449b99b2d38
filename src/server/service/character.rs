use sea_orm::DatabaseConnection;

use crate::server::{
    data::character::CharacterRepository, error::AppError, model::character::Character,
    service::NOT_FOUND_MSG,
};

/// Service providing read access to catalog characters.
pub struct CharacterService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CharacterService<'a> {
    /// Creates a new CharacterService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves all characters ordered by ID.
    ///
    /// # Returns
    /// - `Ok(Vec<Character>)` - At least one character
    /// - `Err(AppError::NotFound)` - The catalog is empty
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Character>, AppError> {
        let characters = CharacterRepository::new(self.db).get_all().await?;

        if characters.is_empty() {
            return Err(AppError::NotFound(NOT_FOUND_MSG.to_string()));
        }

        Ok(characters)
    }

    /// Retrieves a character by ID.
    ///
    /// # Returns
    /// - `Ok(Character)` - The character
    /// - `Err(AppError::NotFound)` - No character with that ID
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_id(&self, character_id: i32) -> Result<Character, AppError> {
        CharacterRepository::new(self.db)
            .find_by_id(character_id)
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND_MSG.to_string()))
    }
}
