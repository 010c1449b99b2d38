use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::MessageDto, character::CharacterDto},
    server::{
        controller::util::id_path::IdPath, error::AppError, service::character::CharacterService,
        state::AppState,
    },
};

/// Tag for grouping character endpoints in OpenAPI documentation
pub static CHARACTER_TAG: &str = "character";

/// Get all characters.
///
/// Returns every character ordered by ID. An empty catalog is reported as
/// `404 Not Found` rather than an empty list.
///
/// # Returns
/// - `200 OK` - List of characters
/// - `404 Not Found` - No characters exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/characters",
    tag = CHARACTER_TAG,
    responses(
        (status = 200, description = "Successfully retrieved characters", body = Vec<CharacterDto>),
        (status = 404, description = "No characters exist", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_all_characters(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let characters = CharacterService::new(&state.db).get_all().await?;

    let dtos: Vec<CharacterDto> = characters.into_iter().map(|e| e.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a character by ID.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `character_id` - ID of the character
///
/// # Returns
/// - `200 OK` - The character
/// - `404 Not Found` - No character with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/characters/{character_id}",
    tag = CHARACTER_TAG,
    params(
        ("character_id" = i32, Path, description = "Character ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved character", body = CharacterDto),
        (status = 404, description = "Character not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_character_by_id(
    State(state): State<AppState>,
    IdPath(character_id): IdPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let character = CharacterService::new(&state.db).get_by_id(character_id).await?;

    Ok((StatusCode::OK, Json(character.into_dto())))
}
