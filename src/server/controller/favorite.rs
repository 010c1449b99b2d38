//! Favorite association handlers.
//!
//! Each catalog type gets an add (`POST`) and remove (`DELETE`) handler on
//! `/favorite/user/{user_id}/<kind>/{id}`. Both reply with a `{"msg": ...}` body naming
//! the kind, so the handlers differ only in the `FavoriteKind` they pass on.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::api::MessageDto,
    server::{
        controller::util::id_path::IdPath, error::AppError, model::favorite::FavoriteKind,
        service::favorite::FavoriteService, state::AppState,
    },
};

/// Tag for grouping favorite endpoints in OpenAPI documentation
pub static FAVORITE_TAG: &str = "favorite";

async fn add(
    state: &AppState,
    kind: FavoriteKind,
    user_id: i32,
    entity_id: i32,
) -> Result<impl IntoResponse, AppError> {
    FavoriteService::new(&state.db)
        .add(kind, user_id, entity_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new(format!("added {} favorite", kind))),
    ))
}

async fn remove(
    state: &AppState,
    kind: FavoriteKind,
    user_id: i32,
    entity_id: i32,
) -> Result<impl IntoResponse, AppError> {
    FavoriteService::new(&state.db)
        .remove(kind, user_id, entity_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new(format!("deleted {} favorite", kind))),
    ))
}

/// Add a character to a user's favorites.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `user_id` - ID of the user
/// - `character_id` - ID of the character to favorite
///
/// # Returns
/// - `200 OK` - `{"msg": "added character favorite"}`
/// - `400 Bad Request` - The user already favorited this character
/// - `404 Not Found` - The user or character does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/favorite/user/{user_id}/character/{character_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("character_id" = i32, Path, description = "Character ID")
    ),
    responses(
        (status = 200, description = "Successfully added favorite", body = MessageDto),
        (status = 400, description = "Favorite already exists", body = MessageDto),
        (status = 404, description = "User or character not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn add_character_favorite(
    State(state): State<AppState>,
    IdPath((user_id, character_id)): IdPath<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    add(&state, FavoriteKind::Character, user_id, character_id).await
}

/// Remove a character from a user's favorites.
///
/// # Returns
/// - `200 OK` - `{"msg": "deleted character favorite"}`
/// - `404 Not Found` - The user has not favorited this character
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/favorite/user/{user_id}/character/{character_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("character_id" = i32, Path, description = "Character ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted favorite", body = MessageDto),
        (status = 404, description = "Favorite not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn remove_character_favorite(
    State(state): State<AppState>,
    IdPath((user_id, character_id)): IdPath<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    remove(&state, FavoriteKind::Character, user_id, character_id).await
}

/// Add a planet to a user's favorites.
#[utoipa::path(
    post,
    path = "/favorite/user/{user_id}/planet/{planet_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("planet_id" = i32, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Successfully added favorite", body = MessageDto),
        (status = 400, description = "Favorite already exists", body = MessageDto),
        (status = 404, description = "User or planet not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn add_planet_favorite(
    State(state): State<AppState>,
    IdPath((user_id, planet_id)): IdPath<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    add(&state, FavoriteKind::Planet, user_id, planet_id).await
}

/// Remove a planet from a user's favorites.
#[utoipa::path(
    delete,
    path = "/favorite/user/{user_id}/planet/{planet_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("planet_id" = i32, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted favorite", body = MessageDto),
        (status = 404, description = "Favorite not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn remove_planet_favorite(
    State(state): State<AppState>,
    IdPath((user_id, planet_id)): IdPath<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    remove(&state, FavoriteKind::Planet, user_id, planet_id).await
}

/// Add a vehicle to a user's favorites.
#[utoipa::path(
    post,
    path = "/favorite/user/{user_id}/vehicle/{vehicle_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("vehicle_id" = i32, Path, description = "Vehicle ID")
    ),
    responses(
        (status = 200, description = "Successfully added favorite", body = MessageDto),
        (status = 400, description = "Favorite already exists", body = MessageDto),
        (status = 404, description = "User or vehicle not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn add_vehicle_favorite(
    State(state): State<AppState>,
    IdPath((user_id, vehicle_id)): IdPath<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    add(&state, FavoriteKind::Vehicle, user_id, vehicle_id).await
}

/// Remove a vehicle from a user's favorites.
#[utoipa::path(
    delete,
    path = "/favorite/user/{user_id}/vehicle/{vehicle_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("vehicle_id" = i32, Path, description = "Vehicle ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted favorite", body = MessageDto),
        (status = 404, description = "Favorite not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn remove_vehicle_favorite(
    State(state): State<AppState>,
    IdPath((user_id, vehicle_id)): IdPath<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    remove(&state, FavoriteKind::Vehicle, user_id, vehicle_id).await
}
