use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::MessageDto,
        user::{FavoritesDto, UserDto},
    },
    server::{
        controller::util::id_path::IdPath, error::AppError, service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Get all users.
///
/// Returns every user ordered by ID. An empty user table is reported as `404 Not Found`
/// rather than an empty list.
///
/// # Returns
/// - `200 OK` - List of users
/// - `404 Not Found` - No users exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Successfully retrieved users", body = Vec<UserDto>),
        (status = 404, description = "No users exist", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_all_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = UserService::new(&state.db).get_all().await?;

    let dtos: Vec<UserDto> = users.into_iter().map(|u| u.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a user by ID.
///
/// # Returns
/// - `200 OK` - The user
/// - `404 Not Found` - No user with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/users/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved user", body = UserDto),
        (status = 404, description = "User not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_user_by_id(
    State(state): State<AppState>,
    IdPath(user_id): IdPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db).get_by_id(user_id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Get a user's favorites.
///
/// Returns the characters, planets and vehicles the user has favorited, each list
/// ordered by entity ID. A user without favorites gets three empty lists.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `user_id` - ID of the user whose favorites to fetch
///
/// # Returns
/// - `200 OK` - Favorites grouped by type
/// - `404 Not Found` - No user with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/users/{user_id}/favorites",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved favorites", body = FavoritesDto),
        (status = 404, description = "User not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_user_favorites(
    State(state): State<AppState>,
    IdPath(user_id): IdPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let favorites = UserService::new(&state.db).get_favorites(user_id).await?;

    Ok((StatusCode::OK, Json(favorites.into_dto())))
}
