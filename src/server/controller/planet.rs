use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::MessageDto, planet::PlanetDto},
    server::{
        controller::util::id_path::IdPath, error::AppError, service::planet::PlanetService,
        state::AppState,
    },
};

/// Tag for grouping planet endpoints in OpenAPI documentation
pub static PLANET_TAG: &str = "planet";

/// Get all planets, `404` when there are none.
#[utoipa::path(
    get,
    path = "/planets",
    tag = PLANET_TAG,
    responses(
        (status = 200, description = "Successfully retrieved planets", body = Vec<PlanetDto>),
        (status = 404, description = "No planets exist", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_all_planets(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let planets = PlanetService::new(&state.db).get_all().await?;

    let dtos: Vec<PlanetDto> = planets.into_iter().map(|e| e.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a planet by ID.
#[utoipa::path(
    get,
    path = "/planets/{planet_id}",
    tag = PLANET_TAG,
    params(
        ("planet_id" = i32, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved planet", body = PlanetDto),
        (status = 404, description = "Planet not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_planet_by_id(
    State(state): State<AppState>,
    IdPath(planet_id): IdPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let planet = PlanetService::new(&state.db).get_by_id(planet_id).await?;

    Ok((StatusCode::OK, Json(planet.into_dto())))
}
