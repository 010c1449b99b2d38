use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::MessageDto, vehicle::VehicleDto},
    server::{
        controller::util::id_path::IdPath, error::AppError, service::vehicle::VehicleService,
        state::AppState,
    },
};

/// Tag for grouping vehicle endpoints in OpenAPI documentation
pub static VEHICLE_TAG: &str = "vehicle";

/// Get all vehicles, `404` when there are none.
#[utoipa::path(
    get,
    path = "/vehicles",
    tag = VEHICLE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved vehicles", body = Vec<VehicleDto>),
        (status = 404, description = "No vehicles exist", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_all_vehicles(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let vehicles = VehicleService::new(&state.db).get_all().await?;

    let dtos: Vec<VehicleDto> = vehicles.into_iter().map(|e| e.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a vehicle by ID.
#[utoipa::path(
    get,
    path = "/vehicles/{vehicle_id}",
    tag = VEHICLE_TAG,
    params(
        ("vehicle_id" = i32, Path, description = "Vehicle ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved vehicle", body = VehicleDto),
        (status = 404, description = "Vehicle not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_vehicle_by_id(
    State(state): State<AppState>,
    IdPath(vehicle_id): IdPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let vehicle = VehicleService::new(&state.db).get_by_id(vehicle_id).await?;

    Ok((StatusCode::OK, Json(vehicle.into_dto())))
}
