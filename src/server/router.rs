//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications, and Swagger
//! UI is served at `/api/docs` with the generated document at `/api/docs/openapi.json`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, state::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Path parameters are declared as `i32`, so a non-integer ID is rejected by the
/// extractor with `400 Bad Request` before any service runs. Handlers sharing a path
/// (the favorite `POST`/`DELETE` pairs) are registered in one `routes!` call.
///
/// # Registered Endpoints
/// - `GET /users`, `GET /users/{user_id}`, `GET /users/{user_id}/favorites`
/// - `GET /characters`, `GET /characters/{character_id}`
/// - `GET /planets`, `GET /planets/{planet_id}`
/// - `GET /vehicles`, `GET /vehicles/{vehicle_id}`
/// - `POST|DELETE /favorite/user/{user_id}/character/{character_id}`
/// - `POST|DELETE /favorite/user/{user_id}/planet/{planet_id}`
/// - `POST|DELETE /favorite/user/{user_id}/vehicle/{vehicle_id}`
///
/// # Returns
/// An Axum `Router<AppState>` awaiting its state.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Holocron", description = "Star Wars catalog API"), tags(
        (name = controller::user::USER_TAG, description = "User API routes"),
        (name = controller::character::CHARACTER_TAG, description = "Character API routes"),
        (name = controller::planet::PLANET_TAG, description = "Planet API routes"),
        (name = controller::vehicle::VEHICLE_TAG, description = "Vehicle API routes"),
        (name = controller::favorite::FAVORITE_TAG, description = "Favorite API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::user::get_all_users))
        .routes(routes!(controller::user::get_user_by_id))
        .routes(routes!(controller::user::get_user_favorites))
        .routes(routes!(controller::character::get_all_characters))
        .routes(routes!(controller::character::get_character_by_id))
        .routes(routes!(controller::planet::get_all_planets))
        .routes(routes!(controller::planet::get_planet_by_id))
        .routes(routes!(controller::vehicle::get_all_vehicles))
        .routes(routes!(controller::vehicle::get_vehicle_by_id))
        .routes(routes!(
            controller::favorite::add_character_favorite,
            controller::favorite::remove_character_favorite
        ))
        .routes(routes!(
            controller::favorite::add_planet_favorite,
            controller::favorite::remove_planet_favorite
        ))
        .routes(routes!(
            controller::favorite::add_vehicle_favorite,
            controller::favorite::remove_vehicle_favorite
        ))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
