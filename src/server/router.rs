//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Handlers sharing a path are registered together so their methods merge onto one route.
///
/// # Registered Endpoints
/// - `POST /api/auth/register`, `POST /api/auth/login`, `POST /api/auth/logout`
/// - `GET /api/auth/user`
/// - `GET|PUT /api/profile`
/// - `GET|POST /api/crew`, `GET|PUT|DELETE /api/crew/{id}`, `PUT /api/crew/{id}/password`
/// - `GET|POST /api/missions`, `GET|PUT|DELETE /api/missions/{id}`
/// - `POST /api/missions/{id}/start`, `POST /api/missions/{id}/complete`,
///   `POST /api/missions/{id}/retry`
/// - `POST /api/missions/reset`
///
/// The OpenAPI specification is served at `/api/docs/openapi.json`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Starbase", description = "Starbase crew portal API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Registration and session authentication"),
        (name = controller::user::USER_TAG, description = "Profiles and the crew directory"),
        (name = controller::mission::MISSION_TAG, description = "Mission catalogue, progress and crew rewards"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::register))
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::get_user))
        .routes(routes!(
            controller::user::get_profile,
            controller::user::update_profile
        ))
        .routes(routes!(
            controller::user::get_crew,
            controller::user::create_crew_member
        ))
        .routes(routes!(
            controller::user::get_crew_member,
            controller::user::update_crew_member,
            controller::user::delete_crew_member
        ))
        .routes(routes!(controller::user::set_crew_password))
        .routes(routes!(
            controller::mission::list_missions,
            controller::mission::create_mission
        ))
        .routes(routes!(controller::mission::reset_missions))
        .routes(routes!(
            controller::mission::get_mission,
            controller::mission::update_mission,
            controller::mission::delete_mission
        ))
        .routes(routes!(controller::mission::start_mission))
        .routes(routes!(controller::mission::complete_mission))
        .routes(routes!(controller::mission::retry_mission))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
