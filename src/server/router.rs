//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI
//! documentation using utoipa. All API endpoints are registered here with
//! their OpenAPI specifications, and Swagger UI is configured to provide
//! interactive API documentation at `/api/docs`.

use axum::{routing::get, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all endpoints and Swagger UI.
///
/// API endpoints are registered in four groups: authentication, user profile,
/// pets, and reservations. Each is annotated with OpenAPI specifications via
/// utoipa, collected into a unified document served at
/// `/api/docs/openapi.json` with Swagger UI at `/api/docs`. The public pages
/// and health check are registered as plain routes outside the OpenAPI
/// document. Requests for any other path fall through to axum's 404 handler.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "PetLodge", description = "PetLodge API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
        (name = controller::user::USER_TAG, description = "User profile API routes"),
        (name = controller::pet::PET_TAG, description = "Pet API routes"),
        (name = controller::reservation::RESERVATION_TAG, description = "Reservation API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::register))
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::get_user))
        .routes(routes!(controller::user::get_profile))
        .routes(routes!(controller::user::update_profile))
        .routes(routes!(controller::user::delete_profile))
        .routes(routes!(controller::pet::list_pets))
        .routes(routes!(controller::pet::create_pet))
        .routes(routes!(controller::pet::get_pet))
        .routes(routes!(controller::pet::update_pet))
        .routes(routes!(controller::pet::delete_pet))
        .routes(routes!(controller::reservation::list_reservations))
        .routes(routes!(controller::reservation::create_reservation))
        .routes(routes!(controller::reservation::get_reservation))
        .routes(routes!(controller::reservation::cancel_reservation))
        .split_for_parts();

    routes
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .route("/", get(controller::public::home))
        .route("/about", get(controller::public::about))
        .route("/health", get(controller::public::health))
}
