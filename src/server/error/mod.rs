//! Error types for the Petlodge server application.
//!
//! A single [`Error`] enum aggregates the per-domain error types
//! (authentication, configuration, pets, reservations, user profile) and
//! external library errors. All errors implement `IntoResponse` so handlers
//! can return `Result<_, Error>` directly.

pub mod auth;
pub mod config;
pub mod pet;
pub mod reservation;
pub mod user;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, pet::PetError, reservation::ReservationError,
        user::UserError,
    },
};

/// Main error type for the Petlodge server application.
///
/// Domain errors carry their own HTTP response mappings; external library
/// errors fall through to a logged 500 so no internal detail reaches the
/// client.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (credentials, session, registration validation).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Pet record error (lookup, validation, deletion constraints).
    #[error(transparent)]
    PetError(#[from] PetError),
    /// Reservation error (date validation, overlap conflicts, cancellation).
    #[error(transparent)]
    ReservationError(#[from] ReservationError),
    /// User profile error (profile validation).
    #[error(transparent)]
    UserError(#[from] UserError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a bug in Petlodge's code.
    #[error("Internal error with Petlodge's code, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::PetError(err) => err.into_response(),
            Self::ReservationError(err) => err.into_response(),
            Self::UserError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 response.
///
/// Logs the full error for debugging and returns a generic message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
