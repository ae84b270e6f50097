use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum PetError {
    /// Also returned for pets owned by a different user so that the API does
    /// not reveal which pet IDs exist.
    #[error("Pet ID {0:?} not found for the current user")]
    NotFound(i32),
    #[error("Pet ID {0:?} still has pending reservations")]
    HasPendingReservations(i32),
    #[error("Pet name must not be empty")]
    InvalidName,
    #[error("Pet species must not be empty")]
    InvalidSpecies,
}

impl IntoResponse for PetError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(pet_id) => {
                tracing::debug!(pet_id = %pet_id, "{}", self);

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: "Pet not found".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::HasPendingReservations(_) => (
                StatusCode::CONFLICT,
                Json(ErrorDto {
                    error: "Pet still has pending reservations; cancel them first".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidName | Self::InvalidSpecies => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
        }
    }
}
