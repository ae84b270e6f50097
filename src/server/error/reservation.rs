use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum ReservationError {
    /// Also returned for reservations owned by a different user.
    #[error("Reservation ID {0:?} not found for the current user")]
    NotFound(i32),
    #[error("Check-out date must be after the check-in date")]
    CheckOutNotAfterCheckIn,
    #[error("Check-in date must not be in the past")]
    CheckInInPast,
    #[error("Pet ID {0:?} already has a reservation overlapping those dates")]
    Conflict(i32),
    #[error("Reservation ID {0:?} is already cancelled")]
    AlreadyCancelled(i32),
}

impl IntoResponse for ReservationError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(reservation_id) => {
                tracing::debug!(reservation_id = %reservation_id, "{}", self);

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: "Reservation not found".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::CheckOutNotAfterCheckIn | Self::CheckInInPast => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            Self::Conflict(_) => (
                StatusCode::CONFLICT,
                Json(ErrorDto {
                    error: "The pet already has a reservation overlapping those dates".to_string(),
                }),
            )
                .into_response(),
            Self::AlreadyCancelled(_) => (
                StatusCode::CONFLICT,
                Json(ErrorDto {
                    error: "Reservation is already cancelled".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
