use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        reservation::{CreateReservationDto, ReservationDto},
    },
    server::{
        controller::util::get_user::get_user_from_session, error::Error, model::app::AppState,
        service::reservation::ReservationService,
    },
};

pub static RESERVATION_TAG: &str = "reservation";

/// Lists reservations across all of the logged-in user's pets
///
/// # Responses
/// - 200 (OK): The user's reservations, newest check-in first
/// - 404 (Not Found): No user in session, or the session is stale
/// - 500 (Internal Server Error): A database or session error
#[utoipa::path(
    get,
    path = "/api/reservations",
    tag = RESERVATION_TAG,
    responses(
        (status = 200, description = "The user's reservations", body = Vec<ReservationDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_reservations(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let reservation_service = ReservationService::new(&state.db);
    let reservations = reservation_service.list_reservations(user.id).await?;

    Ok(Json(reservations))
}

/// Books a stay for one of the logged-in user's pets
///
/// # Responses
/// - 201 (Created): The booked reservation, in pending status
/// - 400 (Bad Request): Check-out not after check-in, or check-in in the past
/// - 404 (Not Found): No such pet for this user, or no user in session
/// - 409 (Conflict): The stay overlaps an existing booking for the pet
/// - 500 (Internal Server Error): A database or session error
#[utoipa::path(
    post,
    path = "/api/reservations",
    tag = RESERVATION_TAG,
    request_body = CreateReservationDto,
    responses(
        (status = 201, description = "The booked reservation", body = ReservationDto),
        (status = 400, description = "Invalid stay dates", body = ErrorDto),
        (status = 404, description = "Pet or user not found", body = ErrorDto),
        (status = 409, description = "Stay overlaps an existing booking", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_reservation(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<CreateReservationDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let reservation_service = ReservationService::new(&state.db);
    let reservation = reservation_service.create_reservation(user.id, dto).await?;

    Ok((StatusCode::CREATED, Json(reservation)))
}

/// Gets one of the logged-in user's reservations
///
/// # Responses
/// - 200 (OK): The reservation
/// - 404 (Not Found): No such reservation for this user, or no user in session
/// - 500 (Internal Server Error): A database or session error
#[utoipa::path(
    get,
    path = "/api/reservations/{reservation_id}",
    tag = RESERVATION_TAG,
    params(("reservation_id" = i32, Path, description = "ID of the reservation")),
    responses(
        (status = 200, description = "The reservation", body = ReservationDto),
        (status = 404, description = "Reservation or user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reservation(
    State(state): State<AppState>,
    session: Session,
    Path(reservation_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let reservation_service = ReservationService::new(&state.db);
    let reservation = reservation_service
        .get_reservation(user.id, reservation_id)
        .await?;

    Ok(Json(reservation))
}

/// Cancels one of the logged-in user's reservations
///
/// The reservation is kept in cancelled status rather than deleted.
///
/// # Responses
/// - 200 (OK): The cancelled reservation
/// - 404 (Not Found): No such reservation for this user, or no user in session
/// - 409 (Conflict): The reservation was already cancelled
/// - 500 (Internal Server Error): A database or session error
#[utoipa::path(
    delete,
    path = "/api/reservations/{reservation_id}",
    tag = RESERVATION_TAG,
    params(("reservation_id" = i32, Path, description = "ID of the reservation")),
    responses(
        (status = 200, description = "The cancelled reservation", body = ReservationDto),
        (status = 404, description = "Reservation or user not found", body = ErrorDto),
        (status = 409, description = "Reservation already cancelled", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_reservation(
    State(state): State<AppState>,
    session: Session,
    Path(reservation_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let reservation_service = ReservationService::new(&state.db);
    let reservation = reservation_service
        .cancel_reservation(user.id, reservation_id)
        .await?;

    Ok(Json(reservation))
}
