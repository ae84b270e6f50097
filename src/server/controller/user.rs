use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{UpdateProfileDto, UserDto},
    },
    server::{
        controller::util::get_user::get_user_from_session,
        error::{auth::AuthError, Error},
        model::app::AppState,
        service::user::UserService,
    },
};

pub static USER_TAG: &str = "user";

/// Gets the logged-in user's profile
///
/// # Responses
/// - 200 (OK): The user's profile
/// - 404 (Not Found): No user in session, or the session is stale
/// - 500 (Internal Server Error): A database or session error
#[utoipa::path(
    get,
    path = "/api/user/profile",
    tag = USER_TAG,
    responses(
        (status = 200, description = "The user's profile", body = UserDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    Ok(Json(user))
}

/// Updates the logged-in user's display name
///
/// # Responses
/// - 200 (OK): The updated profile
/// - 400 (Bad Request): Blank display name
/// - 404 (Not Found): No user in session, or the session is stale
/// - 500 (Internal Server Error): A database or session error
#[utoipa::path(
    put,
    path = "/api/user/profile",
    tag = USER_TAG,
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "The updated profile", body = UserDto),
        (status = 400, description = "Invalid display name", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let user_service = UserService::new(&state.db);
    let updated = user_service
        .update_name(user.id, &dto.name)
        .await?
        .ok_or(AuthError::UserNotInDatabase(user.id))?;

    Ok(Json(updated))
}

/// Deletes the logged-in user's account along with their pets and reservations
///
/// # Responses
/// - 204 (No Content): Account deleted, session cleared
/// - 404 (Not Found): No user in session, or the session is stale
/// - 500 (Internal Server Error): A database or session error
#[utoipa::path(
    delete,
    path = "/api/user/profile",
    tag = USER_TAG,
    responses(
        (status = 204, description = "Account deleted"),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_profile(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let user_service = UserService::new(&state.db);
    user_service.delete_account(user.id).await?;

    session.clear().await;

    Ok(StatusCode::NO_CONTENT)
}
