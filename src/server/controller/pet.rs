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
        pet::{CreatePetDto, PetDto, UpdatePetDto},
    },
    server::{
        controller::util::get_user::get_user_from_session, error::Error, model::app::AppState,
        service::pet::PetService,
    },
};

pub static PET_TAG: &str = "pet";

/// Lists the logged-in user's pets, ordered by name
///
/// # Responses
/// - 200 (OK): The user's pets
/// - 404 (Not Found): No user in session, or the session is stale
/// - 500 (Internal Server Error): A database or session error
#[utoipa::path(
    get,
    path = "/api/pets",
    tag = PET_TAG,
    responses(
        (status = 200, description = "The user's pets", body = Vec<PetDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_pets(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let pet_service = PetService::new(&state.db);
    let pets = pet_service.list_pets(user.id).await?;

    Ok(Json(pets))
}

/// Registers a new pet under the logged-in user
///
/// # Responses
/// - 201 (Created): The registered pet
/// - 400 (Bad Request): Blank name or species
/// - 404 (Not Found): No user in session, or the session is stale
/// - 500 (Internal Server Error): A database or session error
#[utoipa::path(
    post,
    path = "/api/pets",
    tag = PET_TAG,
    request_body = CreatePetDto,
    responses(
        (status = 201, description = "The registered pet", body = PetDto),
        (status = 400, description = "Invalid pet details", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_pet(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<CreatePetDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let pet_service = PetService::new(&state.db);
    let pet = pet_service.create_pet(user.id, dto).await?;

    Ok((StatusCode::CREATED, Json(pet)))
}

/// Gets one of the logged-in user's pets
///
/// # Responses
/// - 200 (OK): The pet
/// - 404 (Not Found): No such pet for this user, or no user in session
/// - 500 (Internal Server Error): A database or session error
#[utoipa::path(
    get,
    path = "/api/pets/{pet_id}",
    tag = PET_TAG,
    params(("pet_id" = i32, Path, description = "ID of the pet")),
    responses(
        (status = 200, description = "The pet", body = PetDto),
        (status = 404, description = "Pet or user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pet(
    State(state): State<AppState>,
    session: Session,
    Path(pet_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let pet_service = PetService::new(&state.db);
    let pet = pet_service.get_pet(user.id, pet_id).await?;

    Ok(Json(pet))
}

/// Updates one of the logged-in user's pets; omitted fields are left unchanged
///
/// # Responses
/// - 200 (OK): The updated pet
/// - 400 (Bad Request): Blank name or species
/// - 404 (Not Found): No such pet for this user, or no user in session
/// - 500 (Internal Server Error): A database or session error
#[utoipa::path(
    put,
    path = "/api/pets/{pet_id}",
    tag = PET_TAG,
    params(("pet_id" = i32, Path, description = "ID of the pet")),
    request_body = UpdatePetDto,
    responses(
        (status = 200, description = "The updated pet", body = PetDto),
        (status = 400, description = "Invalid pet details", body = ErrorDto),
        (status = 404, description = "Pet or user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_pet(
    State(state): State<AppState>,
    session: Session,
    Path(pet_id): Path<i32>,
    Json(dto): Json<UpdatePetDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let pet_service = PetService::new(&state.db);
    let pet = pet_service.update_pet(user.id, pet_id, dto).await?;

    Ok(Json(pet))
}

/// Deletes one of the logged-in user's pets along with its reservation history
///
/// # Responses
/// - 204 (No Content): Pet deleted
/// - 404 (Not Found): No such pet for this user, or no user in session
/// - 409 (Conflict): The pet still has pending reservations
/// - 500 (Internal Server Error): A database or session error
#[utoipa::path(
    delete,
    path = "/api/pets/{pet_id}",
    tag = PET_TAG,
    params(("pet_id" = i32, Path, description = "ID of the pet")),
    responses(
        (status = 204, description = "Pet deleted"),
        (status = 404, description = "Pet or user not found", body = ErrorDto),
        (status = 409, description = "Pet has pending reservations", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_pet(
    State(state): State<AppState>,
    session: Session,
    Path(pet_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let pet_service = PetService::new(&state.db);
    pet_service.delete_pet(user.id, pet_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
