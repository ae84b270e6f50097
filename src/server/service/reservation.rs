use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    model::reservation::{CreateReservationDto, ReservationDto, ReservationStatus},
    server::{
        data::reservation::ReservationRepository,
        error::{reservation::ReservationError, Error},
        service::pet::PetService,
    },
};

pub struct ReservationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReservationService<'a> {
    /// Creates a new instance of [`ReservationService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Books a stay for one of the owner's pets
    ///
    /// The stay is the half-open range `[check_in, check_out)`, so a new stay
    /// may begin on the day an existing one ends. Overlapping a non-cancelled
    /// reservation for the same pet fails with [`ReservationError::Conflict`].
    pub async fn create_reservation(
        &self,
        owner_id: i32,
        dto: CreateReservationDto,
    ) -> Result<ReservationDto, Error> {
        let pet_service = PetService::new(self.db);
        let pet = pet_service.get_owned_pet(owner_id, dto.pet_id).await?;

        if dto.check_out <= dto.check_in {
            return Err(ReservationError::CheckOutNotAfterCheckIn.into());
        }
        if dto.check_in < Utc::now().date_naive() {
            return Err(ReservationError::CheckInInPast.into());
        }

        let reservation_repository = ReservationRepository::new(self.db);
        let overlapping = reservation_repository
            .find_overlapping(pet.id, dto.check_in, dto.check_out)
            .await?;
        if !overlapping.is_empty() {
            return Err(ReservationError::Conflict(pet.id).into());
        }

        let reservation = reservation_repository
            .create(pet.id, dto.check_in, dto.check_out, dto.notes.as_deref())
            .await?;

        reservation_to_dto(reservation, pet.name)
    }

    /// All reservations across the owner's pets, newest check-in first
    pub async fn list_reservations(&self, owner_id: i32) -> Result<Vec<ReservationDto>, Error> {
        let reservation_repository = ReservationRepository::new(self.db);
        let reservations = reservation_repository.list_by_owner(owner_id).await?;

        reservations
            .into_iter()
            .map(|(reservation, pet)| {
                let pet_name = pet.map(|pet| pet.name).unwrap_or_default();

                reservation_to_dto(reservation, pet_name)
            })
            .collect()
    }

    /// Fetches one of the owner's reservations
    ///
    /// Reservations for other users' pets fail with
    /// [`ReservationError::NotFound`].
    pub async fn get_reservation(
        &self,
        owner_id: i32,
        reservation_id: i32,
    ) -> Result<ReservationDto, Error> {
        let (reservation, pet) = self.get_owned_reservation(owner_id, reservation_id).await?;

        reservation_to_dto(reservation, pet.name)
    }

    /// Cancels one of the owner's reservations
    ///
    /// The reservation row is kept in cancelled status rather than deleted.
    /// Cancelling twice fails with [`ReservationError::AlreadyCancelled`].
    pub async fn cancel_reservation(
        &self,
        owner_id: i32,
        reservation_id: i32,
    ) -> Result<ReservationDto, Error> {
        let (reservation, pet) = self.get_owned_reservation(owner_id, reservation_id).await?;

        if reservation.status == ReservationStatus::Cancelled.as_str() {
            return Err(ReservationError::AlreadyCancelled(reservation_id).into());
        }

        let reservation_repository = ReservationRepository::new(self.db);
        let reservation = reservation_repository
            .set_status(reservation_id, ReservationStatus::Cancelled)
            .await?
            .ok_or(ReservationError::NotFound(reservation_id))?;

        reservation_to_dto(reservation, pet.name)
    }

    async fn get_owned_reservation(
        &self,
        owner_id: i32,
        reservation_id: i32,
    ) -> Result<
        (
            entity::petlodge_reservation::Model,
            entity::petlodge_pet::Model,
        ),
        Error,
    > {
        let reservation_repository = ReservationRepository::new(self.db);
        let reservation = reservation_repository
            .get_with_pet(reservation_id)
            .await?
            .and_then(|(reservation, pet)| pet.map(|pet| (reservation, pet)))
            .filter(|(_, pet)| pet.owner_id == owner_id)
            .ok_or(ReservationError::NotFound(reservation_id))?;

        Ok(reservation)
    }
}

fn reservation_to_dto(
    reservation: entity::petlodge_reservation::Model,
    pet_name: String,
) -> Result<ReservationDto, Error> {
    let status = ReservationStatus::try_from(reservation.status.as_str())
        .map_err(Error::ParseError)?;

    Ok(ReservationDto {
        id: reservation.id,
        pet_id: reservation.pet_id,
        pet_name,
        check_in: reservation.check_in,
        check_out: reservation.check_out,
        status,
        notes: reservation.notes,
        created_at: reservation.created_at,
    })
}
