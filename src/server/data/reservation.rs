use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::reservation::ReservationStatus;

pub struct ReservationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReservationRepository<'a, C> {
    /// Creates a new instance of [`ReservationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new reservation in pending status
    pub async fn create(
        &self,
        pet_id: i32,
        check_in: NaiveDate,
        check_out: NaiveDate,
        notes: Option<&str>,
    ) -> Result<entity::petlodge_reservation::Model, DbErr> {
        let reservation = entity::petlodge_reservation::ActiveModel {
            pet_id: ActiveValue::Set(pet_id),
            check_in: ActiveValue::Set(check_in),
            check_out: ActiveValue::Set(check_out),
            status: ActiveValue::Set(ReservationStatus::Pending.as_str().to_string()),
            notes: ActiveValue::Set(notes.map(str::to_string)),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        reservation.insert(self.db).await
    }

    /// Fetches a reservation together with its pet
    pub async fn get_with_pet(
        &self,
        reservation_id: i32,
    ) -> Result<
        Option<(
            entity::petlodge_reservation::Model,
            Option<entity::petlodge_pet::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::PetlodgeReservation::find_by_id(reservation_id)
            .find_also_related(entity::prelude::PetlodgePet)
            .one(self.db)
            .await
    }

    /// All reservations for pets belonging to the given owner, newest check-in
    /// first, each paired with its pet.
    pub async fn list_by_owner(
        &self,
        owner_id: i32,
    ) -> Result<
        Vec<(
            entity::petlodge_reservation::Model,
            Option<entity::petlodge_pet::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::PetlodgeReservation::find()
            .find_also_related(entity::prelude::PetlodgePet)
            .filter(entity::petlodge_pet::Column::OwnerId.eq(owner_id))
            .order_by_desc(entity::petlodge_reservation::Column::CheckIn)
            .all(self.db)
            .await
    }

    /// Non-cancelled reservations for the pet whose stay overlaps the given
    /// half-open range `[check_in, check_out)`. Back-to-back stays where one
    /// ends the day the other begins do not overlap.
    pub async fn find_overlapping(
        &self,
        pet_id: i32,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<Vec<entity::petlodge_reservation::Model>, DbErr> {
        entity::prelude::PetlodgeReservation::find()
            .filter(entity::petlodge_reservation::Column::PetId.eq(pet_id))
            .filter(entity::petlodge_reservation::Column::CheckIn.lt(check_out))
            .filter(entity::petlodge_reservation::Column::CheckOut.gt(check_in))
            .filter(
                entity::petlodge_reservation::Column::Status
                    .ne(ReservationStatus::Cancelled.as_str()),
            )
            .all(self.db)
            .await
    }

    /// Number of pending reservations attached to the pet
    pub async fn count_pending_for_pet(&self, pet_id: i32) -> Result<u64, DbErr> {
        entity::prelude::PetlodgeReservation::find()
            .filter(entity::petlodge_reservation::Column::PetId.eq(pet_id))
            .filter(
                entity::petlodge_reservation::Column::Status
                    .eq(ReservationStatus::Pending.as_str()),
            )
            .count(self.db)
            .await
    }

    /// Sets the reservation's status, returning None when the reservation
    /// does not exist.
    pub async fn set_status(
        &self,
        reservation_id: i32,
        status: ReservationStatus,
    ) -> Result<Option<entity::petlodge_reservation::Model>, DbErr> {
        let reservation = match entity::prelude::PetlodgeReservation::find_by_id(reservation_id)
            .one(self.db)
            .await?
        {
            Some(reservation) => reservation,
            None => return Ok(None),
        };

        let mut reservation_am = reservation.into_active_model();
        reservation_am.status = ActiveValue::Set(status.as_str().to_string());

        let reservation = reservation_am.update(self.db).await?;

        Ok(Some(reservation))
    }

    /// Deletes every reservation attached to the given pet
    pub async fn delete_by_pet(&self, pet_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::PetlodgeReservation::delete_many()
            .filter(entity::petlodge_reservation::Column::PetId.eq(pet_id))
            .exec(self.db)
            .await
    }
}
