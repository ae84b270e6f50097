use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::error::TestError;

pub struct ReservationFixture<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReservationFixture<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert a pending reservation for the given pet
    pub async fn insert_reservation(
        &self,
        pet_id: i32,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<entity::petlodge_reservation::Model, TestError> {
        self.insert_with_status(pet_id, check_in, check_out, "pending")
            .await
    }

    /// Insert a cancelled reservation for the given pet
    pub async fn insert_cancelled_reservation(
        &self,
        pet_id: i32,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<entity::petlodge_reservation::Model, TestError> {
        self.insert_with_status(pet_id, check_in, check_out, "cancelled")
            .await
    }

    async fn insert_with_status(
        &self,
        pet_id: i32,
        check_in: NaiveDate,
        check_out: NaiveDate,
        status: &str,
    ) -> Result<entity::petlodge_reservation::Model, TestError> {
        let reservation = entity::petlodge_reservation::ActiveModel {
            pet_id: ActiveValue::Set(pet_id),
            check_in: ActiveValue::Set(check_in),
            check_out: ActiveValue::Set(check_out),
            status: ActiveValue::Set(status.to_string()),
            notes: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(reservation.insert(self.db).await?)
    }
}
