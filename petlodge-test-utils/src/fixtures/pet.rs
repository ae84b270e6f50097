use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::error::TestError;

pub struct PetFixture<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PetFixture<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert a dog with the given name under the given owner
    pub async fn insert_pet(
        &self,
        owner_id: i32,
        name: &str,
    ) -> Result<entity::petlodge_pet::Model, TestError> {
        let pet = entity::petlodge_pet::ActiveModel {
            owner_id: ActiveValue::Set(owner_id),
            name: ActiveValue::Set(name.to_string()),
            species: ActiveValue::Set("dog".to_string()),
            breed: ActiveValue::Set(None),
            birth_date: ActiveValue::Set(None),
            notes: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(pet.insert(self.db).await?)
    }
}
