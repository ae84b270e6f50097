use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

pub struct PetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PetRepository<'a, C> {
    /// Creates a new instance of [`PetRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new pet record for the given owner
    pub async fn create(
        &self,
        owner_id: i32,
        name: &str,
        species: &str,
        breed: Option<&str>,
        birth_date: Option<NaiveDate>,
        notes: Option<&str>,
    ) -> Result<entity::petlodge_pet::Model, DbErr> {
        let pet = entity::petlodge_pet::ActiveModel {
            owner_id: ActiveValue::Set(owner_id),
            name: ActiveValue::Set(name.to_string()),
            species: ActiveValue::Set(species.to_string()),
            breed: ActiveValue::Set(breed.map(str::to_string)),
            birth_date: ActiveValue::Set(birth_date),
            notes: ActiveValue::Set(notes.map(str::to_string)),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        pet.insert(self.db).await
    }

    pub async fn get(&self, pet_id: i32) -> Result<Option<entity::petlodge_pet::Model>, DbErr> {
        entity::prelude::PetlodgePet::find_by_id(pet_id)
            .one(self.db)
            .await
    }

    /// All pets belonging to the given owner, ordered by name
    pub async fn list_by_owner(
        &self,
        owner_id: i32,
    ) -> Result<Vec<entity::petlodge_pet::Model>, DbErr> {
        entity::prelude::PetlodgePet::find()
            .filter(entity::petlodge_pet::Column::OwnerId.eq(owner_id))
            .order_by_asc(entity::petlodge_pet::Column::Name)
            .all(self.db)
            .await
    }

    /// Applies the provided fields to an existing pet, leaving omitted fields
    /// unchanged. Returns None when the pet does not exist.
    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        pet_id: i32,
        name: Option<&str>,
        species: Option<&str>,
        breed: Option<&str>,
        birth_date: Option<NaiveDate>,
        notes: Option<&str>,
    ) -> Result<Option<entity::petlodge_pet::Model>, DbErr> {
        let pet = match entity::prelude::PetlodgePet::find_by_id(pet_id)
            .one(self.db)
            .await?
        {
            Some(pet) => pet,
            None => return Ok(None),
        };

        let mut pet_am = pet.into_active_model();
        if let Some(name) = name {
            pet_am.name = ActiveValue::Set(name.to_string());
        }
        if let Some(species) = species {
            pet_am.species = ActiveValue::Set(species.to_string());
        }
        if let Some(breed) = breed {
            pet_am.breed = ActiveValue::Set(Some(breed.to_string()));
        }
        if let Some(birth_date) = birth_date {
            pet_am.birth_date = ActiveValue::Set(Some(birth_date));
        }
        if let Some(notes) = notes {
            pet_am.notes = ActiveValue::Set(Some(notes.to_string()));
        }

        let pet = pet_am.update(self.db).await?;

        Ok(Some(pet))
    }

    /// Deletes a pet
    ///
    /// Returns OK regardless of the pet existing, to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, pet_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::PetlodgePet::delete_by_id(pet_id)
            .exec(self.db)
            .await
    }

    /// Deletes every pet belonging to the given owner
    pub async fn delete_by_owner(&self, owner_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::PetlodgePet::delete_many()
            .filter(entity::petlodge_pet::Column::OwnerId.eq(owner_id))
            .exec(self.db)
            .await
    }
}
