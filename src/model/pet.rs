use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PetDto {
    pub id: i32,
    pub name: String,
    pub species: String,
    pub breed: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}

impl From<entity::petlodge_pet::Model> for PetDto {
    fn from(pet: entity::petlodge_pet::Model) -> Self {
        Self {
            id: pet.id,
            name: pet.name,
            species: pet.species,
            breed: pet.breed,
            birth_date: pet.birth_date,
            notes: pet.notes,
            created_at: pet.created_at,
        }
    }
}

/// Request body for registering a new pet
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreatePetDto {
    pub name: String,
    pub species: String,
    #[serde(default)]
    pub breed: Option<String>,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Request body for updating a pet; omitted fields are left unchanged
#[derive(Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdatePetDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub species: Option<String>,
    #[serde(default)]
    pub breed: Option<String>,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    #[serde(default)]
    pub notes: Option<String>,
}
