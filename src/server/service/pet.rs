use sea_orm::DatabaseConnection;

use crate::{
    model::pet::{CreatePetDto, PetDto, UpdatePetDto},
    server::{
        data::{pet::PetRepository, reservation::ReservationRepository},
        error::{pet::PetError, Error},
    },
};

pub struct PetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PetService<'a> {
    /// Creates a new instance of [`PetService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new pet under the given owner
    pub async fn create_pet(&self, owner_id: i32, dto: CreatePetDto) -> Result<PetDto, Error> {
        let name = dto.name.trim();
        if name.is_empty() {
            return Err(PetError::InvalidName.into());
        }
        let species = dto.species.trim();
        if species.is_empty() {
            return Err(PetError::InvalidSpecies.into());
        }

        let pet_repository = PetRepository::new(self.db);
        let pet = pet_repository
            .create(
                owner_id,
                name,
                species,
                dto.breed.as_deref(),
                dto.birth_date,
                dto.notes.as_deref(),
            )
            .await?;

        Ok(pet.into())
    }

    pub async fn list_pets(&self, owner_id: i32) -> Result<Vec<PetDto>, Error> {
        let pet_repository = PetRepository::new(self.db);
        let pets = pet_repository.list_by_owner(owner_id).await?;

        Ok(pets.into_iter().map(PetDto::from).collect())
    }

    /// Fetches one of the owner's pets
    ///
    /// Pets belonging to other users fail with [`PetError::NotFound`] so that
    /// the response does not reveal which IDs exist.
    pub async fn get_pet(&self, owner_id: i32, pet_id: i32) -> Result<PetDto, Error> {
        let pet = self.get_owned_pet(owner_id, pet_id).await?;

        Ok(pet.into())
    }

    pub async fn update_pet(
        &self,
        owner_id: i32,
        pet_id: i32,
        dto: UpdatePetDto,
    ) -> Result<PetDto, Error> {
        self.get_owned_pet(owner_id, pet_id).await?;

        if let Some(name) = dto.name.as_deref() {
            if name.trim().is_empty() {
                return Err(PetError::InvalidName.into());
            }
        }
        if let Some(species) = dto.species.as_deref() {
            if species.trim().is_empty() {
                return Err(PetError::InvalidSpecies.into());
            }
        }

        let pet_repository = PetRepository::new(self.db);
        let pet = pet_repository
            .update(
                pet_id,
                dto.name.as_deref().map(str::trim),
                dto.species.as_deref().map(str::trim),
                dto.breed.as_deref(),
                dto.birth_date,
                dto.notes.as_deref(),
            )
            .await?
            .ok_or(PetError::NotFound(pet_id))?;

        Ok(pet.into())
    }

    /// Removes one of the owner's pets along with its reservation history
    ///
    /// Pets with pending reservations cannot be deleted until those
    /// reservations are cancelled.
    pub async fn delete_pet(&self, owner_id: i32, pet_id: i32) -> Result<(), Error> {
        self.get_owned_pet(owner_id, pet_id).await?;

        let reservation_repository = ReservationRepository::new(self.db);
        let pending = reservation_repository.count_pending_for_pet(pet_id).await?;
        if pending > 0 {
            return Err(PetError::HasPendingReservations(pet_id).into());
        }

        reservation_repository.delete_by_pet(pet_id).await?;

        let pet_repository = PetRepository::new(self.db);
        pet_repository.delete(pet_id).await?;

        Ok(())
    }

    pub(super) async fn get_owned_pet(
        &self,
        owner_id: i32,
        pet_id: i32,
    ) -> Result<entity::petlodge_pet::Model, Error> {
        let pet_repository = PetRepository::new(self.db);
        let pet = pet_repository
            .get(pet_id)
            .await?
            .filter(|pet| pet.owner_id == owner_id)
            .ok_or(PetError::NotFound(pet_id))?;

        Ok(pet)
    }
}
