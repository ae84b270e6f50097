use sea_orm::DatabaseConnection;

use crate::{
    model::user::UserDto,
    server::{
        data::{pet::PetRepository, reservation::ReservationRepository, user::UserRepository},
        error::{user::UserError, Error},
    },
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_user(&self, user_id: i32) -> Result<Option<UserDto>, Error> {
        let user_repository = UserRepository::new(self.db);
        let user = user_repository.get(user_id).await?;

        Ok(user.map(UserDto::from))
    }

    /// Updates the user's display name, returning None when the user does
    /// not exist.
    pub async fn update_name(&self, user_id: i32, name: &str) -> Result<Option<UserDto>, Error> {
        let name = name.trim();
        if name.is_empty() {
            return Err(UserError::InvalidDisplayName.into());
        }

        let user_repository = UserRepository::new(self.db);
        let user = user_repository.update_name(user_id, name).await?;

        Ok(user.map(UserDto::from))
    }

    /// Deletes the user's account along with their pets and reservations
    ///
    /// Returns false when the user did not exist.
    pub async fn delete_account(&self, user_id: i32) -> Result<bool, Error> {
        let user_repository = UserRepository::new(self.db);
        let pet_repository = PetRepository::new(self.db);
        let reservation_repository = ReservationRepository::new(self.db);

        // Reservations reference pets, so they go first
        let pets = pet_repository.list_by_owner(user_id).await?;
        for pet in pets {
            reservation_repository.delete_by_pet(pet.id).await?;
        }

        pet_repository.delete_by_owner(user_id).await?;
        let delete_result = user_repository.delete(user_id).await?;

        Ok(delete_result.rows_affected > 0)
    }
}
