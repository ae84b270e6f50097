pub use super::petlodge_pet::Entity as PetlodgePet;
pub use super::petlodge_reservation::Entity as PetlodgeReservation;
pub use super::petlodge_user::Entity as PetlodgeUser;
