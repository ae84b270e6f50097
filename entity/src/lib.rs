pub mod prelude;

pub mod petlodge_pet;
pub mod petlodge_reservation;
pub mod petlodge_user;
