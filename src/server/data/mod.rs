//! Data access layer repositories.
//!
//! Repositories provide an abstraction layer over database operations,
//! organized by domain: users, pets, and reservations.

pub mod pet;
pub mod reservation;
pub mod user;
