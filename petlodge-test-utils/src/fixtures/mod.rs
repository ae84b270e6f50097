//! Fixture helpers for inserting standard test rows.

pub mod pet;
pub mod reservation;
pub mod user;
