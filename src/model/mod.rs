//! API data transfer objects.
//!
//! These types define the JSON request and response bodies of the HTTP API.
//! They are deliberately separate from the database entities so that schema
//! changes do not leak into the wire format.

pub mod api;
pub mod pet;
pub mod reservation;
pub mod user;
