//! Service layer for business logic and orchestration.
//!
//! Services sit between the HTTP controllers and the repositories. They
//! enforce validation rules, ownership checks, and booking constraints, and
//! coordinate multi-step operations such as account deletion.

pub mod auth;
pub mod pet;
pub mod reservation;
pub mod user;
