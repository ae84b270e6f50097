//! HTTP controller endpoints for the PetLodge web API.
//!
//! This module contains Axum handlers for authentication, profile management,
//! pets, reservations, and the public pages. Controllers handle HTTP requests,
//! validate inputs, interact with services, and return appropriate HTTP
//! responses. They integrate with tower-sessions for session management and
//! use utoipa for OpenAPI documentation.

pub mod auth;
pub mod pet;
pub mod public;
pub mod reservation;
pub mod user;
pub mod util;
