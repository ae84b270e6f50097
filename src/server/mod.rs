//! Server application core modules.
//!
//! This module contains all server-side functionality for Petlodge: HTTP
//! routing, session-based authentication, the pet and reservation services,
//! and the sea-orm data access layer, along with startup helpers for
//! wiring the application together.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
