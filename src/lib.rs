//! Petlodge - a pet boarding reservation platform.
//!
//! The crate is split into shared API data models ([`model`]) and the
//! server application itself ([`server`]): configuration, routing,
//! controllers, services, and the sea-orm data access layer.

pub mod model;
pub mod server;
