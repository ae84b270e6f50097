//! Server-side models and type definitions.
//!
//! Application state shared across handlers and type-safe wrappers around
//! session data.

pub mod app;
pub mod session;
