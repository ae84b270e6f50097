//! Session data models and utilities.
//!
//! Type-safe wrappers for session data storage and retrieval using
//! tower-sessions. Each submodule defines one piece of session state with
//! methods for inserting and retrieving it.

pub mod user;
