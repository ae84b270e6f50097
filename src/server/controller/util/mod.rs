//! Shared helpers for controller endpoints.

pub mod get_user;
