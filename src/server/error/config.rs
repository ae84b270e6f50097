use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// Startup configuration failures
///
/// Raised while reading the environment: a missing `SESSION_SECRET`, a
/// too-short secret, or an unparseable `PORT`/`OPEN_BROWSER` value. These
/// normally abort the process in `main` before any request is served.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Environment variable {0} is not set")]
    MissingEnvVar(String),
    #[error("Environment variable {var} has an invalid value: {reason}")]
    InvalidEnvValue { var: String, reason: String },
}

impl IntoResponse for ConfigError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
