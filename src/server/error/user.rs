use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum UserError {
    #[error("Display name must not be empty")]
    InvalidDisplayName,
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidDisplayName => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
        }
    }
}
