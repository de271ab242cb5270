use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum ContentError {
    /// A required field is missing or a field has an invalid value.
    #[error("{0}")]
    Validation(String),
    /// Lookup by ID or slug found nothing.
    #[error("{0}")]
    NotFound(String),
    /// Every candidate slug up to the attempt cap is already taken.
    #[error("Could not allocate unique identifier for {base:?} after {attempts} attempts")]
    SlugExhausted { base: String, attempts: u32 },
}

impl IntoResponse for ContentError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::SlugExhausted { .. } => StatusCode::CONFLICT,
        };

        tracing::debug!("Content error: {}", self);

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
