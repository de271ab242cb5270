use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// Failure talking to a third-party provider (email delivery).
#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error(transparent)]
    Request(#[from] reqwest::Error),
    #[error("{service} responded with status {status}")]
    Status { service: String, status: u16 },
}

impl IntoResponse for UpstreamError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
