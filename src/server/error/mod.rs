//! Error types for the Wayfarer server application.
//!
//! The taxonomy is flat: validation failures (400), lookup misses (404), slug
//! allocation exhaustion (409), and everything else (configuration, upstream providers,
//! database) surfaced as a generic 500. All errors implement `IntoResponse` and render as
//! an [`ErrorDto`] JSON body.

pub mod config;
pub mod content;
pub mod upstream;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, content::ContentError, upstream::UpstreamError},
};

/// Main error type for the Wayfarer server application.
///
/// Aggregates the domain-specific error types and external library errors into a single
/// type so handlers and services can propagate everything with `?`.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Request validation, lookup miss or slug allocation failure.
    #[error(transparent)]
    ContentError(#[from] ContentError),
    /// A third-party provider call failed.
    #[error(transparent)]
    UpstreamError(#[from] UpstreamError),
    /// Stored data could not be interpreted.
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a bug in Wayfarer's code.
    #[error("Internal error: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] DbErr),
}

impl Error {
    /// Whether this error is a unique constraint violation reported by the database.
    ///
    /// Slug columns carry unique indexes, so this is how a slug taken between the
    /// availability check and the write shows up.
    pub fn is_unique_violation(&self) -> bool {
        match self {
            Self::DbErr(err) => is_unique_violation(err),
            _ => false,
        }
    }
}

/// Whether a database error is a unique constraint violation.
pub fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Missing or invalid request fields
/// - 404 Not Found - Lookup by ID or slug found nothing
/// - 409 Conflict - No unique slug could be allocated
/// - 500 Internal Server Error - Everything else (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::ContentError(err) => err.into_response(),
            Self::UpstreamError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
