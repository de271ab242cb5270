//! HTTP controller endpoints for the Wayfarer web API.
//!
//! Axum handlers for the content resources, quote requests and newsletter subscribers.
//! Handlers extract the request, call the matching service and map its result onto a status
//! code. Every handler carries a utoipa annotation that feeds the OpenAPI document.

pub mod accommodation;
pub mod blog;
pub mod destination;
pub mod extract;
pub mod quote;
pub mod subscriber;
pub mod tour;

use std::fmt::Display;

use crate::server::error::{content::ContentError, Error};

/// 404 error for a lookup that found nothing.
fn not_found(resource: &str, key: impl Display) -> Error {
    ContentError::NotFound(format!("{resource} {key} not found")).into()
}
