//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with extracted arguments; these tests check the status
//! codes each outcome maps to.

mod accommodation;
mod blog;
mod destination;
mod quote;
mod subscriber;
mod tour;

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use wayfarer::{
    model::api::PaginationParams,
    server::controller::extract::{Json, Path, Query},
};
use wayfarer_test_utils::prelude::*;

use crate::util::TestContextExt;
