//! Tests for the content services.
//!
//! These run each service against an in-memory database and check slug allocation, cache
//! upkeep, validation and the quote notification flow.

mod blog;
mod destination;
mod quote;
mod subscriber;
mod tour;

use wayfarer::{
    model::api::PaginationParams,
    server::error::{content::ContentError, Error},
};
use wayfarer_test_utils::prelude::*;

use crate::util::TestContextExt;
