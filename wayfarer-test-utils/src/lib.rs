//! Shared test setup for the wayfarer crates.
//!
//! Tests describe their environment with [`TestBuilder`] (tables, fixture rows, mock HTTP
//! endpoints) and receive a [`TestContext`] holding an in-memory SQLite database and a
//! `mockito` server standing in for the email provider.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{fixtures::content::factory, TestBuilder, TestContext, TestError};
}
