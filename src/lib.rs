//! Wayfarer: JSON backend for a travel agency site.
//!
//! The crate is split into [`model`], the request and response shapes shared with the
//! frontend, and [`server`], the axum application that serves them.

pub mod model;
pub mod server;
