//! Server application core modules.
//!
//! HTTP routing and controllers, the service and data layers, seasonal pricing, and the
//! configuration, error and startup plumbing around them.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod pricing;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
