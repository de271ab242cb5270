//! Server-side models: application state and database model aliases.

pub mod app;
pub mod db;
