//! Utility functions and helpers for server operations.
//!
//! Pure helpers shared by services and controllers: slug normalisation, the per-process
//! response cache, request field validation, and wall-clock access.

pub mod cache;
pub mod slug;
pub mod time;
pub mod validate;
