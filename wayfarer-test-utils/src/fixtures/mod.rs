//! Fixtures for database rows and mock HTTP endpoints.
//!
//! - `content` - destinations, tours, accommodations, blog posts, quotes and subscribers
//! - `email` - the email provider endpoint used for quote notifications

pub mod content;
pub mod email;
