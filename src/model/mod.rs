//! API data transfer objects.
//!
//! Request and response bodies for every JSON endpoint. These types carry no database
//! handles and are what the frontend renders from.

pub mod accommodation;
pub mod api;
pub mod blog;
pub mod destination;
pub mod pricing;
pub mod quote;
pub mod subscriber;
pub mod tour;
