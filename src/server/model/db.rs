//! Database model type aliases.
//!
//! Short names for the generated `entity` models used across services and caches.

/// A place tours and accommodations are grouped under.
pub type DestinationModel = entity::destination::Model;

/// A bookable tour, with its seasonal pricing stored as JSON.
pub type TourModel = entity::tour::Model;

pub type AccommodationModel = entity::accommodation::Model;

pub type BlogPostModel = entity::blog_post::Model;

/// A quote request submitted from the public site.
///
/// `status` holds the lowercase name of a
/// [`QuoteStatus`](crate::model::quote::QuoteStatus).
pub type QuoteModel = entity::quote::Model;

pub type SubscriberModel = entity::subscriber::Model;
