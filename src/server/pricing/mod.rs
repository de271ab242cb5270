//! Seasonal pricing.
//!
//! [`season`] maps a calendar date onto a [`Season`](season::Season) through a
//! [`SeasonCalendar`](season::SeasonCalendar) table, and [`price`] turns a stored
//! [`PricingRecord`](crate::model::pricing::PricingRecord) into the "from" price shown for
//! that season. Both are display helpers and are never used for billing.

pub mod price;
pub mod season;
