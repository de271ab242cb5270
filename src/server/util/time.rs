//! Wall-clock helpers.

use chrono::{Local, NaiveDate, NaiveDateTime, Utc};

/// Today's date on the server's local wall clock.
///
/// Season classification uses this date; no timezone normalisation is applied.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Current UTC timestamp as stored in `created_at` / `updated_at` columns.
pub fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}
