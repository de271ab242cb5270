//! Factory functions for fixture values.
//!
//! Pure helpers that need no database: pricing documents in the stored JSON shape and
//! in-memory models for unit tests.

use chrono::Utc;
use serde_json::{json, Value};

/// Slug used by fixture rows.
///
/// Lowercases and hyphenates on whitespace only, so pass plain titles.
pub fn fixture_slug(title: &str) -> String {
    title
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// Pricing document listing the same cost for every season.
///
/// Handy when the displayed price must not depend on the date the test runs.
pub fn uniform_pricing(cost: i64) -> Value {
    seasonal_pricing(cost, cost, cost)
}

/// Pricing document with one cost per season.
pub fn seasonal_pricing(high: i64, mid: i64, low: i64) -> Value {
    json!({
        "manual": {
            "highSeason": { "costs": [{ "cost": high, "label": "per person" }] },
            "midSeason": { "costs": [{ "cost": mid, "label": "per person" }] },
            "lowSeason": { "costs": [{ "cost": low, "label": "per person" }] }
        }
    })
}

/// Create an in-memory tour model with standard test values.
///
/// # Arguments
/// - `id` - Primary key of the model
/// - `title` - Title of the tour, the slug is derived from it with [`fixture_slug`]
pub fn mock_tour_model(id: i32, title: &str) -> entity::tour::Model {
    let now = Utc::now().naive_utc();
    entity::tour::Model {
        id,
        title: title.to_string(),
        slug: fixture_slug(title),
        destination_id: None,
        summary: Some("A test tour".to_string()),
        description: None,
        duration_days: 7,
        pricing: Some(uniform_pricing(1200)),
        featured: false,
        created_at: now,
        updated_at: now,
    }
}
