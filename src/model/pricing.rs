//! Seasonal pricing table as stored on tours and accommodations.
//!
//! The JSON shape is the one the admin editor writes:
//!
//! ```json
//! { "manual": { "highSeason": { "costs": [ { "cost": 1200, "label": "per person" } ] } } }
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PricingRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manual: Option<ManualPricing>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ManualPricing {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high_season: Option<SeasonCosts>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low_season: Option<SeasonCosts>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mid_season: Option<SeasonCosts>,
}

/// Ordered cost table for one season; the first entry is the "from" price.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SeasonCosts {
    #[serde(default)]
    pub costs: Vec<CostEntry>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CostEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<CostValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// A cost as entered in the editor, either a JSON number or a numeric string.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum CostValue {
    Number(f64),
    Text(String),
}
