use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::pricing::PricingRecord;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct TourDto {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub destination_id: Option<i32>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub duration_days: i32,
    pub pricing: Option<PricingRecord>,
    /// "From" price for the current season, or `Price Unavailable`
    pub display_price: String,
    pub featured: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Body for creating or replacing a tour
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct TourInput {
    pub title: Option<String>,
    pub destination_id: Option<i32>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub duration_days: Option<i32>,
    /// Raw pricing table, validated against [`PricingRecord`]
    #[schema(value_type = Option<PricingRecord>)]
    pub pricing: Option<serde_json::Value>,
    #[serde(default)]
    pub featured: bool,
}

/// Filters for the tour listing
#[derive(Clone, Copy, Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TourFilter {
    /// Only tours in this destination
    pub destination_id: Option<i32>,
    /// Only featured (or only non-featured) tours
    pub featured: Option<bool>,
}
