use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::pricing::PricingRecord;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct AccommodationDto {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub destination_id: Option<i32>,
    pub description: Option<String>,
    pub rating: Option<i16>,
    pub pricing: Option<PricingRecord>,
    pub display_price: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Body for creating or replacing an accommodation
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct AccommodationInput {
    pub name: Option<String>,
    pub destination_id: Option<i32>,
    pub description: Option<String>,
    /// Star rating from 1 to 5
    pub rating: Option<i16>,
    #[schema(value_type = Option<PricingRecord>)]
    pub pricing: Option<serde_json::Value>,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AccommodationFilter {
    pub destination_id: Option<i32>,
}
