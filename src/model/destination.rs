use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct DestinationDto {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub country: String,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub hero_image: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Body for creating or replacing a destination
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct DestinationInput {
    pub name: Option<String>,
    pub country: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub hero_image: Option<String>,
}
