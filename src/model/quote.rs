use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Lifecycle of a quote request as handled by the agency
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStatus {
    New,
    Contacted,
    Closed,
}

impl QuoteStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Contacted => "contacted",
            Self::Closed => "closed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "new" => Some(Self::New),
            "contacted" => Some(Self::Contacted),
            "closed" => Some(Self::Closed),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct QuoteDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub tour_id: Option<i32>,
    pub travel_date: Option<NaiveDate>,
    pub travelers: i32,
    pub message: Option<String>,
    pub status: QuoteStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Quote request submitted from the public site
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct QuoteInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub tour_id: Option<i32>,
    pub travel_date: Option<NaiveDate>,
    pub travelers: Option<i32>,
    pub message: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct QuoteStatusInput {
    pub status: QuoteStatus,
}
