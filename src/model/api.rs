use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// Page selection for list endpoints.
///
/// Pages are 1-based. Both fields are optional and fall back to the first page of
/// [`PaginationParams::DEFAULT_PER_PAGE`] items.
#[derive(Clone, Copy, Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    /// 1-based page number
    pub page: Option<u64>,
    /// Number of items per page, between 1 and 100
    pub per_page: Option<u64>,
}

impl PaginationParams {
    pub const DEFAULT_PER_PAGE: u64 = 12;
    pub const MAX_PER_PAGE: u64 = 100;
}

/// One page of a paginated listing
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct PageDto<T> {
    pub items: Vec<T>,
    /// 1-based page number of `items`
    pub page: u64,
    pub per_page: u64,
    pub total_items: u64,
    pub total_pages: u64,
}
