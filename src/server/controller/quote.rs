use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    model::{
        api::{ErrorDto, PageDto, PaginationParams},
        quote::{QuoteDto, QuoteInput, QuoteStatusInput},
    },
    server::{
        controller::{
            extract::{Json, Path, Query},
            not_found,
        },
        error::Error,
        model::app::AppState,
        service::quote::QuoteService,
    },
};

pub static QUOTE_TAG: &str = "quote";

/// Submit a quote request
///
/// The request is stored first and the agency is then notified by email. A failed
/// notification answers 500 but leaves the stored request in place.
#[utoipa::path(
    post,
    path = "/api/quotes",
    tag = QUOTE_TAG,
    request_body = QuoteInput,
    responses(
        (status = 201, description = "Quote request stored and agency notified", body = QuoteDto),
        (status = 400, description = "Missing or invalid fields", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_quote(
    State(state): State<AppState>,
    Json(input): Json<QuoteInput>,
) -> Result<impl IntoResponse, Error> {
    let quote = QuoteService::new(&state).create(input).await?;

    Ok((StatusCode::CREATED, Json(quote)))
}

/// List quote requests, newest first
#[utoipa::path(
    get,
    path = "/api/quotes",
    tag = QUOTE_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "One page of quote requests", body = PageDto<QuoteDto>),
        (status = 400, description = "Invalid page parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_quotes(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, Error> {
    let page = QuoteService::new(&state).list(params).await?;

    Ok((StatusCode::OK, Json(page)))
}

#[utoipa::path(
    get,
    path = "/api/quotes/{id}",
    tag = QUOTE_TAG,
    params(("id" = i32, Path, description = "Quote request ID")),
    responses(
        (status = 200, description = "Quote request found", body = QuoteDto),
        (status = 404, description = "Quote request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_quote(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let quote = QuoteService::new(&state)
        .get(id)
        .await?
        .ok_or_else(|| not_found("Quote request", id))?;

    Ok((StatusCode::OK, Json(quote)))
}

/// Move a quote request to another status
#[utoipa::path(
    put,
    path = "/api/quotes/{id}/status",
    tag = QUOTE_TAG,
    params(("id" = i32, Path, description = "Quote request ID")),
    request_body = QuoteStatusInput,
    responses(
        (status = 200, description = "Status updated", body = QuoteDto),
        (status = 404, description = "Quote request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_quote_status(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<QuoteStatusInput>,
) -> Result<impl IntoResponse, Error> {
    let quote = QuoteService::new(&state)
        .update_status(id, input.status)
        .await?
        .ok_or_else(|| not_found("Quote request", id))?;

    Ok((StatusCode::OK, Json(quote)))
}

#[utoipa::path(
    delete,
    path = "/api/quotes/{id}",
    tag = QUOTE_TAG,
    params(("id" = i32, Path, description = "Quote request ID")),
    responses(
        (status = 204, description = "Quote request deleted"),
        (status = 404, description = "Quote request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_quote(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    if !QuoteService::new(&state).delete(id).await? {
        return Err(not_found("Quote request", id));
    }

    Ok(StatusCode::NO_CONTENT)
}
