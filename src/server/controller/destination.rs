use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    model::{
        api::{ErrorDto, PageDto, PaginationParams},
        destination::{DestinationDto, DestinationInput},
    },
    server::{
        controller::{
            extract::{Json, Path, Query},
            not_found,
        },
        error::Error,
        model::app::AppState,
        service::destination::DestinationService,
    },
};

pub static DESTINATION_TAG: &str = "destination";

/// List destinations by name
#[utoipa::path(
    get,
    path = "/api/destinations",
    tag = DESTINATION_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "One page of destinations", body = PageDto<DestinationDto>),
        (status = 400, description = "Invalid page parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_destinations(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, Error> {
    let page = DestinationService::new(&state).list(params).await?;

    Ok((StatusCode::OK, Json(page)))
}

/// Create a destination
#[utoipa::path(
    post,
    path = "/api/destinations",
    tag = DESTINATION_TAG,
    request_body = DestinationInput,
    responses(
        (status = 201, description = "Destination created", body = DestinationDto),
        (status = 400, description = "Missing or invalid fields", body = ErrorDto),
        (status = 409, description = "No unique slug could be allocated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_destination(
    State(state): State<AppState>,
    Json(input): Json<DestinationInput>,
) -> Result<impl IntoResponse, Error> {
    let destination = DestinationService::new(&state).create(input).await?;

    Ok((StatusCode::CREATED, Json(destination)))
}

/// Get a destination by ID
#[utoipa::path(
    get,
    path = "/api/destinations/{id}",
    tag = DESTINATION_TAG,
    params(("id" = i32, Path, description = "Destination ID")),
    responses(
        (status = 200, description = "Destination found", body = DestinationDto),
        (status = 404, description = "Destination not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_destination(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let destination = DestinationService::new(&state)
        .get(id)
        .await?
        .ok_or_else(|| not_found("Destination", id))?;

    Ok((StatusCode::OK, Json(destination)))
}

/// Get a destination by slug
#[utoipa::path(
    get,
    path = "/api/destinations/slug/{slug}",
    tag = DESTINATION_TAG,
    params(("slug" = String, Path, description = "Destination slug")),
    responses(
        (status = 200, description = "Destination found", body = DestinationDto),
        (status = 404, description = "Destination not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_destination_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let destination = DestinationService::new(&state)
        .get_by_slug(&slug)
        .await?
        .ok_or_else(|| not_found("Destination", &slug))?;

    Ok((StatusCode::OK, Json(destination)))
}

/// Replace the editable fields of a destination
#[utoipa::path(
    put,
    path = "/api/destinations/{id}",
    tag = DESTINATION_TAG,
    params(("id" = i32, Path, description = "Destination ID")),
    request_body = DestinationInput,
    responses(
        (status = 200, description = "Destination updated", body = DestinationDto),
        (status = 400, description = "Missing or invalid fields", body = ErrorDto),
        (status = 404, description = "Destination not found", body = ErrorDto),
        (status = 409, description = "No unique slug could be allocated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_destination(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<DestinationInput>,
) -> Result<impl IntoResponse, Error> {
    let destination = DestinationService::new(&state)
        .update(id, input)
        .await?
        .ok_or_else(|| not_found("Destination", id))?;

    Ok((StatusCode::OK, Json(destination)))
}

/// Delete a destination
#[utoipa::path(
    delete,
    path = "/api/destinations/{id}",
    tag = DESTINATION_TAG,
    params(("id" = i32, Path, description = "Destination ID")),
    responses(
        (status = 204, description = "Destination deleted"),
        (status = 404, description = "Destination not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_destination(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    if !DestinationService::new(&state).delete(id).await? {
        return Err(not_found("Destination", id));
    }

    Ok(StatusCode::NO_CONTENT)
}
