use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    model::{
        accommodation::{AccommodationDto, AccommodationFilter, AccommodationInput},
        api::{ErrorDto, PageDto, PaginationParams},
    },
    server::{
        controller::{
            extract::{Json, Path, Query},
            not_found,
        },
        error::Error,
        model::app::AppState,
        service::accommodation::AccommodationService,
    },
};

pub static ACCOMMODATION_TAG: &str = "accommodation";

/// List accommodations, newest first
#[utoipa::path(
    get,
    path = "/api/accommodations",
    tag = ACCOMMODATION_TAG,
    params(AccommodationFilter, PaginationParams),
    responses(
        (status = 200, description = "One page of accommodations", body = PageDto<AccommodationDto>),
        (status = 400, description = "Invalid page parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_accommodations(
    State(state): State<AppState>,
    Query(filter): Query<AccommodationFilter>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, Error> {
    let page = AccommodationService::new(&state).list(filter, params).await?;

    Ok((StatusCode::OK, Json(page)))
}

/// Create an accommodation
#[utoipa::path(
    post,
    path = "/api/accommodations",
    tag = ACCOMMODATION_TAG,
    request_body = AccommodationInput,
    responses(
        (status = 201, description = "Accommodation created", body = AccommodationDto),
        (status = 400, description = "Missing or invalid fields", body = ErrorDto),
        (status = 409, description = "No unique slug could be allocated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_accommodation(
    State(state): State<AppState>,
    Json(input): Json<AccommodationInput>,
) -> Result<impl IntoResponse, Error> {
    let accommodation = AccommodationService::new(&state).create(input).await?;

    Ok((StatusCode::CREATED, Json(accommodation)))
}

/// Get an accommodation by ID
#[utoipa::path(
    get,
    path = "/api/accommodations/{id}",
    tag = ACCOMMODATION_TAG,
    params(("id" = i32, Path, description = "Accommodation ID")),
    responses(
        (status = 200, description = "Accommodation found", body = AccommodationDto),
        (status = 404, description = "Accommodation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_accommodation(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let accommodation = AccommodationService::new(&state)
        .get(id)
        .await?
        .ok_or_else(|| not_found("Accommodation", id))?;

    Ok((StatusCode::OK, Json(accommodation)))
}

/// Get an accommodation by slug
#[utoipa::path(
    get,
    path = "/api/accommodations/slug/{slug}",
    tag = ACCOMMODATION_TAG,
    params(("slug" = String, Path, description = "Accommodation slug")),
    responses(
        (status = 200, description = "Accommodation found", body = AccommodationDto),
        (status = 404, description = "Accommodation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_accommodation_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let accommodation = AccommodationService::new(&state)
        .get_by_slug(&slug)
        .await?
        .ok_or_else(|| not_found("Accommodation", &slug))?;

    Ok((StatusCode::OK, Json(accommodation)))
}

/// Replace the editable fields of an accommodation
#[utoipa::path(
    put,
    path = "/api/accommodations/{id}",
    tag = ACCOMMODATION_TAG,
    params(("id" = i32, Path, description = "Accommodation ID")),
    request_body = AccommodationInput,
    responses(
        (status = 200, description = "Accommodation updated", body = AccommodationDto),
        (status = 400, description = "Missing or invalid fields", body = ErrorDto),
        (status = 404, description = "Accommodation not found", body = ErrorDto),
        (status = 409, description = "No unique slug could be allocated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_accommodation(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<AccommodationInput>,
) -> Result<impl IntoResponse, Error> {
    let accommodation = AccommodationService::new(&state)
        .update(id, input)
        .await?
        .ok_or_else(|| not_found("Accommodation", id))?;

    Ok((StatusCode::OK, Json(accommodation)))
}

/// Delete an accommodation
#[utoipa::path(
    delete,
    path = "/api/accommodations/{id}",
    tag = ACCOMMODATION_TAG,
    params(("id" = i32, Path, description = "Accommodation ID")),
    responses(
        (status = 204, description = "Accommodation deleted"),
        (status = 404, description = "Accommodation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_accommodation(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    if !AccommodationService::new(&state).delete(id).await? {
        return Err(not_found("Accommodation", id));
    }

    Ok(StatusCode::NO_CONTENT)
}
