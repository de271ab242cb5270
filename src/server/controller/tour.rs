use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    model::{
        api::{ErrorDto, PageDto, PaginationParams},
        tour::{TourDto, TourFilter, TourInput},
    },
    server::{
        controller::{
            extract::{Json, Path, Query},
            not_found,
        },
        error::Error,
        model::app::AppState,
        service::tour::TourService,
    },
};

pub static TOUR_TAG: &str = "tour";

/// List tours, newest first
#[utoipa::path(
    get,
    path = "/api/tours",
    tag = TOUR_TAG,
    params(TourFilter, PaginationParams),
    responses(
        (status = 200, description = "One page of tours", body = PageDto<TourDto>),
        (status = 400, description = "Invalid page parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_tours(
    State(state): State<AppState>,
    Query(filter): Query<TourFilter>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, Error> {
    let page = TourService::new(&state).list(filter, params).await?;

    Ok((StatusCode::OK, Json(page)))
}

/// Create a tour
#[utoipa::path(
    post,
    path = "/api/tours",
    tag = TOUR_TAG,
    request_body = TourInput,
    responses(
        (status = 201, description = "Tour created", body = TourDto),
        (status = 400, description = "Missing or invalid fields", body = ErrorDto),
        (status = 409, description = "No unique slug could be allocated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_tour(
    State(state): State<AppState>,
    Json(input): Json<TourInput>,
) -> Result<impl IntoResponse, Error> {
    let tour = TourService::new(&state).create(input).await?;

    Ok((StatusCode::CREATED, Json(tour)))
}

/// Get a tour by ID
#[utoipa::path(
    get,
    path = "/api/tours/{id}",
    tag = TOUR_TAG,
    params(("id" = i32, Path, description = "Tour ID")),
    responses(
        (status = 200, description = "Tour found", body = TourDto),
        (status = 404, description = "Tour not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tour(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let tour = TourService::new(&state)
        .get(id)
        .await?
        .ok_or_else(|| not_found("Tour", id))?;

    Ok((StatusCode::OK, Json(tour)))
}

/// Get a tour by slug
#[utoipa::path(
    get,
    path = "/api/tours/slug/{slug}",
    tag = TOUR_TAG,
    params(("slug" = String, Path, description = "Tour slug")),
    responses(
        (status = 200, description = "Tour found", body = TourDto),
        (status = 404, description = "Tour not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tour_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let tour = TourService::new(&state)
        .get_by_slug(&slug)
        .await?
        .ok_or_else(|| not_found("Tour", &slug))?;

    Ok((StatusCode::OK, Json(tour)))
}

/// Replace the editable fields of a tour
#[utoipa::path(
    put,
    path = "/api/tours/{id}",
    tag = TOUR_TAG,
    params(("id" = i32, Path, description = "Tour ID")),
    request_body = TourInput,
    responses(
        (status = 200, description = "Tour updated", body = TourDto),
        (status = 400, description = "Missing or invalid fields", body = ErrorDto),
        (status = 404, description = "Tour not found", body = ErrorDto),
        (status = 409, description = "No unique slug could be allocated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_tour(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<TourInput>,
) -> Result<impl IntoResponse, Error> {
    let tour = TourService::new(&state)
        .update(id, input)
        .await?
        .ok_or_else(|| not_found("Tour", id))?;

    Ok((StatusCode::OK, Json(tour)))
}

/// Delete a tour
#[utoipa::path(
    delete,
    path = "/api/tours/{id}",
    tag = TOUR_TAG,
    params(("id" = i32, Path, description = "Tour ID")),
    responses(
        (status = 204, description = "Tour deleted"),
        (status = 404, description = "Tour not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_tour(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    if !TourService::new(&state).delete(id).await? {
        return Err(not_found("Tour", id));
    }

    Ok(StatusCode::NO_CONTENT)
}
