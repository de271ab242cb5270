use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    model::{
        api::{ErrorDto, PageDto, PaginationParams},
        subscriber::{SubscribeInput, SubscriberDto},
    },
    server::{
        controller::{
            extract::{Json, Path, Query},
            not_found,
        },
        error::Error,
        model::app::AppState,
        service::subscriber::{SubscriberService, Subscription},
    },
};

pub static SUBSCRIBER_TAG: &str = "subscriber";

/// Subscribe an email address to the newsletter
///
/// Addresses are stored lowercase. Subscribing an address that is already on the list
/// returns the existing record.
#[utoipa::path(
    post,
    path = "/api/subscribers",
    tag = SUBSCRIBER_TAG,
    request_body = SubscribeInput,
    responses(
        (status = 201, description = "Address subscribed", body = SubscriberDto),
        (status = 200, description = "Address was already subscribed", body = SubscriberDto),
        (status = 400, description = "Missing or invalid email", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn subscribe(
    State(state): State<AppState>,
    Json(input): Json<SubscribeInput>,
) -> Result<impl IntoResponse, Error> {
    let response = match SubscriberService::new(&state).subscribe(input).await? {
        Subscription::Created(subscriber) => (StatusCode::CREATED, Json(subscriber)),
        Subscription::Existing(subscriber) => (StatusCode::OK, Json(subscriber)),
    };

    Ok(response)
}

#[utoipa::path(
    get,
    path = "/api/subscribers",
    tag = SUBSCRIBER_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "One page of subscribers", body = PageDto<SubscriberDto>),
        (status = 400, description = "Invalid page parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_subscribers(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, Error> {
    let page = SubscriberService::new(&state).list(params).await?;

    Ok((StatusCode::OK, Json(page)))
}

/// Remove a subscriber
#[utoipa::path(
    delete,
    path = "/api/subscribers/{id}",
    tag = SUBSCRIBER_TAG,
    params(("id" = i32, Path, description = "Subscriber ID")),
    responses(
        (status = 204, description = "Subscriber removed"),
        (status = 404, description = "Subscriber not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_subscriber(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    if !SubscriberService::new(&state).delete(id).await? {
        return Err(not_found("Subscriber", id));
    }

    Ok(StatusCode::NO_CONTENT)
}
