//! Tests for the newsletter subscriber endpoints.

use wayfarer::{
    model::subscriber::SubscribeInput,
    server::controller::subscriber::{delete_subscriber, list_subscribers, subscribe},
};

use super::*;

fn subscribe_input() -> SubscribeInput {
    SubscribeInput {
        email: Some("traveller@example.com".to_string()),
    }
}

/// Expected: 201 Created for a new address, 200 OK when already subscribed
#[tokio::test]
async fn subscribe_is_idempotent() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;
    let state = test.into_app_state();

    let first = subscribe(State(state.clone()), Json(subscribe_input())).await;
    let second = subscribe(State(state), Json(subscribe_input())).await;

    assert_eq!(first.unwrap().into_response().status(), StatusCode::CREATED);
    assert_eq!(second.unwrap().into_response().status(), StatusCode::OK);

    Ok(())
}

/// Expected: 400 Bad Request without an email
#[tokio::test]
async fn subscribe_returns_bad_request_without_email() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;

    let result = subscribe(
        State(test.into_app_state()),
        Json(SubscribeInput { email: None }),
    )
    .await;

    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::BAD_REQUEST
    );

    Ok(())
}

/// Expected: 200 OK listing, 204 No Content on delete, 404 Not Found for an unknown ID
#[tokio::test]
async fn list_and_delete() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .with_mock_subscriber("traveller@example.com")
        .build()
        .await?;
    let state = test.into_app_state();

    let listed = list_subscribers(State(state.clone()), Query(PaginationParams::default())).await;
    let deleted = delete_subscriber(State(state.clone()), Path(1)).await;
    let missing = delete_subscriber(State(state), Path(1)).await;

    assert_eq!(listed.unwrap().into_response().status(), StatusCode::OK);
    assert_eq!(deleted.unwrap().into_response().status(), StatusCode::NO_CONTENT);
    assert_eq!(
        missing.err().unwrap().into_response().status(),
        StatusCode::NOT_FOUND
    );

    Ok(())
}
