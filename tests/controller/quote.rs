//! Tests for the quote request endpoints.

use wayfarer::{
    model::quote::{QuoteInput, QuoteStatus, QuoteStatusInput},
    server::controller::quote::{create_quote, delete_quote, get_quote, update_quote_status},
};

use super::*;

fn quote_input() -> QuoteInput {
    QuoteInput {
        name: Some("Amina Okafor".to_string()),
        email: Some("amina@example.com".to_string()),
        ..Default::default()
    }
}

/// Expected: 201 Created once the agency has been notified
#[tokio::test]
async fn create_returns_created_when_notified() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .with_email_endpoint(200, 1)
        .build()
        .await?;

    let result = create_quote(State(test.into_app_state_with_email()), Json(quote_input())).await;

    assert_eq!(result.unwrap().into_response().status(), StatusCode::CREATED);
    test.assert_mocks();

    Ok(())
}

/// Expected: 500 Internal Server Error when no email provider is configured
#[tokio::test]
async fn create_returns_internal_error_without_mailer() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;

    let result = create_quote(State(test.into_app_state()), Json(quote_input())).await;

    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );

    Ok(())
}

/// Expected: 400 Bad Request without a name
#[tokio::test]
async fn create_returns_bad_request_without_name() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;

    let result = create_quote(
        State(test.into_app_state()),
        Json(QuoteInput {
            name: None,
            ..quote_input()
        }),
    )
    .await;

    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::BAD_REQUEST
    );

    Ok(())
}

/// Expected: 200 OK for get and status update, 204 No Content on delete, 404 afterwards
#[tokio::test]
async fn manage_stored_quote() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;
    let quote = test.content().insert_mock_quote("Amina", None).await?;
    let state = test.into_app_state();

    let found = get_quote(State(state.clone()), Path(quote.id)).await;
    let updated = update_quote_status(
        State(state.clone()),
        Path(quote.id),
        Json(QuoteStatusInput {
            status: QuoteStatus::Closed,
        }),
    )
    .await;
    let deleted = delete_quote(State(state.clone()), Path(quote.id)).await;
    let gone = get_quote(State(state), Path(quote.id)).await;

    assert_eq!(found.unwrap().into_response().status(), StatusCode::OK);
    assert_eq!(updated.unwrap().into_response().status(), StatusCode::OK);
    assert_eq!(deleted.unwrap().into_response().status(), StatusCode::NO_CONTENT);
    assert_eq!(
        gone.err().unwrap().into_response().status(),
        StatusCode::NOT_FOUND
    );

    Ok(())
}
