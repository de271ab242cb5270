use wayfarer::{
    model::quote::{QuoteInput, QuoteStatus},
    server::{
        error::{config::ConfigError, upstream::UpstreamError},
        service::quote::QuoteService,
    },
};

use super::*;

fn quote_input(tour_id: Option<i32>) -> QuoteInput {
    QuoteInput {
        name: Some("Amina Okafor".to_string()),
        email: Some("amina@example.com".to_string()),
        tour_id,
        travelers: Some(2),
        message: Some("Honeymoon in December".to_string()),
        ..Default::default()
    }
}

async fn stored_quotes(state: &wayfarer::server::model::app::AppState) -> u64 {
    QuoteService::new(state)
        .list(PaginationParams::default())
        .await
        .unwrap()
        .total_items
}

/// Tests the full quote flow with a working email provider.
///
/// Expected: Ok with a new quote, one email sent
#[tokio::test]
async fn create_stores_quote_and_notifies_agency() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .with_mock_tour("Gorilla Trek", None)
        .with_email_endpoint(200, 1)
        .build()
        .await?;
    let state = test.into_app_state_with_email();

    let quote = QuoteService::new(&state)
        .create(quote_input(Some(1)))
        .await
        .unwrap();

    assert_eq!(quote.status, QuoteStatus::New);
    assert_eq!(quote.travelers, 2);
    assert_eq!(quote.tour_id, Some(1));
    test.assert_mocks();

    Ok(())
}

/// Tests that a quote is kept when no email provider is configured.
///
/// Expected: Err with ConfigError, quote still stored
#[tokio::test]
async fn create_without_mailer_keeps_quote() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;
    let state = test.into_app_state();

    let result = QuoteService::new(&state).create(quote_input(None)).await;

    assert!(matches!(
        result,
        Err(Error::ConfigError(ConfigError::MissingEnvVar(_)))
    ));
    assert_eq!(stored_quotes(&state).await, 1);

    Ok(())
}

/// Tests that a failing email provider does not lose the quote.
///
/// Expected: Err with UpstreamError, quote still stored
#[tokio::test]
async fn create_with_failing_provider_keeps_quote() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .with_email_endpoint(500, 1)
        .build()
        .await?;
    let state = test.into_app_state_with_email();

    let result = QuoteService::new(&state).create(quote_input(None)).await;

    assert!(matches!(
        result,
        Err(Error::UpstreamError(UpstreamError::Status { status: 500, .. }))
    ));
    assert_eq!(stored_quotes(&state).await, 1);
    test.assert_mocks();

    Ok(())
}

/// Tests that invalid quotes are neither stored nor sent.
///
/// Expected: Err with ContentError::Validation, nothing stored, no email
#[tokio::test]
async fn create_rejects_invalid_quote_before_storing() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .with_email_endpoint(200, 0)
        .build()
        .await?;
    let state = test.into_app_state_with_email();
    let service = QuoteService::new(&state);

    let unknown_tour = service.create(quote_input(Some(7))).await;
    let bad_email = service
        .create(QuoteInput {
            email: Some("not-an-email".to_string()),
            ..quote_input(None)
        })
        .await;

    for result in [unknown_tour, bad_email] {
        assert!(matches!(
            result,
            Err(Error::ContentError(ContentError::Validation(_)))
        ));
    }
    assert_eq!(stored_quotes(&state).await, 0);
    test.assert_mocks();

    Ok(())
}

/// Tests moving a quote through its lifecycle.
///
/// Expected: Ok with the new status, Ok(None) for a missing quote
#[tokio::test]
async fn update_status_changes_status() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;
    let quote = test.content().insert_mock_quote("Amina", None).await?;
    let state = test.into_app_state();
    let service = QuoteService::new(&state);

    let updated = service
        .update_status(quote.id, QuoteStatus::Contacted)
        .await
        .unwrap()
        .unwrap();
    let missing = service
        .update_status(quote.id + 1, QuoteStatus::Closed)
        .await
        .unwrap();

    assert_eq!(updated.status, QuoteStatus::Contacted);
    assert!(missing.is_none());

    Ok(())
}
