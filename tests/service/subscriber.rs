use wayfarer::{
    model::subscriber::SubscribeInput,
    server::service::subscriber::{SubscriberService, Subscription},
};

use super::*;

fn subscribe_input(email: &str) -> SubscribeInput {
    SubscribeInput {
        email: Some(email.to_string()),
    }
}

/// Tests that subscribing is idempotent and case-insensitive.
///
/// Expected: Created first, then Existing with the same ID
#[tokio::test]
async fn subscribe_twice_returns_existing() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;
    let state = test.into_app_state();
    let service = SubscriberService::new(&state);

    let first = service
        .subscribe(subscribe_input("Traveller@Example.com"))
        .await
        .unwrap();
    let second = service
        .subscribe(subscribe_input(" traveller@example.com "))
        .await
        .unwrap();

    let created = match first {
        Subscription::Created(subscriber) => subscriber,
        other => panic!("expected a new subscriber, got {:?}", other),
    };
    let existing = match second {
        Subscription::Existing(subscriber) => subscriber,
        other => panic!("expected the existing subscriber, got {:?}", other),
    };
    assert_eq!(created.email, "traveller@example.com");
    assert_eq!(created.id, existing.id);

    Ok(())
}

/// Tests that malformed addresses are rejected.
///
/// Expected: Err with ContentError::Validation
#[tokio::test]
async fn subscribe_rejects_invalid_email() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;
    let state = test.into_app_state();

    let result = SubscriberService::new(&state)
        .subscribe(subscribe_input("nobody"))
        .await;

    assert!(matches!(
        result,
        Err(Error::ContentError(ContentError::Validation(_)))
    ));

    Ok(())
}

/// Tests unsubscribing by ID.
///
/// Expected: true, then false once the subscriber is gone
#[tokio::test]
async fn delete_removes_subscriber() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .with_mock_subscriber("traveller@example.com")
        .build()
        .await?;
    let state = test.into_app_state();
    let service = SubscriberService::new(&state);

    assert!(service.delete(1).await.unwrap());
    assert!(!service.delete(1).await.unwrap());
    assert_eq!(
        service
            .list(PaginationParams::default())
            .await
            .unwrap()
            .total_items,
        0
    );

    Ok(())
}
