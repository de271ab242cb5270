//! Tests for SubscriberRepository.

use super::*;
use crate::server::{data::subscriber::SubscriberRepository, error::is_unique_violation};

/// Tests subscribing the same address twice hits the unique index.
///
/// Expected: Err classified as a unique violation
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .with_mock_subscriber("reader@example.com")
        .build()
        .await?;

    let repo = SubscriberRepository::new(&test.db);
    let result = repo.create("reader@example.com".to_string()).await;

    assert!(matches!(result, Err(ref err) if is_unique_violation(err)));

    Ok(())
}

/// Tests looking a subscriber up by email.
///
/// Expected: Some for a stored address, None otherwise
#[tokio::test]
async fn finds_by_email() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .with_mock_subscriber("reader@example.com")
        .build()
        .await?;

    let repo = SubscriberRepository::new(&test.db);

    assert!(repo.get_by_email("reader@example.com").await?.is_some());
    assert!(repo.get_by_email("other@example.com").await?.is_none());

    Ok(())
}

/// Tests deleting a subscriber.
///
/// Expected: 1 row affected and the address can subscribe again
#[tokio::test]
async fn deletes_subscriber() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;
    let subscriber = test
        .content()
        .insert_mock_subscriber("reader@example.com")
        .await?;

    let repo = SubscriberRepository::new(&test.db);

    assert_eq!(repo.delete(subscriber.id).await?.rows_affected, 1);
    assert!(repo.create("reader@example.com".to_string()).await.is_ok());

    Ok(())
}
