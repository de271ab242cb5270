//! Tests for the destination endpoints.

use wayfarer::{
    model::destination::DestinationInput,
    server::controller::destination::{
        create_destination, delete_destination, get_destination_by_slug, list_destinations,
    },
};

use super::*;

/// Expected: 201 Created for a valid destination
#[tokio::test]
async fn create_returns_created() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;

    let result = create_destination(
        State(test.into_app_state()),
        Json(DestinationInput {
            name: Some("Zanzibar".to_string()),
            country: Some("Tanzania".to_string()),
            ..Default::default()
        }),
    )
    .await;

    assert_eq!(result.unwrap().into_response().status(), StatusCode::CREATED);

    Ok(())
}

/// Expected: 400 Bad Request when the name has nothing to build a slug from
#[tokio::test]
async fn create_returns_bad_request_for_unsluggable_name() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;

    let result = create_destination(
        State(test.into_app_state()),
        Json(DestinationInput {
            name: Some("???".to_string()),
            country: Some("Tanzania".to_string()),
            ..Default::default()
        }),
    )
    .await;

    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::BAD_REQUEST
    );

    Ok(())
}

/// Expected: 200 OK for a known slug
#[tokio::test]
async fn get_by_slug_returns_ok() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .with_mock_destination("Rwanda")
        .build()
        .await?;

    let result =
        get_destination_by_slug(State(test.into_app_state()), Path("rwanda".to_string())).await;

    assert_eq!(result.unwrap().into_response().status(), StatusCode::OK);

    Ok(())
}

/// Expected: 200 OK listing and 204 No Content on delete
#[tokio::test]
async fn list_and_delete() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .with_mock_destination("Rwanda")
        .build()
        .await?;
    let state = test.into_app_state();

    let listed = list_destinations(State(state.clone()), Query(PaginationParams::default())).await;
    let deleted = delete_destination(State(state), Path(1)).await;

    assert_eq!(listed.unwrap().into_response().status(), StatusCode::OK);
    assert_eq!(deleted.unwrap().into_response().status(), StatusCode::NO_CONTENT);

    Ok(())
}
