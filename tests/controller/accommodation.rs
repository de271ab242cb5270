//! Tests for the accommodation endpoints.

use wayfarer::{
    model::accommodation::{AccommodationFilter, AccommodationInput},
    server::controller::accommodation::{
        create_accommodation, get_accommodation, list_accommodations,
    },
};

use super::*;

/// Expected: 201 Created for a valid accommodation
#[tokio::test]
async fn create_returns_created() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .with_mock_destination("Zanzibar")
        .build()
        .await?;

    let result = create_accommodation(
        State(test.into_app_state()),
        Json(AccommodationInput {
            name: Some("Stone Town Lodge".to_string()),
            destination_id: Some(1),
            rating: Some(4),
            pricing: Some(factory::uniform_pricing(180)),
            ..Default::default()
        }),
    )
    .await;

    assert_eq!(result.unwrap().into_response().status(), StatusCode::CREATED);

    Ok(())
}

/// Expected: 400 Bad Request for a rating outside 1 to 5
#[tokio::test]
async fn create_returns_bad_request_for_rating_out_of_range() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;

    let result = create_accommodation(
        State(test.into_app_state()),
        Json(AccommodationInput {
            name: Some("Stone Town Lodge".to_string()),
            rating: Some(6),
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

/// Expected: 200 OK for an existing accommodation, 200 OK listing by destination
#[tokio::test]
async fn get_and_list_by_destination() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;
    let destination = test.content().insert_mock_destination("Zanzibar").await?;
    let lodge = test
        .content()
        .insert_mock_accommodation("Stone Town Lodge", Some(destination.id))
        .await?;
    let state = test.into_app_state();

    let found = get_accommodation(State(state.clone()), Path(lodge.id)).await;
    let listed = list_accommodations(
        State(state),
        Query(AccommodationFilter {
            destination_id: Some(destination.id),
        }),
        Query(PaginationParams::default()),
    )
    .await;

    assert_eq!(found.unwrap().into_response().status(), StatusCode::OK);
    assert_eq!(listed.unwrap().into_response().status(), StatusCode::OK);

    Ok(())
}
