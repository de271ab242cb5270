//! Tests for the tour endpoints.

use wayfarer::{
    model::tour::{TourFilter, TourInput},
    server::controller::tour::{
        create_tour, delete_tour, get_tour, get_tour_by_slug, list_tours, update_tour,
    },
};

use super::*;

fn tour_input(title: &str) -> TourInput {
    TourInput {
        title: Some(title.to_string()),
        duration_days: Some(5),
        pricing: Some(factory::uniform_pricing(950)),
        ..Default::default()
    }
}

/// Expected: 201 Created for a valid tour
#[tokio::test]
async fn create_returns_created() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;

    let result = create_tour(State(test.into_app_state()), Json(tour_input("Safari"))).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().into_response().status(), StatusCode::CREATED);

    Ok(())
}

/// Expected: 400 Bad Request for a tour without a title
#[tokio::test]
async fn create_returns_bad_request_for_missing_title() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;

    let result = create_tour(
        State(test.into_app_state()),
        Json(TourInput {
            title: None,
            ..tour_input("Safari")
        }),
    )
    .await;

    assert!(result.is_err());
    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::BAD_REQUEST
    );

    Ok(())
}

/// Expected: 200 OK for an existing slug, 404 Not Found otherwise
#[tokio::test]
async fn get_by_slug_returns_ok_or_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .with_mock_tour("Gorilla Trek", None)
        .build()
        .await?;
    let state = test.into_app_state();

    let found = get_tour_by_slug(State(state.clone()), Path("gorilla-trek".to_string())).await;
    let missing = get_tour_by_slug(State(state), Path("lion-trek".to_string())).await;

    assert_eq!(found.unwrap().into_response().status(), StatusCode::OK);
    assert_eq!(
        missing.err().unwrap().into_response().status(),
        StatusCode::NOT_FOUND
    );

    Ok(())
}

/// Expected: 404 Not Found for an unknown ID
#[tokio::test]
async fn get_returns_not_found_for_unknown_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;

    let result = get_tour(State(test.into_app_state()), Path(1)).await;

    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::NOT_FOUND
    );

    Ok(())
}

/// Expected: 200 OK for an update, 404 Not Found for an unknown ID
#[tokio::test]
async fn update_returns_ok_or_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .with_mock_tour("Gorilla Trek", None)
        .build()
        .await?;
    let state = test.into_app_state();

    let updated = update_tour(
        State(state.clone()),
        Path(1),
        Json(tour_input("Gorilla Trek Deluxe")),
    )
    .await;
    let missing = update_tour(State(state), Path(2), Json(tour_input("Other"))).await;

    assert_eq!(updated.unwrap().into_response().status(), StatusCode::OK);
    assert_eq!(
        missing.err().unwrap().into_response().status(),
        StatusCode::NOT_FOUND
    );

    Ok(())
}

/// Expected: 204 No Content, then 404 Not Found for the same ID
#[tokio::test]
async fn delete_returns_no_content_then_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .with_mock_tour("Gorilla Trek", None)
        .build()
        .await?;
    let state = test.into_app_state();

    let first = delete_tour(State(state.clone()), Path(1)).await;
    let second = delete_tour(State(state), Path(1)).await;

    assert_eq!(first.unwrap().into_response().status(), StatusCode::NO_CONTENT);
    assert_eq!(
        second.err().unwrap().into_response().status(),
        StatusCode::NOT_FOUND
    );

    Ok(())
}

/// Expected: 200 OK for the default page, 400 Bad Request for an oversized page
#[tokio::test]
async fn list_validates_page_size() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .with_mock_tour("Gorilla Trek", None)
        .build()
        .await?;
    let state = test.into_app_state();

    let ok = list_tours(
        State(state.clone()),
        Query(TourFilter::default()),
        Query(PaginationParams::default()),
    )
    .await;
    let too_large = list_tours(
        State(state),
        Query(TourFilter::default()),
        Query(PaginationParams {
            page: None,
            per_page: Some(101),
        }),
    )
    .await;

    assert_eq!(ok.unwrap().into_response().status(), StatusCode::OK);
    assert_eq!(
        too_large.err().unwrap().into_response().status(),
        StatusCode::BAD_REQUEST
    );

    Ok(())
}
