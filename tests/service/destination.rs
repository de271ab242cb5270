use wayfarer::{
    model::{destination::DestinationInput, tour::TourInput},
    server::service::{destination::DestinationService, tour::TourService},
};

use super::*;

fn destination_input(name: &str) -> DestinationInput {
    DestinationInput {
        name: Some(name.to_string()),
        country: Some("Tanzania".to_string()),
        ..Default::default()
    }
}

/// Tests that creating a destination allocates a slug from its name.
///
/// Expected: Ok with slug "zanzibar-and-pemba"
#[tokio::test]
async fn create_slugifies_name() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;
    let state = test.into_app_state();

    let destination = DestinationService::new(&state)
        .create(destination_input("Zanzibar & Pemba"))
        .await
        .unwrap();

    assert_eq!(destination.slug, "zanzibar-and-pemba");
    assert_eq!(destination.country, "Tanzania");

    Ok(())
}

/// Tests that country is required.
///
/// Expected: Err with ContentError::Validation
#[tokio::test]
async fn create_requires_country() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;
    let state = test.into_app_state();

    let result = DestinationService::new(&state)
        .create(DestinationInput {
            country: None,
            ..destination_input("Zanzibar")
        })
        .await;

    assert!(matches!(
        result,
        Err(Error::ContentError(ContentError::Validation(_)))
    ));

    Ok(())
}

/// Tests that deleting a destination detaches its tours and drops cached tours.
///
/// Expected: Ok(true), tour kept with no destination, tour cache emptied
#[tokio::test]
async fn delete_detaches_tours_and_clears_tour_cache() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .with_mock_destination("Rwanda")
        .build()
        .await?;
    let state = test.into_app_state();
    let destinations = DestinationService::new(&state);
    let tours = TourService::new(&state);
    let destination = destinations.get_by_slug("rwanda").await.unwrap().unwrap();
    let tour = tours
        .create(TourInput {
            title: Some("Gorilla Trek".to_string()),
            destination_id: Some(destination.id),
            duration_days: Some(3),
            ..Default::default()
        })
        .await
        .unwrap();
    tours.get_by_slug(&tour.slug).await.unwrap();

    assert!(destinations.delete(destination.id).await.unwrap());

    assert!(state.cache.tours.is_empty());
    assert!(state.cache.destinations.is_empty());
    let tour = tours.get(tour.id).await.unwrap().unwrap();
    assert_eq!(tour.destination_id, None);

    Ok(())
}

/// Tests the paginated listing metadata.
///
/// Expected: 3 destinations over pages of 2
#[tokio::test]
async fn list_reports_page_metadata() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .with_mock_destination("Rwanda")
        .with_mock_destination("Uganda")
        .with_mock_destination("Kenya")
        .build()
        .await?;
    let state = test.into_app_state();

    let page = DestinationService::new(&state)
        .list(PaginationParams {
            page: Some(2),
            per_page: Some(2),
        })
        .await
        .unwrap();

    assert_eq!(page.items.len(), 1);
    assert_eq!(page.page, 2);
    assert_eq!(page.per_page, 2);
    assert_eq!(page.total_items, 3);
    assert_eq!(page.total_pages, 2);

    Ok(())
}
