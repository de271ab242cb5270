use wayfarer::{
    model::tour::{TourFilter, TourInput},
    server::{pricing::price::PRICE_UNAVAILABLE, service::tour::TourService},
};

use super::*;

fn tour_input(title: &str) -> TourInput {
    TourInput {
        title: Some(title.to_string()),
        duration_days: Some(7),
        ..Default::default()
    }
}

/// Tests that tours with the same title get distinct slugs.
///
/// Expected: "safari", then "safari-1", then "safari-2"
#[tokio::test]
async fn create_allocates_numbered_slugs_for_duplicate_titles() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;
    let state = test.into_app_state();
    let service = TourService::new(&state);

    let first = service.create(tour_input("Safari")).await.unwrap();
    let second = service.create(tour_input("Safari")).await.unwrap();
    let third = service.create(tour_input("  safari!  ")).await.unwrap();

    assert_eq!(first.slug, "safari");
    assert_eq!(second.slug, "safari-1");
    assert_eq!(third.slug, "safari-2");

    Ok(())
}

/// Tests that a created tour is priced for display.
///
/// Expected: Ok with a formatted display price for a uniformly priced tour
#[tokio::test]
async fn create_returns_display_price() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;
    let state = test.into_app_state();

    let tour = TourService::new(&state)
        .create(TourInput {
            pricing: Some(factory::uniform_pricing(1200)),
            ..tour_input("Serengeti Migration")
        })
        .await
        .unwrap();

    assert_eq!(tour.display_price, "1,200");
    assert!(tour.pricing.is_some());

    Ok(())
}

/// Tests that a tour without pricing shows the placeholder price.
///
/// Expected: Ok with "Price Unavailable"
#[tokio::test]
async fn create_without_pricing_is_unavailable() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;
    let state = test.into_app_state();

    let tour = TourService::new(&state)
        .create(tour_input("Kilimanjaro Climb"))
        .await
        .unwrap();

    assert_eq!(tour.display_price, PRICE_UNAVAILABLE);

    Ok(())
}

/// Tests validation of required fields.
///
/// Expected: Err with ContentError::Validation for a blank title or missing duration
#[tokio::test]
async fn create_rejects_invalid_input() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;
    let state = test.into_app_state();
    let service = TourService::new(&state);

    let blank_title = service.create(tour_input("   ")).await;
    let no_duration = service
        .create(TourInput {
            duration_days: None,
            ..tour_input("Safari")
        })
        .await;
    let bad_pricing = service
        .create(TourInput {
            pricing: Some(serde_json::json!("cheap")),
            ..tour_input("Safari")
        })
        .await;

    for result in [blank_title, no_duration, bad_pricing] {
        assert!(matches!(
            result,
            Err(Error::ContentError(ContentError::Validation(_)))
        ));
    }

    Ok(())
}

/// Tests that a tour cannot reference a destination that does not exist.
///
/// Expected: Err with ContentError::Validation
#[tokio::test]
async fn create_rejects_unknown_destination() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;
    let state = test.into_app_state();

    let result = TourService::new(&state)
        .create(TourInput {
            destination_id: Some(42),
            ..tour_input("Safari")
        })
        .await;

    assert!(matches!(
        result,
        Err(Error::ContentError(ContentError::Validation(_)))
    ));

    Ok(())
}

/// Tests that a slug lookup fills the slug cache.
///
/// Expected: Ok with the tour, cached under its slug afterwards
#[tokio::test]
async fn get_by_slug_populates_cache() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .with_mock_tour("Gorilla Trek", None)
        .build()
        .await?;
    let state = test.into_app_state();

    let tour = TourService::new(&state)
        .get_by_slug("gorilla-trek")
        .await
        .unwrap();

    assert!(tour.is_some());
    assert!(state.cache.tours.get(&"gorilla-trek".to_string()).is_some());

    Ok(())
}

/// Tests lookup of a slug nobody uses.
///
/// Expected: Ok(None) and nothing cached
#[tokio::test]
async fn get_by_slug_returns_none_for_unknown_slug() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;
    let state = test.into_app_state();

    let tour = TourService::new(&state).get_by_slug("nowhere").await.unwrap();

    assert!(tour.is_none());
    assert!(state.cache.tours.is_empty());

    Ok(())
}

/// Tests that a cosmetic title change keeps the slug.
///
/// Expected: Ok with the new title and the original slug
#[tokio::test]
async fn update_keeps_slug_when_title_slugifies_the_same() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;
    let state = test.into_app_state();
    let service = TourService::new(&state);
    let created = service.create(tour_input("Gorilla Trek")).await.unwrap();

    let updated = service
        .update(created.id, tour_input("Gorilla  TREK!"))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.title, "Gorilla  TREK!");
    assert_eq!(updated.slug, "gorilla-trek");

    Ok(())
}

/// Tests that a real title change allocates a new slug and drops the old cache entry.
///
/// Expected: Ok with the new slug, old slug no longer resolvable
#[tokio::test]
async fn update_regenerates_slug_and_invalidates_cache() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;
    let state = test.into_app_state();
    let service = TourService::new(&state);
    let created = service.create(tour_input("Gorilla Trek")).await.unwrap();
    service.get_by_slug("gorilla-trek").await.unwrap();

    let updated = service
        .update(created.id, tour_input("Chimpanzee Trek"))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.slug, "chimpanzee-trek");
    assert!(state.cache.tours.get(&"gorilla-trek".to_string()).is_none());
    assert!(service.get_by_slug("gorilla-trek").await.unwrap().is_none());

    Ok(())
}

/// Tests updating a tour that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn update_returns_none_for_missing_tour() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;
    let state = test.into_app_state();

    let result = TourService::new(&state)
        .update(99, tour_input("Safari"))
        .await
        .unwrap();

    assert!(result.is_none());

    Ok(())
}

/// Tests deletion and its cache invalidation.
///
/// Expected: true for the first delete, false for the second
#[tokio::test]
async fn delete_removes_tour_and_cache_entry() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .with_mock_tour("Gorilla Trek", None)
        .build()
        .await?;
    let state = test.into_app_state();
    let service = TourService::new(&state);
    let tour = service.get_by_slug("gorilla-trek").await.unwrap().unwrap();

    assert!(service.delete(tour.id).await.unwrap());
    assert!(state.cache.tours.is_empty());
    assert!(!service.delete(tour.id).await.unwrap());

    Ok(())
}

/// Tests listing with a destination filter.
///
/// Expected: only tours in the requested destination
#[tokio::test]
async fn list_filters_by_destination() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;
    let destination = test.content().insert_mock_destination("Rwanda").await?;
    test.content()
        .insert_mock_tour("Gorilla Trek", Some(destination.id), None)
        .await?;
    test.content()
        .insert_mock_tour("Beach Escape", None, None)
        .await?;
    let state = test.into_app_state();

    let page = TourService::new(&state)
        .list(
            TourFilter {
                destination_id: Some(destination.id),
                featured: None,
            },
            PaginationParams::default(),
        )
        .await
        .unwrap();

    assert_eq!(page.total_items, 1);
    assert_eq!(page.items[0].title, "Gorilla Trek");
    assert_eq!(page.page, 1);

    Ok(())
}

/// Tests that page 0 is rejected.
///
/// Expected: Err with ContentError::Validation
#[tokio::test]
async fn list_rejects_page_zero() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;
    let state = test.into_app_state();

    let result = TourService::new(&state)
        .list(
            TourFilter::default(),
            PaginationParams {
                page: Some(0),
                per_page: None,
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(Error::ContentError(ContentError::Validation(_)))
    ));

    Ok(())
}
