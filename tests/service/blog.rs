use wayfarer::{
    model::blog::{BlogFilter, BlogPostInput},
    server::service::blog::BlogService,
};

use super::*;

/// Tests that publishing a post stamps its publication time.
///
/// Expected: published_at set for a published post, absent for a draft
#[tokio::test]
async fn create_stamps_published_at() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;
    let state = test.into_app_state();
    let service = BlogService::new(&state);

    let published = service
        .create(BlogPostInput {
            title: Some("Packing for Kilimanjaro".to_string()),
            body: Some("Layers.".to_string()),
            published: true,
            ..Default::default()
        })
        .await
        .unwrap();
    let draft = service
        .create(BlogPostInput {
            title: Some("Draft Notes".to_string()),
            body: Some("Todo.".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(published.slug, "packing-for-kilimanjaro");
    assert!(published.published_at.is_some());
    assert!(draft.published_at.is_none());

    Ok(())
}

/// Tests that the default listing hides drafts.
///
/// Expected: 1 item by default, 2 with include_drafts
#[tokio::test]
async fn list_hides_drafts_unless_requested() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .with_mock_blog_post("Best Time For Safari", true)
        .with_mock_blog_post("Unfinished", false)
        .build()
        .await?;
    let state = test.into_app_state();
    let service = BlogService::new(&state);

    let public = service
        .list(BlogFilter::default(), PaginationParams::default())
        .await
        .unwrap();
    let all = service
        .list(
            BlogFilter {
                include_drafts: true,
            },
            PaginationParams::default(),
        )
        .await
        .unwrap();

    assert_eq!(public.total_items, 1);
    assert_eq!(public.items[0].title, "Best Time For Safari");
    assert_eq!(all.total_items, 2);

    Ok(())
}

/// Tests that drafts stay addressable by slug.
///
/// Expected: Ok(Some) for an unpublished post
#[tokio::test]
async fn get_by_slug_returns_drafts() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .with_mock_blog_post("Unfinished", false)
        .build()
        .await?;
    let state = test.into_app_state();

    let post = BlogService::new(&state).get_by_slug("unfinished").await.unwrap();

    assert!(post.is_some_and(|post| !post.published));

    Ok(())
}
