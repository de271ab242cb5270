//! Tests for the blog endpoints.

use wayfarer::{
    model::blog::{BlogFilter, BlogPostInput},
    server::controller::blog::{
        create_blog_post, delete_blog_post, get_blog_post_by_slug, list_blog_posts,
        update_blog_post,
    },
};

use super::*;

fn post_input(title: &str) -> BlogPostInput {
    BlogPostInput {
        title: Some(title.to_string()),
        body: Some("Pack light.".to_string()),
        published: true,
        ..Default::default()
    }
}

/// Expected: 201 Created for a valid post, 400 Bad Request without a body
#[tokio::test]
async fn create_validates_body() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;
    let state = test.into_app_state();

    let created = create_blog_post(State(state.clone()), Json(post_input("Packing List"))).await;
    let no_body = create_blog_post(
        State(state),
        Json(BlogPostInput {
            body: None,
            ..post_input("Packing List")
        }),
    )
    .await;

    assert_eq!(created.unwrap().into_response().status(), StatusCode::CREATED);
    assert_eq!(
        no_body.err().unwrap().into_response().status(),
        StatusCode::BAD_REQUEST
    );

    Ok(())
}

/// Expected: 200 OK for slug lookup, list and update; 204 No Content on delete
#[tokio::test]
async fn read_update_delete() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .with_mock_blog_post("Best Time For Safari", true)
        .build()
        .await?;
    let state = test.into_app_state();

    let by_slug = get_blog_post_by_slug(
        State(state.clone()),
        Path("best-time-for-safari".to_string()),
    )
    .await;
    let listed = list_blog_posts(
        State(state.clone()),
        Query(BlogFilter::default()),
        Query(PaginationParams::default()),
    )
    .await;
    let updated = update_blog_post(
        State(state.clone()),
        Path(1),
        Json(post_input("Best Time For A Safari")),
    )
    .await;
    let deleted = delete_blog_post(State(state), Path(1)).await;

    assert_eq!(by_slug.unwrap().into_response().status(), StatusCode::OK);
    assert_eq!(listed.unwrap().into_response().status(), StatusCode::OK);
    assert_eq!(updated.unwrap().into_response().status(), StatusCode::OK);
    assert_eq!(deleted.unwrap().into_response().status(), StatusCode::NO_CONTENT);

    Ok(())
}
