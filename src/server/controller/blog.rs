use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    model::{
        api::{ErrorDto, PageDto, PaginationParams},
        blog::{BlogFilter, BlogPostDto, BlogPostInput},
    },
    server::{
        controller::{
            extract::{Json, Path, Query},
            not_found,
        },
        error::Error,
        model::app::AppState,
        service::blog::BlogService,
    },
};

pub static BLOG_TAG: &str = "blog";

/// List blog posts, most recently published first
///
/// Drafts are only included with `include_drafts=true`.
#[utoipa::path(
    get,
    path = "/api/blog",
    tag = BLOG_TAG,
    params(BlogFilter, PaginationParams),
    responses(
        (status = 200, description = "One page of blog posts", body = PageDto<BlogPostDto>),
        (status = 400, description = "Invalid page parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_blog_posts(
    State(state): State<AppState>,
    Query(filter): Query<BlogFilter>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, Error> {
    let page = BlogService::new(&state).list(filter, params).await?;

    Ok((StatusCode::OK, Json(page)))
}

/// Create a blog post
#[utoipa::path(
    post,
    path = "/api/blog",
    tag = BLOG_TAG,
    request_body = BlogPostInput,
    responses(
        (status = 201, description = "Blog post created", body = BlogPostDto),
        (status = 400, description = "Missing or invalid fields", body = ErrorDto),
        (status = 409, description = "No unique slug could be allocated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_blog_post(
    State(state): State<AppState>,
    Json(input): Json<BlogPostInput>,
) -> Result<impl IntoResponse, Error> {
    let post = BlogService::new(&state).create(input).await?;

    Ok((StatusCode::CREATED, Json(post)))
}

/// Get a blog post by ID
#[utoipa::path(
    get,
    path = "/api/blog/{id}",
    tag = BLOG_TAG,
    params(("id" = i32, Path, description = "Blog post ID")),
    responses(
        (status = 200, description = "Blog post found", body = BlogPostDto),
        (status = 404, description = "Blog post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_blog_post(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let post = BlogService::new(&state)
        .get(id)
        .await?
        .ok_or_else(|| not_found("Blog post", id))?;

    Ok((StatusCode::OK, Json(post)))
}

/// Get a blog post by slug
#[utoipa::path(
    get,
    path = "/api/blog/slug/{slug}",
    tag = BLOG_TAG,
    params(("slug" = String, Path, description = "Blog post slug")),
    responses(
        (status = 200, description = "Blog post found", body = BlogPostDto),
        (status = 404, description = "Blog post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_blog_post_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let post = BlogService::new(&state)
        .get_by_slug(&slug)
        .await?
        .ok_or_else(|| not_found("Blog post", &slug))?;

    Ok((StatusCode::OK, Json(post)))
}

/// Replace the editable fields of a blog post
#[utoipa::path(
    put,
    path = "/api/blog/{id}",
    tag = BLOG_TAG,
    params(("id" = i32, Path, description = "Blog post ID")),
    request_body = BlogPostInput,
    responses(
        (status = 200, description = "Blog post updated", body = BlogPostDto),
        (status = 400, description = "Missing or invalid fields", body = ErrorDto),
        (status = 404, description = "Blog post not found", body = ErrorDto),
        (status = 409, description = "No unique slug could be allocated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_blog_post(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<BlogPostInput>,
) -> Result<impl IntoResponse, Error> {
    let post = BlogService::new(&state)
        .update(id, input)
        .await?
        .ok_or_else(|| not_found("Blog post", id))?;

    Ok((StatusCode::OK, Json(post)))
}

/// Delete a blog post
#[utoipa::path(
    delete,
    path = "/api/blog/{id}",
    tag = BLOG_TAG,
    params(("id" = i32, Path, description = "Blog post ID")),
    responses(
        (status = 204, description = "Blog post deleted"),
        (status = 404, description = "Blog post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_blog_post(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    if !BlogService::new(&state).delete(id).await? {
        return Err(not_found("Blog post", id));
    }

    Ok(StatusCode::NO_CONTENT)
}
