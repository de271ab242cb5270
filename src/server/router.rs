//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every endpoint is registered here together with its utoipa specification. Swagger UI
//! serves the collected document at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// For each of `tours`, `destinations`, `accommodations` and `blog`:
/// - `GET /api/{resource}` - Paginated listing
/// - `POST /api/{resource}` - Create
/// - `GET /api/{resource}/{id}` - Get by ID
/// - `GET /api/{resource}/slug/{slug}` - Get by slug
/// - `PUT /api/{resource}/{id}` - Replace editable fields
/// - `DELETE /api/{resource}/{id}` - Delete
///
/// Quote requests and subscribers:
/// - `POST /api/quotes`, `GET /api/quotes`, `GET /api/quotes/{id}`,
///   `PUT /api/quotes/{id}/status`, `DELETE /api/quotes/{id}`
/// - `POST /api/subscribers`, `GET /api/subscribers`, `DELETE /api/subscribers/{id}`
///
/// The OpenAPI specification is served at `/api/docs/openapi.json`.
///
/// # Example
/// ```ignore
/// let app_state = AppState::new(db, &config)?;
/// let router = routes().with_state(app_state);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Wayfarer", description = "Wayfarer travel agency API"), tags(
        (name = controller::tour::TOUR_TAG, description = "Tours with seasonal display prices"),
        (name = controller::destination::DESTINATION_TAG, description = "Destinations"),
        (name = controller::accommodation::ACCOMMODATION_TAG, description = "Accommodations with seasonal display prices"),
        (name = controller::blog::BLOG_TAG, description = "Blog posts"),
        (name = controller::quote::QUOTE_TAG, description = "Quote requests"),
        (name = controller::subscriber::SUBSCRIBER_TAG, description = "Newsletter subscribers"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::tour::list_tours,
            controller::tour::create_tour
        ))
        .routes(routes!(
            controller::tour::get_tour,
            controller::tour::update_tour,
            controller::tour::delete_tour
        ))
        .routes(routes!(controller::tour::get_tour_by_slug))
        .routes(routes!(
            controller::destination::list_destinations,
            controller::destination::create_destination
        ))
        .routes(routes!(
            controller::destination::get_destination,
            controller::destination::update_destination,
            controller::destination::delete_destination
        ))
        .routes(routes!(controller::destination::get_destination_by_slug))
        .routes(routes!(
            controller::accommodation::list_accommodations,
            controller::accommodation::create_accommodation
        ))
        .routes(routes!(
            controller::accommodation::get_accommodation,
            controller::accommodation::update_accommodation,
            controller::accommodation::delete_accommodation
        ))
        .routes(routes!(controller::accommodation::get_accommodation_by_slug))
        .routes(routes!(
            controller::blog::list_blog_posts,
            controller::blog::create_blog_post
        ))
        .routes(routes!(
            controller::blog::get_blog_post,
            controller::blog::update_blog_post,
            controller::blog::delete_blog_post
        ))
        .routes(routes!(controller::blog::get_blog_post_by_slug))
        .routes(routes!(
            controller::quote::create_quote,
            controller::quote::list_quotes
        ))
        .routes(routes!(
            controller::quote::get_quote,
            controller::quote::delete_quote
        ))
        .routes(routes!(controller::quote::update_quote_status))
        .routes(routes!(
            controller::subscriber::subscribe,
            controller::subscriber::list_subscribers
        ))
        .routes(routes!(controller::subscriber::delete_subscriber))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
