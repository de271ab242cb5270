//! Content row insertion utilities.
//!
//! Each method inserts one row with standard test values and returns the stored model.
//! Slugs come from [`fixture_slug`], so inserting two rows with the same title fails on
//! the unique slug index.

use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    fixtures::content::{factory::fixture_slug, ContentFixtures},
};

impl<'a> ContentFixtures<'a> {
    /// Insert a mock destination.
    ///
    /// # Arguments
    /// - `name` - Name of the destination
    ///
    /// # Returns
    /// - `Ok(entity::destination::Model)` - The inserted destination
    /// - `Err(TestError::DbErr)` - Insert failed
    pub async fn insert_mock_destination(
        &self,
        name: &str,
    ) -> Result<entity::destination::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Destination::insert(entity::destination::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                slug: ActiveValue::Set(fixture_slug(name)),
                country: ActiveValue::Set("Tanzania".to_string()),
                summary: ActiveValue::Set(Some(format!("Visit {}", name))),
                description: ActiveValue::Set(None),
                hero_image: ActiveValue::Set(None),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a mock tour.
    ///
    /// # Arguments
    /// - `title` - Title of the tour
    /// - `destination_id` - Optional destination the tour belongs to, must already exist
    /// - `pricing` - Optional pricing document, see [`factory`](super::factory)
    ///
    /// # Returns
    /// - `Ok(entity::tour::Model)` - The inserted tour
    /// - `Err(TestError::DbErr)` - Insert failed
    pub async fn insert_mock_tour(
        &self,
        title: &str,
        destination_id: Option<i32>,
        pricing: Option<serde_json::Value>,
    ) -> Result<entity::tour::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(entity::prelude::Tour::insert(entity::tour::ActiveModel {
            title: ActiveValue::Set(title.to_string()),
            slug: ActiveValue::Set(fixture_slug(title)),
            destination_id: ActiveValue::Set(destination_id),
            summary: ActiveValue::Set(Some("A test tour".to_string())),
            description: ActiveValue::Set(None),
            duration_days: ActiveValue::Set(7),
            pricing: ActiveValue::Set(pricing),
            featured: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert a mock accommodation.
    ///
    /// # Arguments
    /// - `name` - Name of the accommodation
    /// - `destination_id` - Optional destination the accommodation belongs to
    ///
    /// # Returns
    /// - `Ok(entity::accommodation::Model)` - The inserted accommodation
    /// - `Err(TestError::DbErr)` - Insert failed
    pub async fn insert_mock_accommodation(
        &self,
        name: &str,
        destination_id: Option<i32>,
    ) -> Result<entity::accommodation::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Accommodation::insert(entity::accommodation::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                slug: ActiveValue::Set(fixture_slug(name)),
                destination_id: ActiveValue::Set(destination_id),
                description: ActiveValue::Set(None),
                rating: ActiveValue::Set(Some(4)),
                pricing: ActiveValue::Set(None),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a mock blog post.
    ///
    /// Published posts get `published_at` set to the insertion time.
    ///
    /// # Arguments
    /// - `title` - Title of the post
    /// - `published` - Whether the post is published or a draft
    ///
    /// # Returns
    /// - `Ok(entity::blog_post::Model)` - The inserted post
    /// - `Err(TestError::DbErr)` - Insert failed
    pub async fn insert_mock_blog_post(
        &self,
        title: &str,
        published: bool,
    ) -> Result<entity::blog_post::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::BlogPost::insert(entity::blog_post::ActiveModel {
                title: ActiveValue::Set(title.to_string()),
                slug: ActiveValue::Set(fixture_slug(title)),
                excerpt: ActiveValue::Set(None),
                body: ActiveValue::Set(format!("All about {}", title)),
                author: ActiveValue::Set(Some("Test Author".to_string())),
                published: ActiveValue::Set(published),
                published_at: ActiveValue::Set(published.then_some(now)),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a mock quote request with status `new`.
    ///
    /// # Arguments
    /// - `name` - Name of the requester
    /// - `tour_id` - Optional tour the quote is about, must already exist
    ///
    /// # Returns
    /// - `Ok(entity::quote::Model)` - The inserted quote
    /// - `Err(TestError::DbErr)` - Insert failed
    pub async fn insert_mock_quote(
        &self,
        name: &str,
        tour_id: Option<i32>,
    ) -> Result<entity::quote::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(entity::prelude::Quote::insert(entity::quote::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            email: ActiveValue::Set(format!("{}@example.com", fixture_slug(name))),
            phone: ActiveValue::Set(None),
            tour_id: ActiveValue::Set(tour_id),
            travel_date: ActiveValue::Set(NaiveDate::from_ymd_opt(2026, 8, 1)),
            travelers: ActiveValue::Set(2),
            message: ActiveValue::Set(None),
            status: ActiveValue::Set("new".to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert a mock newsletter subscriber.
    ///
    /// # Arguments
    /// - `email` - Address to subscribe, stored as given
    ///
    /// # Returns
    /// - `Ok(entity::subscriber::Model)` - The inserted subscriber
    /// - `Err(TestError::DbErr)` - Insert failed, including a duplicate address
    pub async fn insert_mock_subscriber(
        &self,
        email: &str,
    ) -> Result<entity::subscriber::Model, TestError> {
        Ok(
            entity::prelude::Subscriber::insert(entity::subscriber::ActiveModel {
                email: ActiveValue::Set(email.to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
