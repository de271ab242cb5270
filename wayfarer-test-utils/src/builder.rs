//! Declarative test builder.
//!
//! `TestBuilder` collects the tables, fixture rows and mock endpoints a test needs; all of
//! them are created in the final `build()` call.

use mockito::Mock;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};
use serde_json::Value;

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Methods can be chained and are finalized with `build()`.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_content_tables: bool,

    // Database fixtures to insert
    destinations: Vec<String>,
    tours: Vec<(String, Option<Value>)>, // (title, pricing)
    blog_posts: Vec<(String, bool)>,     // (title, published)
    subscribers: Vec<String>,

    // Mock endpoints to create
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,
    email_endpoints: Vec<(usize, usize)>, // (status, expected_requests)
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables, fixtures or mock endpoints configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_content_tables: false,
            destinations: Vec::new(),
            tours: Vec::new(),
            blog_posts: Vec::new(),
            subscribers: Vec::new(),
            mock_builders: Vec::new(),
            email_endpoints: Vec::new(),
        }
    }

    /// Add every content table to the test database.
    ///
    /// Creates Destination, Tour, Accommodation, BlogPost, Quote and Subscriber, parents
    /// before children.
    pub fn with_content_tables(mut self) -> Self {
        self.include_content_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use wayfarer_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), wayfarer_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Destination)
    ///     .with_table(Tour)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a mock destination during `build()`.
    pub fn with_mock_destination(mut self, name: impl Into<String>) -> Self {
        self.destinations.push(name.into());
        self
    }

    /// Insert a mock tour without a destination during `build()`.
    ///
    /// # Arguments
    /// - `title` - Title of the tour
    /// - `pricing` - Optional pricing document, see [`factory`](crate::fixtures::content::factory)
    pub fn with_mock_tour(mut self, title: impl Into<String>, pricing: Option<Value>) -> Self {
        self.tours.push((title.into(), pricing));
        self
    }

    /// Insert a mock blog post during `build()`.
    pub fn with_mock_blog_post(mut self, title: impl Into<String>, published: bool) -> Self {
        self.blog_posts.push((title.into(), published));
        self
    }

    /// Insert a mock newsletter subscriber during `build()`.
    pub fn with_mock_subscriber(mut self, email: impl Into<String>) -> Self {
        self.subscribers.push(email.into());
        self
    }

    /// Add the email provider endpoint to the mock server.
    ///
    /// # Arguments
    /// - `status` - HTTP status code the provider responds with
    /// - `expected_requests` - Number of times the endpoint should be called
    pub fn with_email_endpoint(mut self, status: usize, expected_requests: usize) -> Self {
        self.email_endpoints.push((status, expected_requests));
        self
    }

    /// Add a custom mock endpoint with full control over the mockito server.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test context.
    ///
    /// Executes all queued operations in order:
    /// 1. Creates database tables (content tables if requested, then custom tables)
    /// 2. Inserts fixture rows
    /// 3. Creates mock HTTP endpoints (custom endpoints first, then email endpoints)
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_content_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Destination),
                schema.create_table_from_entity(entity::prelude::Tour),
                schema.create_table_from_entity(entity::prelude::Accommodation),
                schema.create_table_from_entity(entity::prelude::BlogPost),
                schema.create_table_from_entity(entity::prelude::Quote),
                schema.create_table_from_entity(entity::prelude::Subscriber),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for name in self.destinations {
            setup.content().insert_mock_destination(&name).await?;
        }

        for (title, pricing) in self.tours {
            setup.content().insert_mock_tour(&title, None, pricing).await?;
        }

        for (title, published) in self.blog_posts {
            setup
                .content()
                .insert_mock_blog_post(&title, published)
                .await?;
        }

        for email in self.subscribers {
            setup.content().insert_mock_subscriber(&email).await?;
        }

        // 3. Create mock endpoints
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (status, expected) in self.email_endpoints {
            mocks.push(setup.email().create_email_endpoint(status, expected));
        }

        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
