//! Test context returned by [`TestBuilder`](crate::TestBuilder).
//!
//! Holds an in-memory SQLite database and the mock HTTP server standing in for the email
//! provider, along with the mocks created during the build so they can be asserted.

use mockito::{Mock, Server, ServerGuard};
use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::{constant::TEST_EMAIL_PATH, error::TestError};

/// Test environment produced by `TestBuilder::build()`.
///
/// ```ignore
/// let mut test = TestBuilder::new().with_content_tables().build().await?;
///
/// let tour = test.content().insert_mock_tour("Serengeti Safari", None, None).await?;
/// let mock = test.email().create_email_endpoint(200, 1);
///
/// // ...exercise the code under test...
///
/// mock.assert();
/// test.assert_mocks();
/// ```
pub struct TestContext {
    /// Connection to the in-memory SQLite database
    pub db: DatabaseConnection,

    /// Mock HTTP server for the email provider
    pub(crate) server: ServerGuard,
    /// Mock endpoints created by the builder
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    /// Connects to a fresh in-memory database and starts the mock server.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with no tables and no mocks
    /// - `Err(TestError::DbErr)` - Database connection failed
    pub(crate) async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext {
            db,
            server,
            mocks: Vec::new(),
        })
    }

    /// Executes CREATE TABLE statements against the test database.
    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Base URL of the mock server
    pub fn server_url(&self) -> String {
        self.server.url()
    }

    /// URL the email provider mock accepts messages on
    pub fn email_api_url(&self) -> String {
        format!("{}{}", self.server.url(), TEST_EMAIL_PATH)
    }

    /// Asserts every mock created by the builder was called the expected number of times.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
