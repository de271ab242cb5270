//! Mock email provider endpoint.

use mockito::{Matcher, Mock};

use crate::{
    constant::{TEST_EMAIL_API_KEY, TEST_EMAIL_FROM, TEST_EMAIL_PATH, TEST_QUOTE_NOTIFY_ADDRESS},
    fixtures::email::EmailFixtures,
};

impl<'a> EmailFixtures<'a> {
    /// Create a mock HTTP endpoint for sending a notification email.
    ///
    /// Sets up a mock POST endpoint at [`TEST_EMAIL_PATH`] that only matches requests carrying
    /// the test bearer token and addressed from [`TEST_EMAIL_FROM`] to
    /// [`TEST_QUOTE_NOTIFY_ADDRESS`]. Responds with `status`.
    ///
    /// # Arguments
    /// - `status` - HTTP status code the provider responds with
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Mock` - The created mock endpoint
    pub fn create_email_endpoint(&mut self, status: usize, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("POST", TEST_EMAIL_PATH)
            .match_header(
                "authorization",
                format!("Bearer {}", TEST_EMAIL_API_KEY).as_str(),
            )
            .match_body(Matcher::PartialJson(serde_json::json!({
                "from": TEST_EMAIL_FROM,
                "to": TEST_QUOTE_NOTIFY_ADDRESS,
            })))
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id":"msg_test"}"#)
            .expect(expected_requests)
            .create()
    }
}
