//! Placeholder email provider settings used by tests.
//!
//! None of these are real credentials. The API URL itself is only known once the mock
//! server is running, see [`TestContext::email_api_url`](crate::TestContext::email_api_url).

/// Path the mock email provider accepts messages on.
pub static TEST_EMAIL_PATH: &str = "/v1/messages";

/// Bearer token expected by the mock email endpoint.
pub static TEST_EMAIL_API_KEY: &str = "test_email_api_key";

/// Sender address for quote notifications in tests.
pub static TEST_EMAIL_FROM: &str = "bookings@example.com";

/// Agency inbox receiving quote notifications in tests.
pub static TEST_QUOTE_NOTIFY_ADDRESS: &str = "agents@example.com";
