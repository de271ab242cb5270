//! Test utilities for building an [`AppState`] on top of a [`TestContext`].

use std::sync::Arc;

use wayfarer::server::{
    config::EmailConfig,
    model::app::{AppState, ContentCache},
    pricing::season::SeasonCalendar,
    service::{notify::Mailer, slug::SlugResolver},
    util::cache::CacheConfig,
};
use wayfarer_test_utils::{
    constant::{TEST_EMAIL_API_KEY, TEST_EMAIL_FROM, TEST_QUOTE_NOTIFY_ADDRESS},
    TestContext,
};

/// Extension trait for TestContext to create the AppState handlers and services run against
pub trait TestContextExt {
    /// AppState without an email provider
    fn into_app_state(&self) -> AppState;

    /// AppState whose email provider is the context's mock server
    fn into_app_state_with_email(&self) -> AppState;
}

impl TestContextExt for TestContext {
    fn into_app_state(&self) -> AppState {
        AppState {
            db: self.db.clone(),
            cache: ContentCache::new(CacheConfig::default()),
            slugs: SlugResolver::default(),
            seasons: Arc::new(SeasonCalendar::default()),
            mailer: None,
        }
    }

    fn into_app_state_with_email(&self) -> AppState {
        let mailer = Mailer::new(EmailConfig {
            api_url: self.email_api_url(),
            api_key: TEST_EMAIL_API_KEY.to_string(),
            from: TEST_EMAIL_FROM.to_string(),
            notify_address: TEST_QUOTE_NOTIFY_ADDRESS.to_string(),
        })
        .expect("Failed to build mailer for tests");

        AppState {
            mailer: Some(mailer),
            ..self.into_app_state()
        }
    }
}
