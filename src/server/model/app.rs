use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    error::Error,
    model::db::{AccommodationModel, BlogPostModel, DestinationModel, TourModel},
    pricing::season::SeasonCalendar,
    service::{notify::Mailer, slug::SlugResolver},
    util::cache::{CacheConfig, TtlCache},
};

/// Slug lookup caches, one per content type.
#[derive(Clone, Debug)]
pub struct ContentCache {
    pub tours: TtlCache<String, TourModel>,
    pub destinations: TtlCache<String, DestinationModel>,
    pub accommodations: TtlCache<String, AccommodationModel>,
    pub posts: TtlCache<String, BlogPostModel>,
}

impl ContentCache {
    pub fn new(config: CacheConfig) -> Self {
        Self {
            tours: TtlCache::new(config),
            destinations: TtlCache::new(config),
            accommodations: TtlCache::new(config),
            posts: TtlCache::new(config),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub cache: ContentCache,
    pub slugs: SlugResolver,
    pub seasons: Arc<SeasonCalendar>,
    /// Absent when the email provider is not configured
    pub mailer: Option<Mailer>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, config: &Config) -> Result<Self, Error> {
        let mailer = match &config.email {
            Some(email) => Some(Mailer::new(email.clone())?),
            None => None,
        };

        Ok(Self {
            db,
            cache: ContentCache::new(config.cache),
            slugs: SlugResolver::new(config.slug_max_attempts),
            seasons: Arc::new(config.seasons.clone()),
            mailer,
        })
    }
}
