//! Environment configuration.
//!
//! [`Config::from_env`] reads every setting once at startup. Parsing goes through
//! [`Config::from_vars`] with an injectable lookup so tests never touch the process
//! environment.

use std::{net::SocketAddr, str::FromStr, time::Duration};

use crate::server::{
    error::config::ConfigError, pricing::season::SeasonCalendar, service::slug::SlugResolver,
    util::cache::CacheConfig,
};

/// Email provider settings used for quote notifications.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailConfig {
    /// Endpoint accepting `POST`ed JSON messages
    pub api_url: String,
    pub api_key: String,
    /// Sender address of notifications
    pub from: String,
    /// Agency inbox receiving quote notifications
    pub notify_address: String,
}

impl EmailConfig {
    const VARS: [&'static str; 4] = [
        "EMAIL_API_URL",
        "EMAIL_API_KEY",
        "EMAIL_FROM",
        "QUOTE_NOTIFY_ADDRESS",
    ];

    /// Reads the email settings, which are optional as a group.
    ///
    /// # Returns
    /// - `Ok(None)` - None of the variables are set
    /// - `Ok(Some(EmailConfig))` - All of the variables are set
    /// - `Err(ConfigError::MissingEnvVar)` - Only some of the variables are set
    fn from_vars<F>(lookup: &F) -> Result<Option<Self>, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let values = Self::VARS.map(lookup);

        if values.iter().all(Option::is_none) {
            return Ok(None);
        }

        let [api_url, api_key, from, notify_address] = values;
        let require = |value: Option<String>, var: &str| {
            value.ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
        };

        Ok(Some(Self {
            api_url: require(api_url, Self::VARS[0])?,
            api_key: require(api_key, Self::VARS[1])?,
            from: require(from, Self::VARS[2])?,
            notify_address: require(notify_address, Self::VARS[3])?,
        }))
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub cache: CacheConfig,
    pub slug_max_attempts: u32,
    pub seasons: SeasonCalendar,
    pub email: Option<EmailConfig>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Empty values count as unset.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());

        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let bind_addr = parse_or(
            "BIND_ADDR",
            lookup("BIND_ADDR"),
            SocketAddr::from(([0, 0, 0, 0], 8080)),
        )?;

        let ttl_secs: u64 = parse_or(
            "CACHE_TTL_SECS",
            lookup("CACHE_TTL_SECS"),
            CacheConfig::DEFAULT_TTL.as_secs(),
        )?;
        if ttl_secs > CacheConfig::MAX_TTL.as_secs() {
            return Err(ConfigError::invalid(
                "CACHE_TTL_SECS",
                format!("must be at most {}", CacheConfig::MAX_TTL.as_secs()),
            ));
        }

        let cache = CacheConfig {
            capacity: parse_or(
                "CACHE_CAPACITY",
                lookup("CACHE_CAPACITY"),
                CacheConfig::DEFAULT_CAPACITY,
            )?,
            ttl: Duration::from_secs(ttl_secs),
        };

        let slug_max_attempts: u32 = parse_or(
            "SLUG_MAX_ATTEMPTS",
            lookup("SLUG_MAX_ATTEMPTS"),
            SlugResolver::DEFAULT_MAX_ATTEMPTS,
        )?;
        if slug_max_attempts == 0 {
            return Err(ConfigError::invalid(
                "SLUG_MAX_ATTEMPTS",
                "must be at least 1",
            ));
        }

        let seasons = match lookup(SeasonCalendar::ENV_VAR) {
            Some(json) => SeasonCalendar::from_json(&json)?,
            None => SeasonCalendar::default(),
        };

        let email = EmailConfig::from_vars(&lookup)?;

        Ok(Self {
            database_url,
            bind_addr,
            cache,
            slug_max_attempts,
            seasons,
            email,
        })
    }
}

fn parse_or<T>(var: &str, value: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match value {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::invalid(var, e)),
    }
}
