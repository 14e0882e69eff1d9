// src/config.rs
use std::{env, time::Duration};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    listen_addr: String,
    site_base_url: String,
    sitemap_page_size: u32,
    name_cache_ttl: Duration,
    database_max_connections: u32,
    database_acquire_timeout: Duration,
    rate_limit_enabled: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

const MAX_SITEMAP_PAGE_SIZE: u32 = 50_000;

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_site_base_url() -> String {
    "https://ifsclookup.in".into()
}

fn parse_or<T: std::str::FromStr>(
    key: &'static str,
    raw: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match raw.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) {
        Some(value) => value
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid(format!("{key} has an invalid value: {value}"))),
        None => Ok(default),
    }
}

impl AppConfig {
    /// Build configuration from environment variables, loading a `.env` file
    /// first when present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_source(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_source<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .or_else(|| lookup("NEON_CONNECTION_STRING"))
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(default_listen_addr);

        let site_base_url = lookup("SITE_BASE_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(default_site_base_url);
        if !(site_base_url.starts_with("http://") || site_base_url.starts_with("https://")) {
            return Err(ConfigError::Invalid(
                "SITE_BASE_URL must be an absolute http(s) URL".into(),
            ));
        }

        let sitemap_page_size =
            parse_or("SITEMAP_PAGE_SIZE", lookup("SITEMAP_PAGE_SIZE"), 10_000_u32)?;
        if sitemap_page_size == 0 || sitemap_page_size > MAX_SITEMAP_PAGE_SIZE {
            return Err(ConfigError::Invalid(format!(
                "SITEMAP_PAGE_SIZE must be between 1 and {MAX_SITEMAP_PAGE_SIZE}"
            )));
        }

        let name_cache_ttl_secs = parse_or(
            "NAME_CACHE_TTL_SECONDS",
            lookup("NAME_CACHE_TTL_SECONDS"),
            3600_u64,
        )?;

        let database_max_connections = parse_or(
            "DATABASE_MAX_CONNECTIONS",
            lookup("DATABASE_MAX_CONNECTIONS"),
            16_u32,
        )?;

        let acquire_timeout_secs = parse_or(
            "DATABASE_ACQUIRE_TIMEOUT_SECONDS",
            lookup("DATABASE_ACQUIRE_TIMEOUT_SECONDS"),
            5_u64,
        )?;

        let rate_limit_enabled = lookup("RATE_LIMIT_ENABLED")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(true);

        Ok(Self {
            database_url,
            listen_addr,
            site_base_url,
            sitemap_page_size,
            name_cache_ttl: Duration::from_secs(name_cache_ttl_secs),
            database_max_connections,
            database_acquire_timeout: Duration::from_secs(acquire_timeout_secs),
            rate_limit_enabled,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    /// Absolute site origin without a trailing slash.
    pub fn site_base_url(&self) -> &str {
        &self.site_base_url
    }

    pub fn sitemap_page_size(&self) -> u32 {
        self.sitemap_page_size
    }

    /// TTL of memoised bank/state/city name lists; zero disables the cache.
    pub fn name_cache_ttl(&self) -> Duration {
        self.name_cache_ttl
    }

    pub fn database_max_connections(&self) -> u32 {
        self.database_max_connections
    }

    pub fn database_acquire_timeout(&self) -> Duration {
        self.database_acquire_timeout
    }

    pub fn rate_limit_enabled(&self) -> bool {
        self.rate_limit_enabled
    }
}
