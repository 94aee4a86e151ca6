// src/config.rs
use std::env;
use thiserror::Error;

/// Canonical feed page size. An earlier revision of the site paginated by 3;
/// 9 is the value the AJAX-aware feed settled on.
const DEFAULT_ARTICLE_PAGE_SIZE: u32 = 9;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    listen_addr: String,
    allowed_origins: Vec<String>,
    article_page_size: u32,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://orgsite.db?mode=rwc".into()
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

impl AppConfig {
    /// Build configuration from environment variables. Uses sensible defaults
    /// for optional values and validates the rest.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| default_database_url());
        let listen_addr = env::var("LISTEN_ADDR").unwrap_or_else(|_| default_listen_addr());

        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .ok()
            .map(|s| s.split(',').map(|p| p.trim().to_string()).collect())
            .unwrap_or_else(default_allowed_origins);

        let article_page_size = match env::var("ARTICLE_PAGE_SIZE") {
            Ok(raw) => raw.parse::<u32>().ok().filter(|n| *n > 0).ok_or_else(|| {
                ConfigError::Invalid("ARTICLE_PAGE_SIZE must be a positive integer".into())
            })?,
            Err(_) => DEFAULT_ARTICLE_PAGE_SIZE,
        };

        Ok(Self {
            database_url,
            listen_addr,
            allowed_origins,
            article_page_size,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    pub fn article_page_size(&self) -> u32 {
        self.article_page_size
    }
}
