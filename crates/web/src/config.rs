use std::time::Duration;

use anyhow::{Context, Result};
use provider::omdb::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub omdb_api_key: String,
    pub omdb_base_url: String,
    pub omdb_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").context("Cannot load HOST env variable")?,
            port: std::env::var("PORT")
                .context("PORT must be a number")?
                .parse()?,
            database_url: std::env::var("DATABASE_URL")
                .context("Cannot load DATABASE_URL env variable")?,
            omdb_api_key: std::env::var("OMDB_API_KEY")
                .context("Cannot load OMDB_API_KEY env variable")?,
            omdb_base_url: std::env::var("OMDB_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            omdb_timeout: match std::env::var("OMDB_TIMEOUT_SECS") {
                Ok(secs) => Duration::from_secs(
                    secs.parse()
                        .context("OMDB_TIMEOUT_SECS must be a number of seconds")?,
                ),
                Err(_) => DEFAULT_TIMEOUT,
            },
        })
    }
}
