use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use super::models::OmdbMovie;
use crate::error::{ProviderError, Result};
use crate::keys::normalize_keys;

pub const DEFAULT_BASE_URL: &str = "http://www.omdbapi.com/";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct OmdbConfig {
    pub base_url: String,
    pub api_key: String,
    /// Upper bound for the whole lookup, connection included
    pub timeout: Duration,
}

impl OmdbConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

pub struct OmdbClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl OmdbClient {
    pub fn new(config: OmdbConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            base_url: config.base_url,
            api_key: config.api_key,
            client,
        })
    }

    /// Looks a movie up by title, with the full plot.
    pub async fn fetch_by_title(&self, title: &str) -> Result<OmdbMovie> {
        tracing::info!("Looking up {:?} on OMDb", title);

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("apikey", self.api_key.as_str()),
                ("t", title),
                ("plot", "full"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ProviderError::StatusError(response.status()));
        }

        let body = response.text().await?;
        let mut data = normalize_keys(serde_json::from_str::<Value>(&body)?);

        let found = data
            .as_object_mut()
            .and_then(|object| object.remove("response"))
            .is_some_and(|status| status.as_str() == Some("True"));

        if !found {
            let reason = data
                .get("error")
                .and_then(Value::as_str)
                .unwrap_or("Movie not found!")
                .to_string();
            return Err(ProviderError::NotFound {
                title: title.to_string(),
                reason,
            });
        }

        Ok(serde_json::from_value(data)?)
    }
}
