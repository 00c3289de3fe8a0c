mod client;
#[cfg(test)]
mod fixtures;
mod models;
mod transformer;

pub use client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, OmdbClient, OmdbConfig};
pub use models::{OmdbMovie, OmdbRating};
pub use transformer::to_normalized_movie;

use crate::{MovieProvider, NormalizedMovie, Result};
use tracing::info;

/// Metadata provider backed by the OMDb API.
pub struct OmdbProvider {
    client: OmdbClient,
}

impl OmdbProvider {
    pub fn new(config: OmdbConfig) -> Result<Self> {
        Ok(Self {
            client: OmdbClient::new(config)?,
        })
    }
}

#[async_trait::async_trait]
impl MovieProvider for OmdbProvider {
    async fn fetch(&self, title: &str) -> Result<NormalizedMovie> {
        let movie = self.client.fetch_by_title(title).await?;
        let normalized = to_normalized_movie(movie)?;

        info!(
            "Fetched {:?} ({}) with {} ratings",
            normalized.title,
            normalized.imdb_id,
            normalized.ratings.len()
        );

        Ok(normalized)
    }

    fn name(&self) -> &'static str {
        "OMDb"
    }
}
