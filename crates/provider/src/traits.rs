use crate::{NormalizedMovie, Result};

/// Source of movie metadata, looked up by free-text title.
#[async_trait::async_trait]
pub trait MovieProvider: Send + Sync {
    async fn fetch(&self, title: &str) -> Result<NormalizedMovie>;

    fn name(&self) -> &'static str;
}
