use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProviderError>;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("No movie found for title {title:?}: {reason}")]
    NotFound { title: String, reason: String },

    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Provider answered with status {0}")]
    StatusError(reqwest::StatusCode),

    #[error("Failed to parse JSON: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Malformed movie data: {0}")]
    MalformedError(String),
}

impl ProviderError {
    /// The provider was reachable but knows no such movie.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
