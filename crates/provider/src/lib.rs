pub mod error;
pub mod keys;
pub mod omdb;
pub mod traits;

pub use error::{ProviderError, Result};
pub use omdb::{OmdbClient, OmdbConfig, OmdbProvider};
pub use traits::MovieProvider;

/// Movie attributes normalized to the catalog's field names.
pub use storage::dto::movie::{NewMovie as NormalizedMovie, NewRating as NormalizedRating};
