use provider::MovieProvider;
use sqlx::PgPool;
use storage::{dto::movie::MovieResponse, repository::movie::MovieRepository};
use validator::Validate;

use crate::error::ApiResult;

/// List all movies with their ratings
pub async fn list_movies(pool: &PgPool) -> storage::error::Result<Vec<MovieResponse>> {
    let repo = MovieRepository::new(pool);
    repo.list().await
}

/// Look the title up on the provider and store what it returns
pub async fn create_movie(
    pool: &PgPool,
    provider: &dyn MovieProvider,
    title: &str,
) -> ApiResult<MovieResponse> {
    let movie = provider.fetch(title).await?;
    tracing::debug!("{} returned {:?} for {:?}", provider.name(), movie.title, title);

    movie.validate()?;

    let repo = MovieRepository::new(pool);
    Ok(repo.create(&movie).await?)
}
