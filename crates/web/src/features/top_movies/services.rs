use sqlx::PgPool;
use storage::{
    dto::ranking::{TopMovieEntry, TopMoviesFilter},
    error::Result,
    services::ranking,
};

/// Dense ranking of movies by comments received inside the window
pub async fn top_movies(pool: &PgPool, filter: &TopMoviesFilter) -> Result<Vec<TopMovieEntry>> {
    ranking::top_movies(pool, filter).await
}
