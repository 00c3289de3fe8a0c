use sqlx::PgPool;
use storage::{
    dto::comment::CommentFilter,
    models::Comment,
    params::FieldErrors,
    repository::{comment::CommentRepository, movie::MovieRepository},
};

use crate::error::ApiResult;

pub const UNKNOWN_MOVIE: &str =
    "Select a valid choice. That choice is not one of the available choices.";

/// List comments matching the filter, oldest first within each movie
pub async fn list_comments(pool: &PgPool, filter: &CommentFilter) -> ApiResult<Vec<Comment>> {
    if let Some(movie) = filter.movie {
        if !MovieRepository::new(pool).exists(movie).await? {
            return Err(FieldErrors::single("movie", UNKNOWN_MOVIE).into());
        }
    }

    let repo = CommentRepository::new(pool);
    Ok(repo.list(filter).await?)
}

/// Attach a comment to an existing movie
pub async fn create_comment(
    pool: &PgPool,
    movie_id: i64,
    content: &str,
) -> storage::error::Result<Comment> {
    let repo = CommentRepository::new(pool);
    repo.create(movie_id, content).await
}
