use sqlx::{PgPool, QueryBuilder};

use crate::dto::ranking::{CommentCount, TopMoviesFilter};
use crate::error::Result;

pub struct RankingRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> RankingRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Counts each candidate movie's comments strictly inside the window.
    ///
    /// Movies without matching comments are returned with a count of zero.
    pub async fn comment_counts(&self, filter: &TopMoviesFilter) -> Result<Vec<CommentCount>> {
        let mut query = QueryBuilder::new(
            r#"
            SELECT
                m.id AS movie_id,
                COUNT(c.id) FILTER (WHERE c.created_at >
            "#,
        );
        query.push_bind(filter.window.after);
        query.push(" AND c.created_at < ");
        query.push_bind(filter.window.before);
        query.push(
            r#"
                ) AS total_comments
            FROM movies m
            LEFT JOIN comments c ON c.movie_id = m.id
            WHERE 1=1
            "#,
        );

        if let Some(ref movie_ids) = filter.movie_ids {
            query.push(" AND m.id = ANY(");
            query.push_bind(movie_ids);
            query.push(")");
        }

        query.push(" GROUP BY m.id ORDER BY m.id");

        let counts = query
            .build_query_as::<CommentCount>()
            .fetch_all(self.pool)
            .await?;

        Ok(counts)
    }
}
