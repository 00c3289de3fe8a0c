use sqlx::{PgPool, QueryBuilder};

use crate::dto::comment::CommentFilter;
use crate::error::{Result, StorageError};
use crate::models::Comment;

pub struct CommentRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CommentRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List comments ordered by movie and creation time
    pub async fn list(&self, filter: &CommentFilter) -> Result<Vec<Comment>> {
        let mut query = QueryBuilder::new(
            r#"
            SELECT id, movie_id, content, created_at
            FROM comments
            WHERE 1=1
            "#,
        );

        if let Some(movie_id) = filter.movie {
            query.push(" AND movie_id = ");
            query.push_bind(movie_id);
        }

        if let Some(ref search) = filter.search {
            query.push(" AND content ILIKE ");
            query.push_bind(format!("%{}%", escape_like(search)));
        }

        query.push(" ORDER BY movie_id, created_at");

        let comments = query
            .build_query_as::<Comment>()
            .fetch_all(self.pool)
            .await?;

        Ok(comments)
    }

    /// Create a comment; `created_at` is assigned by the database
    pub async fn create(&self, movie_id: i64, content: &str) -> Result<Comment> {
        let comment = sqlx::query_as::<_, Comment>(
            r#"
            INSERT INTO comments (movie_id, content)
            VALUES ($1, $2)
            RETURNING id, movie_id, content, created_at
            "#,
        )
        .bind(movie_id)
        .bind(content)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            let error = StorageError::from(e);
            if error.is_foreign_key_violation() {
                return StorageError::MissingReference {
                    field: "movie",
                    value: movie_id,
                };
            }
            error
        })?;

        Ok(comment)
    }
}

/// Escapes LIKE wildcards so the search matches literally.
fn escape_like(search: &str) -> String {
    let mut escaped = String::with_capacity(search.len());
    for c in search.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
