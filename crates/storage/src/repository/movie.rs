use std::collections::HashMap;

use sqlx::PgPool;

use crate::dto::movie::{MovieResponse, NewMovie};
use crate::error::{Result, StorageError};
use crate::models::{Movie, Rating};

const MOVIE_COLUMNS: &str = r#"
    id, actors, awards, box_office, country, dvd, director, genre, language,
    metascore, plot, poster, production, rated, released, runtime, title, type,
    website, writer, year, imdb_id, imdb_rating, imdb_votes
"#;

/// Repository for movies and their ratings
pub struct MovieRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> MovieRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all movies by id, each with its ratings
    pub async fn list(&self) -> Result<Vec<MovieResponse>> {
        let movies = sqlx::query_as::<_, Movie>(&format!(
            "SELECT {MOVIE_COLUMNS} FROM movies ORDER BY id"
        ))
        .fetch_all(self.pool)
        .await?;

        let ratings = sqlx::query_as::<_, Rating>(
            r#"
            SELECT id, movie_id, source, value
            FROM ratings
            ORDER BY movie_id, source
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        let mut ratings_by_movie: HashMap<i64, Vec<Rating>> = HashMap::new();
        for rating in ratings {
            ratings_by_movie
                .entry(rating.movie_id)
                .or_default()
                .push(rating);
        }

        Ok(movies
            .into_iter()
            .map(|movie| {
                let ratings = ratings_by_movie.remove(&movie.id).unwrap_or_default();
                MovieResponse::new(movie, ratings)
            })
            .collect())
    }

    pub async fn exists(&self, id: i64) -> Result<bool> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM movies WHERE id = $1)")
                .bind(id)
                .fetch_one(self.pool)
                .await?;

        Ok(exists)
    }

    /// Insert a movie and its ratings in a single transaction
    pub async fn create(&self, new_movie: &NewMovie) -> Result<MovieResponse> {
        let mut tx = self.pool.begin().await?;

        let movie = sqlx::query_as::<_, Movie>(&format!(
            r#"
            INSERT INTO movies (
                actors, awards, box_office, country, dvd, director, genre, language,
                metascore, plot, poster, production, rated, released, runtime, title, type,
                website, writer, year, imdb_id, imdb_rating, imdb_votes
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16,
                    $17, $18, $19, $20, $21, $22, $23)
            RETURNING {MOVIE_COLUMNS}
            "#
        ))
        .bind(&new_movie.actors)
        .bind(&new_movie.awards)
        .bind(&new_movie.box_office)
        .bind(&new_movie.country)
        .bind(&new_movie.dvd)
        .bind(&new_movie.director)
        .bind(&new_movie.genre)
        .bind(&new_movie.language)
        .bind(new_movie.metascore)
        .bind(&new_movie.plot)
        .bind(&new_movie.poster)
        .bind(&new_movie.production)
        .bind(&new_movie.rated)
        .bind(new_movie.released)
        .bind(&new_movie.runtime)
        .bind(&new_movie.title)
        .bind(&new_movie.kind)
        .bind(&new_movie.website)
        .bind(&new_movie.writer)
        .bind(new_movie.year)
        .bind(&new_movie.imdb_id)
        .bind(new_movie.imdb_rating)
        .bind(new_movie.imdb_votes)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_check_violation)?;

        let mut ratings = Vec::with_capacity(new_movie.ratings.len());
        for new_rating in &new_movie.ratings {
            let rating = sqlx::query_as::<_, Rating>(
                r#"
                INSERT INTO ratings (movie_id, source, value)
                VALUES ($1, $2, $3)
                RETURNING id, movie_id, source, value
                "#,
            )
            .bind(movie.id)
            .bind(&new_rating.source)
            .bind(&new_rating.value)
            .fetch_one(&mut *tx)
            .await?;

            ratings.push(rating);
        }

        tx.commit().await?;

        ratings.sort_by(|a, b| a.source.cmp(&b.source));

        tracing::info!(
            "Stored movie {} ({}) with {} ratings",
            movie.id,
            movie.title,
            ratings.len()
        );

        Ok(MovieResponse::new(movie, ratings))
    }
}

fn map_check_violation(e: sqlx::Error) -> StorageError {
    let error = StorageError::from(e);
    if error.is_check_violation() {
        return StorageError::ConstraintViolation("Movie attributes out of range".to_string());
    }
    error
}
