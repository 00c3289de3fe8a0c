//! Database-backed tests. They need `DATABASE_URL` pointing at a Postgres
//! server the test user may create databases on:
//!
//! `cargo test -p storage -- --ignored`

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use storage::dto::comment::CommentFilter;
use storage::dto::movie::{NewMovie, NewRating};
use storage::dto::ranking::{CommentWindow, TopMoviesFilter};
use storage::error::StorageError;
use storage::repository::comment::CommentRepository;
use storage::repository::movie::MovieRepository;
use storage::services::ranking::top_movies;

fn new_movie(title: &str) -> NewMovie {
    NewMovie {
        actors: "Michael Keaton, Jack Nicholson".to_string(),
        awards: "Won 1 Oscar.".to_string(),
        box_office: "N/A".to_string(),
        country: "USA, UK".to_string(),
        dvd: "25 Mar 1997".to_string(),
        director: "Tim Burton".to_string(),
        genre: "Action, Adventure".to_string(),
        language: "English".to_string(),
        metascore: 69,
        plot: "Gotham City.".to_string(),
        poster: "N/A".to_string(),
        production: "Warner Bros. Pictures".to_string(),
        rated: "PG-13".to_string(),
        released: NaiveDate::from_ymd_opt(1989, 6, 23).unwrap(),
        runtime: "126 min".to_string(),
        title: title.to_string(),
        kind: "movie".to_string(),
        website: "N/A".to_string(),
        writer: "Bob Kane".to_string(),
        year: 1989,
        imdb_id: "tt0096895".to_string(),
        imdb_rating: Decimal::new(76, 1),
        imdb_votes: 311189,
        ratings: vec![
            NewRating {
                source: "Rotten Tomatoes".to_string(),
                value: "71%".to_string(),
            },
            NewRating {
                source: "Internet Movie Database".to_string(),
                value: "7.6/10".to_string(),
            },
        ],
    }
}

async fn insert_comment_at(pool: &PgPool, movie_id: i64, at: DateTime<Utc>) {
    sqlx::query("INSERT INTO comments (movie_id, content, created_at) VALUES ($1, $2, $3)")
        .bind(movie_id)
        .bind("comment")
        .bind(at)
        .execute(pool)
        .await
        .unwrap();
}

fn noon() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2019, 7, 1, 12, 0, 0).unwrap()
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_create_movie_stores_ratings_sorted_by_source(pool: PgPool) {
    let repo = MovieRepository::new(&pool);

    let created = repo.create(&new_movie("Batman")).await.unwrap();

    let sources: Vec<_> = created.ratings.iter().map(|r| r.source.as_str()).collect();
    assert_eq!(sources, ["Internet Movie Database", "Rotten Tomatoes"]);

    let listed = repo.list().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].movie.imdb_votes, 311189);
    assert_eq!(listed[0].ratings, created.ratings);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_out_of_range_movie_is_rolled_back(pool: PgPool) {
    let repo = MovieRepository::new(&pool);
    let mut movie = new_movie("Broken");
    movie.metascore = 150;

    let err = repo.create(&movie).await.unwrap_err();
    assert!(matches!(err, StorageError::ConstraintViolation(_)));

    let ratings: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM ratings")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(ratings, 0);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_deleting_movie_cascades(pool: PgPool) {
    let movie = MovieRepository::new(&pool)
        .create(&new_movie("Batman"))
        .await
        .unwrap();
    CommentRepository::new(&pool)
        .create(movie.movie.id, "Great")
        .await
        .unwrap();

    sqlx::query("DELETE FROM movies WHERE id = $1")
        .bind(movie.movie.id)
        .execute(&pool)
        .await
        .unwrap();

    let remaining: i64 =
        sqlx::query_scalar("SELECT (SELECT COUNT(*) FROM ratings) + (SELECT COUNT(*) FROM comments)")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(remaining, 0);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_comment_on_unknown_movie_is_missing_reference(pool: PgPool) {
    let err = CommentRepository::new(&pool)
        .create(123456789, "First comment!!!")
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        StorageError::MissingReference {
            field: "movie",
            value: 123456789
        }
    ));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_comment_search_is_case_insensitive(pool: PgPool) {
    let movie = MovieRepository::new(&pool)
        .create(&new_movie("Batman"))
        .await
        .unwrap();
    let comments = CommentRepository::new(&pool);
    comments.create(movie.movie.id, "What a GREAT film").await.unwrap();
    comments.create(movie.movie.id, "Meh").await.unwrap();

    let found = comments
        .list(&CommentFilter {
            movie: Some(movie.movie.id),
            search: Some("great".to_string()),
        })
        .await
        .unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].content, "What a GREAT film");
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_window_bounds_are_strict(pool: PgPool) {
    let movie = MovieRepository::new(&pool)
        .create(&new_movie("Batman"))
        .await
        .unwrap();
    let after = noon();
    let before = noon() + Duration::hours(1);

    insert_comment_at(&pool, movie.movie.id, after).await;
    insert_comment_at(&pool, movie.movie.id, before).await;
    insert_comment_at(&pool, movie.movie.id, after + Duration::minutes(30)).await;

    let filter = TopMoviesFilter {
        window: CommentWindow::new(after, before),
        movie_ids: None,
    };
    let ranking = top_movies(&pool, &filter).await.unwrap();

    assert_eq!(ranking.len(), 1);
    assert_eq!(ranking[0].total_comments, 1);
    assert_eq!(ranking[0].rank, 1);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_ranking_includes_silent_movies_and_honours_movie_ids(pool: PgPool) {
    let repo = MovieRepository::new(&pool);
    let first = repo.create(&new_movie("Batman")).await.unwrap().movie.id;
    let second = repo.create(&new_movie("Batman Returns")).await.unwrap().movie.id;
    let third = repo.create(&new_movie("Batman Forever")).await.unwrap().movie.id;

    insert_comment_at(&pool, first, noon()).await;
    insert_comment_at(&pool, third, noon()).await;
    insert_comment_at(&pool, third, noon()).await;

    let window = CommentWindow::new(noon() - Duration::days(1), noon() + Duration::days(1));

    let all = top_movies(
        &pool,
        &TopMoviesFilter {
            window,
            movie_ids: None,
        },
    )
    .await
    .unwrap();
    let rows: Vec<_> = all
        .iter()
        .map(|e| (e.movie_id, e.total_comments, e.rank))
        .collect();
    assert_eq!(rows, vec![(third, 2, 1), (first, 1, 2), (second, 0, 3)]);

    let subset = top_movies(
        &pool,
        &TopMoviesFilter {
            window,
            movie_ids: Some(vec![first, second]),
        },
    )
    .await
    .unwrap();
    let rows: Vec<_> = subset
        .iter()
        .map(|e| (e.movie_id, e.total_comments, e.rank))
        .collect();
    assert_eq!(rows, vec![(first, 1, 1), (second, 0, 2)]);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_ranking_over_empty_catalog(pool: PgPool) {
    let filter = TopMoviesFilter {
        window: CommentWindow::parse("2019-06-30", "2019-07-31").unwrap(),
        movie_ids: None,
    };

    assert!(top_movies(&pool, &filter).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_inverted_window_counts_nothing(pool: PgPool) {
    let repo = MovieRepository::new(&pool);
    let first = repo.create(&new_movie("Batman")).await.unwrap().movie.id;
    let second = repo.create(&new_movie("Batman Returns")).await.unwrap().movie.id;

    insert_comment_at(&pool, first, noon()).await;
    insert_comment_at(&pool, first, noon()).await;
    insert_comment_at(&pool, second, noon()).await;

    let filter = TopMoviesFilter {
        window: CommentWindow::new(noon() + Duration::days(1), noon() - Duration::days(1)),
        movie_ids: None,
    };
    let ranking = top_movies(&pool, &filter).await.unwrap();

    let rows: Vec<_> = ranking
        .iter()
        .map(|e| (e.movie_id, e.total_comments, e.rank))
        .collect();
    assert_eq!(rows, vec![(first, 0, 1), (second, 0, 1)]);
}
