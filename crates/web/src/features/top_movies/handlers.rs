use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::ranking::{TopMovieEntry, TopMoviesFilter},
    params::RawParams,
};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/top-movies",
    params(
        ("comments_after" = String, Query, description = "Exclusive lower bound on comment creation time"),
        ("comments_before" = String, Query, description = "Exclusive upper bound on comment creation time"),
        ("movie_id" = Option<Vec<i64>>, Query, description = "Restrict the ranking to these movies, repeated or comma separated")
    ),
    responses(
        (status = 200, description = "Movies ranked by comments in the window", body = Vec<TopMovieEntry>),
        (status = 400, description = "Missing or invalid window")
    ),
    tag = "top-movies"
)]
pub async fn get_top_movies(
    State(db): State<Database>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Response, WebError> {
    let filter = TopMoviesFilter::from_params(&RawParams::from(params))?;
    tracing::debug!("Ranking movies with {:?}", filter);

    let ranking = services::top_movies(db.pool(), &filter).await?;

    Ok(Json(ranking).into_response())
}
