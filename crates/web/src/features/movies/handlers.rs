use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use provider::MovieProvider;
use storage::{
    Database,
    dto::movie::{CreateMovieRequest, MovieResponse},
};
use validator::Validate;

use crate::error::{WebError, json_or_default};

use super::services;

#[utoipa::path(
    get,
    path = "/api/movies",
    responses(
        (status = 200, description = "List all movies with their ratings", body = Vec<MovieResponse>)
    ),
    tag = "movies"
)]
pub async fn list_movies(State(db): State<Database>) -> Result<Response, WebError> {
    let movies = services::list_movies(db.pool()).await?;

    Ok(Json(movies).into_response())
}

#[utoipa::path(
    post,
    path = "/api/movies",
    request_body = CreateMovieRequest,
    responses(
        (status = 201, description = "Movie fetched and stored", body = MovieResponse),
        (status = 400, description = "Missing title or the movie could not be fetched")
    ),
    tag = "movies"
)]
pub async fn create_movie(
    State(db): State<Database>,
    State(provider): State<Arc<dyn MovieProvider>>,
    payload: Result<Json<CreateMovieRequest>, JsonRejection>,
) -> Result<Response, WebError> {
    let request = json_or_default(payload)?;
    request.validate()?;

    let title = request.title.unwrap_or_default();
    let movie = services::create_movie(db.pool(), provider.as_ref(), title.trim()).await?;

    Ok((StatusCode::CREATED, Json(movie)).into_response())
}
