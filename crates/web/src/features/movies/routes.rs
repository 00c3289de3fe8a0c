use axum::{Router, routing::get};

use super::handlers::{create_movie, list_movies};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(list_movies).post(create_movie))
}
