use axum::Router;

use crate::features::{comments, movies, top_movies};
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .nest("/movies", movies::routes::routes())
        .nest("/comments", comments::routes::routes())
        .nest("/top-movies", top_movies::routes::routes());

    Router::new().nest("/api", api).with_state(state)
}
