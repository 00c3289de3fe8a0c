use axum::{Router, routing::get};

use super::handlers::{create_comment, list_comments};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(list_comments).post(create_comment))
}
