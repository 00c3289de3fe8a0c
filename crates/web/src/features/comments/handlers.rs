use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::comment::{CommentFilter, CommentResponse, CreateCommentRequest},
    params::RawParams,
};
use validator::Validate;

use crate::error::{WebError, json_or_default};

use super::services;

#[utoipa::path(
    get,
    path = "/api/comments",
    params(
        ("movie" = Option<i64>, Query, description = "Only comments on this movie"),
        ("search" = Option<String>, Query, description = "Case-insensitive text the content must contain")
    ),
    responses(
        (status = 200, description = "Comments ordered by movie then creation time", body = Vec<CommentResponse>),
        (status = 400, description = "Invalid filter")
    ),
    tag = "comments"
)]
pub async fn list_comments(
    State(db): State<Database>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Response, WebError> {
    let filter = CommentFilter::from_params(&RawParams::from(params))?;

    let comments = services::list_comments(db.pool(), &filter).await?;
    let response: Vec<CommentResponse> =
        comments.into_iter().map(CommentResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    post,
    path = "/api/comments",
    request_body = CreateCommentRequest,
    responses(
        (status = 201, description = "Comment created", body = CommentResponse),
        (status = 400, description = "Invalid payload or unknown movie")
    ),
    tag = "comments"
)]
pub async fn create_comment(
    State(db): State<Database>,
    payload: Result<Json<CreateCommentRequest>, JsonRejection>,
) -> Result<Response, WebError> {
    let request = json_or_default(payload)?;
    request.validate()?;

    let (Some(movie), Some(content)) = (request.movie, request.content) else {
        return Err(WebError::BadRequest("movie and content are required".to_string()));
    };
    let comment = services::create_comment(db.pool(), movie, &content).await?;

    Ok((StatusCode::CREATED, Json(CommentResponse::from(comment))).into_response())
}
