use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::Comment;
use crate::params::{
    Constraint, FieldErrors, ParamKind, ParamSpec, RawParams, validate as validate_params,
};

/// Request payload for commenting on a movie
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCommentRequest {
    #[validate(required(message = "This field is required."))]
    pub movie: Option<i64>,

    #[validate(required(message = "This field is required."))]
    #[validate(custom(function = "super::validate_not_blank"))]
    #[validate(length(max = 200, message = "Ensure this field has no more than 200 characters."))]
    pub content: Option<String>,
}

/// Comment as exposed by the API
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentResponse {
    pub movie: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            movie: comment.movie_id,
            content: comment.content,
            created_at: comment.created_at,
        }
    }
}

/// Filters accepted by the comment listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentFilter {
    pub movie: Option<i64>,
    /// Case-insensitive substring of the content
    pub search: Option<String>,
}

impl CommentFilter {
    pub fn specs() -> Vec<ParamSpec> {
        vec![
            ParamSpec::new("movie", ParamKind::Number),
            ParamSpec::new("search", ParamKind::Text).with(Constraint::MaxLength(200)),
        ]
    }

    pub fn from_params(raw: &RawParams) -> Result<Self, FieldErrors> {
        let params = validate_params(&Self::specs(), raw)?;

        Ok(Self {
            movie: params.number("movie"),
            search: params.text("search").map(str::to_string),
        })
    }
}
