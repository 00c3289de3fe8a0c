use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::error::{Result, StorageError};
use crate::params::{
    Constraint, FieldErrors, ParamKind, ParamSpec, REQUIRED, RawParams, parse_datetime,
    validate as validate_params,
};

pub const COMMENTS_AFTER: &str = "comments_after";
pub const COMMENTS_BEFORE: &str = "comments_before";
pub const MOVIE_ID: &str = "movie_id";

/// Open interval of comment creation times. Both bounds are exclusive.
///
/// `after >= before` is accepted and simply matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentWindow {
    pub after: DateTime<Utc>,
    pub before: DateTime<Utc>,
}

impl CommentWindow {
    pub fn new(after: DateTime<Utc>, before: DateTime<Utc>) -> Self {
        Self { after, before }
    }

    /// Builds a window from raw timestamp strings.
    pub fn parse(after: &str, before: &str) -> Result<Self> {
        let after = parse_datetime(after)
            .ok_or_else(|| StorageError::InvalidWindow(format!("unparseable after: {after:?}")))?;
        let before = parse_datetime(before).ok_or_else(|| {
            StorageError::InvalidWindow(format!("unparseable before: {before:?}"))
        })?;

        Ok(Self { after, before })
    }
}

/// Validated input of the top movies ranking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopMoviesFilter {
    pub window: CommentWindow,
    /// Restricts the candidate movies when present
    pub movie_ids: Option<Vec<i64>>,
}

impl TopMoviesFilter {
    pub fn specs() -> Vec<ParamSpec> {
        vec![
            ParamSpec::new(MOVIE_ID, ParamKind::NumberList).with(Constraint::Range {
                min: Some(1),
                max: None,
            }),
            ParamSpec::new(COMMENTS_AFTER, ParamKind::DateTime).required(),
            ParamSpec::new(COMMENTS_BEFORE, ParamKind::DateTime).required(),
        ]
    }

    pub fn from_params(raw: &RawParams) -> std::result::Result<Self, FieldErrors> {
        let params = validate_params(&Self::specs(), raw)?;

        let after = params
            .datetime(COMMENTS_AFTER)
            .ok_or_else(|| FieldErrors::single(COMMENTS_AFTER, REQUIRED))?;
        let before = params
            .datetime(COMMENTS_BEFORE)
            .ok_or_else(|| FieldErrors::single(COMMENTS_BEFORE, REQUIRED))?;

        Ok(Self {
            window: CommentWindow::new(after, before),
            movie_ids: params.number_list(MOVIE_ID).map(<[i64]>::to_vec),
        })
    }
}

/// Number of comments a movie received inside the window
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRow)]
pub struct CommentCount {
    pub movie_id: i64,
    pub total_comments: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TopMovieEntry {
    pub movie_id: i64,
    pub total_comments: i64,
    pub rank: i64,
}
