use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Comment {
    pub id: i64,
    pub movie_id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
}
