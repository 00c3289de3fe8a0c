use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Rating {
    pub id: i64,
    pub movie_id: i64,
    pub source: String,
    pub value: String,
}
