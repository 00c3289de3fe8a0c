use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Movie {
    pub id: i64,
    pub actors: String,
    pub awards: String,
    pub box_office: String,
    pub country: String,
    pub dvd: String,
    pub director: String,
    pub genre: String,
    pub language: String,
    pub metascore: i32,
    pub plot: String,
    pub poster: String,
    pub production: String,
    pub rated: String,
    pub released: NaiveDate,
    pub runtime: String,
    pub title: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
    pub website: String,
    pub writer: String,
    pub year: i32,
    pub imdb_id: String,
    pub imdb_rating: Decimal,
    pub imdb_votes: i64,
}
