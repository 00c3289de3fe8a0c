use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{Movie, Rating};

/// Request payload for adding a movie by title
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateMovieRequest {
    #[validate(required(message = "This field is required."))]
    #[validate(custom(function = "super::validate_not_blank"))]
    #[validate(length(max = 200, message = "Ensure this field has no more than 200 characters."))]
    pub title: Option<String>,
}

/// Rating as exposed on a movie
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RatingResponse {
    pub source: String,
    pub value: String,
}

/// Movie with its ratings, ordered by source
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MovieResponse {
    #[serde(flatten)]
    pub movie: Movie,
    pub ratings: Vec<RatingResponse>,
}

/// Movie attributes ready to be persisted, as produced by a metadata provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct NewMovie {
    #[validate(length(max = 200))]
    pub actors: String,
    #[validate(length(max = 200))]
    pub awards: String,
    #[validate(length(max = 200))]
    pub box_office: String,
    #[validate(length(max = 200))]
    pub country: String,
    #[validate(length(max = 200))]
    pub dvd: String,
    #[validate(length(max = 200))]
    pub director: String,
    #[validate(length(max = 200))]
    pub genre: String,
    #[validate(length(max = 200))]
    pub language: String,
    #[validate(range(min = 0, max = 100, message = "Ensure this value is between 0 and 100."))]
    pub metascore: i32,
    #[validate(length(max = 1000))]
    pub plot: String,
    #[validate(length(max = 200))]
    pub poster: String,
    #[validate(length(max = 200))]
    pub production: String,
    #[validate(length(max = 200))]
    pub rated: String,
    pub released: NaiveDate,
    #[validate(length(max = 200))]
    pub runtime: String,
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[serde(rename = "type")]
    #[validate(length(max = 200))]
    pub kind: String,
    #[validate(length(max = 200))]
    pub website: String,
    #[validate(length(max = 200))]
    pub writer: String,
    pub year: i32,
    #[validate(length(max = 200))]
    pub imdb_id: String,
    pub imdb_rating: Decimal,
    #[validate(range(min = 0, message = "Ensure this value is greater than or equal to 0."))]
    pub imdb_votes: i64,
    #[validate(nested)]
    pub ratings: Vec<NewRating>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct NewRating {
    #[validate(length(min = 1, max = 200))]
    pub source: String,
    #[validate(length(max = 200))]
    pub value: String,
}

impl From<Rating> for RatingResponse {
    fn from(rating: Rating) -> Self {
        Self {
            source: rating.source,
            value: rating.value,
        }
    }
}

impl MovieResponse {
    pub fn new(movie: Movie, ratings: Vec<Rating>) -> Self {
        Self {
            movie,
            ratings: ratings.into_iter().map(RatingResponse::from).collect(),
        }
    }
}
