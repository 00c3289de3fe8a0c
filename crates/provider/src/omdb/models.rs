use serde::{Deserialize, Serialize};

/// OMDb title lookup payload, after key normalization.
///
/// Every value arrives as a string; conversion to catalog types happens in
/// the transformer.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OmdbMovie {
    pub title: String,
    pub year: String,
    pub rated: String,
    pub released: String,
    pub runtime: String,
    pub genre: String,
    pub director: String,
    pub writer: String,
    pub actors: String,
    pub plot: String,
    pub language: String,
    pub country: String,
    pub awards: String,
    pub poster: String,
    #[serde(default)]
    pub ratings: Vec<OmdbRating>,
    pub metascore: String,
    pub imdb_rating: String,
    pub imdb_votes: String,
    pub imdb_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default = "not_available")]
    pub dvd: String,
    #[serde(default = "not_available")]
    pub box_office: String,
    #[serde(default = "not_available")]
    pub production: String,
    #[serde(default = "not_available")]
    pub website: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OmdbRating {
    pub source: String,
    pub value: String,
}

fn not_available() -> String {
    "N/A".to_string()
}
