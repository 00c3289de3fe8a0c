use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::models::OmdbMovie;
use crate::{NormalizedMovie, NormalizedRating, ProviderError, Result};

const RELEASED_FORMATS: &[&str] = &["%d %b %Y", "%Y-%m-%d"];

/// Converts an OMDb payload into catalog attributes.
pub fn to_normalized_movie(movie: OmdbMovie) -> Result<NormalizedMovie> {
    let metascore = i32::try_from(parse_digits("metascore", &movie.metascore)?)
        .map_err(|_| malformed("metascore", &movie.metascore))?;

    Ok(NormalizedMovie {
        metascore,
        imdb_votes: parse_digits("imdb_votes", &movie.imdb_votes)?,
        released: parse_released(&movie.released)?,
        year: parse_year(&movie.year)?,
        imdb_rating: Decimal::from_str(movie.imdb_rating.trim())
            .map_err(|_| malformed("imdb_rating", &movie.imdb_rating))?,
        ratings: movie
            .ratings
            .into_iter()
            .map(|rating| NormalizedRating {
                source: rating.source,
                value: rating.value,
            })
            .collect(),
        actors: movie.actors,
        awards: movie.awards,
        box_office: movie.box_office,
        country: movie.country,
        dvd: movie.dvd,
        director: movie.director,
        genre: movie.genre,
        language: movie.language,
        plot: movie.plot,
        poster: movie.poster,
        production: movie.production,
        rated: movie.rated,
        runtime: movie.runtime,
        title: movie.title,
        kind: movie.kind,
        website: movie.website,
        writer: movie.writer,
        imdb_id: movie.imdb_id,
    })
}

/// Drops every non-digit character, so `"311,189"` becomes `311189`.
fn parse_digits(field: &str, value: &str) -> Result<i64> {
    let digits: String = value.chars().filter(char::is_ascii_digit).collect();

    digits.parse::<i64>().map_err(|_| malformed(field, value))
}

fn parse_released(value: &str) -> Result<NaiveDate> {
    RELEASED_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value.trim(), format).ok())
        .ok_or_else(|| malformed("released", value))
}

/// Series report years as ranges such as `"2008–2013"`; the start is kept.
fn parse_year(value: &str) -> Result<i32> {
    let digits: String = value
        .trim()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();

    digits.parse::<i32>().map_err(|_| malformed("year", value))
}

fn malformed(field: &str, value: &str) -> ProviderError {
    ProviderError::MalformedError(format!("{}: unexpected value {:?}", field, value))
}
