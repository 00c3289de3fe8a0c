//! Conversion of upstream key names to the catalog's snake_case names.

use serde_json::Value;

/// `imdbRating` -> `imdb_rating`, `BoxOffice` -> `box_office`, `DVD` -> `dvd`.
pub fn to_snake_case(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    let mut snake = String::with_capacity(key.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());
            let starts_word = prev.is_ascii_lowercase() || prev.is_ascii_digit();

            if prev != '_' && (starts_word || next_is_lower) {
                snake.push('_');
            }
        }
        snake.push(c.to_ascii_lowercase());
    }

    snake
}

/// Renames object keys recursively. Objects, lists of objects and lists of
/// scalars are walked; scalars are returned unchanged.
pub fn normalize_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (to_snake_case(&key), normalize_keys(value)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(normalize_keys).collect()),
        scalar => scalar,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("Title"), "title");
        assert_eq!(to_snake_case("imdbRating"), "imdb_rating");
        assert_eq!(to_snake_case("imdbID"), "imdb_id");
        assert_eq!(to_snake_case("BoxOffice"), "box_office");
        assert_eq!(to_snake_case("DVD"), "dvd");
        assert_eq!(to_snake_case("already_snake_case"), "already_snake_case");
        assert_eq!(to_snake_case("Metascore"), "metascore");
    }

    #[test]
    fn test_normalize_nested_shapes() {
        let normalized = normalize_keys(json!({
            "Title": "",
            "imdbRating": "",
            "Ratings": [
                {"Source": "", "Value": ""},
                {"Source": "", "Value": ""}
            ],
            "Genres": ["Action", "Adventure"]
        }));

        assert_eq!(
            normalized,
            json!({
                "title": "",
                "imdb_rating": "",
                "ratings": [
                    {"source": "", "value": ""},
                    {"source": "", "value": ""}
                ],
                "genres": ["Action", "Adventure"]
            })
        );
    }

    #[test]
    fn test_values_are_not_renamed() {
        let normalized = normalize_keys(json!({"Type": "BoxOffice"}));
        assert_eq!(normalized, json!({"type": "BoxOffice"}));
    }
}
