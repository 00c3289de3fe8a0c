use serde_json::{Value, json};

pub fn batman_payload() -> Value {
    json!({
        "Title": "Batman",
        "Year": "1989",
        "Rated": "PG-13",
        "Released": "23 Jun 1989",
        "Runtime": "126 min",
        "Genre": "Action, Adventure",
        "Director": "Tim Burton",
        "Writer": "Bob Kane (Batman characters), Sam Hamm (story)",
        "Actors": "Michael Keaton, Jack Nicholson, Kim Basinger, Robert Wuhl",
        "Plot": "Gotham City.",
        "Language": "English, French, Spanish",
        "Country": "USA, UK",
        "Awards": "Won 1 Oscar. Another 8 wins & 26 nominations.",
        "Poster": "https://m.media-amazon.com/images/M/batman.jpg",
        "Ratings": [
            {"Source": "Internet Movie Database", "Value": "7.6/10"},
            {"Source": "Rotten Tomatoes", "Value": "71%"},
            {"Source": "Metacritic", "Value": "69/100"}
        ],
        "Metascore": "69",
        "imdbRating": "7.6",
        "imdbVotes": "311,189",
        "imdbID": "tt0096895",
        "Type": "movie",
        "DVD": "25 Mar 1997",
        "BoxOffice": "N/A",
        "Production": "Warner Bros. Pictures",
        "Website": "N/A",
        "Response": "True"
    })
}

pub fn not_found_payload() -> Value {
    json!({"Response": "False", "Error": "Movie not found!"})
}
