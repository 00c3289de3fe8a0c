pub mod comments;
pub mod movies;
pub mod top_movies;
