mod comment;
mod movie;
mod rating;

pub use comment::Comment;
pub use movie::Movie;
pub use rating::Rating;
