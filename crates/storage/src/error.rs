use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// A foreign key points at a row that does not exist.
    #[error("Invalid reference for {field}: {value} does not exist")]
    MissingReference { field: &'static str, value: i64 },

    #[error("Invalid comment window: {0}")]
    InvalidWindow(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some("23503")
        )
    }

    pub fn is_check_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some("23514")
        )
    }
}
