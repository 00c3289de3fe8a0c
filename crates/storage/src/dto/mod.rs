pub mod comment;
pub mod movie;
pub mod ranking;

/// Rejects values made only of whitespace.
pub(crate) fn validate_not_blank(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        let mut error = validator::ValidationError::new("blank");
        error.message = Some("This field may not be blank.".into());
        Err(error)
    } else {
        Ok(())
    }
}
