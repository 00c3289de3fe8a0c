use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use provider::ProviderError;
use serde_json::json;
use std::fmt;
use storage::{error::StorageError, params::FieldErrors};
use validator::ValidationErrors;

/// Web layer errors
#[derive(Debug)]
pub enum WebError {
    Storage(StorageError),
    Validation(ValidationErrors),
    Fields(FieldErrors),
    Provider(ProviderError),
    BadRequest(String),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Storage(e) => write!(f, "Storage error: {}", e),
            Self::Validation(e) => write!(f, "Validation error: {}", e),
            Self::Fields(e) => write!(f, "Invalid fields: {}", e),
            Self::Provider(e) => write!(f, "Provider error: {}", e),
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        match self {
            Self::Storage(StorageError::ConstraintViolation(msg)) => {
                (StatusCode::CONFLICT, Json(json!({ "error": msg }))).into_response()
            }
            Self::Storage(StorageError::MissingReference { field, value }) => {
                let errors = FieldErrors::single(
                    field,
                    format!("Invalid pk \"{}\" - object does not exist.", value),
                );
                (StatusCode::BAD_REQUEST, Json(errors)).into_response()
            }
            Self::Storage(StorageError::InvalidWindow(msg)) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": msg }))).into_response()
            }
            Self::Storage(e) => {
                tracing::error!("Storage error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": "An internal error occurred"
                    })),
                )
                    .into_response()
            }
            Self::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(field_errors(&errors))).into_response()
            }
            Self::Fields(errors) => (StatusCode::BAD_REQUEST, Json(errors)).into_response(),
            Self::Provider(e) => {
                // Both causes look the same to the client.
                if e.is_not_found() {
                    tracing::warn!("Movie lookup found nothing: {}", e);
                } else {
                    tracing::warn!("Movie lookup failed: {}", e);
                }
                StatusCode::BAD_REQUEST.into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": msg }))).into_response()
            }
        }
    }
}

fn field_errors(errors: &ValidationErrors) -> FieldErrors {
    let mut fields = FieldErrors::new();
    for (field, errors) in errors.field_errors() {
        for e in errors {
            fields.add(
                field.to_string(),
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string()),
            );
        }
    }
    fields
}

/// Unwraps a JSON body, treating a request without one as an empty object.
pub fn json_or_default<T: Default>(payload: Result<Json<T>, JsonRejection>) -> ApiResult<T> {
    match payload {
        Ok(Json(value)) => Ok(value),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(T::default()),
        Err(rejection) => Err(WebError::BadRequest(rejection.body_text())),
    }
}

impl From<StorageError> for WebError {
    fn from(error: StorageError) -> Self {
        Self::Storage(error)
    }
}

impl From<ValidationErrors> for WebError {
    fn from(error: ValidationErrors) -> Self {
        Self::Validation(error)
    }
}

impl From<FieldErrors> for WebError {
    fn from(error: FieldErrors) -> Self {
        Self::Fields(error)
    }
}

impl From<ProviderError> for WebError {
    fn from(error: ProviderError) -> Self {
        Self::Provider(error)
    }
}

pub type ApiResult<T> = Result<T, WebError>;
