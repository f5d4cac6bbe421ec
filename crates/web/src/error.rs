use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;
use storage::error::StorageError;
use validator::ValidationErrors;

/// Web layer errors
#[derive(Debug)]
pub enum WebError {
    Storage(StorageError),
    Validation(ValidationErrors),
    BadRequest(String),
}

impl WebError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Storage(StorageError::NotFound) => StatusCode::NOT_FOUND,
            Self::Storage(StorageError::DuplicateEmail(_))
            | Self::Storage(StorageError::ClassFull { .. })
            | Self::Storage(StorageError::ConstraintViolation(_)) => StatusCode::CONFLICT,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Validation(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Message safe to show to a client; internal failures stay generic.
    pub fn public_message(&self) -> String {
        match self {
            Self::Storage(StorageError::NotFound) => "Resource not found".to_string(),
            Self::Storage(
                e @ (StorageError::DuplicateEmail(_)
                | StorageError::ClassFull { .. }
                | StorageError::ConstraintViolation(_)),
            ) => e.to_string(),
            Self::Storage(_) => "An internal error occurred".to_string(),
            Self::Validation(_) => "Validation failed".to_string(),
            Self::BadRequest(msg) => msg.clone(),
        }
    }

    pub fn field_errors(&self) -> Vec<String> {
        let Self::Validation(errors) = self else {
            return Vec::new();
        };

        let mut details: Vec<String> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| {
                    format!(
                        "{}: {}",
                        field,
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string())
                    )
                })
            })
            .collect();
        details.sort();
        details
    }
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Storage(e) => write!(f, "Storage error: {}", e),
            Self::Validation(e) => write!(f, "Validation error: {}", e),
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        let body = match &self {
            Self::Storage(e) if status_code == StatusCode::INTERNAL_SERVER_ERROR => {
                tracing::error!("Storage error: {:?}", e);
                json!({
                    "error": self.public_message()
                })
            }
            Self::Validation(_) => {
                json!({
                    "error": self.public_message(),
                    "details": self.field_errors()
                })
            }
            _ => {
                json!({
                    "error": self.public_message()
                })
            }
        };

        (status_code, Json(body)).into_response()
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
