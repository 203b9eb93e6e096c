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
    NotFound,
    BadRequest(String),
    Validation(ValidationErrors),
    Unprocessable(StorageError),
    MethodNotAllowed(StorageError),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "Resource not found"),
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            Self::Validation(e) => write!(f, "Validation error: {}", e),
            Self::Unprocessable(e) => write!(f, "Unprocessable request: {}", e),
            Self::MethodNotAllowed(e) => write!(f, "Method not allowed: {}", e),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
        };

        let message = match &self {
            Self::NotFound => "resource not found".to_string(),
            Self::BadRequest(msg) => msg.clone(),
            Self::Validation(errors) => {
                let field_errors: Vec<String> = errors
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

                field_errors.join("; ")
            }
            Self::Unprocessable(StorageError::ConstraintViolation(msg)) => msg.clone(),
            Self::Unprocessable(e) => {
                tracing::error!("Storage error: {:?}", e);
                "unprocessable".to_string()
            }
            Self::MethodNotAllowed(e) => {
                tracing::error!("Storage error: {:?}", e);
                "method not allowed".to_string()
            }
        };

        let body = json!({
            "success": false,
            "error": status_code.as_u16(),
            "message": message,
        });

        (status_code, Json(body)).into_response()
    }
}

impl From<StorageError> for WebError {
    fn from(error: StorageError) -> Self {
        match error {
            StorageError::NotFound => Self::NotFound,
            other => Self::Unprocessable(other),
        }
    }
}

impl From<ValidationErrors> for WebError {
    fn from(error: ValidationErrors) -> Self {
        Self::Validation(error)
    }
}
