/// Error types for Blog Service
///
/// Errors are converted to the HTTP responses the API clients expect. Each
/// variant carries the client-facing message and maps to its own JSON body
/// shape: validation failures use `errorMessage`, missing resources use
/// `message`, and storage failures use `error`.
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

/// Result type for blog-service operations
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    /// A required request field is missing or empty
    #[error("validation error: {0}")]
    Validation(String),

    /// The referenced resource does not exist
    #[error("not found: {0}")]
    NotFound(String),

    /// A storage operation failed
    #[error("database error: {0}")]
    Database(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::Validation(msg) => json!({ "errorMessage": msg }),
            AppError::NotFound(msg) => json!({ "message": msg }),
            AppError::Database(msg) => json!({ "error": msg }),
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Database(err.to_string())
    }
}
