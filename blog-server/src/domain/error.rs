use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use crate::domain::validation::ValidationErrors;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("User not found")]
    UserNotFound(i64),
    #[error("Post not found")]
    PostNotFound(i64),
    #[error("Username already exists")]
    UsernameTaken(String),
    #[error("Email already registered")]
    EmailTaken(String),
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),
    #[error("Not Found")]
    RouteNotFound,
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<ValidationErrors> for DomainError {
    fn from(errors: ValidationErrors) -> Self {
        DomainError::Validation(errors)
    }
}

impl From<sqlx::Error> for DomainError {
    fn from(err: sqlx::Error) -> Self {
        DomainError::Internal(format!("database error: {}", err))
    }
}

#[derive(Serialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

impl DomainError {
    /// Message shown on HTML error pages. Validation failures are summarised.
    pub fn page_message(&self) -> String {
        match self {
            DomainError::Validation(_) => "Invalid request. Please check your input and try again.".into(),
            DomainError::Internal(_) => "Something went wrong on our end. Please try again later.".into(),
            other => other.to_string(),
        }
    }
}

impl ResponseError for DomainError {
    fn status_code(&self) -> StatusCode {
        match self {
            DomainError::UserNotFound(_) | DomainError::PostNotFound(_) | DomainError::RouteNotFound => {
                StatusCode::NOT_FOUND
            }
            DomainError::UsernameTaken(_) | DomainError::EmailTaken(_) => StatusCode::BAD_REQUEST,
            DomainError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            DomainError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let detail = match self {
            DomainError::Validation(errors) => json!(errors),
            DomainError::Internal(cause) => {
                tracing::error!(%cause, "request failed with internal error");
                json!("Internal Server Error")
            }
            other => json!(other.to_string()),
        };
        HttpResponse::build(self.status_code()).json(ErrorBody { detail })
    }
}
