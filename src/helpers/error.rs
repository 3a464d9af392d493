use crate::helpers::JsonError;
use actix_web::{http::StatusCode, HttpResponse, ResponseError};

/// Every failure a handler can report. `status_code` is the one place where
/// errors are mapped to HTTP statuses.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Malformed id, pagination value or request body.
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    NotFound(String),

    /// The store refused a write or lookup on a path that answers 400.
    #[error("{message}")]
    Rejected {
        message: String,
        #[source]
        source: sqlx::Error,
    },

    /// Any other store failure.
    #[error("{message}")]
    Storage {
        message: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("Failed to issue token")]
    Token(#[from] jsonwebtoken::errors::Error),
}

impl ApiError {
    pub fn storage(message: &'static str) -> impl FnOnce(sqlx::Error) -> ApiError {
        move |source| ApiError::Storage {
            message: message.to_string(),
            source,
        }
    }

    pub fn rejected(message: &'static str) -> impl FnOnce(sqlx::Error) -> ApiError {
        move |source| ApiError::Rejected {
            message: message.to_string(),
            source,
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::Rejected { .. } => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Storage { .. } | ApiError::Token(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::Rejected { source, .. } | ApiError::Storage { source, .. } => {
                tracing::error!("{}: {:?}", self, source);
            }
            ApiError::Token(err) => tracing::error!("Failed to sign token: {:?}", err),
            _ => tracing::debug!("Request failed: {}", self),
        }

        HttpResponse::build(self.status_code()).json(JsonError::new(self.to_string()))
    }
}
