//! Error handling for the bookshelf HTTP layer

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use time::OffsetDateTime;
use uuid::Uuid;

/// JSON body returned for server faults
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    pub trace_id: String,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

/// Application error types that map to HTTP responses
#[derive(Error, Debug)]
pub enum AppError {
    /// A field rule rejected the payload; the message is the response body
    #[error("{0}")]
    Validation(String),

    /// The request body could not be decoded
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("not found")]
    NotFound,

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match self {
            AppError::Validation(message) | AppError::BadRequest(message) => {
                tracing::debug!(status_code = %status.as_u16(), %message, "request rejected");
                (status, message).into_response()
            }
            AppError::NotFound => {
                tracing::debug!(status_code = %status.as_u16(), "resource not found");
                status.into_response()
            }
            AppError::Internal(e) => {
                let error_id = Uuid::now_v7();
                let timestamp = OffsetDateTime::now_utc().to_string();

                tracing::error!(
                    error_id = %error_id,
                    status_code = %status.as_u16(),
                    error = %format!("{e:#}"),
                    "request failed"
                );

                // Release builds never leak storage details to clients
                let message = if cfg!(debug_assertions) {
                    e.to_string()
                } else {
                    "An internal server error occurred".to_string()
                };

                let body = ErrorEnvelope {
                    error: ErrorBody {
                        code: "internal_error".to_string(),
                        message,
                        trace_id: error_id.to_string(),
                        timestamp,
                    },
                };

                (status, Json(body)).into_response()
            }
        }
    }
}

/// Convenience alias for handler results
pub type AppResult<T> = Result<T, AppError>;
