//! HTTP-facing error type

use crate::auth::jwt::JwtError;
use crate::pricing::PaymentError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Payment(#[from] PaymentError),

    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("User not found")]
    UserNotFound,

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Username already taken: {0}")]
    UsernameTaken(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::Payment(_) | AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) | AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::UserNotFound => StatusCode::NOT_FOUND,
            AppError::UsernameTaken(_) => StatusCode::CONFLICT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> String {
        match self {
            AppError::Payment(e) => serde_json::to_value(e.reason())
                .ok()
                .and_then(|v| v.as_str().map(str::to_string))
                .unwrap_or_else(|| "PAYMENT_REJECTED".to_string()),
            AppError::InvalidInput(_) => "INVALID_INPUT".to_string(),
            AppError::Unauthorized(_) => "UNAUTHORIZED".to_string(),
            AppError::UserNotFound => "USER_NOT_FOUND".to_string(),
            AppError::InvalidCredentials => "INVALID_CREDENTIALS".to_string(),
            AppError::UsernameTaken(_) => "USERNAME_TAKEN".to_string(),
            AppError::Internal(_) => "INTERNAL".to_string(),
        }
    }

    fn message(&self) -> String {
        match self {
            AppError::Payment(e) => e
                .reason()
                .message()
                .map(str::to_string)
                .unwrap_or_else(|| e.to_string()),
            other => other.to_string(),
        }
    }
}

impl From<JwtError> for AppError {
    fn from(err: JwtError) -> Self {
        match err {
            JwtError::Encoding(msg) => AppError::Internal(msg),
            other => AppError::Unauthorized(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{self}");
        }

        let body = json!({
            "code": self.code(),
            "message": self.message(),
        });
        (status, Json(body)).into_response()
    }
}
