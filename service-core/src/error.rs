use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Caller error whose message is returned to the client verbatim.
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Stored data broke a contract the service relies on.
    #[error("Data integrity violation: {0}")]
    DataIntegrity(String),

    #[error("Internal server error: {0}")]
    InternalError(#[from] anyhow::Error),

    #[error("Service Unavailable")]
    ServiceUnavailable,

    #[error("Database error: {0}")]
    DatabaseError(anyhow::Error),

    #[error("Configuration error: {0}")]
    ConfigError(anyhow::Error),
}

impl From<::config::ConfigError> for AppError {
    fn from(err: ::config::ConfigError) -> Self {
        AppError::ConfigError(anyhow::Error::new(err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(anyhow::Error::new(err))
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::DatabaseError(anyhow::Error::new(err))
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Client errors are bare JSON strings, server errors are structured.
        let (status, error_message, details) = match self {
            AppError::BadRequest(msg) => return (StatusCode::BAD_REQUEST, Json(msg)).into_response(),
            AppError::InvalidDate(input) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(format!("Invalid date: {}", input)),
                )
                    .into_response();
            }
            AppError::DataIntegrity(msg) => {
                tracing::error!(details = %msg, "Stored data violates the record contract");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Data integrity violation".to_string(),
                    Some(msg),
                )
            }
            AppError::InternalError(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
                Some(format!("{:#?}", err)),
            ),
            AppError::ServiceUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "Service unavailable".to_string(),
                None,
            ),
            AppError::DatabaseError(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Database error".to_string(),
                Some(err.to_string()),
            ),
            AppError::ConfigError(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Configuration error".to_string(),
                Some(err.to_string()),
            ),
        };

        (
            status,
            Json(ErrorResponse {
                error: error_message,
                details,
            }),
        )
            .into_response()
    }
}
