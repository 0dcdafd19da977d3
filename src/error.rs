//! Error types for Bibliomanager

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Stable error codes exposed to clients
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    DbFailure = 3,
    NoSuchData = 20,
    Conflict = 21,
    BadValue = 18,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Malformed or missing required input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Referenced book, member or loan does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Business rule violation (open loans, no copy available, already returned)
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AppError {
    fn parts(&self) -> (StatusCode, ErrorCode) {
        match self {
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, ErrorCode::BadValue),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, ErrorCode::NoSuchData),
            AppError::Conflict(_) => (StatusCode::CONFLICT, ErrorCode::Conflict),
            AppError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::DbFailure),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(msg) => msg.to_string(),
                    None => format!("{} is invalid", field),
                })
            })
            .collect();
        messages.sort();
        AppError::Validation(messages.join("; "))
    }
}

// Malformed identifiers, query strings and bodies are input errors
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.parts();

        let message = match &self {
            AppError::Validation(msg)
            | AppError::NotFound(msg)
            | AppError::Conflict(msg) => msg.clone(),
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "Database error".to_string()
            }
        };

        let body = Json(ErrorResponse {
            code: code as u32,
            error: format!("{:?}", code),
            message,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
