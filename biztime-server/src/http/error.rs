//! API error type with IntoResponse
//!
//! Every failure leaves the server as
//! `{"error": {"message": ..., "status": ...}}` with the matching status.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;
use crate::models::ValidationError;

/// Message sent for any failure that is not a classified client error
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Missing or malformed request input (400)
    Validation(ValidationError),

    /// Resource absent, or a mutation matched no row (404)
    NotFound { message: String },

    /// Anything the database rejected (500, logged)
    Database(DbError),
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            Self::Validation(e) => e.to_string(),
            Self::NotFound { message } => message,
            Self::Database(e) => {
                // Log the actual error, return generic message
                tracing::error!(error = %e, "database error");
                INTERNAL_ERROR_MESSAGE.to_owned()
            }
        };

        let body = json!({
            "error": {
                "message": message,
                "status": status.as_u16()
            }
        });

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { .. } => Self::not_found(e.to_string()),
            _ => Self::Database(e),
        }
    }
}
