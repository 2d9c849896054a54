//! Error types for the bookstore server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error codes exposed to API clients. `Success` is
/// reserved for non-error responses and never appears in an
/// `ErrorResponse`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Success = 0,
    Failure = 1,
    DbFailure = 2,
    NoSuchCustomer = 3,
    NoSuchBook = 4,
    NoSuchItem = 5,
    NoSuchOrder = 6,
    NoSuchRental = 7,
    NoSuchPromotion = 8,
    CopyNotAvailable = 9,
    AlreadyReturned = 10,
    Duplicate = 11,
    BadValue = 12,
}

/// Main application error type. `NotFound` and `Conflict` carry the
/// entity-specific code reported to clients.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {1}")]
    NotFound(ErrorCode, String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {1}")]
    Conflict(ErrorCode, String),

    #[error("Insufficient inventory: {0}")]
    InsufficientInventory(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
}

impl AppError {
    fn response_parts(&self) -> (StatusCode, ErrorCode, String) {
        match self {
            AppError::NotFound(code, msg) => (StatusCode::NOT_FOUND, *code, msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, ErrorCode::BadValue, msg.clone()),
            AppError::Conflict(code, msg) => (StatusCode::CONFLICT, *code, msg.clone()),
            AppError::InsufficientInventory(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorCode::CopyNotAvailable,
                msg.clone(),
            ),
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::DbFailure,
                    "Database error".to_string(),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::Failure,
                    "Internal server error".to_string(),
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.response_parts();

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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_carries_entity_code() {
        let err = AppError::NotFound(ErrorCode::NoSuchRental, "Rental 7 not found".into());
        let (status, code, _) = err.response_parts();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(code, ErrorCode::NoSuchRental);
    }

    #[test]
    fn double_return_conflict_reports_already_returned() {
        let err = AppError::Conflict(ErrorCode::AlreadyReturned, "Rental 7 already returned".into());
        let (status, code, _) = err.response_parts();
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(code, ErrorCode::AlreadyReturned);
    }

    #[test]
    fn shortfall_maps_to_copy_not_available() {
        let err = AppError::InsufficientInventory("Only 1 copy available".into());
        let (status, code, _) = err.response_parts();
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(code, ErrorCode::CopyNotAvailable);
    }

    #[test]
    fn database_errors_hide_details_from_clients() {
        let err = AppError::Database(sqlx::Error::RowNotFound);
        let (status, code, message) = err.response_parts();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(code, ErrorCode::DbFailure);
        assert_eq!(message, "Database error");
    }
}
