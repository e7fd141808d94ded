//! Error types and API response structures

use super::codes::ErrorCode;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application error with structured error code
///
/// This is the primary error type for the collection services:
/// - Standardized error codes via [`ErrorCode`]
/// - Human-readable message rendered into the error envelope
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create a not found error with the default message
    pub fn not_found() -> Self {
        Self::new(ErrorCode::NotFound)
    }

    /// Create an unprocessable-body error
    pub fn unprocessable() -> Self {
        Self::new(ErrorCode::Unprocessable)
    }

    /// Create a bad request error
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::BadRequest, msg)
    }

    /// Create a database error
    pub fn database(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::DatabaseError, msg)
    }

    /// Create a failed-write error carrying a user-visible notice
    pub fn operation_failed(notice: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::OperationFailed, notice)
    }

    /// Create a missing-permission error
    pub fn permission_not_found() -> Self {
        Self::new(ErrorCode::PermissionNotFound)
    }
}

/// Unified API response structure
///
/// Every body carries `success`; the payload fields are flattened next to it:
///
/// ```json
/// {"success": true, "drinks": [...]}
/// {"success": false, "error": 404, "message": "resource not found"}
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded
    pub success: bool,
    /// Response payload
    #[serde(flatten)]
    pub body: T,
}

/// Payload of the error envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Reported status code
    pub error: u16,
    /// Human-readable message
    pub message: String,
}

impl<T> ApiResponse<T> {
    /// Create a success response with data
    pub fn success(body: T) -> Self {
        Self {
            success: true,
            body,
        }
    }
}

impl ApiResponse<ErrorBody> {
    /// Create an error response from an AppError
    pub fn error(err: &AppError) -> Self {
        Self {
            success: false,
            body: ErrorBody {
                error: err.code.reported_status().as_u16(),
                message: err.message.clone(),
            },
        }
    }
}

impl From<AppError> for ApiResponse<ErrorBody> {
    fn from(err: AppError) -> Self {
        Self::error(&err)
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

// ===== Axum Integration =====

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        let status = self.http_status();
        let body = ApiResponse::error(&self);

        // Log system errors
        if matches!(self.code.category(), super::category::ErrorCategory::System) {
            tracing::error!(
                code = %self.code,
                message = %self.message,
                "System error occurred"
            );
        }

        (status, Json(body)).into_response()
    }
}

impl<T: Serialize> axum::response::IntoResponse for ApiResponse<T> {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}
