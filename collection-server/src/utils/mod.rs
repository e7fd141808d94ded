//! Utilities - shared helpers and types
//!
//! - [`AppError`] - application error type (from shared::error)
//! - [`ApiResponse`] - response envelope (from shared::error)
//! - extractors, validation and logging

pub mod extract;
pub mod logger;
pub mod validation;

use axum::Json;

pub use extract::{ApiJson, ApiPath, ApiQuery};
pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

/// Wrap a payload into the success envelope
pub fn ok<T>(body: T) -> Json<ApiResponse<T>> {
    Json(ApiResponse::success(body))
}
