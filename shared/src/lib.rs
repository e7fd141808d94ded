//! Shared types for the collection services
//!
//! Common types used by the server and its clients: error codes and the
//! response envelope, the row and view models of every domain, and the
//! pagination contract.

pub mod error;
pub mod models;
pub mod paging;
pub mod util;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use paging::{PAGE_SIZE, Page, PageRequest};
