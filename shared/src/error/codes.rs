//! Unified error codes for the collection services
//!
//! Error codes are organized by category:
//! - 0xxx: General errors (lookup, validation, request shape)
//! - 1xxx: Authentication errors (credential could not be verified)
//! - 2xxx: Permission errors (credential lacks a capability)
//! - 9xxx: System errors (storage, internal)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Codes are serialized as plain u16 values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Required input missing or empty
    ValidationFailed = 2,
    /// Resource (or filtered collection) not found
    NotFound = 3,
    /// Malformed request
    BadRequest = 5,
    /// Request body could not be processed
    Unprocessable = 6,

    // ==================== 1xxx: Auth ====================
    /// No Authorization header
    AuthHeaderMissing = 1001,
    /// Authorization header is not a bearer credential
    InvalidHeader = 1002,
    /// Token has expired
    TokenExpired = 1003,
    /// Token issuer or audience did not match
    InvalidClaims = 1004,
    /// Token could not be decoded or its signature is invalid
    MalformedToken = 1005,
    /// Token has no permissions claim
    PermissionsMissing = 1006,

    // ==================== 2xxx: Permission ====================
    /// Token lacks the permission required by the endpoint
    PermissionNotFound = 2001,

    // ==================== 9xxx: System ====================
    /// Database error
    DatabaseError = 9002,
    /// A write could not be completed and was rolled back
    OperationFailed = 9003,
    /// Storage is unreachable (pool closed or timed out)
    StorageUnavailable = 9004,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the default message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::ValidationFailed => "unprocessable",
            ErrorCode::NotFound => "resource not found",
            ErrorCode::BadRequest => "bad request",
            ErrorCode::Unprocessable => "unprocessable",

            // Auth
            ErrorCode::AuthHeaderMissing => "Authorization header is expected.",
            ErrorCode::InvalidHeader => "Authorization header must be bearer token.",
            ErrorCode::TokenExpired => "Token expired.",
            ErrorCode::InvalidClaims => "Incorrect claims. Please, check the audience and issuer.",
            ErrorCode::MalformedToken => "Unable to parse authentication token.",
            ErrorCode::PermissionsMissing => "Permissions not included in JWT.",

            // Permission
            ErrorCode::PermissionNotFound => "Permission not found.",

            // System
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::OperationFailed => "could not complete operation",
            ErrorCode::StorageUnavailable => "storage unavailable",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            5 => Ok(ErrorCode::BadRequest),
            6 => Ok(ErrorCode::Unprocessable),

            // Auth
            1001 => Ok(ErrorCode::AuthHeaderMissing),
            1002 => Ok(ErrorCode::InvalidHeader),
            1003 => Ok(ErrorCode::TokenExpired),
            1004 => Ok(ErrorCode::InvalidClaims),
            1005 => Ok(ErrorCode::MalformedToken),
            1006 => Ok(ErrorCode::PermissionsMissing),

            // Permission
            2001 => Ok(ErrorCode::PermissionNotFound),

            // System
            9002 => Ok(ErrorCode::DatabaseError),
            9003 => Ok(ErrorCode::OperationFailed),
            9004 => Ok(ErrorCode::StorageUnavailable),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
