//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the HTTP status the response is sent with
    pub fn http_status(&self) -> StatusCode {
        match self {
            // 404 Not Found
            Self::NotFound => StatusCode::NOT_FOUND,

            // 400 Bad Request
            Self::BadRequest => StatusCode::BAD_REQUEST,

            // 422 Unprocessable Entity
            Self::ValidationFailed | Self::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,

            // 401 Unauthorized (every credential failure)
            Self::AuthHeaderMissing
            | Self::InvalidHeader
            | Self::TokenExpired
            | Self::InvalidClaims
            | Self::MalformedToken
            | Self::PermissionsMissing
            | Self::PermissionNotFound => StatusCode::UNAUTHORIZED,

            // 503 Service Unavailable
            Self::StorageUnavailable => StatusCode::SERVICE_UNAVAILABLE,

            // 500 Internal Server Error
            Self::DatabaseError | Self::OperationFailed => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the status reported in the error envelope's `error` field
    ///
    /// Equal to [`http_status`](Self::http_status) except for credential
    /// failures, which report the status carried by the verification failure.
    pub fn reported_status(&self) -> StatusCode {
        match self {
            Self::MalformedToken | Self::PermissionsMissing => StatusCode::BAD_REQUEST,
            Self::PermissionNotFound => StatusCode::FORBIDDEN,
            _ => self.http_status(),
        }
    }
}
