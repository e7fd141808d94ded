//! Authentication and authorization
//!
//! - [`TokenVerifier`] / [`JwtVerifier`] - bearer token verification
//! - [`CurrentUser`] - verified caller
//! - [`require_auth`] - authentication middleware
//! - [`require_permission`] - permission check middleware

pub mod jwt;
pub mod middleware;
pub mod permissions;

pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtVerifier, TokenVerifier};
pub use middleware::{bearer_token, require_auth, require_permission};
