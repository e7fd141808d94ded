//! Bearer token verification
//!
//! Tokens are issued elsewhere; this module only verifies them. The
//! [`TokenVerifier`] trait is the seam between the middleware and the
//! verification backend, with [`JwtVerifier`] (HS256) as the default.

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::{AppError, ErrorCode};

/// JWT verification settings
#[derive(Clone, Serialize, Deserialize)]
pub struct JwtConfig {
    /// HS256 shared secret
    pub secret: String,
    /// Expected token issuer
    pub issuer: String,
    /// Expected token audience
    pub audience: String,
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .finish()
    }
}

/// Claims read from a verified token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id)
    #[serde(default)]
    pub sub: String,
    /// Granted permissions; absent when the provider did not include them
    #[serde(default)]
    pub permissions: Option<Vec<String>>,
    /// Expiration timestamp (seconds)
    pub exp: i64,
}

/// Token verification failure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JwtError {
    #[error("token expired")]
    Expired,

    #[error("invalid claims: {0}")]
    InvalidClaims(String),

    #[error("malformed token: {0}")]
    Malformed(String),
}

impl From<JwtError> for AppError {
    fn from(err: JwtError) -> Self {
        match err {
            JwtError::Expired => AppError::new(ErrorCode::TokenExpired),
            JwtError::InvalidClaims(_) => AppError::new(ErrorCode::InvalidClaims),
            JwtError::Malformed(_) => AppError::new(ErrorCode::MalformedToken),
        }
    }
}

/// Capability through which bearer tokens are verified
pub trait TokenVerifier: Send + Sync {
    fn verify(&self, token: &str) -> Result<Claims, JwtError>;
}

/// HS256 verifier checking signature, expiry, issuer and audience
#[derive(Clone)]
pub struct JwtVerifier {
    config: JwtConfig,
    decoding_key: DecodingKey,
}

impl JwtVerifier {
    pub fn new(config: JwtConfig) -> Self {
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());
        Self {
            config,
            decoding_key,
        }
    }
}

impl TokenVerifier for JwtVerifier {
    fn verify(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[&self.config.audience]);
        validation.set_issuer(&[&self.config.issuer]);
        validation.set_required_spec_claims(&["exp", "iss", "aud"]);

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::Expired,
                ErrorKind::InvalidIssuer
                | ErrorKind::InvalidAudience
                | ErrorKind::ImmatureSignature => JwtError::InvalidClaims(e.to_string()),
                ErrorKind::MissingRequiredClaim(claim) if claim != "exp" => {
                    JwtError::InvalidClaims(e.to_string())
                }
                _ => JwtError::Malformed(e.to_string()),
            })?;

        Ok(token_data.claims)
    }
}

/// Authenticated caller, inserted into request extensions by `require_auth`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    /// Subject of the token
    pub id: String,
    /// Granted permissions
    pub permissions: Vec<String>,
}

impl TryFrom<Claims> for CurrentUser {
    type Error = AppError;

    fn try_from(claims: Claims) -> Result<Self, Self::Error> {
        let permissions = claims
            .permissions
            .ok_or_else(|| AppError::new(ErrorCode::PermissionsMissing))?;
        Ok(Self {
            id: claims.sub,
            permissions,
        })
    }
}

impl CurrentUser {
    /// Exact permission match
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| p == permission)
    }
}
