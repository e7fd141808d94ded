//! Authentication middleware
//!
//! Two stages, layered per route group:
//!
//! 1. [`require_auth`] verifies the bearer token and inserts [`CurrentUser`]
//! 2. [`require_permission`] checks one exact permission string
//!
//! ```ignore
//! Router::new()
//!     .route("/drinks-detail", get(handler::detail))
//!     .layer(middleware::from_fn(require_permission("get:drinks-detail")))
//!     .layer(middleware::from_fn_with_state(state, require_auth));
//! ```

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::security_log;
use crate::utils::{AppError, ErrorCode};

/// Extract the token from an `Authorization: Bearer <token>` header value
///
/// | Header | Error |
/// |--------|-------|
/// | missing or blank | `Authorization header is expected.` |
/// | scheme other than bearer | `Authorization header must start with "Bearer".` |
/// | `Bearer` alone | `Token not found.` |
/// | more than two parts | `Authorization header must be bearer token.` |
pub fn bearer_token(header: Option<&str>) -> Result<&str, AppError> {
    let header = header.ok_or_else(|| AppError::new(ErrorCode::AuthHeaderMissing))?;
    let parts: Vec<&str> = header.split_whitespace().collect();

    match parts.as_slice() {
        [scheme, ..] if !scheme.eq_ignore_ascii_case("bearer") => Err(AppError::with_message(
            ErrorCode::InvalidHeader,
            "Authorization header must start with \"Bearer\".",
        )),
        [] => Err(AppError::new(ErrorCode::AuthHeaderMissing)),
        [_] => Err(AppError::with_message(
            ErrorCode::InvalidHeader,
            "Token not found.",
        )),
        [_, token] => Ok(*token),
        _ => Err(AppError::new(ErrorCode::InvalidHeader)),
    }
}

/// Authentication middleware
///
/// Verifies the bearer token through the state's [`TokenVerifier`] and injects
/// [`CurrentUser`] into the request extensions.
///
/// [`TokenVerifier`]: crate::auth::TokenVerifier
pub async fn require_auth(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    // CORS preflight
    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match bearer_token(auth_header) {
        Ok(token) => token,
        Err(e) => {
            security_log!(
                "WARN",
                "auth_header_rejected",
                reason = e.message.clone(),
                uri = format!("{:?}", req.uri())
            );
            return Err(e);
        }
    };

    let claims = match state.verifier().verify(token) {
        Ok(claims) => claims,
        Err(e) => {
            security_log!(
                "WARN",
                "auth_failed",
                error = format!("{}", e),
                uri = format!("{:?}", req.uri())
            );
            return Err(e.into());
        }
    };

    let user = CurrentUser::try_from(claims)?;
    req.extensions_mut().insert(user);
    Ok(next.run(req).await)
}

/// Permission middleware - requires one exact permission
///
/// Must run inside [`require_auth`]; without an authenticated user the
/// request is treated as missing its credential.
pub fn require_permission(
    permission: &'static str,
) -> impl Fn(
    Request,
    Next,
) -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<Response, AppError>> + Send>>
+ Clone {
    move |req: Request, next: Next| {
        Box::pin(async move {
            let user = req
                .extensions()
                .get::<CurrentUser>()
                .ok_or_else(|| AppError::new(ErrorCode::AuthHeaderMissing))?;

            if !user.has_permission(permission) {
                security_log!(
                    "WARN",
                    "permission_denied",
                    user_id = user.id.clone(),
                    required_permission = permission
                );
                return Err(AppError::permission_not_found());
            }

            Ok(next.run(req).await)
        })
    }
}
