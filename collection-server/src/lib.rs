//! Collection Server - paginated listing and search over relational collections
//!
//! # Architecture
//!
//! One HTTP process serves three domains over a single SQLite store:
//!
//! - **Listings** (`api::venues`, `api::artists`, `api::shows`): venues and
//!   artists with the shows linking them
//! - **Trivia** (`api::categories`, `api::questions`, `api::quizzes`)
//! - **Drinks** (`api::drinks`): permission-gated coffee shop menu
//!
//! # Module layout
//!
//! ```text
//! collection-server/src/
//! ├── core/          # config, state, server
//! ├── auth/          # bearer token verification, permissions
//! ├── api/           # HTTP routes and handlers
//! ├── services/      # collection query service, listing views
//! ├── db/            # SQLite pool and repositories
//! └── utils/         # logger, validation, extractors
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export public types
pub use auth::{CurrentUser, JwtVerifier, TokenVerifier};
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export unified error types from shared
pub use utils::{ApiResponse, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro - auth events go to the `security` target
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

/// Load `.env` and initialize logging from the environment
pub fn setup_environment() {
    let _ = dotenvy::dotenv();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());
}
