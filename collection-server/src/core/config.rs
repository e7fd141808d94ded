use thiserror::Error;

use crate::auth::JwtConfig;

/// Configuration errors raised while reading the environment
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be set in {environment} environment")]
    MissingSecret { name: String, environment: String },

    #[error("{name} must not be empty in {environment} environment")]
    EmptySecret { name: String, environment: String },
}

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | DATABASE_URL | sqlite:collection.db | SQLite database |
/// | HTTP_PORT | 5000 | listen port |
/// | ENVIRONMENT | development | development / staging / production |
/// | LOG_LEVEL | info | fallback filter when `RUST_LOG` is unset |
/// | LOG_DIR | unset | enables the daily rolling log file |
/// | AUTH_SECRET | dev placeholder | HS256 verification key |
/// | AUTH_ISSUER | collection-auth | expected `iss` |
/// | AUTH_AUDIENCE | drinks | expected `aud` |
/// | DB_MAX_CONNECTIONS | 5 | pool size |
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite connection URL
    pub database_url: String,
    /// HTTP API port
    pub http_port: u16,
    /// Environment: development | staging | production
    pub environment: String,
    /// Token verification settings
    pub jwt: JwtConfig,
    /// Maximum pooled connections
    pub db_max_connections: u32,
}

impl Config {
    /// Require a secret env var: must be set and non-empty outside development.
    fn require_secret(name: &str, environment: &str) -> Result<String, ConfigError> {
        let val = match std::env::var(name) {
            Ok(v) => v,
            Err(_) => {
                if environment != "development" {
                    return Err(ConfigError::MissingSecret {
                        name: name.into(),
                        environment: environment.into(),
                    });
                }
                tracing::warn!("{name} not set, using development placeholder");
                format!("dev-{name}-not-for-production")
            }
        };
        if val.is_empty() && environment != "development" {
            return Err(ConfigError::EmptySecret {
                name: name.into(),
                environment: environment.into(),
            });
        }
        Ok(val)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:collection.db".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            jwt: JwtConfig {
                secret: Self::require_secret("AUTH_SECRET", &environment)?,
                issuer: std::env::var("AUTH_ISSUER")
                    .unwrap_or_else(|_| "collection-auth".into()),
                audience: std::env::var("AUTH_AUDIENCE").unwrap_or_else(|_| "drinks".into()),
            },
            db_max_connections: std::env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5),
            environment,
        })
    }

    /// Configuration for tests: in-memory database, fixed secret
    pub fn for_tests(secret: impl Into<String>) -> Self {
        Self {
            database_url: "sqlite::memory:".into(),
            http_port: 0,
            environment: "development".into(),
            jwt: JwtConfig {
                secret: secret.into(),
                issuer: "collection-auth".into(),
                audience: "drinks".into(),
            },
            db_max_connections: 1,
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}
