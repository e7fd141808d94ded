use std::sync::Arc;

use sqlx::SqlitePool;

use crate::auth::{JwtVerifier, TokenVerifier};
use crate::core::Config;
use crate::db::DbService;
use crate::utils::AppResult;

/// Server state shared by every request
///
/// Immutable after startup; cloning is cheap (pool and verifier are
/// reference counted).
///
/// | Field | Type | Meaning |
/// |-------|------|---------|
/// | config | Config | configuration (immutable) |
/// | pool | SqlitePool | connection pool |
/// | verifier | Arc<dyn TokenVerifier> | bearer token verification |
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub pool: SqlitePool,
    pub verifier: Arc<dyn TokenVerifier>,
}

impl ServerState {
    /// Open the database (applying migrations) and build the JWT verifier
    pub async fn initialize(config: &Config) -> AppResult<Self> {
        let db = DbService::new(&config.database_url, config.db_max_connections).await?;
        let verifier = Arc::new(JwtVerifier::new(config.jwt.clone()));
        Ok(Self::with_parts(config.clone(), db.pool, verifier))
    }

    /// Assemble state from existing parts (tests, alternative verifiers)
    pub fn with_parts(
        config: Config,
        pool: SqlitePool,
        verifier: Arc<dyn TokenVerifier>,
    ) -> Self {
        Self {
            config,
            pool,
            verifier,
        }
    }

    pub fn verifier(&self) -> &dyn TokenVerifier {
        self.verifier.as_ref()
    }
}
