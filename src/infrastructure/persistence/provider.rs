//! Store resolution from configuration.

use async_trait::async_trait;
use std::sync::Arc;

use super::{InMemoryAliasStore, PgAliasStore, PoolSettings};
use crate::domain::repositories::{AliasStore, AliasStoreProvider};
use crate::error::StoreError;

/// Backend name selecting [`PgAliasStore`].
pub const POSTGRES_BACKEND: &str = "postgres";

/// Backend name selecting [`InMemoryAliasStore`].
pub const MEMORY_BACKEND: &str = "memory";

/// Everything needed to obtain a store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub backend: String,
    pub database_url: Option<String>,
    pub pool: PoolSettings,
}

/// Resolves the store named by [`StoreConfig::backend`].
///
/// Nothing is connected until [`AliasStoreProvider::provide`] is called.
pub struct BackendStoreProvider {
    config: StoreConfig,
}

impl BackendStoreProvider {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl AliasStoreProvider for BackendStoreProvider {
    async fn provide(&self) -> Result<Arc<dyn AliasStore>, StoreError> {
        match self.config.backend.as_str() {
            POSTGRES_BACKEND => {
                let url = self.config.database_url.as_deref().ok_or_else(|| {
                    StoreError::InvalidDefinition(
                        "DATABASE_URL (or DB_USER, DB_PASSWORD and DB_NAME) must be set for the postgres backend"
                            .to_string(),
                    )
                })?;
                let store = PgAliasStore::connect(url, self.config.pool).await?;
                Ok(Arc::new(store))
            }
            MEMORY_BACKEND => {
                tracing::warn!("Using in-memory alias store; aliases are discarded on exit");
                Ok(Arc::new(InMemoryAliasStore::new()))
            }
            other => Err(StoreError::UnknownBackend(other.to_string())),
        }
    }
}
