//! Storage contract for domain aliases.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::entities::{DomainAlias, NewDomainAlias};
use crate::error::StoreError;

/// Storage collaborator owning the durable copy of every alias.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgAliasStore`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryAliasStore`] - Process-local implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AliasStore: Send + Sync {
    /// Loads every stored alias.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] on backend errors.
    async fn load_all(&self) -> Result<Vec<DomainAlias>, StoreError>;

    /// Builds an alias from a value set without touching storage.
    fn create(&self, values: NewDomainAlias) -> DomainAlias;

    /// Durably persists an alias built by [`AliasStore::create`].
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UniqueViolation`] if the id or pattern is already stored.
    /// Returns [`StoreError::Database`] on backend errors.
    async fn save(&self, alias: &DomainAlias) -> Result<(), StoreError>;
}

/// Resolves the store a registrar works against.
///
/// Called at most once per registrar; the result is cached.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AliasStoreProvider: Send + Sync {
    /// # Errors
    ///
    /// Returns [`StoreError::UnknownBackend`] when no such storage exists.
    /// Returns any other variant when the storage definition is unusable.
    async fn provide(&self) -> Result<Arc<dyn AliasStore>, StoreError>;
}

#[async_trait]
impl<S: AliasStore + 'static> AliasStoreProvider for Arc<S> {
    async fn provide(&self) -> Result<Arc<dyn AliasStore>, StoreError> {
        Ok(self.clone())
    }
}
