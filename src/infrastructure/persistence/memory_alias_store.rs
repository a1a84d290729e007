//! Process-local alias store.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::{DomainAlias, NewDomainAlias};
use crate::domain::repositories::AliasStore;
use crate::error::{ID_CONSTRAINT, PATTERN_CONSTRAINT, StoreError};

/// An alias store kept in memory for the lifetime of the process.
///
/// Enforces the same unique constraints as the PostgreSQL schema and reports
/// violations under the same constraint names.
#[derive(Default)]
pub struct InMemoryAliasStore {
    aliases: RwLock<Vec<DomainAlias>>,
}

impl InMemoryAliasStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `aliases`, which are not re-checked.
    pub fn with_aliases(aliases: Vec<DomainAlias>) -> Self {
        Self {
            aliases: RwLock::new(aliases),
        }
    }
}

#[async_trait]
impl AliasStore for InMemoryAliasStore {
    async fn load_all(&self) -> Result<Vec<DomainAlias>, StoreError> {
        Ok(self.aliases.read().await.clone())
    }

    fn create(&self, values: NewDomainAlias) -> DomainAlias {
        DomainAlias::from(values)
    }

    async fn save(&self, alias: &DomainAlias) -> Result<(), StoreError> {
        let mut aliases = self.aliases.write().await;

        let violated = aliases.iter().find_map(|existing| {
            if existing.id == alias.id {
                Some(ID_CONSTRAINT)
            } else if existing.pattern == alias.pattern {
                Some(PATTERN_CONSTRAINT)
            } else {
                None
            }
        });
        if let Some(constraint) = violated {
            return Err(StoreError::UniqueViolation {
                constraint: Some(constraint.to_string()),
            });
        }

        aliases.push(alias.clone());
        tracing::debug!(id = %alias.id, "Saved domain alias in memory");

        Ok(())
    }
}
