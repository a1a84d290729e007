//! PostgreSQL implementation of the alias store.

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::{DomainAlias, NewDomainAlias};
use crate::domain::repositories::AliasStore;
use crate::error::StoreError;

/// Connection pool settings for [`PgAliasStore::connect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolSettings {
    pub max_connections: u32,
    pub connect_timeout_secs: u64,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: 5,
            connect_timeout_secs: 30,
        }
    }
}

#[derive(sqlx::FromRow)]
struct AliasRow {
    id: String,
    domain_id: String,
    pattern: String,
    environment: String,
    status: bool,
    redirect: Option<i32>,
}

impl TryFrom<AliasRow> for DomainAlias {
    type Error = StoreError;

    fn try_from(row: AliasRow) -> Result<Self, Self::Error> {
        let redirect = row
            .redirect
            .map(u16::try_from)
            .transpose()
            .map_err(|_| {
                StoreError::Decode(format!("redirect out of range for alias `{}`", row.id))
            })?;

        Ok(DomainAlias::new(
            row.id,
            row.domain_id,
            row.pattern,
            row.environment,
            row.status,
            redirect,
        ))
    }
}

/// PostgreSQL store for domain aliases.
///
/// Uniqueness of `id` and `pattern` is enforced by table constraints, so an
/// insert that loses a race with another writer fails with
/// [`StoreError::UniqueViolation`] instead of producing a duplicate.
pub struct PgAliasStore {
    pool: Arc<PgPool>,
}

impl PgAliasStore {
    /// Creates a new store with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Connects to the database and applies pending migrations.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] if the connection fails.
    /// Returns [`StoreError::Migration`] if migrations cannot be applied.
    pub async fn connect(database_url: &str, settings: PoolSettings) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(settings.max_connections)
            .acquire_timeout(Duration::from_secs(settings.connect_timeout_secs))
            .connect(database_url)
            .await?;
        tracing::debug!("Connected to database");

        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self::new(Arc::new(pool)))
    }
}

#[async_trait]
impl AliasStore for PgAliasStore {
    async fn load_all(&self) -> Result<Vec<DomainAlias>, StoreError> {
        let rows = sqlx::query_as::<_, AliasRow>(
            r#"
            SELECT id, domain_id, pattern, environment, status, redirect
            FROM domain_aliases
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        tracing::debug!(count = rows.len(), "Loaded domain aliases");

        rows.into_iter().map(DomainAlias::try_from).collect()
    }

    fn create(&self, values: NewDomainAlias) -> DomainAlias {
        DomainAlias::from(values)
    }

    async fn save(&self, alias: &DomainAlias) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO domain_aliases (id, domain_id, pattern, environment, status, redirect)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(&alias.id)
        .bind(&alias.domain_id)
        .bind(&alias.pattern)
        .bind(&alias.environment)
        .bind(alias.status)
        .bind(alias.redirect.map(i32::from))
        .execute(self.pool.as_ref())
        .await
        .map_err(StoreError::from_sqlx)?;

        tracing::debug!(id = %alias.id, "Saved domain alias");

        Ok(())
    }
}
