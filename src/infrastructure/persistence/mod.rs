//! Alias store implementations.
//!
//! - [`PgAliasStore`] - PostgreSQL storage via SQLx
//! - [`InMemoryAliasStore`] - Process-local storage
//! - [`BackendStoreProvider`] - Picks one of the above from configuration

pub mod memory_alias_store;
pub mod pg_alias_store;
pub mod provider;

pub use memory_alias_store::InMemoryAliasStore;
pub use pg_alias_store::{PgAliasStore, PoolSettings};
pub use provider::{BackendStoreProvider, MEMORY_BACKEND, POSTGRES_BACKEND, StoreConfig};
