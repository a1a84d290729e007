//! # Domain Alias
//!
//! Administration of domain alias records: hostname patterns that map to a
//! primary domain, each tagged with an environment, an active/inactive status
//! and an optional HTTP redirect code.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The alias entity and collaborator traits
//! - **Application Layer** ([`application`]) - Admission and uniqueness rules
//! - **Infrastructure Layer** ([`infrastructure`]) - PostgreSQL and in-memory stores
//! - **Utilities** ([`utils`]) - Identifier normalization and pattern syntax checks
//!
//! ## Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use domain_alias::prelude::*;
//!
//! # async fn run() -> Result<(), AliasError> {
//! let registrar = AliasRegistrar::new(Arc::new(InMemoryAliasStore::new()));
//! let alias = registrar
//!     .add_alias(AddAliasRequest::new("example_com", "www.example.com").redirect(Some(301)))
//!     .await?;
//! assert_eq!(alias.id, "www_example_com");
//! # Ok(())
//! # }
//! ```
//!
//! ## Configuration
//!
//! The `domain-alias` binary is configured from environment variables via
//! [`config::Config`].

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod utils;

pub use error::{AliasError, StoreError};

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::AliasRegistrar;
    pub use crate::domain::entities::{AddAliasRequest, AliasOptions, DomainAlias, NewDomainAlias};
    pub use crate::domain::repositories::{AliasStore, AliasStoreProvider, AliasValidator};
    pub use crate::error::{AliasError, StoreError};
    pub use crate::infrastructure::persistence::{BackendStoreProvider, InMemoryAliasStore};
    pub use crate::utils::{PatternSyntaxValidator, normalize_identifier};
}
