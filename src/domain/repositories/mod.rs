//! Collaborator traits for the domain layer.
//!
//! These traits abstract storage and validation so the registrar can run
//! against any backend. Implementations live in `crate::infrastructure` and
//! `crate::utils`; mock implementations are generated via `mockall` for testing.
//!
//! - [`AliasStore`] - Load, build and persist aliases
//! - [`AliasStoreProvider`] - Lazily obtains an [`AliasStore`]
//! - [`AliasValidator`] - Pattern syntax checks

pub mod alias_store;
pub mod alias_validator;

pub use alias_store::{AliasStore, AliasStoreProvider};
pub use alias_validator::AliasValidator;

#[cfg(test)]
pub use alias_store::{MockAliasStore, MockAliasStoreProvider};
#[cfg(test)]
pub use alias_validator::MockAliasValidator;
