//! Application layer services implementing the admission rules.
//!
//! Services consume the collaborator traits from [`crate::domain::repositories`]
//! and expose a small API for the CLI or any other driver.
//!
//! - [`services::alias_registrar::AliasRegistrar`] - Alias admission and listing

pub mod services;
