//! Domain layer containing the alias entity and collaborator contracts.
//!
//! - [`entities`] - Alias data structures and request types
//! - [`repositories`] - Storage and validation trait definitions
//!
//! The domain layer has no dependencies on infrastructure. Admission rules
//! live in [`crate::application::services::AliasRegistrar`].

pub mod entities;
pub mod repositories;
