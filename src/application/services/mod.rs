//! Business logic services for the application layer.

pub mod alias_registrar;

pub use alias_registrar::AliasRegistrar;
