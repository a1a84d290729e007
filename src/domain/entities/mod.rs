//! Core domain entities.
//!
//! - [`DomainAlias`] - A persisted (or about to be persisted) alias record
//! - [`NewDomainAlias`] - The value set a store builds an alias from
//! - [`AddAliasRequest`] / [`AliasOptions`] - Input to the registrar

pub mod domain_alias;

pub use domain_alias::{AddAliasRequest, AliasOptions, DomainAlias, Environment, NewDomainAlias};
