//! Infrastructure layer implementing the domain's storage contract.
//!
//! - [`persistence`] - PostgreSQL and in-memory alias stores

pub mod persistence;
