//! Helpers used by the registrar.
//!
//! - [`identifier_normalizer`] - Machine-safe identifiers from hostname patterns
//! - [`pattern_syntax`] - Hostname pattern syntax validation

pub mod identifier_normalizer;
pub mod pattern_syntax;

pub use identifier_normalizer::normalize_identifier;
pub use pattern_syntax::PatternSyntaxValidator;
