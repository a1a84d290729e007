//! Error types for alias admission and storage.
//!
//! [`StoreError`] is what an [`AliasStore`](crate::domain::repositories::AliasStore)
//! reports. [`AliasError`] is what callers of the registrar see; storage
//! failures are wrapped with their original cause preserved.

use thiserror::Error;

/// Constraint backing the primary key of `domain_aliases`.
pub const ID_CONSTRAINT: &str = "domain_aliases_pkey";

/// Constraint backing the unique pattern column of `domain_aliases`.
pub const PATTERN_CONSTRAINT: &str = "domain_aliases_pattern_key";

/// Failures raised by a storage backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no storage backend named `{0}`")]
    UnknownBackend(String),

    #[error("invalid storage definition: {0}")]
    InvalidDefinition(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("unique constraint violation on {}", .constraint.as_deref().unwrap_or("unknown constraint"))]
    UniqueViolation { constraint: Option<String> },

    #[error("failed to decode stored alias: {0}")]
    Decode(String),
}

impl StoreError {
    /// Maps a database error to [`StoreError::UniqueViolation`] when it is one.
    pub fn from_sqlx(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return Self::UniqueViolation {
                constraint: db.constraint().map(str::to_string),
            };
        }

        Self::Database(e)
    }

    fn is_violation_of(&self, name: &str) -> bool {
        matches!(self, Self::UniqueViolation { constraint: Some(c) } if c == name)
    }
}

/// Errors returned by [`AliasRegistrar`](crate::application::services::AliasRegistrar).
#[derive(Debug, Error)]
pub enum AliasError {
    #[error("Unable to get domain alias: {reason}")]
    StorageUnavailable {
        reason: &'static str,
        #[source]
        source: StoreError,
    },

    #[error("Pattern is not valid. {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("No domain alias created. Pattern is a duplicate of {pattern}.")]
    DuplicatePattern { pattern: String },

    #[error("No domain alias created. Id is a duplicate of {id}.")]
    DuplicateIdentifier { id: String },

    #[error("Unable to save domain alias")]
    StorageFailure {
        #[source]
        source: StoreError,
    },
}

impl AliasError {
    /// Wraps a failure to obtain the store.
    ///
    /// An unknown backend reads as "no storage"; anything else as "bad storage".
    pub fn storage_unavailable(source: StoreError) -> Self {
        let reason = match &source {
            StoreError::UnknownBackend(_) => "no storage",
            _ => "bad storage",
        };
        Self::StorageUnavailable { reason, source }
    }

    /// Wraps a failure of the final save.
    ///
    /// Unique violations on the pattern or id constraints become the matching
    /// duplicate error, so a concurrent writer that won the race is reported
    /// the same way as one caught by the pre-save checks.
    pub fn from_save(source: StoreError, pattern: &str, id: &str) -> Self {
        if source.is_violation_of(PATTERN_CONSTRAINT) {
            return Self::DuplicatePattern {
                pattern: pattern.to_string(),
            };
        }
        if source.is_violation_of(ID_CONSTRAINT) {
            return Self::DuplicateIdentifier { id: id.to_string() };
        }

        Self::StorageFailure { source }
    }
}
