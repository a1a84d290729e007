//! Alias admission service.

use std::sync::Arc;

use tokio::sync::{Mutex, OnceCell};

use crate::domain::entities::{AddAliasRequest, DomainAlias, NewDomainAlias};
use crate::domain::repositories::{AliasStore, AliasStoreProvider, AliasValidator};
use crate::error::AliasError;
use crate::utils::identifier_normalizer::normalize_identifier;

/// Service that admits new domain aliases.
///
/// Enforces the collection-wide invariants:
/// - No two aliases share a pattern
/// - No two aliases share an id
///
/// The store is obtained from the provider on first use and reused afterwards.
/// Each admission runs under an internal lock, so callers sharing one
/// registrar cannot interleave their check and save steps. Writers outside
/// this registrar are caught by the store's own unique constraints.
pub struct AliasRegistrar<P: AliasStoreProvider> {
    provider: P,
    store: OnceCell<Arc<dyn AliasStore>>,
    validator: Option<Arc<dyn AliasValidator>>,
    admission: Mutex<()>,
}

impl<P: AliasStoreProvider> AliasRegistrar<P> {
    /// Creates a new registrar. The provider is not consulted until first use.
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            store: OnceCell::new(),
            validator: None,
            admission: Mutex::new(()),
        }
    }

    /// Runs `validator` on every candidate before the uniqueness checks.
    pub fn with_validator(mut self, validator: Arc<dyn AliasValidator>) -> Self {
        self.validator = Some(validator);
        self
    }

    /// Creates a new alias.
    ///
    /// # Flow
    ///
    /// 1. Resolve the store (once per registrar)
    /// 2. Load every existing alias
    /// 3. Derive the id from the pattern
    /// 4. Build the candidate with `status = !inactive`
    /// 5. Run the validator, if any
    /// 6. Reject a duplicate pattern, then a duplicate id (first match wins)
    /// 7. Save the candidate
    ///
    /// # Errors
    ///
    /// Returns [`AliasError::StorageUnavailable`] if the store cannot be obtained.
    /// Returns [`AliasError::InvalidPattern`] if the validator rejects the candidate.
    /// Returns [`AliasError::DuplicatePattern`] or [`AliasError::DuplicateIdentifier`]
    /// on a uniqueness conflict.
    /// Returns [`AliasError::StorageFailure`] if loading or saving fails.
    pub async fn add_alias(&self, request: AddAliasRequest) -> Result<DomainAlias, AliasError> {
        let _admission = self.admission.lock().await;

        let store = self.store().await?;
        let existing = store
            .load_all()
            .await
            .map_err(|source| AliasError::StorageFailure { source })?;

        let values = NewDomainAlias {
            id: normalize_identifier(&request.pattern),
            domain_id: request.domain_id,
            pattern: request.pattern,
            environment: request.environment,
            status: !request.options.inactive,
            redirect: request.options.redirect,
        };

        if let Some(validator) = &self.validator
            && let Some(reason) = validator.validate(&values)
        {
            tracing::debug!(pattern = %values.pattern, %reason, "Rejected invalid alias pattern");
            return Err(AliasError::InvalidPattern {
                pattern: values.pattern,
                reason,
            });
        }

        for alias in &existing {
            if alias.pattern == values.pattern {
                tracing::debug!(pattern = %values.pattern, "Rejected duplicate alias pattern");
                return Err(AliasError::DuplicatePattern {
                    pattern: values.pattern,
                });
            }
            if alias.id == values.id {
                tracing::debug!(id = %alias.id, "Rejected duplicate alias id");
                return Err(AliasError::DuplicateIdentifier {
                    id: alias.id.clone(),
                });
            }
        }

        let candidate = store.create(values);

        store
            .save(&candidate)
            .await
            .map_err(|e| AliasError::from_save(e, &candidate.pattern, &candidate.id))?;

        tracing::info!(
            id = %candidate.id,
            domain_id = %candidate.domain_id,
            pattern = %candidate.pattern,
            environment = %candidate.environment,
            "New alias has been created"
        );

        Ok(candidate)
    }

    /// Lists every stored alias.
    ///
    /// # Errors
    ///
    /// Returns [`AliasError::StorageUnavailable`] if the store cannot be obtained.
    /// Returns [`AliasError::StorageFailure`] if loading fails.
    pub async fn list_aliases(&self) -> Result<Vec<DomainAlias>, AliasError> {
        self.store()
            .await?
            .load_all()
            .await
            .map_err(|source| AliasError::StorageFailure { source })
    }

    async fn store(&self) -> Result<Arc<dyn AliasStore>, AliasError> {
        let store = self
            .store
            .get_or_try_init(|| async {
                self.provider
                    .provide()
                    .await
                    .map_err(AliasError::storage_unavailable)
            })
            .await?;

        Ok(store.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{MockAliasStore, MockAliasStoreProvider, MockAliasValidator};
    use crate::error::{ID_CONSTRAINT, PATTERN_CONSTRAINT, StoreError};

    fn create_test_alias(id: &str, pattern: &str) -> DomainAlias {
        DomainAlias::new(
            id.to_string(),
            "example_com".to_string(),
            pattern.to_string(),
            "default".to_string(),
            true,
            None,
        )
    }

    fn mock_store_with(existing: Vec<DomainAlias>) -> MockAliasStore {
        let mut mock_store = MockAliasStore::new();
        mock_store
            .expect_load_all()
            .times(1)
            .returning(move || Ok(existing.clone()));
        mock_store.expect_create().returning(DomainAlias::from);
        mock_store
    }

    #[tokio::test]
    async fn test_add_alias_success() {
        let mut mock_store = mock_store_with(vec![create_test_alias("other_com", "other.com")]);
        mock_store
            .expect_save()
            .withf(|alias| alias.id == "www_example_com" && alias.pattern == "www.example.com")
            .times(1)
            .returning(|_| Ok(()));

        let registrar = AliasRegistrar::new(Arc::new(mock_store));

        let result = registrar
            .add_alias(AddAliasRequest::new("example_com", "www.example.com"))
            .await;

        assert!(result.is_ok());
        let alias = result.unwrap();
        assert_eq!(alias.id, "www_example_com");
        assert_eq!(alias.domain_id, "example_com");
        assert_eq!(alias.environment, "default");
        assert!(alias.status);
        assert!(alias.redirect.is_none());
    }

    #[tokio::test]
    async fn test_add_alias_inactive() {
        let mut mock_store = mock_store_with(vec![]);
        mock_store
            .expect_save()
            .withf(|alias| !alias.status)
            .times(1)
            .returning(|_| Ok(()));

        let registrar = AliasRegistrar::new(Arc::new(mock_store));

        let alias = registrar
            .add_alias(AddAliasRequest::new("example_com", "old.example.com").inactive(true))
            .await
            .unwrap();

        assert!(!alias.status);
    }

    #[tokio::test]
    async fn test_add_alias_redirect_copied() {
        let mut mock_store = mock_store_with(vec![]);
        mock_store
            .expect_save()
            .withf(|alias| alias.redirect == Some(301))
            .times(1)
            .returning(|_| Ok(()));

        let registrar = AliasRegistrar::new(Arc::new(mock_store));

        let alias = registrar
            .add_alias(
                AddAliasRequest::new("example_com", "example.net")
                    .environment("staging")
                    .redirect(Some(301)),
            )
            .await
            .unwrap();

        assert_eq!(alias.redirect, Some(301));
        assert_eq!(alias.environment, "staging");
    }

    #[tokio::test]
    async fn test_add_alias_duplicate_pattern() {
        let mut existing = create_test_alias("example_com", "example.com");
        existing.domain_id = "another_domain".to_string();
        existing.environment = "local".to_string();

        let mut mock_store = mock_store_with(vec![existing]);
        mock_store.expect_save().times(0);

        let registrar = AliasRegistrar::new(Arc::new(mock_store));

        let result = registrar
            .add_alias(AddAliasRequest::new("example_com", "example.com").environment("staging"))
            .await;

        assert!(matches!(
            result.unwrap_err(),
            AliasError::DuplicatePattern { pattern } if pattern == "example.com"
        ));
    }

    #[tokio::test]
    async fn test_add_alias_duplicate_identifier() {
        for pattern in ["foo-bar", "foo.bar"] {
            let mut mock_store = mock_store_with(vec![create_test_alias("foo_bar", "foo_bar")]);
            mock_store.expect_save().times(0);

            let registrar = AliasRegistrar::new(Arc::new(mock_store));

            let result = registrar
                .add_alias(AddAliasRequest::new("example_com", pattern))
                .await;

            assert!(
                matches!(result, Err(AliasError::DuplicateIdentifier { ref id }) if id == "foo_bar"),
                "{pattern}: {result:?}"
            );
        }
    }

    #[tokio::test]
    async fn test_add_alias_storage_unavailable() {
        let mut mock_provider = MockAliasStoreProvider::new();
        mock_provider
            .expect_provide()
            .times(1)
            .returning(|| Err(StoreError::UnknownBackend("domain_alias".to_string())));

        let registrar = AliasRegistrar::new(mock_provider);

        let result = registrar
            .add_alias(AddAliasRequest::new("example_com", "www.example.com"))
            .await;

        assert!(matches!(
            result.unwrap_err(),
            AliasError::StorageUnavailable { reason: "no storage", .. }
        ));
    }

    #[tokio::test]
    async fn test_store_resolved_once() {
        let mut mock_store = MockAliasStore::new();
        mock_store.expect_load_all().times(2).returning(|| Ok(vec![]));
        mock_store.expect_create().returning(DomainAlias::from);
        mock_store.expect_save().times(1).returning(|_| Ok(()));
        let store: Arc<dyn AliasStore> = Arc::new(mock_store);

        let mut mock_provider = MockAliasStoreProvider::new();
        mock_provider
            .expect_provide()
            .times(1)
            .returning(move || Ok(store.clone()));

        let registrar = AliasRegistrar::new(mock_provider);

        registrar
            .add_alias(AddAliasRequest::new("example_com", "a.example.com"))
            .await
            .unwrap();
        registrar.list_aliases().await.unwrap();
    }

    #[tokio::test]
    async fn test_add_alias_load_failure() {
        let mut mock_store = MockAliasStore::new();
        mock_store
            .expect_load_all()
            .times(1)
            .returning(|| Err(StoreError::Decode("bad row".to_string())));
        mock_store.expect_save().times(0);

        let registrar = AliasRegistrar::new(Arc::new(mock_store));

        let result = registrar
            .add_alias(AddAliasRequest::new("example_com", "www.example.com"))
            .await;

        assert!(matches!(result.unwrap_err(), AliasError::StorageFailure { .. }));
    }

    #[tokio::test]
    async fn test_add_alias_save_failure_preserves_cause() {
        let mut mock_store = mock_store_with(vec![]);
        mock_store
            .expect_save()
            .times(1)
            .returning(|_| Err(StoreError::Decode("disk full".to_string())));

        let registrar = AliasRegistrar::new(Arc::new(mock_store));

        let err = registrar
            .add_alias(AddAliasRequest::new("example_com", "www.example.com"))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Unable to save domain alias");
        let source = std::error::Error::source(&err).unwrap();
        assert!(source.to_string().contains("disk full"));
    }

    #[tokio::test]
    async fn test_add_alias_save_race_on_pattern() {
        let mut mock_store = mock_store_with(vec![]);
        mock_store.expect_save().times(1).returning(|_| {
            Err(StoreError::UniqueViolation {
                constraint: Some(PATTERN_CONSTRAINT.to_string()),
            })
        });

        let registrar = AliasRegistrar::new(Arc::new(mock_store));

        let result = registrar
            .add_alias(AddAliasRequest::new("example_com", "www.example.com"))
            .await;

        assert!(matches!(result.unwrap_err(), AliasError::DuplicatePattern { .. }));
    }

    #[tokio::test]
    async fn test_add_alias_save_race_on_id() {
        let mut mock_store = mock_store_with(vec![]);
        mock_store.expect_save().times(1).returning(|_| {
            Err(StoreError::UniqueViolation {
                constraint: Some(ID_CONSTRAINT.to_string()),
            })
        });

        let registrar = AliasRegistrar::new(Arc::new(mock_store));

        let result = registrar
            .add_alias(AddAliasRequest::new("example_com", "www.example.com"))
            .await;

        assert!(matches!(
            result.unwrap_err(),
            AliasError::DuplicateIdentifier { id } if id == "www_example_com"
        ));
    }

    #[tokio::test]
    async fn test_validator_runs_before_duplicate_checks() {
        let mut mock_store = mock_store_with(vec![create_test_alias("intranet", "intranet")]);
        mock_store.expect_save().times(0);

        let mut mock_validator = MockAliasValidator::new();
        mock_validator
            .expect_validate()
            .withf(|candidate| candidate.pattern == "intranet" && candidate.id == "intranet")
            .times(1)
            .returning(|_| Some("At least one dot (.) is required.".to_string()));

        let registrar =
            AliasRegistrar::new(Arc::new(mock_store)).with_validator(Arc::new(mock_validator));

        let result = registrar
            .add_alias(AddAliasRequest::new("example_com", "intranet"))
            .await;

        assert!(matches!(
            result.unwrap_err(),
            AliasError::InvalidPattern { pattern, .. } if pattern == "intranet"
        ));
    }

    #[tokio::test]
    async fn test_validator_accepts() {
        let mut mock_store = mock_store_with(vec![]);
        mock_store.expect_save().times(1).returning(|_| Ok(()));

        let mut mock_validator = MockAliasValidator::new();
        mock_validator.expect_validate().times(1).returning(|_| None);

        let registrar =
            AliasRegistrar::new(Arc::new(mock_store)).with_validator(Arc::new(mock_validator));

        let result = registrar
            .add_alias(AddAliasRequest::new("example_com", "www.example.com"))
            .await;

        assert!(result.is_ok());
    }
}
