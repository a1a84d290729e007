//! Domain alias entity and the inputs used to create one.

use serde::Serialize;

/// Documented environment names an alias can be tagged with.
///
/// The list is informational; values outside it are stored as given.
pub struct Environment;

impl Environment {
    pub const DEFAULT: &'static str = "default";
    pub const KNOWN: [&'static str; 5] = ["default", "local", "development", "staging", "testing"];
}

/// A hostname pattern mapped to a primary domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainAlias {
    pub id: String,
    pub domain_id: String,
    pub pattern: String,
    pub environment: String,
    pub status: bool,
    pub redirect: Option<u16>,
}

impl DomainAlias {
    /// Creates a new DomainAlias instance.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let alias = DomainAlias::new(
    ///     "www_example_com".to_string(),
    ///     "example_com".to_string(),
    ///     "www.example.com".to_string(),
    ///     "default".to_string(),
    ///     true,
    ///     Some(301),
    /// );
    /// ```
    pub fn new(
        id: String,
        domain_id: String,
        pattern: String,
        environment: String,
        status: bool,
        redirect: Option<u16>,
    ) -> Self {
        Self {
            id,
            domain_id,
            pattern,
            environment,
            status,
            redirect,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status
    }
}

/// The value set handed to a store to construct a not-yet-persisted alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDomainAlias {
    pub id: String,
    pub domain_id: String,
    pub pattern: String,
    pub environment: String,
    pub status: bool,
    pub redirect: Option<u16>,
}

impl From<NewDomainAlias> for DomainAlias {
    fn from(values: NewDomainAlias) -> Self {
        Self::new(
            values.id,
            values.domain_id,
            values.pattern,
            values.environment,
            values.status,
            values.redirect,
        )
    }
}

impl From<&DomainAlias> for NewDomainAlias {
    fn from(alias: &DomainAlias) -> Self {
        Self {
            id: alias.id.clone(),
            domain_id: alias.domain_id.clone(),
            pattern: alias.pattern.clone(),
            environment: alias.environment.clone(),
            status: alias.status,
            redirect: alias.redirect,
        }
    }
}

/// Options recognised by the add operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AliasOptions {
    /// Create the alias with `status = false`.
    pub inactive: bool,
    /// Copied verbatim onto the alias; not checked against 301/302.
    pub redirect: Option<u16>,
}

/// A request to register a new alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddAliasRequest {
    pub domain_id: String,
    pub pattern: String,
    pub environment: String,
    pub options: AliasOptions,
}

impl AddAliasRequest {
    /// Builds a request in the `default` environment with default options.
    pub fn new(domain_id: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            domain_id: domain_id.into(),
            pattern: pattern.into(),
            environment: Environment::DEFAULT.to_string(),
            options: AliasOptions::default(),
        }
    }

    pub fn environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = environment.into();
        self
    }

    pub fn inactive(mut self, inactive: bool) -> Self {
        self.options.inactive = inactive;
        self
    }

    pub fn redirect(mut self, redirect: Option<u16>) -> Self {
        self.options.redirect = redirect;
        self
    }
}
