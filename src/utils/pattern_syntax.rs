//! Hostname pattern syntax checks.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::entities::NewDomainAlias;
use crate::domain::repositories::AliasValidator;

static ALLOWED_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9.*:\-]+$").expect("valid pattern regex"));

static PORT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+|\*)$").expect("valid port regex"));

/// Rejects patterns that cannot describe a hostname.
///
/// # Rules
///
/// 1. Must not be empty
/// 2. At least one dot, except for `localhost`
/// 3. At most one `*` wildcard
/// 4. At most one colon, followed by a numeric port (or `*`)
/// 5. Must not end with a dot
/// 6. Only letters, digits, dots, hyphens, colons and `*`
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternSyntaxValidator;

impl PatternSyntaxValidator {
    pub fn new() -> Self {
        Self
    }

    /// Checks a bare pattern.
    pub fn check(&self, pattern: &str) -> Option<String> {
        if pattern.is_empty() {
            return Some("Pattern must not be empty.".to_string());
        }

        let (host, port) = match pattern.split_once(':') {
            Some((host, port)) => (host, Some(port)),
            None => (pattern, None),
        };

        if !host.contains('.') && !host.eq_ignore_ascii_case("localhost") {
            return Some("At least one dot (.) is required, except when using localhost.".to_string());
        }

        if pattern.matches('*').count() > 1 {
            return Some("You may only have one wildcard character in each alias.".to_string());
        }

        if let Some(port) = port
            && !PORT.is_match(port)
        {
            return Some(
                "A colon may only be used once, to specify a numeric port value.".to_string(),
            );
        }

        if host.ends_with('.') {
            return Some("The pattern cannot end with a dot.".to_string());
        }

        if !ALLOWED_CHARS.is_match(pattern) {
            return Some(
                "Only letters, numbers, dots, hyphens, a colon and wildcards are allowed.".to_string(),
            );
        }

        None
    }
}

impl AliasValidator for PatternSyntaxValidator {
    fn validate(&self, candidate: &NewDomainAlias) -> Option<String> {
        self.check(&candidate.pattern)
    }
}
