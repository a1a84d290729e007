//! Optional syntax check run on a candidate alias before it is admitted.

use crate::domain::entities::NewDomainAlias;

/// Validates a candidate that has not been persisted yet.
///
/// Returns the reason the candidate is rejected, or `None` when it is acceptable.
#[cfg_attr(test, mockall::automock)]
pub trait AliasValidator: Send + Sync {
    fn validate(&self, candidate: &NewDomainAlias) -> Option<String>;
}
