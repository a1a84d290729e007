#![allow(dead_code)]

use domain_alias::domain::entities::DomainAlias;

pub fn create_test_alias(id: &str, domain_id: &str, pattern: &str) -> DomainAlias {
    DomainAlias::new(
        id.to_string(),
        domain_id.to_string(),
        pattern.to_string(),
        "default".to_string(),
        true,
        None,
    )
}
