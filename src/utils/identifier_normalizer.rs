//! Derivation of machine-safe alias identifiers from hostname patterns.

/// Normalizes a hostname pattern into a storage-safe identifier.
///
/// Every byte outside `[a-z0-9_]` becomes `_`. Uppercase letters are not in
/// the set and are replaced as well. A multi-byte character becomes one `_`
/// per byte, so the output is always exactly as long as the input.
///
/// Distinct patterns can normalize to the same identifier (`foo-bar` and
/// `foo.bar` both give `foo_bar`); the registrar rejects such collisions
/// rather than disambiguating them.
///
/// # Examples
///
/// ```
/// use domain_alias::utils::identifier_normalizer::normalize_identifier;
///
/// assert_eq!(normalize_identifier("www.example.com"), "www_example_com");
/// assert_eq!(normalize_identifier("*.Example.com"), "___xample_com");
/// ```
pub fn normalize_identifier(pattern: &str) -> String {
    pattern
        .bytes()
        .map(|b| match b {
            b'a'..=b'z' | b'0'..=b'9' | b'_' => b as char,
            _ => '_',
        })
        .collect()
}
