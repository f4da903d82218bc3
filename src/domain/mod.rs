//! Domain normalization.
//!
//! Turns whatever the input file holds (`HTTPS://Example.com/page?x=1`,
//! `  example.com/ `) into the canonical host key used for mock seeding and
//! provider request paths.
//!
//! Key functions:
//! - `normalize_domain()` - canonicalizes a raw string, empty on failure
//! - `canonical_domain()` - same, but rejects empty results with `FetchError::InvalidDomain`

use crate::error_handling::FetchError;

/// Canonicalizes a raw domain string.
///
/// Trims surrounding whitespace, lowercases, drops everything up to and
/// including the first `://`, then drops everything from the first `/` and
/// from the first `?`.
///
/// Returns an empty string when nothing is left. The function never fails;
/// callers that need a usable domain go through [`canonical_domain`].
///
/// Normalization is idempotent: `normalize_domain(&normalize_domain(x)) == normalize_domain(x)`.
pub fn normalize_domain(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    let mut rest = lowered.as_str();

    if let Some((_, after_scheme)) = rest.split_once("://") {
        rest = after_scheme;
    }
    if let Some((host, _)) = rest.split_once('/') {
        rest = host;
    }
    if let Some((host, _)) = rest.split_once('?') {
        rest = host;
    }

    rest.to_string()
}

/// Canonicalizes a raw domain string, rejecting inputs that normalize to nothing.
///
/// # Errors
///
/// Returns `FetchError::InvalidDomain` carrying the original input when the
/// canonical form is empty.
pub fn canonical_domain(raw: &str) -> Result<String, FetchError> {
    let domain = normalize_domain(raw);
    if domain.is_empty() {
        return Err(FetchError::InvalidDomain(raw.to_string()));
    }
    Ok(domain)
}

/// Returns the first label of a canonical domain, skipping a leading `www`.
///
/// Used to derive human-looking synthetic strings (`example` for
/// `www.example.co.uk`). Falls back to the whole domain, less outer dots,
/// when that label is empty (`www.` gives `www`).
pub fn domain_stem(domain: &str) -> &str {
    let trimmed = domain.strip_prefix("www.").unwrap_or(domain);
    match trimmed.split('.').next() {
        Some(stem) if !stem.is_empty() => stem,
        _ => match domain.trim_matches('.') {
            "" => domain,
            whole => whole,
        },
    }
}
