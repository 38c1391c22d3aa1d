//! Query normalization

/// Normalize raw query text: trim surrounding whitespace, lower-case.
///
/// An empty result is the valid "no query" state, not a failure - the
/// pipeline short-circuits to an empty result list and history is left
/// untouched.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}
