//! Resolution of stored media references into client-resolvable URLs.

use crate::domain::types::has_http_scheme;

/// Legacy storage prefix written by the old local upload handler.
const LEGACY_UPLOADS_PREFIX: &str = "uploads/";

/// Turns a stored media reference into an absolute URL under `base_url`.
///
/// Absolute `http(s)` references are returned untouched. Relative ones lose
/// their leading slashes and a legacy `uploads/` segment, then get joined to
/// `base_url` with a single `/`. The result is always absolute, which makes
/// the function idempotent.
pub fn normalize_media_url(reference: &str, base_url: &str) -> String {
    if has_http_scheme(reference) {
        return reference.to_string();
    }

    let path = reference.trim_start_matches('/');
    let path = path
        .strip_prefix(LEGACY_UPLOADS_PREFIX)
        .unwrap_or(path)
        .trim_start_matches('/');

    format!("{}/{}", base_url.trim_end_matches('/'), path)
}

/// Normalizes every reference of a media list, preserving order.
pub fn normalize_media_urls(references: &[String], base_url: &str) -> Vec<String> {
    references
        .iter()
        .map(|reference| normalize_media_url(reference, base_url))
        .collect()
}
