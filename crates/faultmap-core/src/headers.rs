use http::HeaderMap;
use http::header::ACCEPT_LANGUAGE;

use crate::language::DEFAULT_LANGUAGE;

/// Raw language preference of a request
///
/// Reads `Accept-Language` verbatim; a missing or non-ASCII header yields
/// `"en"`. Normalization is left to [`crate::Language::normalize`].
pub fn raw_language(headers: &HeaderMap) -> &str {
    headers
        .get(ACCEPT_LANGUAGE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or(DEFAULT_LANGUAGE)
}
