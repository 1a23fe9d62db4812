//! Live-value-or-fallback resolution shared by every document builder.
//!
//! Each document field can come from two places:
//!
//! - **Live data**: a catalog entry field or a service config key, read by the
//!   source layer. Any of these may be missing, and partial availability is the
//!   common case (some catalog files exist, others do not).
//! - **Fallback content**: a constant embedded in the builder itself.
//!
//! Fields are resolved independently. A document never switches between "all
//! live" and "all fallback"; a single missing key only replaces that key's value.
//!
//! Blank values (empty or whitespace only) count as missing, so a catalog file
//! with `"description": ""` shows the fallback description rather than an empty
//! table cell.

/// Resolve a field from multiple sources.
///
/// Takes optional values in priority order and returns the first non-None,
/// non-blank value, trimmed.
///
/// ```text
/// description: resolve(&[catalog_description, known_description])
/// ```
pub fn resolve(sources: &[Option<&str>]) -> Option<String> {
    sources
        .iter()
        .filter_map(|opt| {
            opt.map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
        })
        .next()
}

/// Resolve a live value against a fixed fallback.
///
/// This is the accessor every builder goes through; it cannot fail and always
/// produces a value.
pub fn or_fallback(live: Option<&str>, fallback: &str) -> String {
    resolve(&[live]).unwrap_or_else(|| fallback.to_string())
}
