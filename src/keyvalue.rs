//! Flat `key: value` reader for the chat service's `config.yaml`.
//!
//! The service file is YAML, but only its top-level scalar settings matter
//! here (`version`, `port`, `engine`, `author`). Rather than pulling a YAML
//! parser in, lines are read with a conservative subset grammar:
//!
//! - blank lines are ignored
//! - lines starting with `#` (after trimming) are comments
//! - lines without `:` are ignored
//! - everything else splits on the first `:` into a trimmed key and value;
//!   a value wrapped in matching `"` or `'` quotes has them removed
//!
//! Nested blocks, lists and multi-line scalars are not interpreted. Their lines
//! either carry no colon and are dropped, or show up as harmless extra keys
//! that no document asks for. Nothing in the file can make the parse fail.
//!
//! A later line with the same key replaces the earlier value.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum KeyValueError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Parsed key/value settings. Empty when the file is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyValues {
    values: BTreeMap<String, String>,
}

impl KeyValues {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for KeyValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Strip one pair of matching surrounding quotes.
fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Parse a single line into a key/value pair, if it is one.
fn parse_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let (key, value) = line.split_once(':')?;
    Some((key.trim(), unquote(value.trim())))
}

/// Parse `key: value` content.
pub fn parse_key_values(content: &str) -> KeyValues {
    let mut values = BTreeMap::new();
    for (key, value) in content.lines().filter_map(parse_line) {
        debug!(key, "parsed service config key");
        values.insert(key.to_string(), value.to_string());
    }
    KeyValues { values }
}

/// Read a `key: value` file.
///
/// Returns an empty mapping if the file doesn't exist. Returns `Err` only when
/// the file exists but cannot be read.
pub fn read_key_values(path: &Path) -> Result<KeyValues, KeyValueError> {
    if !path.exists() {
        debug!(path = %path.display(), "service config not found, using empty settings");
        return Ok(KeyValues::default());
    }
    let content = fs::read_to_string(path).map_err(|source| KeyValueError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_key_values(&content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_is_empty() {
        let tmp = TempDir::new().unwrap();
        let values = read_key_values(&tmp.path().join("config.yaml")).unwrap();
        assert!(values.is_empty());
    }

    #[test]
    fn read_strips_double_quotes() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.yaml");
        fs::write(&path, "version: \"1.2.3\"\n").unwrap();

        let values = read_key_values(&path).unwrap();
        assert_eq!(values.get("version"), Some("1.2.3"));
    }

    #[test]
    fn directory_path_is_read_error() {
        let tmp = TempDir::new().unwrap();
        let result = read_key_values(tmp.path());
        assert!(matches!(result, Err(KeyValueError::Read { .. })));
    }

    #[test]
    fn parse_basic_pairs() {
        let values = parse_key_values("port: 8082\nengine: gemini\n");
        assert_eq!(values.get("port"), Some("8082"));
        assert_eq!(values.get("engine"), Some("gemini"));
        assert_eq!(values.len(), 2);
    }

    #[test]
    fn parse_strips_single_quotes() {
        let values = parse_key_values("author: 'Data Team'");
        assert_eq!(values.get("author"), Some("Data Team"));
    }

    #[test]
    fn parse_keeps_unmatched_quotes() {
        let values = parse_key_values("a: \"open\nb: 'mixed\"\nc: \"");
        assert_eq!(values.get("a"), Some("\"open"));
        assert_eq!(values.get("b"), Some("'mixed\""));
        assert_eq!(values.get("c"), Some("\""));
    }

    #[test]
    fn parse_splits_on_first_colon() {
        let values = parse_key_values("url: http://localhost:8082/api");
        assert_eq!(values.get("url"), Some("http://localhost:8082/api"));
    }

    #[test]
    fn parse_ignores_comments_and_blank_lines() {
        let values = parse_key_values("# version: 9.9\n\n   \n  # port: 1\nversion: 2.0\n");
        assert_eq!(values.get("version"), Some("2.0"));
        assert_eq!(values.get("port"), None);
        assert_eq!(values.len(), 1);
    }

    #[test]
    fn parse_ignores_lines_without_colon() {
        let values = parse_key_values("just some text\n- list item\nport: 9000");
        assert_eq!(values.len(), 1);
        assert_eq!(values.get("port"), Some("9000"));
    }

    #[test]
    fn parse_tolerates_nested_yaml() {
        let content = "\
version: 1.4.0
providers:
  - gemini
  - ollama
database:
  host: db.internal
description: |
  multi-line text
  spanning lines
";
        let values = parse_key_values(content);
        assert_eq!(values.get("version"), Some("1.4.0"));
        assert_eq!(values.get("providers"), Some(""));
        assert_eq!(values.get("host"), Some("db.internal"));
    }

    #[test]
    fn parse_last_duplicate_wins() {
        let values = parse_key_values("port: 1\nport: 2");
        assert_eq!(values.get("port"), Some("2"));
    }

    #[test]
    fn parse_empty_content() {
        assert!(parse_key_values("").is_empty());
    }

    #[test]
    fn from_iter_builds_mapping() {
        let values: KeyValues = [("version", "1.0")].into_iter().collect();
        assert_eq!(values.get("version"), Some("1.0"));
    }
}
