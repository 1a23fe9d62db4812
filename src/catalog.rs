//! Warehouse catalog loading.
//!
//! A catalog directory holds one JSON metadata record per warehouse table,
//! exported from the database ahead of time. The file stem is the table name:
//!
//! ```text
//! catalogs/
//! ├── dim_calendar.json
//! ├── dim_issue_h.json
//! ├── fact_daily_worklogs_h.json
//! └── fact_sla_events.json
//! ```
//!
//! Each record looks like:
//!
//! ```json
//! {
//!   "description": "SLA breaches and response times",
//!   "columns": {
//!     "event_id": { "type": "bigint", "desc": "Surrogate key" },
//!     "issue_id": { "type": "bigint", "desc": "FK to dim_issue_h" }
//!   }
//! }
//! ```
//!
//! ## Tolerance
//!
//! Loading never fails. A missing directory is an empty catalog, and a file that
//! cannot be read or does not match the record shape is skipped in full with a
//! warning. An entry is either loaded completely or absent; downstream builders
//! treat absence as "use the fallback".
//!
//! Files are visited in lexicographic order. Two files with the same stem
//! (`a.JSON` and `a.json`) collide on one name and the later file wins.

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};
use walkdir::WalkDir;

const CATALOG_EXTENSION: &str = "json";

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Metadata record for one warehouse table.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CatalogEntry {
    #[serde(default)]
    pub description: Option<String>,
    /// Columns in the order they appear in the file.
    #[serde(default, deserialize_with = "ordered_columns")]
    pub columns: Vec<(String, ColumnMeta)>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ColumnMeta {
    #[serde(default, rename = "type")]
    pub data_type: Option<String>,
    #[serde(default, alias = "description")]
    pub desc: Option<String>,
}

impl CatalogEntry {
    /// Name of the first column, which the exports always use as the key.
    pub fn first_column(&self) -> Option<&str> {
        self.columns.first().map(|(name, _)| name.as_str())
    }
}

/// Deserialize a JSON object into a vec of pairs, keeping file order.
fn ordered_columns<'de, D>(deserializer: D) -> Result<Vec<(String, ColumnMeta)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct ColumnsVisitor;

    impl<'de> Visitor<'de> for ColumnsVisitor {
        type Value = Vec<(String, ColumnMeta)>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a map of column name to column metadata")
        }

        fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut columns: Vec<(String, ColumnMeta)> =
                Vec::with_capacity(access.size_hint().unwrap_or(0));
            while let Some((name, meta)) = access.next_entry::<String, ColumnMeta>()? {
                match columns.iter_mut().find(|(n, _)| *n == name) {
                    Some(existing) => existing.1 = meta,
                    None => columns.push((name, meta)),
                }
            }
            Ok(columns)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(ColumnsVisitor)
}

/// All loaded catalog entries, keyed by table name.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: BTreeMap<String, CatalogEntry>,
}

impl Catalog {
    /// Exact-name lookup.
    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.get(name)
    }

    pub fn description(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(|e| e.description.as_deref())
    }

    /// Insert an entry, returning the one it replaced.
    pub fn insert(&mut self, name: impl Into<String>, entry: CatalogEntry) -> Option<CatalogEntry> {
        self.entries.insert(name.into(), entry)
    }

    /// Entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CatalogEntry)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, CatalogEntry)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (String, CatalogEntry)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Parse a single catalog file.
pub fn parse_catalog_file(path: &Path) -> Result<CatalogEntry, CatalogError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn is_catalog_file(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .map(|e| e.eq_ignore_ascii_case(CATALOG_EXTENSION))
            .unwrap_or(false)
}

/// Load every `*.json` file directly inside `dir`.
pub fn read_catalogs(dir: &Path) -> Catalog {
    let mut catalog = Catalog::default();

    if !dir.is_dir() {
        debug!(dir = %dir.display(), "catalog directory not found, using empty catalog");
        return catalog;
    }

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(dir = %dir.display(), error = %err, "skipping unreadable catalog entry");
                continue;
            }
        };
        let path = entry.path();
        if !is_catalog_file(path) {
            continue;
        }
        let Some(name) = path.file_stem().map(|s| s.to_string_lossy().into_owned()) else {
            continue;
        };

        match parse_catalog_file(path) {
            Ok(parsed) => {
                debug!(name = %name, columns = parsed.columns.len(), "loaded catalog entry");
                if catalog.insert(name.clone(), parsed).is_some() {
                    warn!(name = %name, path = %path.display(), "catalog name collision, later file wins");
                }
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "skipping malformed catalog file");
            }
        }
    }

    catalog
}
