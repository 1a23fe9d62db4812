//! # LookIn Docs
//!
//! Regenerates the LookIn architecture documentation from whatever source data
//! is available: JSON catalog exports of the data warehouse, the chat service's
//! `config.yaml`, and file counts from the main project checkout. Re-run it
//! whenever the schema or the service settings change.
//!
//! # Architecture: Read → Build → Write
//!
//! ```text
//! 1. Read    catalogs/, config.yaml, project  →  Sources      (all I/O up front)
//! 2. Build   Sources                          →  8 × String   (pure builders)
//! 3. Write   documents                        →  docs/*.md    (one file each)
//! ```
//!
//! Only the first and last stages touch the filesystem. Builders are plain
//! functions of the loaded sources, so the same inputs always give the same
//! bytes and each builder can be unit tested on in-memory fixtures.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`catalog`] | Loads `*.json` warehouse catalog entries, skipping malformed files |
//! | [`keyvalue`] | Conservative `key: value` reader for the chat service config |
//! | [`inventory`] | Counts catalog and template files in the main project |
//! | [`sources`] | Bundles all reader output for the builders |
//! | [`fallback`] | Per-field "live value or fallback" resolution |
//! | [`render`] | Markdown primitives: tables, sections, step tables |
//! | [`docs`] | The eight document builders and their ordered registry |
//! | [`generate`] | Builds and persists every registered document |
//! | [`output`] | CLI output formatting for list and generate modes |
//! | [`config`] | `lookin.toml` loading: where sources live, where docs go |
//! | [`types`] | Document types shared by generate and output |
//!
//! # Design Decisions
//!
//! ## Per-Field Fallbacks
//!
//! Partial data is the normal case: some catalog files are exported, others
//! are not, and the service config may be missing entirely. Every field a
//! builder shows is resolved on its own through [`fallback::or_fallback`], so
//! one missing catalog entry replaces one table row instead of switching the
//! whole page to canned content. Fallbacks are compiled in, so every document
//! is complete even with no sources at all.
//!
//! ## Tolerant Readers
//!
//! Missing inputs are not errors. A missing catalog directory is an empty
//! catalog, a malformed catalog file is skipped with a warning, and a missing
//! service config is an empty mapping. The service config is read with a
//! subset grammar that drops anything it doesn't understand. The only fatal
//! conditions are an unreadable config, an unusable output directory, or a
//! failed write.
//!
//! ## Ordered Registry
//!
//! Documents are registered in a fixed slice, not a hash map, so listing and
//! generating walk them in the same order on every run.

pub mod catalog;
pub mod config;
pub mod docs;
pub mod fallback;
pub mod generate;
pub mod inventory;
pub mod keyvalue;
pub mod output;
pub mod render;
pub mod sources;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
