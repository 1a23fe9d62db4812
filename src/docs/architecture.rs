//! Data warehouse overview page.
//!
//! The "Key Tables" table always lists the known tables, each described from
//! its catalog entry when one was exported and from the fallback otherwise.
//! Any other `fact_`/`dim_` entries found in the catalog follow, in name order.

use super::header;
use super::tables::{KNOWN_TABLES, TableKind, known};
use crate::catalog::Catalog;
use crate::fallback::{or_fallback, resolve};
use crate::render::{compose, section, table};
use crate::sources::Sources;

fn key_table_rows(catalog: &Catalog) -> Vec<[String; 3]> {
    let mut rows: Vec<[String; 3]> = KNOWN_TABLES
        .iter()
        .map(|t| {
            [
                format!("`{}`", t.name),
                t.label(),
                or_fallback(catalog.description(t.name), t.description),
            ]
        })
        .collect();

    for (name, entry) in catalog.iter() {
        if known(name).is_some() {
            continue;
        }
        if let Some(kind) = TableKind::of(name) {
            rows.push([
                format!("`{name}`"),
                kind.generic_label().to_string(),
                resolve(&[entry.description.as_deref()]).unwrap_or_default(),
            ]);
        }
    }
    rows
}

pub(super) fn build(sources: &Sources) -> String {
    let mut parts = header(
        "📊 Data Warehouse (DWH)",
        "Consolidated analytics layer — single source of truth",
    )
    .to_vec();

    parts.push(section(
        "🏗️",
        "Architecture",
        [
            "**PostgreSQL 16** Star Schema with full SCD2 historization.",
            "All business data flows through here — Jira, LDAP, and Leave System consolidated into one analytics-ready model.",
        ],
    ));
    parts.push(section(
        "🔐",
        "Security",
        [
            "- **Row-Level Security (RLS)** — users only see their own hierarchy",
            "- Session variable `jiramntr.login_user` drives visibility",
            "- Even SQL Lab queries are filtered by RLS",
        ],
    ));
    parts.push(section(
        "📦",
        "Schemas",
        table(
            &["Schema", "Purpose", "Access"],
            &[
                ["`dwh`", "⭐ Star Schema (facts + dims)", "Primary"],
                ["`meta`", "🧠 AI metadata, embeddings", "Auxiliary"],
                ["`ext`", "📥 External imports staging", "Internal only"],
                ["`oltp`", "🔌 Oracle FDW bridge", "⛔ Forbidden"],
            ],
        ),
    ));
    parts.push(section(
        "📋",
        "Key Tables",
        table(
            &["Table", "Type", "Description"],
            &key_table_rows(&sources.catalog),
        ),
    ));
    parts.push(section(
        "🔄",
        "Historization",
        [
            "All `_h` tables use `tstzrange` for Level 2 SCD tracking.",
            "Use **views** (without `_h` suffix) for current-state queries — they auto-filter for active records.",
        ],
    ));
    parts.push(section(
        "⚙️",
        "ETL",
        [
            "Yearly partitioned orchestrator runs nightly on butalam,",
            "with pre-flight checks and HWM incremental loading.",
        ],
    ));

    compose(&parts)
}
