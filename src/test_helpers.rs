//! Shared test utilities for the lookin-docs test suite.
//!
//! Provides source fixtures and markdown shape assertions that work on built
//! document strings.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let doc = architecture::build(&sources_with_catalog(&[("dim_team", "Teams")]));
//! assert_eq!(table_rows_under(&doc, "Key Tables"), 7);
//! assert_tables_well_formed(&doc, "architecture");
//! ```

use crate::catalog::{CatalogEntry, ColumnMeta};
use crate::inventory::Inventory;
use crate::keyvalue::KeyValues;
use crate::sources::Sources;

// =========================================================================
// Source fixtures
// =========================================================================

/// Sources whose catalog holds one description-only entry per `(name, description)`.
pub fn sources_with_catalog(entries: &[(&str, &str)]) -> Sources {
    let mut sources = Sources::default();
    for (name, description) in entries {
        sources.catalog.insert(
            *name,
            CatalogEntry {
                description: Some(description.to_string()),
                columns: vec![],
            },
        );
    }
    sources
}

fn column(name: &str, data_type: &str, desc: &str) -> (String, ColumnMeta) {
    (
        name.to_string(),
        ColumnMeta {
            data_type: Some(data_type.to_string()),
            desc: Some(desc.to_string()),
        },
    )
}

/// Every reader populated: all known tables plus one extra, service settings,
/// and project counts.
pub fn full_sources() -> Sources {
    let mut sources = Sources {
        service: [
            ("version", "1.2.3"),
            ("port", "9090"),
            ("engine", "gemini"),
            ("author", "Data Platform Team"),
        ]
        .into_iter()
        .collect::<KeyValues>(),
        inventory: Inventory {
            catalog_files: 64,
            chain_templates: 15,
        },
        ..Sources::default()
    };

    let entries = [
        (
            "fact_daily_worklogs_h",
            "Worklog hours | per day",
            vec![
                column("worklog_id", "bigint", "Surrogate key"),
                column("hours", "numeric", "Logged hours"),
            ],
        ),
        (
            "fact_sla_events",
            "SLA breaches",
            vec![column("event_id", "bigint", "Surrogate key")],
        ),
        ("dim_issue_h", "Issues", vec![column("issue_id", "bigint", "PK")]),
        ("dim_user_h", "Users", vec![column("user_id", "bigint", "PK")]),
        ("dim_project_h", "Projects", vec![]),
        ("dim_calendar", "Days", vec![column("day_id", "int", "YYYYMMDD")]),
        ("dim_team", "Teams", vec![column("team_id", "int", "PK")]),
    ];
    for (name, description, columns) in entries {
        sources.catalog.insert(
            name,
            CatalogEntry {
                description: Some(description.to_string()),
                columns,
            },
        );
    }
    sources
}

// =========================================================================
// Markdown shape helpers
// =========================================================================

/// Cells in a table line, ignoring escaped pipes.
pub fn cell_count(line: &str) -> usize {
    let pipes = line.matches('|').count() - line.matches("\\|").count();
    pipes.saturating_sub(1)
}

/// Titles of all `##` sections, without their icons.
pub fn section_titles(doc: &str) -> Vec<&str> {
    doc.lines()
        .filter_map(|line| line.strip_prefix("## "))
        .map(|heading| heading.split_once(' ').map(|(_, t)| t).unwrap_or(heading))
        .collect()
}

/// Data rows of the first table after the line equal to `marker`.
/// Panics if the marker or the table is missing.
pub fn table_rows_after(doc: &str, marker: &str) -> usize {
    let lines: Vec<&str> = doc.lines().collect();
    let start = lines
        .iter()
        .position(|l| *l == marker)
        .unwrap_or_else(|| panic!("marker '{marker}' not found"));
    let table_start = lines[start + 1..]
        .iter()
        .position(|l| l.starts_with('|'))
        .map(|offset| start + 1 + offset)
        .unwrap_or_else(|| panic!("no table after '{marker}'"));
    let table_lines = lines[table_start..]
        .iter()
        .take_while(|l| l.starts_with('|'))
        .count();
    table_lines - 2
}

/// Data rows of the first table in the `##` section titled `title`.
pub fn table_rows_under(doc: &str, title: &str) -> usize {
    let heading = doc
        .lines()
        .find(|l| l.starts_with("## ") && l.ends_with(&format!(" {title}")))
        .unwrap_or_else(|| {
            let titles = section_titles(doc);
            panic!("section '{title}' not found. Available: {titles:?}")
        });
    table_rows_after(doc, heading)
}

/// Assert every table has a separator row and uniform cell counts.
pub fn assert_tables_well_formed(doc: &str, doc_name: &str) {
    let lines: Vec<&str> = doc.lines().collect();
    let mut i = 0;
    while i < lines.len() {
        if !lines[i].starts_with('|') {
            i += 1;
            continue;
        }
        let block: Vec<&str> = lines[i..]
            .iter()
            .take_while(|l| l.starts_with('|'))
            .copied()
            .collect();
        assert!(block.len() >= 2, "{doc_name}: table without separator at line {i}");
        let width = cell_count(block[0]);
        let separator = format!("|{}|", vec!["---"; width].join("|"));
        assert_eq!(block[1], separator, "{doc_name}: bad separator at line {}", i + 1);
        for row in &block[2..] {
            assert_eq!(cell_count(row), width, "{doc_name}: ragged row {row:?}");
        }
        i += block.len();
    }
}
