//! Star schema reference: fact columns and the dimension key table.
//!
//! Fact tables are documented only when their catalog entry exists, since a
//! column listing cannot be invented. The dimension table always lists the
//! four known dimensions, resolving key and description per field.

use super::header;
use super::tables::{KNOWN_TABLES, TableKind, known};
use crate::catalog::Catalog;
use crate::fallback::{or_fallback, resolve};
use crate::render::{compose, section, table};
use crate::sources::Sources;

const NO_FACTS: &str = "See catalog JSONs for details.";

fn fact_blocks(catalog: &Catalog) -> Vec<String> {
    let mut blocks = Vec::new();
    for fact in KNOWN_TABLES.iter().filter(|t| t.kind == TableKind::Fact) {
        let Some(entry) = catalog.get(fact.name) else {
            continue;
        };
        let rows: Vec<[String; 3]> = entry
            .columns
            .iter()
            .map(|(column, meta)| {
                [
                    format!("`{column}`"),
                    resolve(&[meta.data_type.as_deref()]).unwrap_or_default(),
                    resolve(&[meta.desc.as_deref()]).unwrap_or_default(),
                ]
            })
            .collect();

        blocks.push(format!("### {} {}", fact.icon, fact.name));
        blocks.push(or_fallback(entry.description.as_deref(), fact.description));
        blocks.push(String::new());
        blocks.push(table(&["Column", "Type", "Purpose"], &rows));
        blocks.push(String::new());
    }
    blocks
}

fn dimension_rows(catalog: &Catalog) -> Vec<[String; 3]> {
    // Listed by how often they are joined, not alphabetically.
    ["dim_user_h", "dim_issue_h", "dim_project_h", "dim_calendar"]
        .iter()
        .filter_map(|name| known(name))
        .map(|dim| {
            let entry = catalog.get(dim.name);
            let key = or_fallback(entry.and_then(|e| e.first_column()), dim.key);
            [
                format!("`{}`", dim.name),
                format!("`{key}`"),
                or_fallback(entry.and_then(|e| e.description.as_deref()), dim.description),
            ]
        })
        .collect()
}

pub(super) fn build(sources: &Sources) -> String {
    let catalog = &sources.catalog;
    let mut parts = header(
        "⭐ Star Schema (DWH)",
        "Kimball-style design with Level 2 SCD historization",
    )
    .to_vec();

    let facts = fact_blocks(catalog);
    let facts_body = if facts.is_empty() {
        NO_FACTS.to_string()
    } else {
        compose(&facts)
    };
    parts.push(section("📊", "Fact Tables", facts_body));
    parts.push(section(
        "📐",
        "Dimension Tables",
        table(&["Dim", "Key", "Description"], &dimension_rows(catalog)),
    ));
    parts.push(section(
        "🔗",
        "Join Recipes",
        [
            "- **Issue → Worklogs**: `i.issue_id = f.issue_id`",
            "- **User → Worklogs**: `u.user_id = f.user_id`",
            "- **Calendar → Worklogs**: `c.day_id = f.calendar_id`",
            "- **Project → Issue**: `i.issue_key LIKE p.project_key || '-%'`",
        ],
    ));
    parts.push(section(
        "🔄",
        "Views",
        "Use `dwh.dim_issue` (no `_h`) for current state — auto-filters `upper_inf(valid)`.",
    ));

    compose(&parts)
}
