//! MCP catalog pipeline page. Quotes file counts from the main project.

use super::header;
use crate::render::{compose, section, steps, table};
use crate::sources::Sources;

/// Shown when the project checkout is missing or has no catalogs yet.
const DEFAULT_CATALOG_FILES: usize = 50;
const DEFAULT_CHAIN_TEMPLATES: usize = 12;

fn count_or(count: usize, fallback: usize) -> usize {
    if count == 0 { fallback } else { count }
}

pub(super) fn build(sources: &Sources) -> String {
    let n_catalogs = count_or(sources.inventory.catalog_files, DEFAULT_CATALOG_FILES);
    let n_chains = count_or(sources.inventory.chain_templates, DEFAULT_CHAIN_TEMPLATES);

    let mut parts = header(
        "🧠 MCP Catalog Pipeline",
        "Metadata-Only Protocol — teach AI about your data without exposing it",
    )
    .to_vec();

    parts.push(section(
        "💡",
        "What is MCP?",
        [
            "The **Model Context Protocol** provides AI models with structured knowledge about the DWH schema,",
            "join patterns, and business rules — while keeping all actual data safely on-premise.",
        ],
    ));

    let catalogs_cell = format!("{n_catalogs} files");
    let chains_cell = format!("{n_chains} .md");
    parts.push(section(
        "📦",
        "Components",
        table(
            &["Component", "Count", "Purpose"],
            &[
                ["📋 JSON Catalogs", catalogs_cell.as_str(), "Column definitions for Datagrid UI"],
                ["🔗 Chain MCPs", chains_cell.as_str(), "Domain-specific knowledge docs"],
                ["📝 Master Template", "1 file", "`dwh_mcp_template.md` — architect context"],
            ],
        ),
    ));

    let chains_step = format!("Chain MCPs — {n_chains} domain-specific markdown files");
    parts.push(section(
        "🔄",
        "Pipeline",
        steps(&[
            ("🏭", "MCP Generator auto-generates 750+ column descriptions from DB"),
            ("🔗", chains_step.as_str()),
            ("🧬", "Gemini Embedding — `text-embedding-004` → 768-dim vectors"),
            ("📦", "pgvector Store — `meta.mcp_embeddings` with HNSW index"),
            ("🔍", "RAG Search — cosine similarity at query time"),
        ]),
    ));
    parts.push(section(
        "🔒",
        "Key Principle",
        [
            "> **Metadata-Only**: Only table names, column descriptions, and join recipes go to the LLM.",
            "> Zero business data ever leaves the corporate network.",
        ],
    ));

    compose(&parts)
}
