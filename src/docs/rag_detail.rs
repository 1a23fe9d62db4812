use super::header;
use crate::render::{compose, section, steps, table};
use crate::sources::Sources;

pub(super) fn build(_sources: &Sources) -> String {
    let mut parts = header(
        "🔍 RAG Pipeline",
        "Retrieval-Augmented Generation — the AI's knowledge engine",
    )
    .to_vec();

    parts.push(section(
        "🔄",
        "How It Works",
        steps(&[
            ("📝", "MCP `.md` files split into chunks"),
            ("🧬", "Each chunk embedded via Gemini `text-embedding-004`"),
            ("📦", "Vectors stored in `meta.mcp_embeddings` (HNSW)"),
            ("🗣️", "User question embedded as vector"),
            ("🔍", "Cosine similarity finds top-K chunks"),
            ("📋", "Relevant chunks injected into LLM prompt"),
        ]),
    ));
    parts.push(section(
        "🔀",
        "Two Modes",
        table(
            &["Mode", "When", "How"],
            &[
                ["🎯 **pgvector HNSW**", "Default", "Semantic similarity search"],
                ["📄 **Direct MCP**", "Fallback", "Full template if RAG fails"],
            ],
        ),
    ));
    parts.push(section(
        "🧬",
        "Embedding Model",
        [
            "- **Provider**: Google Gemini",
            "- **Model**: `text-embedding-004`",
            "- **Dimensions**: 768",
            "- **Index**: HNSW (Hierarchical Navigable Small World)",
        ],
    ));
    parts.push(section(
        "📚",
        "Knowledge Sources",
        table(
            &["Source", "Content"],
            &[
                ["🔗 Chain MCPs", "Domain-specific DWH knowledge"],
                ["📊 Schema descriptions", "Table/column metadata"],
                ["👥 LDAP hierarchy", "User org structure"],
                ["📋 BI catalog", "Saved query definitions"],
            ],
        ),
    ));

    compose(&parts)
}
