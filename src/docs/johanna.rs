//! Johanna chat assistant page, driven by the service's `config.yaml`.

use super::header;
use crate::fallback::{or_fallback, resolve};
use crate::render::{compose, section, steps, table};
use crate::sources::Sources;

const DEFAULT_VERSION: &str = "0.x";
const DEFAULT_PORT: &str = "8082";
const DEFAULT_ENGINE: &str = "antigravity";

pub(super) fn build(sources: &Sources) -> String {
    let service = &sources.service;
    let version = or_fallback(service.get("version"), DEFAULT_VERSION);
    let port = or_fallback(service.get("port"), DEFAULT_PORT);
    let engine = or_fallback(service.get("engine"), DEFAULT_ENGINE);
    let author = resolve(&[service.get("author")]);

    let mut parts = header(
        "🤖 Johanna — AI Chat Assistant",
        "Ask questions in Hungarian or English — get SQL-powered answers",
    )
    .to_vec();
    parts.push(format!(
        "**Version**: {version} | **Port**: {port} | **Engine**: {engine}"
    ));
    parts.push(String::new());

    parts.push(section(
        "💡",
        "What is it?",
        [
            "Johanna lets users query the Data Warehouse using **natural language**.",
            "No SQL knowledge required — just ask:",
            "",
            "*\"Hány órát logolt a csapatom januárban?\"*",
            "*\"Which projects had the most SLA breaches?\"*",
        ],
    ));
    parts.push(section(
        "🔄",
        "Pipeline",
        steps(&[
            ("🗣️", "User asks a question (HU/EN)"),
            ("🔍", "RAG searches for relevant DWH context"),
            ("📝", "Prompt assembled with MCP + question"),
            ("🧠", "LLM generates SQL"),
            ("⚡", "SQL executed against DWH (with RLS!)"),
            ("💬", "Result synthesized into natural language"),
        ]),
    ));
    parts.push(section(
        "🌐",
        "Multi-Provider AI",
        table(
            &["Provider", "Status"],
            &[
                ["✨ Gemini", "Primary"],
                ["🦙 Ollama", "Local/offline"],
                ["🔵 OpenAI", "Supported"],
                ["🟣 Claude", "Supported"],
                ["🔶 DeepSeek", "Supported"],
            ],
        ),
    ));
    parts.push(section(
        "🔒",
        "Security Principle",
        [
            "> **Metadata-Only Architecture** — zero business data sent to LLM.",
            "> Only table names and column descriptions leave the network.",
            "> All query results stay within the corporate environment.",
        ],
    ));

    let mut technology = vec![
        "- Go backend (separate repo)".to_string(),
        "- Browser UI via HTMX".to_string(),
        "- RAG via pgvector HNSW search".to_string(),
    ];
    if let Some(author) = author {
        technology.push(format!("- Author: {author}"));
    }
    parts.push(section("🛠️", "Technology", technology));

    compose(&parts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyvalue::KeyValues;

    fn with_service(pairs: &[(&str, &str)]) -> Sources {
        Sources {
            service: pairs.iter().copied().collect::<KeyValues>(),
            ..Sources::default()
        }
    }

    #[test]
    fn fallback_status_line() {
        let doc = build(&Sources::default());
        assert!(doc.contains("**Version**: 0.x | **Port**: 8082 | **Engine**: antigravity"));
        assert!(!doc.contains("Author:"));
    }

    #[test]
    fn live_values_override_per_key() {
        let doc = build(&with_service(&[("version", "1.2.3"), ("engine", "gemini")]));
        // port is missing, so only it falls back
        assert!(doc.contains("**Version**: 1.2.3 | **Port**: 8082 | **Engine**: gemini"));
    }

    #[test]
    fn author_line_when_present() {
        let doc = build(&with_service(&[("author", "Data Platform Team")]));
        assert!(doc.contains("- Author: Data Platform Team"));
    }

    #[test]
    fn blank_author_omitted() {
        let doc = build(&with_service(&[("author", "")]));
        assert!(!doc.contains("Author:"));
    }

    #[test]
    fn pipeline_has_six_steps() {
        let doc = build(&Sources::default());
        assert!(doc.contains("| 6\u{fe0f}\u{20e3} |"));
        assert!(!doc.contains("| 7\u{fe0f}\u{20e3} |"));
    }
}
