use super::header;
use crate::render::{compose, section, steps, table};
use crate::sources::Sources;

pub(super) fn build(_sources: &Sources) -> String {
    let mut parts = header(
        "🧪 AI Self-Teaching Pipeline",
        "The AI gets smarter with every question",
    )
    .to_vec();

    parts.push(section(
        "🔄",
        "The Loop",
        steps(&[
            ("🗣️", "User asks a question"),
            ("🔍", "RAG retrieves relevant MCP context"),
            ("🧠", "LLM generates SQL"),
            ("⚡", "SQL executes against DWH"),
            ("👍👎", "User rates the result"),
            ("📚", "Self-Study analyzes failures"),
            ("🔄", "Good patterns fed back into chain MCPs"),
        ]),
    ));
    parts.push(section(
        "🌐",
        "Multi-Provider AI",
        table(
            &["Provider", "Use case"],
            &[
                ["✨ Gemini", "Primary — best accuracy"],
                ["🦙 Ollama", "Offline/air-gapped environments"],
                ["🔵 OpenAI", "Alternative cloud option"],
                ["🟣 Claude", "Alternative cloud option"],
                ["🔶 DeepSeek", "Cost-effective alternative"],
            ],
        ),
    ));

    compose(&parts)
}
