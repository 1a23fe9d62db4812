//! Document builders and the registry that orders them.
//!
//! Each builder is a plain `fn(&Sources) -> String`: same sources in, same
//! bytes out. Builders mix live values with fallback content embedded here,
//! field by field (see [`crate::fallback`]), so every document is complete
//! even when no source exists at all.
//!
//! The registry is a fixed slice rather than a map, so list and generate modes
//! walk documents in the same declared order.

mod ai_pipeline;
mod application;
mod architecture;
mod ingestion;
mod johanna;
mod mcp_detail;
mod rag_detail;
mod star_schema;
mod tables;

use crate::sources::Sources;

pub type BuildFn = fn(&Sources) -> String;

/// A named document and the function that builds it.
#[derive(Clone, Copy)]
pub struct DocGenerator {
    pub name: &'static str,
    pub build: BuildFn,
}

impl std::fmt::Debug for DocGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocGenerator")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

const REGISTRY: &[DocGenerator] = &[
    DocGenerator {
        name: "architecture",
        build: architecture::build,
    },
    DocGenerator {
        name: "johanna",
        build: johanna::build,
    },
    DocGenerator {
        name: "ingestion",
        build: ingestion::build,
    },
    DocGenerator {
        name: "star_schema",
        build: star_schema::build,
    },
    DocGenerator {
        name: "mcp_detail",
        build: mcp_detail::build,
    },
    DocGenerator {
        name: "application",
        build: application::build,
    },
    DocGenerator {
        name: "ai_pipeline",
        build: ai_pipeline::build,
    },
    DocGenerator {
        name: "rag_detail",
        build: rag_detail::build,
    },
];

/// The standard document set, in generation order.
pub fn registry() -> &'static [DocGenerator] {
    REGISTRY
}

/// Title line plus tagline, followed by the blank line that separates them
/// from the first section.
fn header(title: &str, tagline: &str) -> [String; 4] {
    [
        format!("# {title}"),
        String::new(),
        format!("> *{tagline}*"),
        String::new(),
    ]
}
