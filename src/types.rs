//! Shared types passed from the builders through the orchestrator to output.

use std::path::PathBuf;

/// Extension of every generated artifact.
pub const DOC_EXTENSION: &str = "md";

/// A built document, normalized for persistence.
///
/// Content has trailing whitespace removed and ends with exactly one `\n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub name: &'static str,
    pub content: String,
}

impl Document {
    pub fn new(name: &'static str, raw: &str) -> Self {
        Self {
            name,
            content: format!("{}\n", raw.trim_end()),
        }
    }

    /// `architecture` → `architecture.md`
    pub fn file_name(&self) -> String {
        file_name(self.name)
    }

    /// Line breaks in the trimmed content, plus one.
    pub fn line_count(&self) -> usize {
        self.content.trim_end().matches('\n').count() + 1
    }
}

pub fn file_name(name: &str) -> String {
    format!("{name}.{DOC_EXTENSION}")
}

/// A document that was persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenDoc {
    pub name: &'static str,
    pub path: PathBuf,
    pub lines: usize,
}

/// A document that could not be persisted.
#[derive(Debug)]
pub struct FailedDoc {
    pub name: &'static str,
    pub path: PathBuf,
    pub error: std::io::Error,
}
