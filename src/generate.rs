//! Document generation and persistence.
//!
//! Walks the registry in order, builds each document from the loaded sources,
//! and writes it to `<output>/<name>.md`.
//!
//! ## Output Structure
//!
//! ```text
//! docs/
//! ├── architecture.md
//! ├── johanna.md
//! ├── ingestion.md
//! ├── star_schema.md
//! ├── mcp_detail.md
//! ├── application.md
//! ├── ai_pipeline.md
//! └── rag_detail.md
//! ```
//!
//! ## Writes
//!
//! Each document is written to a temporary file in the output directory and
//! renamed over its target, so an artifact holds either the complete new
//! content or whatever it held before. Writes are independent: a failed write
//! is recorded in the [`GenerateReport`] and the remaining documents are still
//! written. Only failing to create the output directory stops the run early.
//!
//! Identical sources produce identical bytes, so running twice in a row leaves
//! the output unchanged.

use crate::docs::DocGenerator;
use crate::sources::Sources;
use crate::types::{Document, FailedDoc, WrittenDoc};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("failed to create output directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} of {total} documents could not be written: {}", .failed.len(), .failed.join(", "))]
    Incomplete { failed: Vec<String>, total: usize },
}

/// Outcome of a generate run.
#[derive(Debug)]
pub struct GenerateReport {
    pub written: Vec<WrittenDoc>,
    pub failed: Vec<FailedDoc>,
}

impl GenerateReport {
    pub fn total(&self) -> usize {
        self.written.len() + self.failed.len()
    }

    /// `Err` if any document failed to persist.
    pub fn ensure_complete(&self) -> Result<(), GenerateError> {
        if self.failed.is_empty() {
            return Ok(());
        }
        Err(GenerateError::Incomplete {
            failed: self.failed.iter().map(|f| f.name.to_string()).collect(),
            total: self.total(),
        })
    }
}

/// Document names in registry order.
pub fn list(registry: &[DocGenerator]) -> Vec<&'static str> {
    registry.iter().map(|g| g.name).collect()
}

/// Build a single document.
pub fn build_document(generator: &DocGenerator, sources: &Sources) -> Document {
    Document::new(generator.name, &(generator.build)(sources))
}

/// Build every document without touching the filesystem.
pub fn build_documents(registry: &[DocGenerator], sources: &Sources) -> Vec<Document> {
    registry
        .iter()
        .map(|g| build_document(g, sources))
        .collect()
}

/// Write `content` to `path` via a temporary file in `dir`.
fn persist(dir: &Path, path: &Path, content: &str) -> std::io::Result<()> {
    let mut tmp = tempfile::Builder::new()
        .prefix(".lookin-")
        .suffix(".tmp")
        .tempfile_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.as_file().sync_all()?;

    // Temp files are created owner-only; documents are meant to be shared.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(fs::Permissions::from_mode(0o644))?;
    }

    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Generate every registered document into `output_dir`.
pub fn generate(
    registry: &[DocGenerator],
    sources: &Sources,
    output_dir: &Path,
) -> Result<GenerateReport, GenerateError> {
    fs::create_dir_all(output_dir).map_err(|source| GenerateError::CreateDir {
        path: output_dir.to_path_buf(),
        source,
    })?;
    info!(dir = %output_dir.display(), "output directory ready");

    let mut report = GenerateReport {
        written: Vec::with_capacity(registry.len()),
        failed: Vec::new(),
    };

    for generator in registry {
        let doc = build_document(generator, sources);
        let path = output_dir.join(doc.file_name());

        match persist(output_dir, &path, &doc.content) {
            Ok(()) => {
                let lines = doc.line_count();
                info!(name = doc.name, lines, path = %path.display(), "wrote document");
                report.written.push(WrittenDoc {
                    name: doc.name,
                    path,
                    lines,
                });
            }
            Err(error) => {
                warn!(name = doc.name, path = %path.display(), %error, "failed to write document");
                report.failed.push(FailedDoc {
                    name: doc.name,
                    path,
                    error,
                });
            }
        }
    }

    Ok(report)
}
