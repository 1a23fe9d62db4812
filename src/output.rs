//! CLI output formatting for both modes.
//!
//! # Output Format
//!
//! ## List
//!
//! ```text
//! Would generate:
//!   docs/architecture.md
//!   docs/johanna.md
//! ```
//!
//! ## Generate
//!
//! ```text
//! Generating 8 docs in docs/
//!   architecture.md (47 lines)
//!   johanna.md (52 lines)
//!   ...
//! Done! 8 docs generated.
//! ```
//!
//! A failed write shows in place of its line count, and the summary reports
//! how many documents made it:
//!
//! ```text
//!   star_schema.md FAILED: Is a directory (os error 21)
//! Wrote 7 of 8 docs.
//! ```
//!
//! # Architecture
//!
//! Each mode has a `format_*` function (returns `Vec<String>`) for testability
//! and a `print_*` wrapper that writes to stdout. Format functions are pure:
//! no I/O, no side effects. The output directory is shown as configured, not
//! as resolved against the working directory.

use crate::docs::DocGenerator;
use crate::generate::{self, GenerateReport};
use crate::types::file_name;
use std::path::Path;

/// Format list mode output: every document path, in registry order.
pub fn format_list_output(registry: &[DocGenerator], output_dir: &Path) -> Vec<String> {
    let mut lines = vec!["Would generate:".to_string()];
    for name in generate::list(registry) {
        lines.push(format!("  {}", output_dir.join(file_name(name)).display()));
    }
    lines
}

/// Print list mode output to stdout.
pub fn print_list_output(registry: &[DocGenerator], output_dir: &Path) {
    for line in format_list_output(registry, output_dir) {
        println!("{}", line);
    }
}

/// The line announcing a generate run.
pub fn format_generate_header(count: usize, output_dir: &Path) -> String {
    format!("Generating {} docs in {}/", count, output_dir.display())
}

pub fn print_generate_header(count: usize, output_dir: &Path) {
    println!("{}", format_generate_header(count, output_dir));
}

/// Format the per-document results and summary of a generate run.
pub fn format_generate_output(report: &GenerateReport) -> Vec<String> {
    let mut lines = Vec::new();

    for doc in &report.written {
        lines.push(format!("  {} ({} lines)", file_name(doc.name), doc.lines));
    }
    for doc in &report.failed {
        lines.push(format!("  {} FAILED: {}", file_name(doc.name), doc.error));
    }

    if report.failed.is_empty() {
        lines.push(format!("Done! {} docs generated.", report.written.len()));
    } else {
        lines.push(format!(
            "Wrote {} of {} docs.",
            report.written.len(),
            report.total()
        ));
    }

    lines
}

/// Print generate output to stdout.
pub fn print_generate_output(report: &GenerateReport) {
    for line in format_generate_output(report) {
        println!("{}", line);
    }
}
