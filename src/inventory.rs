//! File counts from the sibling project.
//!
//! The MCP page quotes how many JSON catalogs and chain templates the main
//! project ships. Those numbers come from counting files on disk:
//!
//! ```text
//! ../jiramntr/
//! ├── internal/catalog/*.json                 → catalog_files
//! └── dist/butalam/ai/mcp/templates/*.md      → chain_templates
//! ```
//!
//! Counting is done here, at load time, so the page builder only sees numbers.
//! A missing directory counts as zero; the builder treats zero as "unknown"
//! and shows its fallback figure.

use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

const CATALOG_DIR: &str = "internal/catalog";
const TEMPLATE_DIR: &str = "dist/butalam/ai/mcp/templates";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Inventory {
    pub catalog_files: usize,
    pub chain_templates: usize,
}

/// Count regular files directly in `dir` whose extension matches `extension`.
///
/// Returns 0 if the directory doesn't exist or can't be read.
pub fn count_files(dir: &Path, extension: &str) -> usize {
    if !dir.is_dir() {
        return 0;
    }
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| {
            e.path().is_file()
                && e.path()
                    .extension()
                    .map(|ext| ext.eq_ignore_ascii_case(extension))
                    .unwrap_or(false)
        })
        .count()
}

/// Take the inventory of a project directory.
pub fn read_inventory(project: &Path) -> Inventory {
    let inventory = Inventory {
        catalog_files: count_files(&project.join(CATALOG_DIR), "json"),
        chain_templates: count_files(&project.join(TEMPLATE_DIR), "md"),
    };
    debug!(
        project = %project.display(),
        catalog_files = inventory.catalog_files,
        chain_templates = inventory.chain_templates,
        "took project inventory"
    );
    inventory
}
