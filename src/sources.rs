//! Everything the document builders read, loaded once per run.
//!
//! Builders never touch the filesystem. [`load_sources`] runs every reader up
//! front and hands the result to each builder by shared reference; nothing
//! mutates it afterwards.

use crate::catalog::{self, Catalog};
use crate::config::ResolvedPaths;
use crate::inventory::{self, Inventory};
use crate::keyvalue::{self, KeyValueError, KeyValues};

#[derive(Debug, Clone, Default)]
pub struct Sources {
    /// Warehouse catalog entries.
    pub catalog: Catalog,
    /// Chat service settings.
    pub service: KeyValues,
    /// File counts from the main project.
    pub inventory: Inventory,
}

/// Run all readers against the configured locations.
///
/// Missing inputs load as empty; only an existing but unreadable service
/// config file is an error.
pub fn load_sources(paths: &ResolvedPaths) -> Result<Sources, KeyValueError> {
    Ok(Sources {
        catalog: catalog::read_catalogs(&paths.catalogs),
        service: keyvalue::read_key_values(&paths.service_config)?,
        inventory: inventory::read_inventory(&paths.project),
    })
}
