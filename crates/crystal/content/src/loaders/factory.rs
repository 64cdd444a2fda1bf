//! Content factory for building a registry from data files.

use std::path::{Path, PathBuf};

use crystal_core::{CrystalSetRegistry, DependencyOracle};

use crate::catalog::{CrystalCatalog, builtin_catalog};
use crate::config::HostConfig;
use crate::loaders::{CatalogLoader, HostConfigLoader, LoadResult};

/// Content factory that loads formation content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// └── crystals.ron
/// ```
///
/// Either file may be absent: the host config then takes its defaults and
/// the catalog falls back to [`builtin_catalog`].
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const CONFIG_FILE: &'static str = "config.toml";
    pub const CATALOG_FILE: &'static str = "crystals.ron";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load host configuration from `config.toml`.
    pub fn load_host_config(&self) -> LoadResult<HostConfig> {
        let path = self.data_dir.join(Self::CONFIG_FILE);
        if !path.exists() {
            return Ok(HostConfig::default());
        }
        HostConfigLoader::load(&path)
    }

    /// Load the formation catalog from `crystals.ron`.
    pub fn load_catalog(&self) -> LoadResult<CrystalCatalog> {
        let path = self.data_dir.join(Self::CATALOG_FILE);
        if !path.exists() {
            return Ok(builtin_catalog());
        }
        CatalogLoader::load(&path)
    }

    /// Load the catalog and register every formation, gating with `deps`.
    pub fn load_registry(&self, deps: &dyn DependencyOracle) -> LoadResult<CrystalSetRegistry> {
        let catalog = self.load_catalog()?;
        CatalogLoader::into_registry(&catalog, deps)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
