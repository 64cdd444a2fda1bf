//! Host configuration loader.

use std::path::Path;

use crate::config::HostConfig;
use crate::loaders::{LoadResult, read_file};

/// Loader for host configuration from TOML files.
pub struct HostConfigLoader;

impl HostConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys take their defaults.
    pub fn load(path: &Path) -> LoadResult<HostConfig> {
        let content = read_file(path)?;
        let config: HostConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crystal_core::DependencyOracle;
    use std::io::Write;

    #[test]
    fn loads_partial_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "loaded_mods = [\"ae2\"]\nworld_seed = 42").unwrap();

        let config = HostConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.world_seed, Some(42));
        assert_eq!(config.sources_per_set, HostConfig::DEFAULT_SOURCES_PER_SET);
        assert!(config.dependencies().is_loaded("ae2"));
        assert!(config.dependencies().is_loaded("minecraft"));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = HostConfigLoader::load(Path::new("/nonexistent/config.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/config.toml"));
    }
}
