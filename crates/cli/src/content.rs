//! Data directory resolution and registry loading shared by commands.

use std::path::PathBuf;

use anyhow::{Context, Result};
use crystal_content::{ContentFactory, HostConfig};
use crystal_core::CrystalSetRegistry;

/// Environment variable overriding the default data directory.
pub const DATA_DIR_ENV: &str = "CRYSTAL_DATA_DIR";

/// Resolves the data directory: explicit flag, then `CRYSTAL_DATA_DIR`, then `./data`.
pub fn data_dir(flag: Option<PathBuf>) -> PathBuf {
    flag.or_else(|| std::env::var_os(DATA_DIR_ENV).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("data"))
}

/// Host config and the registry built from it.
pub fn load(flag: Option<PathBuf>) -> Result<(HostConfig, CrystalSetRegistry)> {
    let factory = ContentFactory::new(data_dir(flag));
    let config = factory
        .load_host_config()
        .with_context(|| format!("Failed to load host config from {}", factory.data_dir().display()))?;
    let registry = factory
        .load_registry(&config.dependencies())
        .with_context(|| format!("Failed to load catalog from {}", factory.data_dir().display()))?;

    tracing::info!(
        formations = registry.len(),
        active = registry.active_only().count(),
        data_dir = %factory.data_dir().display(),
        "registry loaded"
    );
    Ok((config, registry))
}
