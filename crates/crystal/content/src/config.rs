//! Host configuration: which dependencies are present and how to seed the world.

use crystal_core::LoadedDependencies;

/// Host settings read at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HostConfig {
    /// Optional dependencies present in this host. The base game is implied.
    pub loaded_mods: Vec<String>,
    /// Fixed world seed for reproducible runs. `None` picks one at startup.
    pub world_seed: Option<u64>,
    /// Budding sources placed per active formation.
    pub sources_per_set: u32,
}

impl HostConfig {
    pub const DEFAULT_SOURCES_PER_SET: u32 = 4;

    pub fn new() -> Self {
        Self {
            loaded_mods: Vec::new(),
            world_seed: None,
            sources_per_set: Self::DEFAULT_SOURCES_PER_SET,
        }
    }

    /// Dependency oracle backed by `loaded_mods`.
    pub fn dependencies(&self) -> LoadedDependencies {
        LoadedDependencies::new(self.loaded_mods.iter().cloned())
    }
}

impl Default for HostConfig {
    fn default() -> Self {
        Self::new()
    }
}
