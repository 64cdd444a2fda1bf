//! Ordered, append-only collection of formation configs.
//!
//! The registry is filled once at startup and read for the rest of the
//! process. Insertion order is kept so that enumeration is deterministic.
//! There is no removal.

use std::collections::HashMap;

use crate::config::CrystalSetConfig;
use crate::error::{CrystalError, ErrorSeverity};

/// Errors raised while populating a [`CrystalSetRegistry`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("formation '{0}' is already registered")]
    DuplicateId(String),
}

impl CrystalError for RegistryError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            RegistryError::DuplicateId(_) => "REGISTRY_DUPLICATE_ID",
        }
    }
}

/// Named, ordered collection of formation configs.
#[derive(Clone, Debug, Default)]
pub struct CrystalSetRegistry {
    sets: Vec<CrystalSetConfig>,
    index: HashMap<String, usize>,
}

impl CrystalSetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from configs in order, stopping at the first duplicate.
    pub fn from_configs<I>(configs: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = CrystalSetConfig>,
    {
        let mut registry = Self::new();
        for config in configs {
            registry.register(config)?;
        }
        Ok(registry)
    }

    /// Appends a config.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicateId` if a config with the same id is
    /// already registered. The registry is left unchanged.
    pub fn register(&mut self, config: CrystalSetConfig) -> Result<(), RegistryError> {
        if self.index.contains_key(config.id()) {
            return Err(RegistryError::DuplicateId(config.id().to_owned()));
        }
        self.index.insert(config.id().to_owned(), self.sets.len());
        self.sets.push(config);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&CrystalSetConfig> {
        self.index.get(id).map(|&slot| &self.sets[slot])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Every config in insertion order. Call again to restart.
    pub fn all(&self) -> impl Iterator<Item = &CrystalSetConfig> + Clone + '_ {
        self.sets.iter()
    }

    /// Configs whose gating snapshot is active, in insertion order.
    pub fn active_only(&self) -> impl Iterator<Item = &CrystalSetConfig> + Clone + '_ {
        self.sets.iter().filter(|config| config.is_active())
    }

    /// Bud and cluster block names of every registered formation, grouped by
    /// formation in registry order.
    pub fn all_bud_blocks(&self) -> impl Iterator<Item = String> + '_ {
        self.sets.iter().flat_map(|config| config.bud_blocks())
    }
}
