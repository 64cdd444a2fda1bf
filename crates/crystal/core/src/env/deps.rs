//! Dependency oracle for gating formations on optional components.

use std::collections::BTreeSet;

/// Answers whether an optional dependency is present in the host.
pub trait DependencyOracle: Send + Sync {
    fn is_loaded(&self, dependency: &str) -> bool;
}

/// Fixed set of loaded dependency names.
///
/// The base game (`minecraft`) is always considered loaded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadedDependencies {
    names: BTreeSet<String>,
}

impl LoadedDependencies {
    /// Name of the dependency every host provides.
    pub const BASE: &'static str = "minecraft";

    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: BTreeSet<String> = names.into_iter().map(Into::into).collect();
        names.insert(Self::BASE.to_owned());
        Self { names }
    }

    /// Only the base game.
    pub fn base_only() -> Self {
        Self::new(core::iter::empty::<String>())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl Default for LoadedDependencies {
    fn default() -> Self {
        Self::base_only()
    }
}

impl DependencyOracle for LoadedDependencies {
    fn is_loaded(&self, dependency: &str) -> bool {
        self.names.contains(dependency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_game_is_always_loaded() {
        let deps = LoadedDependencies::base_only();
        assert!(deps.is_loaded("minecraft"));
        assert!(!deps.is_loaded("ae2"));
    }

    #[test]
    fn listed_dependencies_are_loaded() {
        let deps = LoadedDependencies::new(["ae2"]);
        assert!(deps.is_loaded("ae2"));
        assert!(deps.is_loaded("minecraft"));
        assert!(!deps.is_loaded("mekanism"));
        assert_eq!(deps.iter().collect::<Vec<_>>(), vec!["ae2", "minecraft"]);
    }
}
