//! Formation catalog loader.

use std::path::Path;

use crystal_core::{CrystalSetRegistry, DependencyOracle};

use crate::catalog::CrystalCatalog;
use crate::loaders::{LoadResult, read_file};

/// Loader for formation catalogs from RON files.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load a catalog from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing a `CrystalCatalog`
    pub fn load(path: &Path) -> LoadResult<CrystalCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse catalog {}: {}", path.display(), e))
    }

    /// Parse a catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<CrystalCatalog> {
        let catalog: CrystalCatalog = ron::from_str(content)?;
        Ok(catalog)
    }

    /// Validate every entry and register it in catalog order.
    ///
    /// Fails on the first invalid entry or duplicate name.
    pub fn into_registry(
        catalog: &CrystalCatalog,
        deps: &dyn DependencyOracle,
    ) -> LoadResult<CrystalSetRegistry> {
        let mut registry = CrystalSetRegistry::new();
        for spec in &catalog.sets {
            let config = spec
                .to_config(deps)
                .map_err(|e| anyhow::anyhow!("Invalid formation '{}': {}", spec.name, e))?;
            registry.register(config)?;
        }
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crystal_core::LoadedDependencies;

    #[test]
    fn parses_sparse_entries_with_defaults() {
        let catalog = CatalogLoader::parse(
            r#"(
                sets: [
                    (name: "redstone", drop: "minecraft:redstone"),
                    (name: "fluix", drop: "ae2:fluix_crystal", compat_mod: "ae2", growth_chance: 8, max_drop: 6.0),
                ],
            )"#,
        )
        .unwrap();

        assert_eq!(catalog.sets.len(), 2);
        assert_eq!(catalog.sets[0].growth_chance, 5);
        assert_eq!(catalog.sets[0].compat_mod, "minecraft");
        assert_eq!(catalog.sets[1].growth_chance, 8);
        assert_eq!(catalog.sets[1].normal_drop, 2.0);
        assert_eq!(catalog.sets[1].max_drop, 6.0);
    }

    #[test]
    fn duplicate_names_fail_registration() {
        let catalog = CatalogLoader::parse(
            r#"(sets: [(name: "redstone", drop: "redstone"), (name: "redstone", drop: "redstone")])"#,
        )
        .unwrap();

        let err = CatalogLoader::into_registry(&catalog, &LoadedDependencies::base_only())
            .unwrap_err();
        assert!(err.to_string().contains("already registered"));
    }

    #[test]
    fn invalid_entry_names_the_formation() {
        let catalog = CatalogLoader::parse(
            r#"(sets: [(name: "diamond", drop: "diamond", normal_drop: 5.0, max_drop: 1.0)])"#,
        )
        .unwrap();

        let err = CatalogLoader::into_registry(&catalog, &LoadedDependencies::base_only())
            .unwrap_err();
        assert!(err.to_string().contains("diamond"));
    }
}
