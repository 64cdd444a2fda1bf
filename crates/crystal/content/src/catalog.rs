//! Formation catalog entries and the built-in formation list.
//!
//! A [`CrystalSetSpec`] is the authoring form of a formation: only `name` and
//! `drop` are required, everything else falls back to the reference defaults.
//! Specs become [`CrystalSetConfig`]s once a dependency oracle is available to
//! snapshot gating.

use crystal_core::{ConfigError, CrystalSetConfig, DependencyOracle};

#[cfg(feature = "serde")]
fn default_compat_mod() -> String {
    CrystalSetConfig::DEFAULT_COMPAT_MOD.to_owned()
}

#[cfg(feature = "serde")]
fn default_growth_chance() -> u32 {
    CrystalSetConfig::DEFAULT_GROWTH_CHANCE
}

#[cfg(feature = "serde")]
fn default_normal_drop() -> f32 {
    CrystalSetConfig::DEFAULT_NORMAL_DROP
}

#[cfg(feature = "serde")]
fn default_max_drop() -> f32 {
    CrystalSetConfig::DEFAULT_MAX_DROP
}

/// One formation as written in a catalog file.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CrystalSetSpec {
    pub name: String,
    /// Dropped item as `namespace:path`.
    pub drop: String,
    #[cfg_attr(feature = "serde", serde(default = "default_compat_mod"))]
    pub compat_mod: String,
    #[cfg_attr(feature = "serde", serde(default = "default_growth_chance"))]
    pub growth_chance: u32,
    #[cfg_attr(feature = "serde", serde(default = "default_normal_drop"))]
    pub normal_drop: f32,
    #[cfg_attr(feature = "serde", serde(default = "default_max_drop"))]
    pub max_drop: f32,
}

impl CrystalSetSpec {
    /// Spec with reference defaults for everything but name and drop.
    pub fn new(name: impl Into<String>, drop: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            drop: drop.into(),
            compat_mod: CrystalSetConfig::DEFAULT_COMPAT_MOD.to_owned(),
            growth_chance: CrystalSetConfig::DEFAULT_GROWTH_CHANCE,
            normal_drop: CrystalSetConfig::DEFAULT_NORMAL_DROP,
            max_drop: CrystalSetConfig::DEFAULT_MAX_DROP,
        }
    }

    pub fn with_compat_mod(mut self, compat_mod: impl Into<String>) -> Self {
        self.compat_mod = compat_mod.into();
        self
    }

    /// Validates the spec and snapshots gating from `deps`.
    pub fn to_config(&self, deps: &dyn DependencyOracle) -> Result<CrystalSetConfig, ConfigError> {
        CrystalSetConfig::builder(self.name.as_str())
            .compat_mod(self.compat_mod.as_str())
            .growth_chance(self.growth_chance)
            .drop(self.drop.as_str())
            .normal_drop(self.normal_drop)
            .max_drop(self.max_drop)
            .build(deps)
    }
}

/// Ordered list of formations.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CrystalCatalog {
    pub sets: Vec<CrystalSetSpec>,
}

/// The reference formations in registry order.
pub fn builtin_catalog() -> CrystalCatalog {
    CrystalCatalog {
        sets: vec![
            CrystalSetSpec::new("amethyst", "minecraft:amethyst_shard"),
            CrystalSetSpec::new("redstone", "minecraft:redstone"),
            CrystalSetSpec::new("diamond", "minecraft:diamond"),
            CrystalSetSpec::new("emerald", "minecraft:emerald"),
            CrystalSetSpec::new("lapis_lazuli", "minecraft:lapis_lazuli"),
            CrystalSetSpec::new("glowstone", "minecraft:glowstone_dust"),
            CrystalSetSpec::new("nether_quartz", "minecraft:quartz"),
            CrystalSetSpec::new("prismarine", "minecraft:prismarine"),
            CrystalSetSpec::new("certus_quartz", "ae2:certus_quartz_crystal").with_compat_mod("ae2"),
            CrystalSetSpec::new("fluix", "ae2:fluix_crystal").with_compat_mod("ae2"),
            CrystalSetSpec::new("salt", "mekanism:salt").with_compat_mod("mekanism"),
            CrystalSetSpec::new("fluorite", "mekanism:fluorite_gem").with_compat_mod("mekanism"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crystal_core::LoadedDependencies;

    #[test]
    fn builtin_catalog_is_valid() {
        let deps = LoadedDependencies::base_only();
        let configs: Vec<_> = builtin_catalog()
            .sets
            .iter()
            .map(|spec| spec.to_config(&deps))
            .collect::<Result<_, _>>()
            .expect("builtin catalog must validate");

        assert_eq!(configs.len(), 12);
        assert_eq!(configs[0].id(), "amethyst");
        assert!(configs[7].is_active());
        assert_eq!(configs[7].id(), "prismarine");
        assert_eq!(configs[7].drop_item().to_string(), "minecraft:prismarine");
        assert!(!configs[8].is_active(), "certus quartz is gated on ae2");
        assert_eq!(configs[11].drop_item().to_string(), "mekanism:fluorite_gem");
    }

    #[test]
    fn spec_errors_surface_as_config_errors() {
        let mut spec = CrystalSetSpec::new("diamond", "minecraft:diamond");
        spec.growth_chance = 0;
        assert_eq!(
            spec.to_config(&LoadedDependencies::base_only()),
            Err(ConfigError::GrowthChanceZero)
        );
    }
}
