//! Immutable per-formation configuration.
//!
//! A [`CrystalSetConfig`] describes one mineral formation: how often its buds
//! advance, what a harvested cluster drops, and whether the formation is
//! enabled in this host. Configs are validated once at construction and never
//! change afterwards.

use core::fmt;
use core::str::FromStr;

use crate::env::DependencyOracle;
use crate::error::{CrystalError, ErrorSeverity};
use crate::stage::GrowthStage;

/// Errors raised while constructing a [`CrystalSetConfig`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("formation id must not be empty")]
    EmptyId,

    #[error("formation id '{0}' may only contain [a-z0-9_.-]")]
    MalformedId(String),

    #[error("growth chance must be at least 1")]
    GrowthChanceZero,

    #[error("formation has no drop item")]
    MissingDrop,

    #[error("drop item '{0}' is not a valid namespace:path identifier")]
    MalformedDropItem(String),

    #[error("drop count {value} is negative")]
    NegativeDrop { value: f32 },

    #[error("drop counts must be finite numbers")]
    NonFiniteDrop,

    #[error("drop count {value} does not fit a yield count")]
    DropTooLarge { value: f32 },

    #[error("normal drop {normal} exceeds max drop {max}")]
    DropRangeInverted { normal: f32, max: f32 },
}

impl CrystalError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use ConfigError::*;
        match self {
            EmptyId => "CONFIG_EMPTY_ID",
            MalformedId(_) => "CONFIG_MALFORMED_ID",
            GrowthChanceZero => "CONFIG_GROWTH_CHANCE_ZERO",
            MissingDrop => "CONFIG_MISSING_DROP",
            MalformedDropItem(_) => "CONFIG_MALFORMED_DROP_ITEM",
            NegativeDrop { .. } => "CONFIG_NEGATIVE_DROP",
            NonFiniteDrop => "CONFIG_NON_FINITE_DROP",
            DropTooLarge { .. } => "CONFIG_DROP_TOO_LARGE",
            DropRangeInverted { .. } => "CONFIG_DROP_RANGE_INVERTED",
        }
    }
}

fn is_namespace_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '_' | '-' | '.')
}

fn is_path_char(c: char) -> bool {
    is_namespace_char(c) || c == '/'
}

/// Identity of the item a harvested cluster drops, as `namespace:path`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct ItemId {
    namespace: String,
    path: String,
}

impl ItemId {
    /// Namespace assumed when an id has no `namespace:` prefix.
    pub const DEFAULT_NAMESPACE: &'static str = "minecraft";

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl FromStr for ItemId {
    type Err = ConfigError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let malformed = || ConfigError::MalformedDropItem(raw.to_owned());
        let (namespace, path) = match raw.split_once(':') {
            Some((namespace, path)) => (namespace, path),
            None => (Self::DEFAULT_NAMESPACE, raw),
        };
        if namespace.is_empty()
            || path.is_empty()
            || !namespace.chars().all(is_namespace_char)
            || !path.chars().all(is_path_char)
        {
            return Err(malformed());
        }
        Ok(Self {
            namespace: namespace.to_owned(),
            path: path.to_owned(),
        })
    }
}

impl TryFrom<String> for ItemId {
    type Error = ConfigError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

impl From<ItemId> for String {
    fn from(id: ItemId) -> Self {
        id.to_string()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

/// Immutable description of one crystal formation.
///
/// # Gating
///
/// `active` is a snapshot taken from the [`DependencyOracle`] when the config
/// is built. A dependency that appears later does not activate an already
/// built formation. Hosts that need the live answer can call
/// [`CrystalSetConfig::is_active_live`].
#[derive(Clone, Debug, PartialEq)]
pub struct CrystalSetConfig {
    id: String,
    compat_mod: String,
    growth_chance: u32,
    drop: ItemId,
    normal_drop: f32,
    max_drop: f32,
    active: bool,
}

impl CrystalSetConfig {
    // ===== reference defaults (not balanced) =====
    pub const DEFAULT_GROWTH_CHANCE: u32 = 5;
    pub const DEFAULT_NORMAL_DROP: f32 = 2.0;
    pub const DEFAULT_MAX_DROP: f32 = 4.0;
    pub const DEFAULT_COMPAT_MOD: &'static str = "minecraft";

    /// Upper bound (exclusive) on drop counts: every yield must fit a `u32`.
    pub const DROP_LIMIT: f32 = 4_294_967_296.0;

    /// Validates and builds a config with an explicit `active` flag.
    ///
    /// `active` should agree with `compat_mod` being loaded; use
    /// [`CrystalSetConfigBuilder::build`] to take it from a [`DependencyOracle`].
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the id is empty or malformed,
    /// `growth_chance` is zero, or the drop bounds are negative, non-finite,
    /// too large or inverted.
    pub fn new(
        id: impl Into<String>,
        compat_mod: impl Into<String>,
        growth_chance: u32,
        drop: ItemId,
        normal_drop: f32,
        max_drop: f32,
        active: bool,
    ) -> Result<Self, ConfigError> {
        let id = id.into();
        validate_id(&id)?;
        if growth_chance == 0 {
            return Err(ConfigError::GrowthChanceZero);
        }
        validate_drops(normal_drop, max_drop)?;

        Ok(Self {
            id,
            compat_mod: compat_mod.into(),
            growth_chance,
            drop,
            normal_drop,
            max_drop,
            active,
        })
    }

    /// Returns a builder preloaded with the reference defaults.
    pub fn builder(id: impl Into<String>) -> CrystalSetConfigBuilder {
        CrystalSetConfigBuilder::new(id)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Name of the dependency gating this formation.
    pub fn compat_mod(&self) -> &str {
        &self.compat_mod
    }

    /// Denominator of the per-tick advancement probability (`1 / growth_chance`).
    pub fn growth_chance(&self) -> u32 {
        self.growth_chance
    }

    pub fn drop_item(&self) -> &ItemId {
        &self.drop
    }

    pub fn normal_drop(&self) -> f32 {
        self.normal_drop
    }

    pub fn max_drop(&self) -> f32 {
        self.max_drop
    }

    /// Snapshot of the gating dependency taken at construction.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Queries the gating dependency now instead of using the snapshot.
    pub fn is_active_live(&self, deps: &dyn DependencyOracle) -> bool {
        deps.is_loaded(&self.compat_mod)
    }

    /// Name of the budding source block.
    pub fn budding_block(&self) -> String {
        format!("budding_{}", self.id)
    }

    /// Block name for an occupied stage of this formation.
    pub fn stage_block(&self, stage: GrowthStage) -> Option<String> {
        stage.block_name(&self.id)
    }

    /// Bud and cluster block names in growth order.
    pub fn bud_blocks(&self) -> impl Iterator<Item = String> + '_ {
        GrowthStage::BUDS
            .into_iter()
            .filter_map(move |stage| stage.block_name(&self.id))
    }

    /// Every block of the formation: the budding source followed by its buds.
    pub fn blocks(&self) -> Vec<String> {
        core::iter::once(self.budding_block())
            .chain(self.bud_blocks())
            .collect()
    }
}

fn validate_id(id: &str) -> Result<(), ConfigError> {
    if id.is_empty() {
        return Err(ConfigError::EmptyId);
    }
    if !id.chars().all(is_namespace_char) {
        return Err(ConfigError::MalformedId(id.to_owned()));
    }
    Ok(())
}

fn validate_drops(normal: f32, max: f32) -> Result<(), ConfigError> {
    if !normal.is_finite() || !max.is_finite() {
        return Err(ConfigError::NonFiniteDrop);
    }
    if normal < 0.0 {
        return Err(ConfigError::NegativeDrop { value: normal });
    }
    if max < 0.0 {
        return Err(ConfigError::NegativeDrop { value: max });
    }
    if normal > max {
        return Err(ConfigError::DropRangeInverted { normal, max });
    }
    if max >= CrystalSetConfig::DROP_LIMIT {
        return Err(ConfigError::DropTooLarge { value: max });
    }
    Ok(())
}

/// Builder for constructing formation configs.
#[derive(Clone, Debug)]
pub struct CrystalSetConfigBuilder {
    id: String,
    compat_mod: String,
    growth_chance: u32,
    drop: Option<String>,
    normal_drop: f32,
    max_drop: f32,
}

impl CrystalSetConfigBuilder {
    fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            compat_mod: CrystalSetConfig::DEFAULT_COMPAT_MOD.to_owned(),
            growth_chance: CrystalSetConfig::DEFAULT_GROWTH_CHANCE,
            drop: None,
            normal_drop: CrystalSetConfig::DEFAULT_NORMAL_DROP,
            max_drop: CrystalSetConfig::DEFAULT_MAX_DROP,
        }
    }

    /// Set the gating dependency
    pub fn compat_mod(mut self, compat_mod: impl Into<String>) -> Self {
        self.compat_mod = compat_mod.into();
        self
    }

    pub fn growth_chance(mut self, chance: u32) -> Self {
        self.growth_chance = chance;
        self
    }

    /// Set the dropped item as `namespace:path` (bare paths use `minecraft`)
    pub fn drop(mut self, item: impl Into<String>) -> Self {
        self.drop = Some(item.into());
        self
    }

    pub fn normal_drop(mut self, count: f32) -> Self {
        self.normal_drop = count;
        self
    }

    pub fn max_drop(mut self, count: f32) -> Self {
        self.max_drop = count;
        self
    }

    /// Builds the config, snapshotting `active` from `deps`.
    pub fn build(self, deps: &dyn DependencyOracle) -> Result<CrystalSetConfig, ConfigError> {
        let active = deps.is_loaded(&self.compat_mod);
        self.build_with_active(active)
    }

    /// Builds the config with an explicit `active` flag.
    pub fn build_with_active(self, active: bool) -> Result<CrystalSetConfig, ConfigError> {
        let drop: ItemId = self.drop.ok_or(ConfigError::MissingDrop)?.parse()?;
        CrystalSetConfig::new(
            self.id,
            self.compat_mod,
            self.growth_chance,
            drop,
            self.normal_drop,
            self.max_drop,
            active,
        )
    }
}
