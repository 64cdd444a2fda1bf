//! Growth stages of a crystal site and their block properties.
//!
//! A site is either empty or occupied by one of four buds. Stages are totally
//! ordered by growth progress and only ever move one step forward.

/// Growth progress of a single site next to a budding source.
///
/// The derived ordering follows declaration order, so
/// `Empty < Small < Medium < Large < Cluster`.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum GrowthStage {
    /// Unoccupied site.
    #[default]
    Empty,
    Small,
    Medium,
    Large,
    /// Fully grown. Terminal: only harvestable.
    Cluster,
}

impl GrowthStage {
    /// Occupied stages in growth order.
    pub const BUDS: [GrowthStage; 4] = [Self::Small, Self::Medium, Self::Large, Self::Cluster];

    /// Returns the next stage, or `None` for `Cluster`.
    pub const fn successor(self) -> Option<Self> {
        match self {
            Self::Empty => Some(Self::Small),
            Self::Small => Some(Self::Medium),
            Self::Medium => Some(Self::Large),
            Self::Large => Some(Self::Cluster),
            Self::Cluster => None,
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Cluster)
    }

    pub const fn is_occupied(self) -> bool {
        !matches!(self, Self::Empty)
    }

    /// Block properties for occupied stages. `Empty` has no block.
    pub const fn properties(self) -> Option<StageProperties> {
        match self {
            Self::Empty => None,
            Self::Small => Some(StageProperties::new(1, 3, 4, BudSound::SmallBud)),
            Self::Medium => Some(StageProperties::new(2, 4, 3, BudSound::SmallBud)),
            Self::Large => Some(StageProperties::new(4, 5, 3, BudSound::SmallBud)),
            Self::Cluster => Some(StageProperties::new(5, 7, 3, BudSound::Cluster)),
        }
    }

    /// Block name of this stage for the formation `set_id`.
    ///
    /// Returns `None` for `Empty`.
    pub fn block_name(self, set_id: &str) -> Option<String> {
        match self {
            Self::Empty => None,
            Self::Small => Some(format!("small_{set_id}_bud")),
            Self::Medium => Some(format!("medium_{set_id}_bud")),
            Self::Large => Some(format!("large_{set_id}_bud")),
            Self::Cluster => Some(format!("{set_id}_cluster")),
        }
    }
}

/// Sound family played by a bud block.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum BudSound {
    SmallBud,
    Cluster,
}

/// Cosmetic parameters of an occupied stage.
///
/// `height` and `width_shrink` describe the bud's shape in sixteenths of a
/// block; `light` is the emitted light level (0..=15).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StageProperties {
    pub light: u8,
    pub height: u8,
    pub width_shrink: u8,
    pub sound: BudSound,
}

impl StageProperties {
    pub const fn new(light: u8, height: u8, width_shrink: u8, sound: BudSound) -> Self {
        Self {
            light,
            height,
            width_shrink,
            sound,
        }
    }
}
