//! A collection of budding sources driven by random ticks.
//!
//! The field is the host side of the growth rules: it owns the sites, decides
//! which site is eligible on each tick, writes the advanced stage back, and
//! turns harvested clusters into drops. The rules themselves stay in
//! `crystal-core`.

use crystal_core::{
    CrystalSetConfig, CrystalSetRegistry, GrowthStage, ItemId, PcgRng, RngOracle, RollContext,
    compute_seed, roll_advance, roll_yield,
};

use crate::error::{Result, RuntimeError};
use crate::site::{BuddingSource, Direction};

/// Why a random tick did not consult the growth rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum SkipReason {
    /// The formation's gating dependency is missing.
    Inactive,
    /// The chosen site's space is blocked.
    Obstructed,
    /// The chosen site already holds a cluster.
    Terminal,
}

/// Result of one random tick on a budding source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Skipped { face: Direction, reason: SkipReason },
    Unchanged { face: Direction, stage: GrowthStage },
    Advanced {
        face: Direction,
        from: GrowthStage,
        to: GrowthStage,
    },
}

/// Items produced by harvesting one cluster.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Harvest {
    pub item: ItemId,
    pub count: u32,
}

/// Budding sources bound to a registry, ticked with seed-addressed draws.
pub struct CrystalField<'r, R: RngOracle = PcgRng> {
    registry: &'r CrystalSetRegistry,
    rng: R,
    world_seed: u64,
    tick: u64,
    sources: Vec<BuddingSource>,
}

impl<'r> CrystalField<'r, PcgRng> {
    pub fn new(registry: &'r CrystalSetRegistry, world_seed: u64) -> Self {
        Self::with_rng(registry, PcgRng, world_seed)
    }
}

impl<'r, R: RngOracle> CrystalField<'r, R> {
    pub fn with_rng(registry: &'r CrystalSetRegistry, rng: R, world_seed: u64) -> Self {
        Self {
            registry,
            rng,
            world_seed,
            tick: 0,
            sources: Vec::new(),
        }
    }

    /// Places a budding source of a registered formation and returns its index.
    pub fn add_source(&mut self, set_id: &str) -> Result<usize> {
        if !self.registry.contains(set_id) {
            return Err(RuntimeError::UnknownSet(set_id.to_owned()));
        }
        self.sources.push(BuddingSource::new(set_id));
        Ok(self.sources.len() - 1)
    }

    pub fn sources(&self) -> &[BuddingSource] {
        &self.sources
    }

    pub fn source(&self, index: usize) -> Result<&BuddingSource> {
        self.sources
            .get(index)
            .ok_or(RuntimeError::UnknownSource(index))
    }

    pub fn source_mut(&mut self, index: usize) -> Result<&mut BuddingSource> {
        self.sources
            .get_mut(index)
            .ok_or(RuntimeError::UnknownSource(index))
    }

    pub fn registry(&self) -> &'r CrystalSetRegistry {
        self.registry
    }

    pub fn world_seed(&self) -> u64 {
        self.world_seed
    }

    /// Current tick number.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Moves to the next tick so later draws use fresh seeds.
    pub fn advance_tick(&mut self) {
        self.tick += 1;
    }

    fn config_of(&self, index: usize) -> Result<&'r CrystalSetConfig> {
        let registry = self.registry;
        let set_id = self.source(index)?.set_id();
        registry
            .get(set_id)
            .ok_or_else(|| RuntimeError::UnknownSet(set_id.to_owned()))
    }

    fn seed(&self, site: u32, context: RollContext) -> u64 {
        compute_seed(self.world_seed, self.tick, site, context)
    }

    /// Runs one random tick on a source: picks a face uniformly, filters out
    /// ineligible sites, and applies the growth rule to the rest.
    pub fn random_tick(&mut self, index: usize) -> Result<TickOutcome> {
        let config = self.config_of(index)?;
        let face_roll = self.rng.roll_below(
            self.seed(index as u32, RollContext::Face),
            Direction::COUNT as u32,
        );
        let face = Direction::from_repr(face_roll as u8).unwrap_or(Direction::Down);
        let growth_seed = self.seed(index as u32, RollContext::Growth);

        let site = *self.source(index)?.site(face);
        let skip = if !config.is_active() {
            Some(SkipReason::Inactive)
        } else if site.obstructed {
            Some(SkipReason::Obstructed)
        } else if site.stage.is_terminal() {
            Some(SkipReason::Terminal)
        } else {
            None
        };
        if let Some(reason) = skip {
            return Ok(TickOutcome::Skipped { face, reason });
        }

        let next = roll_advance(site.stage, config, &self.rng, growth_seed);
        if next == site.stage {
            return Ok(TickOutcome::Unchanged {
                face,
                stage: site.stage,
            });
        }

        self.source_mut(index)?.site_mut(face).stage = next;
        tracing::debug!(
            set = config.id(),
            source = index,
            %face,
            from = %site.stage,
            to = %next,
            tick = self.tick,
            "site advanced"
        );
        Ok(TickOutcome::Advanced {
            face,
            from: site.stage,
            to: next,
        })
    }

    /// Harvests a cluster: rolls the yield and empties the site.
    ///
    /// # Errors
    ///
    /// Returns `RuntimeError::NotCluster` if the site holds anything but a
    /// cluster; the site is left untouched.
    pub fn harvest(&mut self, index: usize, face: Direction) -> Result<Harvest> {
        let config = self.config_of(index)?;
        let stage = self.source(index)?.site(face).stage;
        if !stage.is_terminal() {
            tracing::warn!(set = config.id(), source = index, %face, %stage, "harvest on immature site");
            return Err(RuntimeError::NotCluster { face, stage });
        }

        let site_id = (index * Direction::COUNT + face.index()) as u32;
        let count = roll_yield(config, &self.rng, self.seed(site_id, RollContext::Yield));
        self.source_mut(index)?.site_mut(face).stage = GrowthStage::Empty;

        tracing::info!(
            set = config.id(),
            source = index,
            %face,
            item = %config.drop_item(),
            count,
            "cluster harvested"
        );
        Ok(Harvest {
            item: config.drop_item().clone(),
            count,
        })
    }
}
