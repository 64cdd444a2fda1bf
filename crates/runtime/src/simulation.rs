//! Tick loop over a whole field with automatic harvesting.

use std::collections::BTreeMap;

use crystal_core::{CrystalSetRegistry, ItemId, PcgRng, RngOracle};

use crate::error::Result;
use crate::field::{CrystalField, TickOutcome};

/// Picks the configured world seed, or a fresh random one.
pub fn resolve_world_seed(configured: Option<u64>) -> u64 {
    configured.unwrap_or_else(rand::random)
}

/// Counters accumulated over a run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimulationStats {
    pub ticks: u64,
    pub advancements: u64,
    pub unchanged: u64,
    pub skipped: u64,
    pub harvests: u64,
    /// Total items harvested per drop item.
    pub yields: BTreeMap<ItemId, u64>,
}

impl SimulationStats {
    pub fn total_items(&self) -> u64 {
        self.yields.values().sum()
    }

    fn record(&mut self, outcome: &TickOutcome) {
        match outcome {
            TickOutcome::Advanced { .. } => self.advancements += 1,
            TickOutcome::Unchanged { .. } => self.unchanged += 1,
            TickOutcome::Skipped { .. } => self.skipped += 1,
        }
    }
}

/// Drives every source of a field once per tick and harvests grown clusters.
pub struct Simulation<'r, R: RngOracle = PcgRng> {
    field: CrystalField<'r, R>,
    stats: SimulationStats,
}

impl<'r> Simulation<'r, PcgRng> {
    /// Builds a field with `sources_per_set` sources for each active formation.
    pub fn populate(
        registry: &'r CrystalSetRegistry,
        world_seed: u64,
        sources_per_set: u32,
    ) -> Result<Self> {
        let mut field = CrystalField::new(registry, world_seed);
        for config in registry.active_only() {
            for _ in 0..sources_per_set {
                field.add_source(config.id())?;
            }
        }
        tracing::info!(
            sources = field.sources().len(),
            formations = registry.active_only().count(),
            world_seed,
            "field populated"
        );
        Ok(Self::new(field))
    }
}

impl<'r, R: RngOracle> Simulation<'r, R> {
    pub fn new(field: CrystalField<'r, R>) -> Self {
        Self {
            field,
            stats: SimulationStats::default(),
        }
    }

    pub fn field(&self) -> &CrystalField<'r, R> {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut CrystalField<'r, R> {
        &mut self.field
    }

    pub fn stats(&self) -> &SimulationStats {
        &self.stats
    }

    /// One tick: every source gets a random tick, then every cluster is harvested.
    pub fn step(&mut self) -> Result<()> {
        for index in 0..self.field.sources().len() {
            let outcome = self.field.random_tick(index)?;
            self.stats.record(&outcome);
        }

        for index in 0..self.field.sources().len() {
            let grown: Vec<_> = self.field.source(index)?.clusters().collect();
            for face in grown {
                let harvest = self.field.harvest(index, face)?;
                self.stats.harvests += 1;
                *self.stats.yields.entry(harvest.item).or_default() += u64::from(harvest.count);
            }
        }

        self.field.advance_tick();
        self.stats.ticks += 1;
        Ok(())
    }

    /// Runs `ticks` steps and returns the accumulated stats.
    pub fn run(&mut self, ticks: u64) -> Result<&SimulationStats> {
        for _ in 0..ticks {
            self.step()?;
        }
        tracing::info!(
            ticks = self.stats.ticks,
            advancements = self.stats.advancements,
            harvests = self.stats.harvests,
            items = self.stats.total_items(),
            "simulation finished"
        );
        Ok(&self.stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crystal_core::CrystalSetConfig;

    #[test]
    fn configured_seed_wins() {
        assert_eq!(resolve_world_seed(Some(17)), 17);
    }

    #[test]
    fn inactive_formations_get_no_sources() {
        let registry = CrystalSetRegistry::from_configs([
            CrystalSetConfig::builder("diamond")
                .drop("diamond")
                .build_with_active(true)
                .unwrap(),
            CrystalSetConfig::builder("salt")
                .drop("mekanism:salt")
                .build_with_active(false)
                .unwrap(),
        ])
        .unwrap();

        let simulation = Simulation::populate(&registry, 5, 3).unwrap();
        let sources = simulation.field().sources();
        assert_eq!(sources.len(), 3);
        assert!(sources.iter().all(|source| source.set_id() == "diamond"));
    }

    #[test]
    fn certain_growth_harvests_after_four_advancements() {
        let registry = CrystalSetRegistry::from_configs([CrystalSetConfig::builder("emerald")
            .drop("emerald")
            .growth_chance(1)
            .normal_drop(3.0)
            .max_drop(3.0)
            .build_with_active(true)
            .unwrap()])
        .unwrap();

        let mut simulation = Simulation::populate(&registry, 99, 1).unwrap();
        let stats = simulation.run(200).unwrap().clone();

        assert_eq!(stats.ticks, 200);
        assert_eq!(stats.advancements + stats.unchanged + stats.skipped, 200);
        assert_eq!(stats.unchanged, 0);
        // Every harvest needs four advancements first.
        assert!(stats.harvests > 0);
        assert!(stats.advancements >= stats.harvests * 4);
        let emerald: ItemId = "minecraft:emerald".parse().unwrap();
        assert_eq!(stats.yields[&emerald], stats.harvests * 3);
    }
}
