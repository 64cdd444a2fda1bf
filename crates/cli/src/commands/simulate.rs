//! Field simulation command

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use console::style;
use runtime::{Simulation, resolve_world_seed};

use crate::content;

/// Run random ticks over a field of budding sources
#[derive(Parser, Debug)]
pub struct Simulate {
    /// Directory holding config.toml and crystals.ron
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Number of ticks to run
    #[arg(short, long, default_value_t = 1_000)]
    pub ticks: u64,

    /// World seed (overrides config.toml)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Budding sources per active formation (overrides config.toml)
    #[arg(long)]
    pub sources: Option<u32>,
}

impl Simulate {
    pub fn execute(self) -> Result<()> {
        let (config, registry) = content::load(self.data_dir)?;
        let world_seed = resolve_world_seed(self.seed.or(config.world_seed));
        let sources = self.sources.unwrap_or(config.sources_per_set);

        let mut simulation = Simulation::populate(&registry, world_seed, sources)?;
        let stats = simulation.run(self.ticks)?;

        println!(
            "{} {} ticks, seed {}",
            style("Simulated").green().bold(),
            stats.ticks,
            world_seed
        );
        println!(
            "  advancements {}  unchanged {}  skipped {}  harvests {}",
            stats.advancements, stats.unchanged, stats.skipped, stats.harvests
        );
        for (item, count) in &stats.yields {
            println!("  {:<36} {:>8}", style(item).cyan(), count);
        }
        println!("  {:<36} {:>8}", style("total").bold(), stats.total_items());

        Ok(())
    }
}
