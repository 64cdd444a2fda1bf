//! List registered formations command

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use console::style;
use crystal_core::CrystalSetConfig;

use crate::content;

/// List registered formations
#[derive(Parser, Debug)]
pub struct List {
    /// Directory holding config.toml and crystals.ron
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Hide formations whose gating dependency is missing
    #[arg(long)]
    pub active_only: bool,

    /// Also print block names of each formation
    #[arg(long)]
    pub blocks: bool,
}

impl List {
    pub fn execute(self) -> Result<()> {
        let (_, registry) = content::load(self.data_dir)?;

        let rows: Vec<&CrystalSetConfig> = if self.active_only {
            registry.active_only().collect()
        } else {
            registry.all().collect()
        };

        println!(
            "{:<16} {:<32} {:>6} {:>6} {:>6}  {}",
            style("formation").bold(),
            style("drop").bold(),
            style("chance").bold(),
            style("normal").bold(),
            style("max").bold(),
            style("gate").bold(),
        );
        for config in rows {
            let gate = if config.is_active() {
                style(config.compat_mod()).green()
            } else {
                style(config.compat_mod()).red()
            };
            println!(
                "{:<16} {:<32} {:>6} {:>6.1} {:>6.1}  {}",
                config.id(),
                config.drop_item().to_string(),
                format!("1/{}", config.growth_chance()),
                config.normal_drop(),
                config.max_drop(),
                gate,
            );
            if self.blocks {
                println!("    {}", style(config.blocks().join(", ")).dim());
            }
        }

        Ok(())
    }
}
