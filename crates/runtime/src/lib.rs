//! Reference host for the crystal growth rules.
//!
//! This crate owns what the rules leave to the host: the sites around each
//! budding source, the choice of which site a random tick lands on, writing
//! advanced stages back, and turning harvested clusters into item drops.
//!
//! Modules are organized by responsibility:
//! - [`site`] models budding sources and their six neighbouring sites
//! - [`field`] applies random ticks and harvests to a set of sources
//! - [`simulation`] drives a field tick by tick and accumulates stats
pub mod error;
pub mod field;
pub mod simulation;
pub mod site;

pub use error::{Result, RuntimeError};
pub use field::{CrystalField, Harvest, SkipReason, TickOutcome};
pub use simulation::{Simulation, SimulationStats, resolve_world_seed};
pub use site::{BuddingSource, Direction, Site};
