//! Deterministic growth rules for budding crystal formations.
//!
//! `crystal-core` defines the canonical rules shared by every host: the
//! growth stages of a site, the per-formation configuration, the tick
//! advancement machine, the harvest yield calculation, and the registry the
//! host enumerates. Everything here is pure: randomness arrives as draw values
//! (or through [`env::RngOracle`]) and sites are owned by the host.
pub mod config;
pub mod env;
pub mod error;
pub mod growth;
pub mod registry;
pub mod stage;
pub mod yields;

pub use config::{ConfigError, CrystalSetConfig, CrystalSetConfigBuilder, ItemId};
pub use env::{
    DependencyOracle, LoadedDependencies, PcgRng, RngOracle, RollContext, compute_seed,
};
pub use error::{CrystalError, ErrorSeverity};
pub use growth::{SUCCESS_DRAW, roll_advance, try_advance, try_advance_unit};
pub use registry::{CrystalSetRegistry, RegistryError};
pub use stage::{BudSound, GrowthStage, StageProperties};
pub use yields::{compute_yield, roll_yield};
