//! Traits describing what the host provides to the rules.
//!
//! The rules never read world state directly. Randomness and dependency
//! presence come in through these oracles so hosts can swap implementations.
mod deps;
mod rng;

pub use deps::{DependencyOracle, LoadedDependencies};
pub use rng::{PcgRng, RngOracle, RollContext, compute_seed};
