//! Per-tick advancement of a single site.
//!
//! The machine is agnostic to spatial legality: the host only calls it for
//! sites next to an active budding source whose target space is unobstructed.
//! It returns the next stage and leaves writing it back to the host.
//!
//! # Draws
//!
//! A tick has `growth_chance` equally likely outcomes and exactly one of them,
//! outcome `0`, advances the site. Out-of-range draws are clamped into the
//! valid range instead of being rejected.

use crate::config::CrystalSetConfig;
use crate::env::RngOracle;
use crate::stage::GrowthStage;

/// The single advancing outcome among `growth_chance` integer outcomes.
pub const SUCCESS_DRAW: u32 = 0;

/// Advances `current` by at most one stage using an integer draw in
/// `[0, growth_chance)`.
///
/// `Cluster` is terminal and returned unchanged regardless of the draw. Draws
/// at or above `growth_chance` are clamped to `growth_chance - 1`.
pub fn try_advance(current: GrowthStage, config: &CrystalSetConfig, draw: u32) -> GrowthStage {
    let last = config.growth_chance().saturating_sub(1);
    if draw.min(last) == SUCCESS_DRAW {
        current.successor().unwrap_or(current)
    } else {
        current
    }
}

/// Same as [`try_advance`] with a uniform real draw in `[0, 1)`.
///
/// The draw is mapped onto `growth_chance` equal buckets; the first bucket
/// advances. NaN and values outside `[0, 1)` are clamped.
pub fn try_advance_unit(current: GrowthStage, config: &CrystalSetConfig, draw: f32) -> GrowthStage {
    let chance = config.growth_chance();
    let unit = if draw.is_nan() { 0.0 } else { draw.clamp(0.0, 1.0) };
    // `as` saturates, so a draw of exactly 1.0 lands in the last bucket after `min`.
    let bucket = ((unit as f64 * chance as f64) as u32).min(chance.saturating_sub(1));
    try_advance(current, config, bucket)
}

/// Rolls the growth draw from an oracle and advances.
pub fn roll_advance<R: RngOracle + ?Sized>(
    current: GrowthStage,
    config: &CrystalSetConfig,
    rng: &R,
    seed: u64,
) -> GrowthStage {
    let draw = rng.roll_below(seed, config.growth_chance());
    try_advance(current, config, draw)
}
