//! Harvest yield of a fully grown cluster.

use crate::config::CrystalSetConfig;
use crate::env::RngOracle;

/// Number of drop items for one harvested cluster.
///
/// Interpolates linearly from `normal_drop` to `max_drop` by `draw` and rounds
/// half up. The draw is clamped into `[0, 1]` (NaN counts as 0), so the
/// result always lies in `[floor(normal_drop), ceil(max_drop)]` and is
/// non-decreasing in `draw`. When both bounds are equal the draw has no effect.
/// Bounds are below [`CrystalSetConfig::DROP_LIMIT`], so the count is exact.
pub fn compute_yield(config: &CrystalSetConfig, draw: f32) -> u32 {
    let draw = if draw.is_nan() { 0.0 } else { f64::from(draw.clamp(0.0, 1.0)) };
    let normal = config.normal_drop() as f64;
    let max = config.max_drop() as f64;

    let raw = normal + draw * (max - normal);
    let rounded = (raw + 0.5).floor().clamp(0.0, max.ceil());
    rounded as u32
}

/// Rolls the yield draw from an oracle.
pub fn roll_yield<R: RngOracle + ?Sized>(config: &CrystalSetConfig, rng: &R, seed: u64) -> u32 {
    compute_yield(config, rng.unit_f32(seed))
}
