use std::f64::consts::PI;

use crate::clock::WallClock;

/// Slots in the daily cycle. Distinct seed suffixes land on different phase
/// offsets within it, which desynchronizes the per-metric curves.
const SLOTS: i64 = 48;

/// Stable integer fingerprint of a coordinate pair at roughly one-metre
/// precision.
pub fn location_seed(lat: f64, lon: f64) -> i64 {
    (((lat * 100_000.0).floor() as i64) + ((lon * 100_000.0).floor() as i64)).abs()
}

/// Bounded, smoothly varying value derived from location and wall-clock time.
///
/// This is not random sampling: identical `(min, max, lat, lon, seed_suffix)`
/// at the same hour and minute always yield the same output. The diurnal wave
/// carries 70% of the factor, a per-location constant bias 30%, and a ±5%
/// minute-level ripple keeps repeated reads within the same hour moving.
pub fn deterministic_value(
    min: f64,
    max: f64,
    lat: f64,
    lon: f64,
    seed_suffix: i64,
    at: WallClock,
) -> f64 {
    let loc_seed = location_seed(lat, lon);
    let index = (at.hour as i64 + seed_suffix + loc_seed % SLOTS) % SLOTS;

    let wave = ((index as f64 * PI / 12.0).sin() + 1.0) / 2.0;
    let loc_offset = (loc_seed % 1000) as f64 / 1000.0;
    let micro_noise = 1.0 + (at.minute as f64 * 0.5 + loc_seed as f64).sin() * 0.05;

    let final_factor = (wave * 0.7 + loc_offset * 0.3) * micro_noise;
    (min + (max - min) * final_factor).clamp(min, max)
}
