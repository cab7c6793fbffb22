use serde::{Deserialize, Serialize};

use crate::{clock::WallClock, scenario::ScenarioParams, waveform::deterministic_value};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgricultureMetrics {
    /// 0-100 index, clamped 20-100 after scenario deltas.
    pub crop_yield_index: f64,
    /// Percentage of demand met, 50-100.
    pub food_supply_level: f64,
    /// Baseline 100, clamped 80-200.
    pub price_index: f64,
    /// Million liters, 100-300.
    pub water_usage: f64,
    /// 0-100 index, generated within 55-90.
    pub soil_health: f64,
}

pub fn generate_agriculture_metrics(
    lat: f64,
    lon: f64,
    scenario: Option<&ScenarioParams>,
    at: WallClock,
) -> AgricultureMetrics {
    let base_yield = deterministic_value(60.0, 90.0, lat, lon, 11, at);
    let base_supply = deterministic_value(85.0, 98.0, lat, lon, 12, at);
    let base_price = deterministic_value(95.0, 115.0, lat, lon, 13, at);

    // yields peak a couple of degrees above today's temperature, so the
    // temperature delta is penalized by its distance from +2
    let yield_mod = scenario.map_or(0.0, |s| {
        s.rainfall * 0.3 - (s.temperature - 2.0).abs() * 2.0 + s.food_supply_shock * 0.5
    });
    let supply_mod = scenario.map_or(0.0, |s| s.food_supply_shock + s.temperature * -0.5);
    let price_mod = scenario.map_or(0.0, |s| -s.food_supply_shock * 0.8 + s.temperature * 1.2);

    AgricultureMetrics {
        crop_yield_index: (base_yield + yield_mod).clamp(20.0, 100.0),
        food_supply_level: (base_supply + supply_mod).clamp(50.0, 100.0),
        price_index: (base_price + price_mod).clamp(80.0, 200.0),
        water_usage: deterministic_value(100.0, 300.0, lat, lon, 14, at),
        soil_health: deterministic_value(55.0, 90.0, lat, lon, 15, at),
    }
}
