use serde::{Deserialize, Serialize};

use crate::{clock::WallClock, scenario::ScenarioParams, waveform::deterministic_value};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UrbanMetrics {
    /// 0-100.
    pub traffic_congestion: f64,
    /// 0-500, EPA-style scale.
    pub air_quality_index: f64,
    /// MW, floor 500 with no upper clamp.
    pub energy_usage: f64,
    /// dB, 45-85.
    pub noise_level: f64,
    /// Percentage, 20-60.
    pub public_transport_usage: f64,
}

pub fn generate_urban_metrics(
    lat: f64,
    lon: f64,
    scenario: Option<&ScenarioParams>,
    at: WallClock,
) -> UrbanMetrics {
    let base_traffic = deterministic_value(30.0, 80.0, lat, lon, 1, at);
    let base_aqi = deterministic_value(50.0, 150.0, lat, lon, 2, at);
    let base_energy = deterministic_value(800.0, 1500.0, lat, lon, 3, at);

    let traffic_mod = scenario.map_or(0.0, |s| s.population_density * 0.5 + s.rainfall * -0.1);
    let aqi_mod = scenario.map_or(0.0, |s| s.temperature * 3.0 + s.energy_demand * 0.8);
    let energy_mod = scenario.map_or(0.0, |s| s.temperature * 20.0 + s.population_density * 10.0);

    // noise and transport ride the waveform alone; the scenario sliders do
    // not couple into them
    UrbanMetrics {
        traffic_congestion: (base_traffic + traffic_mod).clamp(0.0, 100.0),
        air_quality_index: (base_aqi + aqi_mod).clamp(0.0, 500.0),
        energy_usage: (base_energy + energy_mod).max(500.0),
        noise_level: deterministic_value(45.0, 85.0, lat, lon, 4, at),
        public_transport_usage: deterministic_value(20.0, 60.0, lat, lon, 5, at),
    }
}
