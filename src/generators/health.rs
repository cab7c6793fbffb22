use serde::{Deserialize, Serialize};

use crate::{clock::WallClock, scenario::ScenarioParams, waveform::deterministic_value};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthMetrics {
    /// Cases per 100k, floor 10 with no ceiling.
    pub disease_incidence: f64,
    /// Percentage occupied, 30-100.
    pub hospital_capacity: f64,
    /// Percentage, 20-100.
    pub emergency_load: f64,
    /// Percentage, 65-92.
    pub vaccination_rate: f64,
    /// Minutes, 5-15.
    pub avg_response_time: f64,
}

pub fn generate_health_metrics(
    lat: f64,
    lon: f64,
    scenario: Option<&ScenarioParams>,
    at: WallClock,
) -> HealthMetrics {
    let base_hospital = deterministic_value(60.0, 85.0, lat, lon, 6, at);
    let base_emergency = deterministic_value(40.0, 70.0, lat, lon, 7, at);
    let base_disease = deterministic_value(50.0, 200.0, lat, lon, 8, at);

    let hospital_mod = scenario.map_or(0.0, |s| s.temperature * 1.5 + s.population_density * 0.5);
    let emergency_mod = scenario.map_or(0.0, |s| s.rainfall * 0.3 + s.temperature * 0.8);
    let disease_mod = scenario.map_or(0.0, |s| s.temperature * 5.0 + s.population_density * 2.0);

    HealthMetrics {
        disease_incidence: (base_disease + disease_mod).max(10.0),
        hospital_capacity: (base_hospital + hospital_mod).clamp(30.0, 100.0),
        emergency_load: (base_emergency + emergency_mod).clamp(20.0, 100.0),
        vaccination_rate: deterministic_value(65.0, 92.0, lat, lon, 9, at),
        avg_response_time: deterministic_value(5.0, 15.0, lat, lon, 10, at),
    }
}
