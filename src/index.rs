use serde::{Deserialize, Serialize};

use crate::generators::{AgricultureMetrics, HealthMetrics, UrbanMetrics};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// Fixed thresholds on the overall score; nothing else feeds the tier.
    pub fn from_score(overall: f64) -> Self {
        if overall >= 70.0 {
            RiskLevel::Low
        } else if overall >= 55.0 {
            RiskLevel::Medium
        } else if overall >= 40.0 {
            RiskLevel::High
        } else {
            RiskLevel::Critical
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CityHealthIndex {
    /// 0-100 weighted composite.
    pub overall: i32,
    pub urban: i32,
    pub health: i32,
    pub agriculture: i32,
    pub trend: Trend,
    pub risk_level: RiskLevel,
}

/// Weighted composite of the three metric families. Component scores are
/// computed in floating point and rounded only in the output; the agriculture
/// score can exceed 100 when prices sit below baseline.
pub fn calculate_city_health_index(
    urban: &UrbanMetrics,
    health: &HealthMetrics,
    agriculture: &AgricultureMetrics,
) -> CityHealthIndex {
    let urban_score = (100.0 - urban.traffic_congestion) * 0.3
        + (100.0 - (urban.air_quality_index / 3.0).min(100.0)) * 0.4
        + urban.public_transport_usage * 0.3;

    let health_score = (100.0 - health.hospital_capacity) * 0.3
        + (100.0 - health.emergency_load) * 0.3
        + health.vaccination_rate * 0.2
        + (100.0 - (health.disease_incidence / 3.0).min(100.0)) * 0.2;

    let agriculture_score = agriculture.crop_yield_index * 0.35
        + agriculture.food_supply_level * 0.35
        + (200.0 - agriculture.price_index) * 0.3;

    let overall =
        (urban_score * 0.35 + health_score * 0.35 + agriculture_score * 0.3).clamp(0.0, 100.0);

    let trend = if agriculture.crop_yield_index > 70.0 {
        Trend::Up
    } else {
        Trend::Stable
    };

    CityHealthIndex {
        overall: overall.round() as i32,
        urban: urban_score.round() as i32,
        health: health_score.round() as i32,
        agriculture: agriculture_score.round() as i32,
        trend,
        risk_level: RiskLevel::from_score(overall),
    }
}
