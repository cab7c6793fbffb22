use urbannexus::{
    calculate_city_health_index,
    generators::{AgricultureMetrics, HealthMetrics, UrbanMetrics},
    index::{RiskLevel, Trend},
};

fn fixture() -> (UrbanMetrics, HealthMetrics, AgricultureMetrics) {
    let urban = UrbanMetrics {
        traffic_congestion: 40.0,
        air_quality_index: 90.0,
        energy_usage: 1000.0,
        noise_level: 60.0,
        public_transport_usage: 50.0,
    };
    let health = HealthMetrics {
        disease_incidence: 90.0,
        hospital_capacity: 70.0,
        emergency_load: 50.0,
        vaccination_rate: 80.0,
        avg_response_time: 8.0,
    };
    let agriculture = AgricultureMetrics {
        crop_yield_index: 75.0,
        food_supply_level: 90.0,
        price_index: 110.0,
        water_usage: 200.0,
        soil_health: 70.0,
    };
    (urban, health, agriculture)
}

#[test]
fn composite_weights_match_the_documented_formula() {
    let (urban, health, agriculture) = fixture();
    let index = calculate_city_health_index(&urban, &health, &agriculture);

    // urban: 60*0.3 + 70*0.4 + 50*0.3 = 61
    // health: 30*0.3 + 50*0.3 + 80*0.2 + 70*0.2 = 54
    // agriculture: 75*0.35 + 90*0.35 + 90*0.3 = 84.75
    // overall: 61*0.35 + 54*0.35 + 84.75*0.3 = 65.675
    assert_eq!(index.urban, 61);
    assert_eq!(index.health, 54);
    assert_eq!(index.agriculture, 85);
    assert_eq!(index.overall, 66);
    assert_eq!(index.risk_level, RiskLevel::Medium);
    assert_eq!(index.trend, Trend::Up);
}

#[test]
fn recomputation_yields_identical_output() {
    let (urban, health, agriculture) = fixture();
    assert_eq!(
        calculate_city_health_index(&urban, &health, &agriculture),
        calculate_city_health_index(&urban, &health, &agriculture)
    );
}

#[test]
fn risk_tiers_use_fixed_thresholds() {
    assert_eq!(RiskLevel::from_score(70.0), RiskLevel::Low);
    assert_eq!(RiskLevel::from_score(69.9), RiskLevel::Medium);
    assert_eq!(RiskLevel::from_score(55.0), RiskLevel::Medium);
    assert_eq!(RiskLevel::from_score(54.9), RiskLevel::High);
    assert_eq!(RiskLevel::from_score(40.0), RiskLevel::High);
    assert_eq!(RiskLevel::from_score(39.9), RiskLevel::Critical);
    assert_eq!(RiskLevel::from_score(0.0), RiskLevel::Critical);
}

#[test]
fn trend_follows_crop_yield_only() {
    let (urban, health, mut agriculture) = fixture();

    agriculture.crop_yield_index = 70.0; // strict threshold
    let index = calculate_city_health_index(&urban, &health, &agriculture);
    assert_eq!(index.trend, Trend::Stable);

    agriculture.crop_yield_index = 70.1;
    let index = calculate_city_health_index(&urban, &health, &agriculture);
    assert_eq!(index.trend, Trend::Up);
}

#[test]
fn aqi_contribution_saturates_above_three_hundred() {
    let (mut urban, health, agriculture) = fixture();

    urban.air_quality_index = 300.0;
    let at_cap = calculate_city_health_index(&urban, &health, &agriculture);
    urban.air_quality_index = 500.0;
    let beyond_cap = calculate_city_health_index(&urban, &health, &agriculture);

    assert_eq!(at_cap.urban, beyond_cap.urban);
    assert_eq!(at_cap.overall, beyond_cap.overall);
}
