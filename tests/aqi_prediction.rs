use urbannexus::aqi::{
    analyze_history, aqi_from_pm25, aqi_from_pollutants, aqi_status, granular_aqi,
    predict_next_year_aqi, AqiHistoryPoint,
};

#[test]
fn pm25_band_edges_are_continuous() {
    assert_eq!(aqi_from_pm25(0.0), 0);
    assert_eq!(aqi_from_pm25(12.0), 50);
    assert_eq!(aqi_from_pm25(12.1), 51);
    assert_eq!(aqi_from_pm25(35.4), 100);
    assert_eq!(aqi_from_pm25(35.5), 101);
    assert_eq!(aqi_from_pm25(55.4), 150);
    assert_eq!(aqi_from_pm25(250.4), 300);
    assert_eq!(aqi_from_pm25(500.4), 500);
}

#[test]
fn pm25_saturates_outside_the_bands() {
    assert_eq!(aqi_from_pm25(600.0), 500);
    assert_eq!(aqi_from_pm25(-5.0), 0);
}

#[test]
fn secondary_pollutants_only_dominate_when_elevated() {
    // below the 50 thresholds, PM10 and NO2 are ignored
    assert_eq!(aqi_from_pollutants(30.0, 50.0, 50.0), 89);
    // PM10 sub-index: 400/425*300 = 282
    assert_eq!(aqi_from_pollutants(10.0, 400.0, 0.0), 282);
    // NO2 sub-index: 180/200*100 = 90
    assert_eq!(aqi_from_pollutants(0.0, 0.0, 180.0), 90);
    // everything elevated still caps at 500
    assert_eq!(aqi_from_pollutants(600.0, 600.0, 600.0), 500);
}

#[test]
fn status_banding_matches_the_epa_descriptors() {
    assert_eq!(aqi_status(45), "Good");
    assert_eq!(aqi_status(100), "Moderate");
    assert_eq!(aqi_status(160), "Unhealthy (Sensitive)");
    assert_eq!(aqi_status(200), "Unhealthy");
    assert_eq!(aqi_status(300), "Very Unhealthy");
    assert_eq!(aqi_status(350), "Hazardous");
}

#[test]
fn granular_index_weights_and_clamps() {
    assert_eq!(granular_aqi(20.0, 40.0, 30.0), 59);
    assert_eq!(granular_aqi(0.0, 0.0, 0.0), 10);
    assert_eq!(granular_aqi(400.0, 0.0, 0.0), 500);
}

fn series(aqis: &[u16]) -> Vec<AqiHistoryPoint> {
    aqis.iter()
        .enumerate()
        .map(|(i, &aqi)| AqiHistoryPoint {
            year: 2021 + i as i32,
            aqi,
        })
        .collect()
}

#[test]
fn short_series_fall_back_safely() {
    assert_eq!(predict_next_year_aqi(&[]), 50);
    assert_eq!(
        predict_next_year_aqi(&[AqiHistoryPoint { year: 2021, aqi: 40 }]),
        40
    );
}

#[test]
fn exactly_linear_series_extrapolates_the_slope() {
    assert_eq!(predict_next_year_aqi(&series(&[40, 44, 48, 52, 56])), 60);
}

#[test]
fn noisy_series_uses_the_least_squares_fit() {
    // slope 3.8, intercept 50 -> index 5 predicts 69
    assert_eq!(predict_next_year_aqi(&series(&[50, 54, 57, 62, 65])), 69);
}

#[test]
fn declining_series_floors_at_ten() {
    assert_eq!(predict_next_year_aqi(&series(&[30, 20, 10])), 10);
}

#[test]
fn analysis_classifies_the_five_year_trend() {
    let worsening = analyze_history("Delhi", &series(&[40, 44, 48, 52, 56])).unwrap();
    assert_eq!(worsening.predicted_year, 2026);
    assert_eq!(worsening.predicted_aqi, 60);
    assert!(worsening.analysis.contains("worsened"));

    let improving = analyze_history("Oslo", &series(&[100, 90, 80, 70, 60])).unwrap();
    assert!(improving.analysis.contains("improved"));

    let stable = analyze_history("Lyon", &series(&[50, 51])).unwrap();
    assert!(stable.analysis.contains("stable"));

    assert!(analyze_history("Nowhere", &[]).is_none());
}
