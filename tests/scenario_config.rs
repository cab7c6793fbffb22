use std::fs;

use tempfile::tempdir;
use urbannexus::scenario::{ScenarioError, ScenarioLoader};

fn repo_loader() -> ScenarioLoader {
    ScenarioLoader::new(env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn baseline_scenario_loads_with_zero_sliders() {
    let scenario = repo_loader()
        .load("scenarios/baseline.yaml")
        .expect("baseline scenario should load");
    assert_eq!(scenario.name, "baseline");
    assert_eq!(scenario.city.name, "New Delhi");
    assert_eq!(scenario.params.rainfall, 0.0);
    assert_eq!(scenario.params.temperature, 0.0);
    assert_eq!(scenario.refresh_secs, 10);
    assert_eq!(scenario.series_len, 24);
}

#[test]
fn heatwave_scenario_carries_its_sliders() {
    let scenario = repo_loader()
        .load("scenarios/heatwave.yaml")
        .expect("heatwave scenario should load");
    assert_eq!(scenario.params.temperature, 12.0);
    assert_eq!(scenario.params.energy_demand, 35.0);
    assert_eq!(scenario.params.rainfall, -30.0);
}

#[test]
fn omitted_cadence_fields_fall_back_to_defaults() {
    let dir = tempdir().expect("tempdir");
    fs::write(
        dir.path().join("minimal.yaml"),
        "name: minimal\ncity:\n  name: Test City\n  lat: 10.0\n  lon: 20.0\n",
    )
    .expect("write scenario");

    let scenario = ScenarioLoader::new(dir.path())
        .load("minimal.yaml")
        .expect("minimal scenario should load");
    assert_eq!(scenario.refresh_secs, 10);
    assert_eq!(scenario.series_len, 24);
    assert!(scenario.description.is_none());
}

#[test]
fn malformed_yaml_is_a_parse_error() {
    let dir = tempdir().expect("tempdir");
    fs::write(dir.path().join("broken.yaml"), "name: [unclosed").expect("write scenario");

    let err = ScenarioLoader::new(dir.path())
        .load("broken.yaml")
        .unwrap_err();
    assert!(matches!(err, ScenarioError::Parse(_)));
}

#[test]
fn out_of_range_sliders_are_a_validation_error() {
    let dir = tempdir().expect("tempdir");
    fs::write(
        dir.path().join("wild.yaml"),
        "name: wild\ncity:\n  name: Test City\n  lat: 10.0\n  lon: 20.0\nparams:\n  rainfall: 500\n",
    )
    .expect("write scenario");

    let err = ScenarioLoader::new(dir.path()).load("wild.yaml").unwrap_err();
    assert!(matches!(err, ScenarioError::Validation(_)));
}

#[test]
fn impossible_coordinates_are_rejected() {
    let dir = tempdir().expect("tempdir");
    fs::write(
        dir.path().join("offmap.yaml"),
        "name: offmap\ncity:\n  name: Test City\n  lat: 123.0\n  lon: 20.0\n",
    )
    .expect("write scenario");

    let err = ScenarioLoader::new(dir.path())
        .load("offmap.yaml")
        .unwrap_err();
    assert!(matches!(err, ScenarioError::Validation(_)));
}

#[test]
fn zero_refresh_cadence_is_rejected() {
    let dir = tempdir().expect("tempdir");
    fs::write(
        dir.path().join("frozen.yaml"),
        "name: frozen\ncity:\n  name: Test City\n  lat: 10.0\n  lon: 20.0\nrefresh_secs: 0\n",
    )
    .expect("write scenario");

    let err = ScenarioLoader::new(dir.path())
        .load("frozen.yaml")
        .unwrap_err();
    assert!(matches!(err, ScenarioError::Validation(_)));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = repo_loader().load("scenarios/does_not_exist.yaml").unwrap_err();
    assert!(matches!(err, ScenarioError::Io(_)));
}
