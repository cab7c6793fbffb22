use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const RAINFALL_RANGE: (f64, f64) = (-50.0, 100.0);
pub const TEMPERATURE_RANGE: (f64, f64) = (-10.0, 15.0);
pub const POPULATION_DENSITY_RANGE: (f64, f64) = (-20.0, 50.0);
pub const FOOD_SUPPLY_SHOCK_RANGE: (f64, f64) = (-50.0, 0.0);
pub const ENERGY_DEMAND_RANGE: (f64, f64) = (-30.0, 50.0);

/// Hypothetical environmental shocks applied uniformly to every generator.
/// Each field is a delta against today's conditions; all-zero means the pure
/// simulated baseline. Values never mutate in place: an update merges a
/// [`ScenarioPatch`] into a fresh copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioParams {
    /// Rainfall change in percent, -50 to +100.
    #[serde(default)]
    pub rainfall: f64,
    /// Temperature change in degrees, -10 to +15.
    #[serde(default)]
    pub temperature: f64,
    /// Population density change in percent, -20 to +50.
    #[serde(default)]
    pub population_density: f64,
    /// Food supply change in percent, -50 to 0.
    #[serde(default)]
    pub food_supply_shock: f64,
    /// Energy demand change in percent, -30 to +50.
    #[serde(default)]
    pub energy_demand: f64,
}

/// Partial update for [`ScenarioParams`]; omitted fields keep their value.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ScenarioPatch {
    pub rainfall: Option<f64>,
    pub temperature: Option<f64>,
    pub population_density: Option<f64>,
    pub food_supply_shock: Option<f64>,
    pub energy_demand: Option<f64>,
}

impl ScenarioParams {
    pub fn merged(&self, patch: &ScenarioPatch) -> Self {
        Self {
            rainfall: patch.rainfall.unwrap_or(self.rainfall),
            temperature: patch.temperature.unwrap_or(self.temperature),
            population_density: patch.population_density.unwrap_or(self.population_density),
            food_supply_shock: patch.food_supply_shock.unwrap_or(self.food_supply_shock),
            energy_demand: patch.energy_demand.unwrap_or(self.energy_demand),
        }
    }

    pub fn validate(&self) -> Result<(), ScenarioError> {
        check_range("rainfall", self.rainfall, RAINFALL_RANGE)?;
        check_range("temperature", self.temperature, TEMPERATURE_RANGE)?;
        check_range(
            "population_density",
            self.population_density,
            POPULATION_DENSITY_RANGE,
        )?;
        check_range(
            "food_supply_shock",
            self.food_supply_shock,
            FOOD_SUPPLY_SHOCK_RANGE,
        )?;
        check_range("energy_demand", self.energy_demand, ENERGY_DEMAND_RANGE)?;
        Ok(())
    }
}

fn check_range(field: &str, value: f64, (min, max): (f64, f64)) -> Result<(), ScenarioError> {
    if !value.is_finite() || value < min || value > max {
        return Err(ScenarioError::Validation(format!(
            "{field} must lie in [{min}, {max}], got {value}"
        )));
    }
    Ok(())
}

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("scenario parse error: {0}")]
    Parse(String),
    #[error("scenario validation error: {0}")]
    Validation(String),
}

fn default_refresh_secs() -> u64 {
    10
}

fn default_series_len() -> usize {
    24
}

/// A named scenario file: the city under observation plus the slider values
/// and sampling cadence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityScenario {
    pub name: String,
    pub description: Option<String>,
    pub city: CityConfig,
    #[serde(default)]
    pub params: ScenarioParams,
    #[serde(default = "default_refresh_secs")]
    pub refresh_secs: u64,
    #[serde(default = "default_series_len")]
    pub series_len: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityConfig {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

impl CityScenario {
    pub fn validate(&self) -> Result<(), ScenarioError> {
        if self.name.is_empty() {
            return Err(ScenarioError::Validation(
                "scenario must define a name".into(),
            ));
        }
        if !(-90.0..=90.0).contains(&self.city.lat) {
            return Err(ScenarioError::Validation(format!(
                "latitude {} outside [-90, 90]",
                self.city.lat
            )));
        }
        if !(-180.0..=180.0).contains(&self.city.lon) {
            return Err(ScenarioError::Validation(format!(
                "longitude {} outside [-180, 180]",
                self.city.lon
            )));
        }
        if self.refresh_secs == 0 {
            return Err(ScenarioError::Validation(
                "refresh_secs must be at least 1".into(),
            ));
        }
        self.params.validate()
    }
}

pub struct ScenarioLoader {
    base_dir: PathBuf,
}

impl ScenarioLoader {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn load(&self, file: impl AsRef<Path>) -> Result<CityScenario, ScenarioError> {
        let path = self.base_dir.join(file);
        let data = fs::read_to_string(&path)?;
        let scenario: CityScenario = serde_yaml::from_str(&data)
            .map_err(|err| ScenarioError::Parse(format!("{}: {err}", path.display())))?;
        scenario.validate()?;
        Ok(scenario)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_merge_replaces_only_named_fields() {
        let base = ScenarioParams {
            temperature: 4.0,
            ..ScenarioParams::default()
        };
        let patch = ScenarioPatch {
            rainfall: Some(25.0),
            ..ScenarioPatch::default()
        };
        let merged = base.merged(&patch);
        assert_eq!(merged.rainfall, 25.0);
        assert_eq!(merged.temperature, 4.0);
        // the original is untouched
        assert_eq!(base.rainfall, 0.0);
    }

    #[test]
    fn out_of_range_sliders_are_rejected() {
        let params = ScenarioParams {
            rainfall: 150.0,
            ..ScenarioParams::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ScenarioError::Validation(_))
        ));

        let boundary = ScenarioParams {
            rainfall: -50.0,
            food_supply_shock: 0.0,
            ..ScenarioParams::default()
        };
        assert!(boundary.validate().is_ok());
    }
}
