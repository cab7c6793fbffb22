use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    clock::Clock,
    flood::{calculate_flood_risk, CurrentConditions, FloodRisk, WeatherObservation},
    generators::{
        generate_agriculture_metrics, generate_health_metrics, generate_urban_metrics,
        AgricultureMetrics, HealthMetrics, UrbanMetrics,
    },
    index::{calculate_city_health_index, CityHealthIndex},
    providers::{simulated_conditions, DataSource, FallbackChain},
    scenario::{ScenarioError, ScenarioParams, ScenarioPatch},
    timeseries::{generate_heatmap, HeatmapCell, TimeSeriesData},
};

pub const HEATMAP_ROWS: u32 = 8;
pub const HEATMAP_COLS: u32 = 12;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityLocation {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

/// One complete refresh: every metric family, the composite index, the flood
/// estimate, and the risk grid, all sampled at a single wall-clock instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityFrame {
    pub city: CityLocation,
    pub timestamp: DateTime<Utc>,
    pub scenario: ScenarioParams,
    pub urban: UrbanMetrics,
    pub health: HealthMetrics,
    pub agriculture: AgricultureMetrics,
    pub index: CityHealthIndex,
    pub flood: FloodRisk,
    /// Which source answered for current conditions.
    pub conditions_source: String,
    pub heatmap: Vec<HeatmapCell>,
}

/// Owns the (city, scenario, clock) triple and assembles frames from it.
/// Live data sources can be chained in front of the simulated fallback;
/// the flood history store is optional.
pub struct CitySampler {
    city: CityLocation,
    scenario: ScenarioParams,
    clock: Box<dyn Clock>,
    history: Vec<WeatherObservation>,
    conditions: FallbackChain<CurrentConditions>,
}

impl CitySampler {
    pub fn new(city: CityLocation, clock: Box<dyn Clock>) -> Self {
        let (lat, lon) = (city.lat, city.lon);
        Self {
            city,
            scenario: ScenarioParams::default(),
            clock,
            history: Vec::new(),
            conditions: FallbackChain::new("simulated", move || simulated_conditions(lat, lon)),
        }
    }

    pub fn with_scenario(mut self, scenario: ScenarioParams) -> Self {
        self.scenario = scenario;
        self
    }

    pub fn with_conditions_source(
        mut self,
        source: impl DataSource<CurrentConditions> + 'static,
    ) -> Self {
        self.conditions = self.conditions.with_source(source);
        self
    }

    pub fn city(&self) -> &CityLocation {
        &self.city
    }

    pub fn scenario(&self) -> ScenarioParams {
        self.scenario
    }

    pub fn set_scenario(&mut self, scenario: ScenarioParams) -> Result<(), ScenarioError> {
        scenario.validate()?;
        self.scenario = scenario;
        Ok(())
    }

    /// Merge a partial slider update into a fresh scenario. The current
    /// scenario is replaced only if the merged result validates.
    pub fn apply_patch(&mut self, patch: &ScenarioPatch) -> Result<ScenarioParams, ScenarioError> {
        let merged = self.scenario.merged(patch);
        merged.validate()?;
        self.scenario = merged;
        Ok(merged)
    }

    pub fn reset_scenario(&mut self) {
        self.scenario = ScenarioParams::default();
    }

    /// Replace the recent daily observations backing the flood estimate.
    pub fn set_history(&mut self, history: Vec<WeatherObservation>) {
        self.history = history;
    }

    pub fn frame(&self) -> CityFrame {
        let timestamp = self.clock.now();
        let at = crate::clock::WallClock::at(timestamp);
        let (lat, lon) = (self.city.lat, self.city.lon);
        let scenario = Some(&self.scenario);

        let urban = generate_urban_metrics(lat, lon, scenario, at);
        let health = generate_health_metrics(lat, lon, scenario, at);
        let agriculture = generate_agriculture_metrics(lat, lon, scenario, at);
        let index = calculate_city_health_index(&urban, &health, &agriculture);

        let conditions = self.conditions.resolve();
        let flood = calculate_flood_risk(
            &self.history,
            self.scenario.rainfall,
            Some(&conditions.value),
        );

        CityFrame {
            city: self.city.clone(),
            timestamp,
            scenario: self.scenario,
            urban,
            health,
            agriculture,
            index,
            flood,
            conditions_source: conditions.source,
            heatmap: generate_heatmap(lat, lon, HEATMAP_ROWS, HEATMAP_COLS, at),
        }
    }

    /// Project a frame into a time-series sample for the rolling window.
    pub fn series_point(frame: &CityFrame) -> TimeSeriesData {
        TimeSeriesData {
            timestamp: frame.timestamp,
            urban: frame.urban,
            health: frame.health,
            agriculture: frame.agriculture,
        }
    }
}
