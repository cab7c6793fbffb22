//! Flood risk estimator blending the precipitation forecast, recent ground
//! saturation, and current atmospheric readings into a 0-100 score.

use serde::{Deserialize, Serialize};

/// One daily observation from the history store. The store is optional;
/// an empty slice still yields a (lower-confidence) estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherObservation {
    pub temp: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub description: String,
    /// Daily precipitation in mm, when the provider reports it.
    #[serde(default)]
    pub prcp: Option<f64>,
}

/// Current atmospheric readings from whichever weather source resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub humidity: f64,
    /// hPa.
    pub pressure: f64,
    /// Cloud cover percentage.
    pub clouds: f64,
    pub description: String,
    /// Probability of precipitation from the forecast, 0.0 to 1.0.
    pub forecast_pop: f64,
}

impl Default for CurrentConditions {
    fn default() -> Self {
        Self {
            humidity: 50.0,
            pressure: 1013.0,
            clouds: 0.0,
            description: String::new(),
            forecast_pop: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FloodLevel {
    Low,
    Moderate,
    High,
    Critical,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloodRisk {
    /// 0-100.
    pub probability: u8,
    pub level: FloodLevel,
    pub message: String,
}

/// Heavy accumulation over the last days lowers the ground's absorption
/// capacity, so the same forecast reads as a higher risk.
fn saturation_multiplier(historical_rainfall: f64) -> f64 {
    if historical_rainfall > 50.0 {
        1.5
    } else if historical_rainfall > 20.0 {
        1.2
    } else {
        1.0
    }
}

pub fn calculate_flood_risk(
    history: &[WeatherObservation],
    scenario_rainfall_pct: f64,
    current: Option<&CurrentConditions>,
) -> FloodRisk {
    let historical_rainfall: f64 = history.iter().map(|p| p.prcp.unwrap_or(0.0)).sum();
    let multiplier = saturation_multiplier(historical_rainfall);
    let saturated = historical_rainfall > 30.0;

    let fallback = CurrentConditions::default();
    let current = current.unwrap_or(&fallback);
    let description = current.description.to_lowercase();
    let raining = description.contains("rain") || description.contains("drizzle");
    let stormy = description.contains("storm") || description.contains("thunder");

    let mut risk = current.forecast_pop * 100.0 * multiplier;
    if raining {
        risk = risk.max(40.0 * multiplier);
    }
    if stormy {
        risk = risk.max(75.0 * multiplier);
    }
    if current.pressure < 1005.0 {
        risk += 15.0;
    }
    if saturated {
        risk += 20.0;
    }
    risk += scenario_rainfall_pct * 0.4;

    let probability = risk.round().clamp(0.0, 100.0) as u8;

    let message = if saturated {
        format!(
            "Ground saturated after {historical_rainfall:.1}mm over the last five days; \
             absorption capacity is limited."
        )
    } else if stormy {
        "Severe convection patterns detected; drainage overload likely.".to_string()
    } else if raining {
        "Active precipitation confirmed; runoff accumulating.".to_string()
    } else if current.forecast_pop > 0.6 {
        "Forecast predicts incoming heavy rain.".to_string()
    } else if current.pressure < 1008.0 {
        "Low pressure trough detected; conditions may deteriorate.".to_string()
    } else {
        "Regional drainage systems operating within nominal capacity.".to_string()
    };

    let level = if probability > 80 {
        FloodLevel::Critical
    } else if probability > 50 {
        FloodLevel::High
    } else if probability > 25 {
        FloodLevel::Moderate
    } else {
        FloodLevel::Low
    };

    FloodRisk {
        probability,
        level,
        message,
    }
}
