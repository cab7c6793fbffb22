//! EPA-style AQI conversion and the short-series projection behind the
//! "next year" pollution forecast.

use serde::{Deserialize, Serialize};

/// US-EPA PM2.5 breakpoint bands: (conc_low, conc_high, aqi_low, aqi_high).
const PM25_BANDS: [(f64, f64, f64, f64); 6] = [
    (0.0, 12.0, 0.0, 50.0),
    (12.1, 35.4, 51.0, 100.0),
    (35.5, 55.4, 101.0, 150.0),
    (55.5, 150.4, 151.0, 200.0),
    (150.5, 250.4, 201.0, 300.0),
    (250.5, 500.4, 301.0, 500.0),
];

fn pm25_sub_index(pm25: f64) -> f64 {
    if pm25 <= 0.0 {
        return 0.0;
    }
    for &(conc_low, conc_high, aqi_low, aqi_high) in &PM25_BANDS {
        if pm25 <= conc_high {
            let aqi = (aqi_high - aqi_low) / (conc_high - conc_low) * (pm25 - conc_low) + aqi_low;
            return aqi.clamp(0.0, 500.0);
        }
    }
    500.0
}

/// Piecewise-linear PM2.5 to AQI mapping. Saturates at 500 above the top
/// band; negative concentrations map to 0.
pub fn aqi_from_pm25(pm25: f64) -> u16 {
    pm25_sub_index(pm25).round() as u16
}

/// Multi-pollutant AQI: the maximum of the PM2.5 breakpoint index, a PM10
/// sub-index scaled against a 425 ceiling (300 cap, only when PM10 > 50),
/// and an NO2 sub-index scaled against a 200 reference (100 cap, only when
/// NO2 > 50). This dominates the single-pollutant form wherever both apply.
pub fn aqi_from_pollutants(pm25: f64, pm10: f64, no2: f64) -> u16 {
    let mut aqi = pm25_sub_index(pm25);

    if pm10 > 50.0 {
        let pm10_aqi = if pm10 > 425.0 {
            300.0
        } else {
            pm10 / 425.0 * 300.0
        };
        aqi = aqi.max(pm10_aqi);
    }

    if no2 > 50.0 {
        aqi = aqi.max(no2 / 200.0 * 100.0);
    }

    aqi.min(500.0).round() as u16
}

pub fn aqi_status(aqi: u16) -> &'static str {
    match aqi {
        0..=50 => "Good",
        51..=100 => "Moderate",
        101..=150 => "Unhealthy (Sensitive)",
        151..=200 => "Unhealthy",
        201..=300 => "Very Unhealthy",
        _ => "Hazardous",
    }
}

/// Coarse combined pollutant index used when turning raw component readings
/// into yearly history points: PM2.5 weighted heaviest, clamped to [10, 500].
pub fn granular_aqi(pm25: f64, pm10: f64, no2: f64) -> u16 {
    (pm25 * 1.5 + pm10 * 0.5 + no2 * 0.3).round().clamp(10.0, 500.0) as u16
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AqiHistoryPoint {
    pub year: i32,
    pub aqi: u16,
}

/// Ordinary least-squares projection one step past the sampled series.
///
/// X values are the 0-based sample indices, not calendar years, so the fit is
/// insensitive to gaps in the year column. The result is floored at 10. With
/// fewer than two points there is nothing to fit: the single point's AQI (or
/// 50) comes back unchanged.
pub fn predict_next_year_aqi(points: &[AqiHistoryPoint]) -> u16 {
    let n = points.len();
    if n < 2 {
        return points.first().map_or(50, |p| p.aqi);
    }

    let n_f = n as f64;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_xx = 0.0;
    for (i, point) in points.iter().enumerate() {
        let x = i as f64;
        let y = point.aqi as f64;
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_xx += x * x;
    }

    let slope = (n_f * sum_xy - sum_x * sum_y) / (n_f * sum_xx - sum_x * sum_x);
    let intercept = (sum_y - slope * sum_x) / n_f;
    let prediction = slope * n_f + intercept;

    prediction.round().max(10.0) as u16
}

#[derive(Debug, Clone, Serialize)]
pub struct PredictiveAnalysis {
    pub data: Vec<AqiHistoryPoint>,
    pub predicted_year: i32,
    pub predicted_aqi: u16,
    pub analysis: String,
}

/// Regression projection plus a narrative summary of the sampled years.
/// Returns `None` for an empty series.
pub fn analyze_history(city: &str, history: &[AqiHistoryPoint]) -> Option<PredictiveAnalysis> {
    let first = history.first()?;
    let last = history.last()?;
    let predicted_aqi = predict_next_year_aqi(history);
    let predicted_year = last.year + 1;

    let change = last.aqi as f64 - first.aqi as f64;
    let percent_change = (change / first.aqi as f64 * 100.0).round() as i64;

    let analysis = if percent_change > 5 {
        format!(
            "Air pollution around {city} has worsened by {percent_change}% across the sampled \
             years. The regression projects the trend continuing, with AQI reaching \
             {predicted_aqi} in {predicted_year} if current urban growth patterns persist."
        )
    } else if percent_change < -5 {
        format!(
            "Air quality around {city} has improved by {}% across the sampled years. The \
             projection suggests a continued decline to {predicted_aqi} in {predicted_year}.",
            percent_change.abs()
        )
    } else {
        format!(
            "Air quality around {city} has remained stable across the sampled years. The \
             regression predicts a neutral trend, with a forecast AQI of {predicted_aqi} for \
             {predicted_year}."
        )
    };

    Some(PredictiveAnalysis {
        data: history.to_vec(),
        predicted_year,
        predicted_aqi,
        analysis,
    })
}
