use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    clock::{Clock, WallClock},
    generators::{
        generate_agriculture_metrics, generate_health_metrics, generate_urban_metrics,
        AgricultureMetrics, HealthMetrics, UrbanMetrics,
    },
    waveform::deterministic_value,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesData {
    pub timestamp: DateTime<Utc>,
    pub urban: UrbanMetrics,
    pub health: HealthMetrics,
    pub agriculture: AgricultureMetrics,
}

/// Backfill `points` hourly baseline snapshots ending at the clock's current
/// instant. Each point is evaluated at its own timestamp's hour, so the
/// series traces the diurnal curve rather than repeating the current value.
pub fn generate_time_series(
    lat: f64,
    lon: f64,
    points: usize,
    clock: &dyn Clock,
) -> Vec<TimeSeriesData> {
    let now = clock.now();
    let mut data = Vec::with_capacity(points);
    for i in (0..points).rev() {
        let timestamp = now - Duration::hours(i as i64);
        let at = WallClock::at(timestamp);
        data.push(TimeSeriesData {
            timestamp,
            urban: generate_urban_metrics(lat, lon, None, at),
            health: generate_health_metrics(lat, lon, None, at),
            agriculture: generate_agriculture_metrics(lat, lon, None, at),
        });
    }
    data
}

/// Append-only sample window trimmed to the most recent `capacity` entries.
#[derive(Debug)]
pub struct TimeSeriesBuffer {
    capacity: usize,
    samples: Vec<TimeSeriesData>,
}

impl TimeSeriesBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            samples: Vec::new(),
        }
    }

    pub fn push(&mut self, sample: TimeSeriesData) {
        self.samples.push(sample);
        if self.samples.len() > self.capacity {
            let excess = self.samples.len() - self.capacity;
            self.samples.drain(..excess);
        }
    }

    pub fn samples(&self) -> &[TimeSeriesData] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

const DISTRICTS: [&str; 8] = [
    "North",
    "South",
    "East",
    "West",
    "Central",
    "Industrial",
    "Residential",
    "Commercial",
];

const HOURS: [&str; 12] = [
    "00:00", "02:00", "04:00", "06:00", "08:00", "10:00", "12:00", "14:00", "16:00", "18:00",
    "20:00", "22:00",
];

/// A district-by-hour risk grid cell, 0-100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapCell {
    pub x: u32,
    pub y: u32,
    pub value: f64,
    pub label: String,
}

pub fn generate_heatmap(lat: f64, lon: f64, rows: u32, cols: u32, at: WallClock) -> Vec<HeatmapCell> {
    let mut cells = Vec::with_capacity((rows * cols) as usize);
    for y in 0..rows {
        for x in 0..cols {
            cells.push(HeatmapCell {
                x,
                y,
                value: deterministic_value(0.0, 100.0, lat, lon, (y * cols + x) as i64, at),
                label: format!(
                    "{} - {}",
                    DISTRICTS[y as usize % DISTRICTS.len()],
                    HOURS[x as usize % HOURS.len()]
                ),
            });
        }
    }
    cells
}
