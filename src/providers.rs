//! Ordered fallback over redundant data sources.
//!
//! Live providers for the same capability (weather, traffic, AI narration)
//! are tried in sequence; the chain ends in an infallible deterministic
//! source so a frame can always be assembled. No retry, no backoff, no
//! persisted circuit state.

use anyhow::Result;

use crate::flood::CurrentConditions;

/// A named source of externally observed data. Implementations typically
/// wrap an HTTP fetcher owned by the caller; this crate only ships the
/// deterministic fallback.
pub trait DataSource<T>: Send + Sync {
    fn name(&self) -> &str;
    fn fetch(&self) -> Result<T>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Resolved<T> {
    pub value: T,
    /// Name of the source that answered.
    pub source: String,
}

pub struct FallbackChain<T> {
    sources: Vec<Box<dyn DataSource<T>>>,
    fallback_name: &'static str,
    fallback: Box<dyn Fn() -> T + Send + Sync>,
}

impl<T> FallbackChain<T> {
    pub fn new(fallback_name: &'static str, fallback: impl Fn() -> T + Send + Sync + 'static) -> Self {
        Self {
            sources: Vec::new(),
            fallback_name,
            fallback: Box::new(fallback),
        }
    }

    pub fn with_source(mut self, source: impl DataSource<T> + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// First source that answers wins; the deterministic fallback makes the
    /// resolution total.
    pub fn resolve(&self) -> Resolved<T> {
        for source in &self.sources {
            match source.fetch() {
                Ok(value) => {
                    return Resolved {
                        value,
                        source: source.name().to_string(),
                    }
                }
                Err(err) => {
                    eprintln!("[providers] {} unavailable: {err}", source.name());
                }
            }
        }
        Resolved {
            value: (self.fallback)(),
            source: self.fallback_name.to_string(),
        }
    }
}

/// Deterministic stand-in for a live weather source: a coarse location hash
/// spreads cities across plausible humidity/pressure/cloud readings.
pub fn simulated_conditions(lat: f64, lon: f64) -> CurrentConditions {
    let hash = (((lat * 100.0).floor() as i64) + ((lon * 100.0).floor() as i64)).abs();
    CurrentConditions {
        humidity: (45 + hash % 30) as f64,
        pressure: (1010 + hash % 10) as f64,
        clouds: (hash % 100) as f64,
        description: "atmospheric data offline".to_string(),
        forecast_pop: 0.0,
    }
}
