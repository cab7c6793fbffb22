pub mod aqi;
pub mod clock;
pub mod flood;
pub mod generators;
pub mod index;
pub mod providers;
pub mod sampler;
pub mod scenario;
pub mod timeseries;
pub mod waveform;
pub mod web;

pub use clock::{Clock, FixedClock, SystemClock, WallClock};
pub use index::{calculate_city_health_index, CityHealthIndex};
pub use sampler::{CityFrame, CityLocation, CitySampler};
pub use scenario::ScenarioParams;
