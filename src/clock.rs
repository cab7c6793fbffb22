use chrono::{DateTime, Timelike, Utc};

/// Hour/minute pair feeding the deterministic waveform. Every generator call
/// in a refresh cycle must receive the same sample so the produced metrics
/// describe one moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallClock {
    pub hour: u32,
    pub minute: u32,
}

impl WallClock {
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self {
            hour: instant.hour(),
            minute: instant.minute(),
        }
    }
}

/// Wall-clock capability injected into the sampler so tests can pin time
/// instead of monkeypatching the system clock.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    fn sample(&self) -> WallClock {
        WallClock::at(self.now())
    }
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to a single instant.
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn fixed_clock_pins_the_sample() {
        let instant = Utc.with_ymd_and_hms(2025, 6, 15, 14, 37, 0).unwrap();
        let clock = FixedClock(instant);
        assert_eq!(clock.sample(), WallClock { hour: 14, minute: 37 });
        assert_eq!(clock.sample(), clock.sample());
    }
}
