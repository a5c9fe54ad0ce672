//! Time seam — wall clock and local hour behind a trait
//!
//! Throttle math and hour-of-day rules both read time through this seam
//! so tests can pin or step it without sleeping.

use chrono::{DateTime, Local, Timelike, Utc};

/// Source of "now" for the engine.
pub trait Clock: Send + Sync {
    /// Current instant, used for throttle math and outcome timestamps.
    fn now(&self) -> DateTime<Utc>;

    /// Current local hour of day, 0–23, used for hour-range rules.
    fn local_hour(&self) -> u32;
}

/// The real system clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn local_hour(&self) -> u32 {
        Local::now().hour()
    }
}
