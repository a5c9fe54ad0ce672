//! Delivery throttle gate — minimum interval between deliveries
//!
//! `admit` only checks; `record` is called separately, after the
//! downstream dispatch succeeds, so a failed dispatch never consumes
//! the window.

use chrono::{DateTime, Duration, Utc};

/// Minimum-interval admission control.
#[derive(Debug)]
pub struct ThrottleGate {
    last_delivery: Option<DateTime<Utc>>,
    min_interval: Duration,
}

impl ThrottleGate {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            last_delivery: None,
            min_interval,
        }
    }

    /// Whether a delivery attempt at `now` is inside the allowed window.
    /// Always admits when nothing has been delivered yet.
    pub fn admit(&self, now: DateTime<Utc>) -> bool {
        match self.last_delivery {
            None => true,
            Some(last) => now.signed_duration_since(last) >= self.min_interval,
        }
    }

    /// Mark a successful delivery at `now`.
    pub fn record(&mut self, now: DateTime<Utc>) {
        self.last_delivery = Some(now);
    }

    pub fn last_delivery(&self) -> Option<DateTime<Utc>> {
        self.last_delivery
    }
}
