//! Wall-clock seam for sleep/wake windows and time-gated evolutions
//!
//! The engine reads "now" only as a time of day; both reads are pure and
//! re-entrant. Tests pin the clock with `FixedClock`.

use chrono::NaiveTime;
use std::cell::Cell;

use crate::core::types::Hhmm;

/// Source of wall-clock time of day
pub trait Clock {
    fn now(&self) -> NaiveTime;

    /// Current time rounded to minute resolution
    fn now_hhmm(&self) -> Hhmm {
        Hhmm::from(self.now())
    }
}

/// Real local time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveTime {
        chrono::Local::now().time()
    }
}

/// A settable clock for tests and headless runs
#[derive(Debug)]
pub struct FixedClock {
    time: Cell<NaiveTime>,
}

impl FixedClock {
    pub fn new(time: NaiveTime) -> Self {
        Self {
            time: Cell::new(time),
        }
    }

    /// Build from hour/minute, panicking only on out-of-range test input
    pub fn at(hour: u32, minute: u32) -> Self {
        Self::new(NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default())
    }

    pub fn set(&self, time: NaiveTime) {
        self.time.set(time);
    }

    pub fn set_hm(&self, hour: u32, minute: u32) {
        if let Some(t) = NaiveTime::from_hms_opt(hour, minute, 0) {
            self.time.set(t);
        }
    }

    /// Advance by whole minutes, wrapping at midnight
    pub fn advance_minutes(&self, minutes: i64) {
        let next = self.time.get() + chrono::Duration::minutes(minutes);
        self.time.set(next);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveTime {
        self.time.get()
    }
}
