//! G-Cell meter: a bounded point accumulator with derived tiers
//!
//! Points live in [0, 472], split into four 118-point bands. The first
//! three bands read back as blue/yellow/red sub-counts; the band index
//! is the meter level. Training, battles and care mistakes move the
//! meter through module-configured deltas.

use serde::{Deserialize, Serialize};

pub const GCELL_MAX: u32 = 472;
const BAND: u32 = 118;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GcellMeter {
    points: u32,
}

impl GcellMeter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    /// Apply a delta, clamping to [0, 472]; returns the change actually
    /// applied (so `add_points(-500)` from 100 returns -100)
    pub fn add_points(&mut self, delta: i32) -> i32 {
        let before = self.points as i64;
        let after = (before + delta as i64).clamp(0, GCELL_MAX as i64);
        self.points = after as u32;
        (after - before) as i32
    }

    /// Meter tier, 0..=3
    pub fn level(&self) -> u32 {
        (self.points / BAND).min(3)
    }

    /// Fill of the first band
    pub fn blue(&self) -> u32 {
        self.points.min(BAND)
    }

    /// Fill of the second band
    pub fn yellow(&self) -> u32 {
        self.points.saturating_sub(BAND).min(BAND)
    }

    /// Fill of the third band
    pub fn red(&self) -> u32 {
        self.points.saturating_sub(2 * BAND).min(BAND)
    }
}
