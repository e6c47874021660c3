//! Simulation timing configuration with documented constants
//!
//! All tick-rate constants are collected here with explanations of how
//! they interact. Every "once per N" check in the engine compares the
//! elapsed tick counter via modulo against values derived from this
//! struct - exact multiples only, never "at least N elapsed".

use serde::{Deserialize, Serialize};

use crate::core::types::Tick;

/// Timing configuration for the pet simulation
///
/// These values set the relationship between frames and simulated time.
/// A pet stores a copy at construction, so two pets (or two tests) can
/// run at different rates in the same process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Frames per simulated second
    ///
    /// Low rates make minute/hour boundary checks coarser; the engine
    /// deliberately keeps the exact-multiple semantics even then.
    pub ticks_per_second: u32,

    /// Ticks in one simulated day
    ///
    /// Independent of `ticks_per_second` so a module can run compressed
    /// days (the handhelds age pets once per real day; tests age them in
    /// seconds).
    pub ticks_per_day: Tick,

    /// Ticks between animation frame advances
    ///
    /// Presentation only. Kept in the core because the frame cursor is
    /// part of the per-state bookkeeping reset by `set_state`.
    pub animation_frame_ticks: Tick,

    /// Per-state tick offset at which the pooping state completes and
    /// drops a poop
    pub poop_frame_offset: Tick,
}

impl SimConfig {
    /// Ticks in one simulated minute
    pub fn ticks_per_minute(&self) -> Tick {
        60 * self.ticks_per_second as Tick
    }

    /// Ticks in one simulated hour
    pub fn ticks_per_hour(&self) -> Tick {
        3600 * self.ticks_per_second as Tick
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.ticks_per_second == 0 {
            return Err("ticks_per_second must be positive".into());
        }
        if self.ticks_per_day == 0 {
            return Err("ticks_per_day must be positive".into());
        }
        if self.animation_frame_ticks == 0 {
            return Err("animation_frame_ticks must be positive".into());
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            ticks_per_second: 30,
            // 24h at 30 ticks/s
            ticks_per_day: 24 * 3600 * 30,
            animation_frame_ticks: 15,
            poop_frame_offset: 60,
        }
    }
}
