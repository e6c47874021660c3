//! Sleep windows, wake-ups and disturbed sleep
//!
//! The sleep window comes from the species record unless the module sets
//! a global override. Waking happens on the exact configured minute; DP
//! only restores when the nap ran at least the configured number of
//! hours. Feeding a napping pet wakes it, counts a disturbance, and arms
//! a fall-back-asleep timer.

use crate::core::clock::Clock;
use crate::core::types::{Hhmm, PetState};
use crate::pet::events::PetEvent;
use crate::pet::pet::Pet;

impl Pet {
    /// The active sleep window, if any
    pub fn sleep_window(&self) -> Option<(Hhmm, Hhmm)> {
        let config = &self.module.config;
        if let (Some(sleeps), Some(wakes)) = (config.sleeps_override, config.wakes_override) {
            return Some((sleeps, wakes));
        }
        match (self.species.sleeps, self.species.wakes) {
            (Some(sleeps), Some(wakes)) => Some((sleeps, wakes)),
            _ => None,
        }
    }

    /// Whether the current time of day falls inside the sleep window
    pub fn should_sleep(&self, clock: &dyn Clock) -> bool {
        match self.sleep_window() {
            Some((sleeps, wakes)) => clock.now_hhmm().in_window(sleeps, wakes),
            None => false,
        }
    }

    /// Put the pet down for the night (the lights-out action)
    pub fn nap(&mut self, clock: &dyn Clock) -> bool {
        if !self.should_sleep(clock) {
            return false;
        }
        self.set_state(PetState::Nap, false)
    }

    /// Wake on the exact configured minute
    ///
    /// Runs every tick while napping; the equality check means the wake
    /// fires throughout that one minute, but the first tick already
    /// leaves the nap state.
    pub(crate) fn check_wake_up(&mut self, clock: &dyn Clock, events: &mut Vec<PetEvent>) {
        let Some((_, wakes)) = self.sleep_window() else {
            return;
        };
        if clock.now_hhmm() != wakes {
            return;
        }
        let required = self.module.config.sleep_recovery_hours as u64 * self.sim.ticks_per_hour();
        let restored = self.sleep_ticks >= required;
        if restored {
            self.dp = self.species.max_dp;
        }
        self.set_state(PetState::Idle, false);
        tracing::debug!(name = %self.species.name, restored, "woke up");
        events.push(PetEvent::WokeUp {
            restored_dp: restored,
        });
    }

    /// Interrupt a nap (called when the pet is fed while asleep)
    pub(crate) fn check_disturbed_sleep(&mut self, events: &mut Vec<PetEvent>) {
        if self.state != PetState::Nap {
            return;
        }
        self.set_state(PetState::Idle, false);
        self.sleep_disturbances += 1;
        if self.disturbance_penalty < self.module.config.disturbance_penalty_max {
            self.disturbance_penalty += 1;
        }
        self.back_to_sleep_in = Some(self.module.config.back_to_sleep_minutes);
        events.push(PetEvent::SleepDisturbed);
    }

    /// Count down the fall-back-asleep timer
    pub(crate) fn update_back_to_sleep(&mut self, clock: &dyn Clock, events: &mut Vec<PetEvent>) {
        let Some(left) = self.back_to_sleep_in else {
            return;
        };
        if left > 1 {
            self.back_to_sleep_in = Some(left - 1);
            return;
        }
        self.back_to_sleep_in = None;
        // the window may have ended while the pet was up
        if self.should_sleep(clock) && self.set_state(PetState::Nap, false) {
            events.push(PetEvent::FellAsleep);
        }
    }
}
