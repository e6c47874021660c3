//! State machine transitions
//!
//! Single entry point for every state change. Dead is absorbing; an egg
//! only ever shows idle or hatch. Each accepted transition resets the
//! animation cursor and the per-state tick counter.

use crate::core::types::PetState;
use crate::pet::pet::Pet;

impl Pet {
    /// Request a state transition; returns whether it was accepted
    ///
    /// Without `force`, re-requesting the current state is ignored so the
    /// animation cursor keeps running; `force` resets it anyway.
    pub fn set_state(&mut self, state: PetState, force: bool) -> bool {
        if self.state == PetState::Dead {
            return false;
        }
        if self.species.stage == 0 && !matches!(state, PetState::Idle | PetState::Hatch) {
            return false;
        }
        if self.state == state && !force {
            return false;
        }

        let from = self.state;

        if from == PetState::Nap && state != PetState::Nap {
            // leaving the nap clears the sleep-start bookkeeping
            self.sleep_ticks = 0;
        }
        if state == PetState::Nap {
            self.sleep_ticks = 0;
            // entering the nap cancels any pending fall-back-asleep timer
            self.back_to_sleep_in = None;
        }

        self.state = state;
        self.anim_frame = 0;
        self.anim_ticks = 0;
        self.state_ticks = 0;

        tracing::debug!(name = %self.species.name, ?from, to = ?state, "state transition");
        true
    }
}
