//! Needs decay and the care-mistake supervisor
//!
//! Runs inside the once-per-minute block. Hunger and strength drop on
//! their species-specific intervals; four independent neglect timers feed
//! mistakes and the death check. The hunger/strength mistake fires on
//! exact equality with the threshold and the timer keeps counting, so a
//! continuous neglect episode registers exactly one mistake. The sleep
//! timer resets after its mistake and can fire repeatedly.

use crate::core::clock::Clock;
use crate::core::types::{CareMistakeKind, PetState};
use crate::pet::events::PetEvent;
use crate::pet::pet::{Pet, MAX_STRENGTH, MAX_VITAL};

impl Pet {
    /// Once-per-minute needs decay
    pub(crate) fn update_needs(&mut self) {
        if self.overfeed_timer > 0 {
            self.overfeed_timer -= 1;
        }

        let minutes = self.minutes_elapsed();

        let hunger_loss = self.species.hunger_loss_minutes as u64;
        if hunger_loss > 0 && minutes % hunger_loss == 0 && self.overfeed_timer == 0 {
            if self.hunger > 0 {
                self.hunger -= 1;
            } else {
                self.starvation_count += 1;
            }
        }

        self.strength = self.strength.min(MAX_STRENGTH);
        let strength_loss = self.species.strength_loss_minutes as u64;
        if strength_loss > 0 && minutes % strength_loss == 0 && self.strength > 0 {
            self.strength -= 1;
        }
    }

    /// Once-per-minute neglect timer accumulation
    pub(crate) fn update_care_mistakes(&mut self, clock: &dyn Clock, events: &mut Vec<PetEvent>) {
        let config = self.module.config.clone();

        if self.hunger == 0 {
            self.hunger_timer += 1;
            if config.meat_care_mistake_time > 0
                && self.hunger_timer == config.meat_care_mistake_time
            {
                self.register_care_mistake(CareMistakeKind::Hunger, events);
            }
        } else {
            self.hunger_timer = 0;
        }

        if self.strength == 0 {
            self.strength_timer += 1;
            if config.strength_care_mistake_time > 0
                && self.strength_timer == config.strength_care_mistake_time
            {
                self.register_care_mistake(CareMistakeKind::Strength, events);
            }
        } else {
            self.strength_timer = 0;
        }

        // Sickness duration feeds the death check, not the mistake count
        if self.sick_doses > 0 {
            self.sick_timer += 1;
        } else {
            self.sick_timer = 0;
        }

        if self.should_sleep(clock) {
            self.sleep_timer += 1;
            if config.sleep_care_mistake_time > 0
                && self.sleep_timer == config.sleep_care_mistake_time
            {
                self.register_care_mistake(CareMistakeKind::Sleep, events);
                self.sleep_timer = 0;
            }
        } else {
            self.sleep_timer = 0;
        }
    }

    /// Record one mistake through whichever accounting the module uses
    pub(crate) fn register_care_mistake(
        &mut self,
        kind: CareMistakeKind,
        events: &mut Vec<PetEvent>,
    ) {
        if self.uses_hearts {
            self.condition_hearts = self.condition_hearts.saturating_sub(1);
        } else {
            self.mistakes += 1;
        }
        if self.module.config.use_gcells {
            self.gcells.add_points(self.module.config.gcell_on_care_mistake);
        }
        tracing::debug!(name = %self.species.name, ?kind, "care mistake");
        events.push(PetEvent::CareMistake { kind });
    }

    /// Schedule a poop when the species interval lands on this minute
    pub(crate) fn check_poop_schedule(&mut self) {
        let interval = self.species.poop_interval_minutes as u64;
        if interval == 0 || !self.state.is_roaming() {
            return;
        }
        let minutes = self.minutes_elapsed();
        if minutes > 0 && minutes % interval == 0 {
            self.set_state(PetState::Pooping, false);
        }
    }

    /// Once-per-minute vital drain while the pet needs care
    pub(crate) fn update_vital_loss(&mut self) {
        if self.module.config.vital_loss > 0 && self.need_care() {
            self.vital_values = self.vital_values.saturating_sub(self.module.config.vital_loss);
        }
    }

    /// Once-per-hour vital gain, fed by at most one training and one
    /// battle activity per cycle
    pub(crate) fn update_vital_gain(&mut self) {
        let gain = self.module.config.vital_gain;
        if gain == 0 {
            return;
        }
        let mut total = 0;
        if self.trained_this_cycle {
            total += gain;
        }
        if self.battled_this_cycle {
            total += gain;
        }
        self.trained_this_cycle = false;
        self.battled_this_cycle = false;
        self.vital_values = (self.vital_values + total).min(MAX_VITAL);
    }
}
