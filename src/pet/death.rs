//! Death conditions and the death-save minigame
//!
//! Once per minute the death clauses are checked. Meeting one while no
//! save is in flight arms a save minigame instead of killing outright
//! (button presses preferred over shakes); while the save is pending the
//! death check is suppressed, with no deadline, until the player clears
//! the counter. A cleared save grants an hour of immunity. A module with
//! both save requirements at zero kills directly.

use crate::core::types::PetState;
use crate::pet::events::{DeathCause, DeathSaveKind, PetEvent};
use crate::pet::pet::Pet;

/// Minutes of immunity after a successful death save
pub const IMMUNITY_MINUTES: u32 = 60;
/// Ticks a dead pet lingers before the roster removes it
pub const DEAD_REMOVAL_TICKS: u64 = 9000;

impl Pet {
    /// First death clause currently met, if any; thresholds at 0 disable
    /// their clause
    pub(crate) fn death_conditions_met(&self) -> Option<DeathCause> {
        let config = &self.module.config;

        if config.death_max_injuries > 0 && self.injuries >= config.death_max_injuries {
            return Some(DeathCause::Injuries);
        }
        if config.death_sick_timer > 0 && self.sick_timer > config.death_sick_timer {
            return Some(DeathCause::Sickness);
        }
        if config.death_hunger_timer > 0 && self.hunger_timer > config.death_hunger_timer {
            return Some(DeathCause::HungerNeglect);
        }
        if config.death_strength_timer > 0 && self.strength_timer > config.death_strength_timer {
            return Some(DeathCause::StrengthNeglect);
        }
        if config.death_stage45_mistakes > 0
            && matches!(self.species.stage, 4 | 5)
            && self.mistakes >= config.death_stage45_mistakes
            && self.species_ticks
                > self.species.evolve_time_minutes as u64 * self.sim.ticks_per_minute()
        {
            return Some(DeathCause::StageMistakes);
        }
        if config.death_stage67_mistakes > 0
            && self.species.stage >= 6
            && self.mistakes >= config.death_stage67_mistakes
            && self.age_ticks >= 48 * self.sim.ticks_per_hour()
        {
            return Some(DeathCause::StageMistakes);
        }
        if config.death_old_age_days > 0 && self.age_days >= config.death_old_age_days {
            return Some(DeathCause::OldAge);
        }
        if config.death_starvation_count > 0
            && self.starvation_count > config.death_starvation_count
        {
            return Some(DeathCause::Starvation);
        }
        if config.death_care_mistakes > 0 && self.mistakes >= config.death_care_mistakes {
            return Some(DeathCause::CareMistakes);
        }
        None
    }

    /// Resolve a pending save whose counter the player has cleared
    pub(crate) fn update_death_save(&mut self, events: &mut Vec<PetEvent>) {
        if !self.dying {
            return;
        }
        if self.save_presses_left > 0 || self.save_shakes_left > 0 {
            return;
        }
        self.dying = false;
        self.immunity_minutes = IMMUNITY_MINUTES;
        self.set_state(PetState::Happy2, true);
        tracing::info!(name = %self.species.name, "death save cleared");
        events.push(PetEvent::DeathSaveResolved);
    }

    /// Check the death clauses; arm a save or kill
    pub(crate) fn update_death(&mut self, events: &mut Vec<PetEvent>) {
        if self.dying || self.immunity_minutes > 0 {
            return;
        }
        let Some(cause) = self.death_conditions_met() else {
            return;
        };
        let config = &self.module.config;
        if config.death_save_presses > 0 {
            self.save_presses_left = config.death_save_presses;
            self.save_shakes_left = 0;
            self.dying = true;
            events.push(PetEvent::DeathSaveStarted {
                save: DeathSaveKind::ButtonPress,
            });
        } else if config.death_save_shakes > 0 {
            self.save_shakes_left = config.death_save_shakes;
            self.save_presses_left = 0;
            self.dying = true;
            events.push(PetEvent::DeathSaveStarted {
                save: DeathSaveKind::Shake,
            });
        } else {
            self.die(cause, events);
        }
    }

    pub(crate) fn die(&mut self, cause: DeathCause, events: &mut Vec<PetEvent>) {
        self.dying = false;
        self.set_state(PetState::Dead, true);
        tracing::info!(name = %self.species.name, ?cause, "pet died");
        events.push(PetEvent::Died { cause });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::FixedClock;
    use crate::pet::test_support::{hatched_pet, test_module, tick_minutes};
    use crate::registry::GlobalRegistry;

    #[test]
    fn test_condition_arms_press_save_not_death() {
        let module = test_module();
        let mut pet = hatched_pet(&module);
        pet.injuries = module.config.death_max_injuries;
        let clock = FixedClock::at(12, 0);
        let mut registry = GlobalRegistry::new();

        let events = tick_minutes(&mut pet, &clock, &mut registry, 1);
        assert!(events.contains(&PetEvent::DeathSaveStarted {
            save: DeathSaveKind::ButtonPress
        }));
        assert!(pet.dying);
        assert_eq!(pet.save_presses_left, module.config.death_save_presses);
        assert_ne!(pet.state, PetState::Dead);
    }

    #[test]
    fn test_pending_save_suppresses_death_indefinitely() {
        let module = test_module();
        let mut pet = hatched_pet(&module);
        pet.injuries = module.config.death_max_injuries;
        let clock = FixedClock::at(12, 0);
        let mut registry = GlobalRegistry::new();

        // no deadline: hours pass with the save untouched and the pet lives
        let events = tick_minutes(&mut pet, &clock, &mut registry, 300);
        assert!(pet.dying);
        assert!(!events.iter().any(|e| matches!(e, PetEvent::Died { .. })));
    }

    #[test]
    fn test_cleared_save_grants_immunity() {
        let module = test_module();
        let mut pet = hatched_pet(&module);
        pet.injuries = module.config.death_max_injuries;
        let clock = FixedClock::at(12, 0);
        let mut registry = GlobalRegistry::new();

        tick_minutes(&mut pet, &clock, &mut registry, 1);
        for _ in 0..module.config.death_save_presses {
            pet.death_save_press();
        }
        let events = tick_minutes(&mut pet, &clock, &mut registry, 1);
        assert!(events.contains(&PetEvent::DeathSaveResolved));
        assert!(!pet.dying);
        assert_eq!(pet.state, PetState::Happy2);
        assert!(pet.immunity_minutes > 0);

        // still injured, but immune: no new save for the rest of the hour
        let events = tick_minutes(&mut pet, &clock, &mut registry, 30);
        assert!(!events
            .iter()
            .any(|e| matches!(e, PetEvent::DeathSaveStarted { .. })));
    }

    #[test]
    fn test_immunity_expires_and_save_rearms() {
        let module = test_module();
        let mut pet = hatched_pet(&module);
        pet.injuries = module.config.death_max_injuries;
        let clock = FixedClock::at(12, 0);
        let mut registry = GlobalRegistry::new();

        tick_minutes(&mut pet, &clock, &mut registry, 1);
        for _ in 0..module.config.death_save_presses {
            pet.death_save_press();
        }
        tick_minutes(&mut pet, &clock, &mut registry, 1);

        let events = tick_minutes(&mut pet, &clock, &mut registry, IMMUNITY_MINUTES as u64 + 2);
        assert!(events
            .iter()
            .any(|e| matches!(e, PetEvent::DeathSaveStarted { .. })));
    }

    #[test]
    fn test_no_save_configured_dies_outright() {
        let text = r#"
[module]
name = "harsh"
death_save_presses = 0
death_save_shakes = 0

[[species]]
name = "champ"
stage = 3
stomach = 4
"#;
        let module = crate::modules::Module::from_toml(text).unwrap();
        let mut pet = crate::pet::pet::Pet::hatchling(
            module,
            "champ",
            crate::pet::test_support::test_sim(),
            1,
        )
        .unwrap();
        pet.hunger = pet.species.stomach;
        pet.strength = 4;
        pet.injuries = pet.module.config.death_max_injuries;
        let clock = FixedClock::at(12, 0);
        let mut registry = GlobalRegistry::new();

        let events = tick_minutes(&mut pet, &clock, &mut registry, 1);
        assert!(events.contains(&PetEvent::Died {
            cause: DeathCause::Injuries
        }));
        assert_eq!(pet.state, PetState::Dead);
    }

    #[test]
    fn test_shake_save_used_when_presses_disabled() {
        let text = r#"
[module]
name = "shaker"
death_save_presses = 0
death_save_shakes = 3

[[species]]
name = "champ"
stage = 3
stomach = 4
"#;
        let module = crate::modules::Module::from_toml(text).unwrap();
        let mut pet = crate::pet::pet::Pet::hatchling(
            module,
            "champ",
            crate::pet::test_support::test_sim(),
            1,
        )
        .unwrap();
        pet.hunger = pet.species.stomach;
        pet.strength = 4;
        pet.injuries = pet.module.config.death_max_injuries;
        let clock = FixedClock::at(12, 0);
        let mut registry = GlobalRegistry::new();

        let events = tick_minutes(&mut pet, &clock, &mut registry, 1);
        assert!(events.contains(&PetEvent::DeathSaveStarted {
            save: DeathSaveKind::Shake
        }));
        for _ in 0..3 {
            pet.shake();
        }
        let events = tick_minutes(&mut pet, &clock, &mut registry, 1);
        assert!(events.contains(&PetEvent::DeathSaveResolved));
    }

    #[test]
    fn test_dead_pet_stops_updating_needs() {
        let module = test_module();
        let mut pet = hatched_pet(&module);
        let clock = FixedClock::at(12, 0);
        let mut registry = GlobalRegistry::new();
        let mut events = Vec::new();
        pet.die(DeathCause::OldAge, &mut events);

        let hunger = pet.hunger;
        tick_minutes(&mut pet, &clock, &mut registry, 60);
        assert_eq!(pet.hunger, hunger);
        assert_eq!(pet.state, PetState::Dead);
    }
}
