//! Derived stats and capability queries
//!
//! Effective combat numbers combine the species record, the ruleset's
//! power formula and the per-slot bonus stats. Capability checks gate
//! the scene layer's menu entries.

use crate::core::clock::Clock;
use crate::core::types::PetState;
use crate::pet::pet::Pet;

impl Pet {
    /// Effective hit points
    pub fn get_hp(&self) -> u32 {
        (self.species.hp as i64 + self.bonus_stats[0] as i64).max(0) as u32
    }

    /// Effective attack
    pub fn get_attack(&self) -> u32 {
        (self.species.attack as i64 + self.bonus_stats[1] as i64).max(0) as u32
    }

    /// Effective power through the ruleset's formula; `bonus` folds in
    /// the earned power bonus slot
    pub fn get_power(&self, bonus: bool) -> u32 {
        let base = self
            .strategies
            .power
            .power(self.species.power, self.species.star, self.level);
        if bonus {
            (base as i64 + self.bonus_stats[2] as i64).max(0) as u32
        } else {
            base
        }
    }

    /// Eligible for regular battles
    pub fn can_battle(&self) -> bool {
        self.species.stage >= 3
            && self.dp >= 1
            && !matches!(self.state, PetState::Sick | PetState::Nap | PetState::Dead)
    }

    /// Eligible for versus battles (one stage stricter)
    pub fn can_battle_pvp(&self) -> bool {
        self.can_battle() && self.species.stage >= 4
    }

    /// Eligible for training
    pub fn can_train(&self) -> bool {
        self.species.stage >= 2
            && !matches!(self.state, PetState::Sick | PetState::Nap | PetState::Dead)
    }

    /// Any unmet need (drives the attention callsign and vital drain)
    pub fn need_care(&self) -> bool {
        self.hunger == 0 || self.strength == 0 || self.sick_doses > 0 || self.poops > 0
    }

    /// Whether the attention callsign should show
    pub fn call_sign(&self) -> bool {
        self.need_care() && !matches!(self.state, PetState::Nap | PetState::Dead)
    }

    /// The care gate the evolution engine applies before evaluating
    /// candidates (eggs hatch regardless)
    pub(crate) fn well_cared_for(&self, clock: &dyn Clock) -> bool {
        self.hunger > 0 && self.strength > 0 && self.sick_doses == 0 && !self.should_sleep(clock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pet::test_support::{egg_pet, hatched_pet, test_module};

    #[test]
    fn test_bonus_stats_shift_derived_numbers() {
        let module = test_module();
        let mut pet = hatched_pet(&module);
        assert_eq!(pet.get_hp(), 12);
        assert_eq!(pet.get_attack(), 3);
        assert_eq!(pet.get_power(true), 70); // dmc: raw species power

        pet.bonus_stats = [5, -1, 10];
        assert_eq!(pet.get_hp(), 17);
        assert_eq!(pet.get_attack(), 2);
        assert_eq!(pet.get_power(true), 80);
        // the base query ignores the bonus slot
        assert_eq!(pet.get_power(false), 70);
    }

    #[test]
    fn test_negative_bonus_clamps_at_zero() {
        let module = test_module();
        let mut pet = hatched_pet(&module);
        pet.bonus_stats = [-100, -100, -100];
        assert_eq!(pet.get_hp(), 0);
        assert_eq!(pet.get_attack(), 0);
        assert_eq!(pet.get_power(true), 0);
        assert_eq!(pet.get_power(false), 70);
    }

    #[test]
    fn test_battle_gates() {
        let module = test_module();
        let mut pet = hatched_pet(&module);
        assert!(pet.can_battle());
        assert!(!pet.can_battle_pvp()); // stage 3 < 4

        pet.dp = 0;
        assert!(!pet.can_battle());
        pet.dp = 1;
        pet.set_state(PetState::Sick, false);
        assert!(!pet.can_battle());
        assert!(!pet.can_train());
    }

    #[test]
    fn test_egg_cannot_battle_or_train() {
        let module = test_module();
        let pet = egg_pet(&module);
        assert!(!pet.can_battle());
        assert!(!pet.can_train());
    }

    #[test]
    fn test_call_sign_follows_needs() {
        let module = test_module();
        let mut pet = hatched_pet(&module);
        assert!(!pet.call_sign());
        pet.poops = 1;
        assert!(pet.call_sign());
        pet.clean_poop();
        assert!(!pet.call_sign());
    }
}
