//! Roster-level tick driver
//!
//! Owns the live pets, fans the per-frame update out to each of them and
//! reaps dead pets after their lingering period. Reaping is also where
//! the ruleset's traited-egg policy looks at the finished life.

use crate::core::clock::Clock;
use crate::core::types::PetState;
use crate::pet::events::PetEvent;
use crate::pet::pet::Pet;
use crate::pet::DEAD_REMOVAL_TICKS;
use crate::registry::GlobalRegistry;

/// The set of currently-simulated pets
#[derive(Debug, Default)]
pub struct Roster {
    pets: Vec<Pet>,
    /// Raised when a removed pet's life qualified for a traited egg
    pub earned_traited_egg: bool,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, pet: Pet) {
        self.pets.push(pet);
    }

    pub fn pets(&self) -> &[Pet] {
        &self.pets
    }

    pub fn pets_mut(&mut self) -> &mut [Pet] {
        &mut self.pets
    }

    pub fn len(&self) -> usize {
        self.pets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pets.is_empty()
    }

    /// Consume the traited-egg earn, if any
    pub fn take_traited_egg(&mut self) -> bool {
        std::mem::take(&mut self.earned_traited_egg)
    }

    /// Advance every pet one frame and reap lingering dead pets
    pub fn update(&mut self, clock: &dyn Clock, registry: &mut GlobalRegistry) -> Vec<PetEvent> {
        let mut events = Vec::new();
        for pet in &mut self.pets {
            events.extend(pet.update(clock, registry));
        }

        let mut earned = false;
        self.pets.retain(|pet| {
            if pet.state == PetState::Dead && pet.state_ticks >= DEAD_REMOVAL_TICKS {
                if pet.strategies.traited_egg.eligible(&pet.lifetime_record()) {
                    earned = true;
                }
                tracing::info!(name = %pet.species.name, "dead pet removed from roster");
                false
            } else {
                true
            }
        });
        if earned {
            self.earned_traited_egg = true;
        }

        events
    }
}
