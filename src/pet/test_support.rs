//! Shared fixtures for the unit tests in this crate
//!
//! A small in-memory module with an egg -> child -> champion chain, a
//! one-tick-per-second sim config so minute boundaries are cheap to
//! cross, and a helper that runs whole simulated minutes.

use std::sync::Arc;

use crate::core::clock::Clock;
use crate::core::config::SimConfig;
use crate::pet::events::PetEvent;
use crate::pet::pet::Pet;
use crate::modules::Module;
use crate::registry::GlobalRegistry;

const BASE_SPECIES: &str = r#"
[[species]]
name = "ovum"
stage = 0
evolve_time_minutes = 10
stomach = 1

[[species.evolution]]
to = "squirt"

[[species]]
name = "squirt"
stage = 1
attribute = "Free"
sleeps = "21:00"
wakes = "07:00"
evolve_time_minutes = 60
stomach = 3
hunger_loss_minutes = 4
strength_loss_minutes = 4
poop_interval_minutes = 60

[[species.evolution]]
to = "champ"
mistakes = { max = 2 }

[[species]]
name = "champ"
stage = 3
attribute = "Vaccine"
sleeps = "22:00"
wakes = "07:00"
stomach = 4
hunger_loss_minutes = 4
strength_loss_minutes = 4
poop_interval_minutes = 60
power = 70
hp = 12
star = 10
attack = 3
condition_hearts = 3
"#;

pub(crate) fn module_with(extra_config: &str) -> Arc<Module> {
    let text = format!(
        "[module]\n\
         name = \"test-mod\"\n\
         ruleset = \"dmc\"\n\
         meat_care_mistake_time = 10\n\
         strength_care_mistake_time = 10\n\
         sleep_care_mistake_time = 10\n\
         death_save_presses = 5\n\
         death_save_shakes = 3\n\
         {extra_config}\n\
         {BASE_SPECIES}"
    );
    Module::from_toml(&text).unwrap()
}

pub(crate) fn test_module() -> Arc<Module> {
    module_with("")
}

/// Same chain, but mistakes come off condition hearts
pub(crate) fn hearts_module() -> Arc<Module> {
    module_with("use_condition_hearts = true")
}

/// Same chain, with the G-Cell meter and fragment drops switched on
pub(crate) fn gcell_module() -> Arc<Module> {
    module_with(
        "use_gcells = true\n\
         fragment_marker = \"gigas\"\n\
         fragments_needed = 2",
    )
}

/// One tick per simulated second keeps minute-boundary tests fast
pub(crate) fn test_sim() -> SimConfig {
    SimConfig {
        ticks_per_second: 1,
        ticks_per_day: 24 * 3600,
        animation_frame_ticks: 15,
        poop_frame_offset: 60,
    }
}

pub(crate) fn egg_pet(module: &Arc<Module>) -> Pet {
    Pet::hatchling(module.clone(), "ovum", test_sim(), 7).unwrap()
}

/// A stage-3 pet with full needs, skipping the egg/child phases
pub(crate) fn hatched_pet(module: &Arc<Module>) -> Pet {
    let mut pet = Pet::hatchling(module.clone(), "champ", test_sim(), 7).unwrap();
    pet.hunger = pet.species.stomach;
    pet.strength = 4;
    pet
}

/// Run whole simulated minutes, collecting every event
pub(crate) fn tick_minutes(
    pet: &mut Pet,
    clock: &dyn Clock,
    registry: &mut GlobalRegistry,
    minutes: u64,
) -> Vec<PetEvent> {
    let mut events = Vec::new();
    let ticks = minutes * pet.sim.ticks_per_minute();
    for _ in 0..ticks {
        events.extend(pet.update(clock, registry));
    }
    events
}
