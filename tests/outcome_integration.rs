//! Feeding, training and battle outcomes through the public API.

use vpet_core::core::clock::FixedClock;
use vpet_core::core::config::SimConfig;
use vpet_core::core::types::{FoodKind, PetState};
use vpet_core::modules::Module;
use vpet_core::pet::{BattleReport, Pet, PetEvent};
use vpet_core::registry::GlobalRegistry;

const MODULE: &str = r#"
[module]
name = "arena"
sick_chance_win = 0
sick_chance_loss = 0
overfeed_timer_minutes = 5
training_effort_gain = 1
training_strength_gain = 2

[[species]]
name = "champ"
stage = 4
stomach = 4
hunger_loss_minutes = 10
power = 50
hp = 10
attack = 2
max_dp = 6
"#;

fn fast_sim() -> SimConfig {
    SimConfig {
        ticks_per_second: 1,
        ticks_per_day: 24 * 3600,
        animation_frame_ticks: 15,
        poop_frame_offset: 60,
    }
}

fn arena_pet() -> Pet {
    let module = Module::from_toml(MODULE).unwrap();
    let mut pet = Pet::hatchling(module, "champ", fast_sim(), 21).unwrap();
    pet.hunger = 4;
    pet.strength = 2;
    pet
}

fn run_minutes(pet: &mut Pet, minutes: u64) {
    let clock = FixedClock::at(12, 0);
    let mut registry = GlobalRegistry::new();
    for _ in 0..minutes * pet.sim.ticks_per_minute() {
        pet.update(&clock, &mut registry);
    }
}

fn report(won: bool) -> BattleReport {
    BattleReport {
        won,
        enemy_name: "drifter".to_string(),
        enemy_stage: 4,
        area: 1,
        final_battle: false,
        random_encounter: false,
    }
}

#[test]
fn test_overfeed_cooldown_expires_with_time() {
    let mut pet = arena_pet();
    let mut events = Vec::new();

    assert!(pet.set_eating(FoodKind::Meat, 1, &mut events)); // full: overfeed
    assert_eq!(pet.overfeed_count, 1);
    assert!(!pet.set_eating(FoodKind::Meat, 1, &mut events)); // cooldown refusal

    // cooldown over and hunger decayed at minute 10: a normal meal again
    run_minutes(&mut pet, 12);
    assert_eq!(pet.hunger, 3);
    assert!(pet.set_eating(FoodKind::Meat, 1, &mut events));
    assert_eq!(pet.hunger, 4);
    assert_eq!(pet.overfeed_count, 1);
}

#[test]
fn test_overfeed_freezes_hunger_decay() {
    let text = r#"
[module]
name = "snacks"
overfeed_timer_minutes = 5

[[species]]
name = "champ"
stage = 4
stomach = 4
hunger_loss_minutes = 2
"#;
    let module = Module::from_toml(text).unwrap();
    let mut pet = Pet::hatchling(module, "champ", fast_sim(), 8).unwrap();
    pet.hunger = 4;
    pet.strength = 4;
    let mut events = Vec::new();
    assert!(pet.set_eating(FoodKind::Meat, 1, &mut events));
    assert_eq!(pet.overfeed_timer, 5);

    // minutes 2 and 4 fall inside the cooldown and decay nothing
    run_minutes(&mut pet, 4);
    assert_eq!(pet.hunger, 4);

    // minute 6 is past the cooldown and decays normally
    run_minutes(&mut pet, 2);
    assert_eq!(pet.hunger, 3);
}

#[test]
fn test_training_outcomes() {
    let mut pet = arena_pet();
    pet.finish_training(true, 1.0, false);
    assert_eq!(pet.effort, 1);
    assert_eq!(pet.strength, 4);
    assert_eq!(pet.state, PetState::Happy2);

    pet.finish_training(false, 0.0, false);
    assert_eq!(pet.effort, 1, "no effort on a loss");
    assert_eq!(pet.state, PetState::Angry);
}

#[test]
fn test_battle_costs_dp_and_tracks_record() {
    let mut pet = arena_pet();
    let mut events = Vec::new();

    pet.finish_battle(&report(true), &mut events);
    pet.finish_battle(&report(false), &mut events);
    pet.finish_battle(&report(true), &mut events);

    assert_eq!(pet.battles, 3);
    assert_eq!(pet.wins, 2);
    assert_eq!(pet.dp, 3);
    assert_eq!(pet.enemy_kills[4], 2);
    assert_eq!(pet.area, 1);
    assert_eq!(pet.state, PetState::Happy);
    assert!(!events.contains(&PetEvent::Sickened));
}

#[test]
fn test_dp_gates_battle_eligibility() {
    let mut pet = arena_pet();
    let mut events = Vec::new();
    for _ in 0..6 {
        assert!(pet.can_battle());
        pet.finish_battle(&report(true), &mut events);
    }
    assert_eq!(pet.dp, 0);
    assert!(!pet.can_battle());

    assert!(pet.set_eating(FoodKind::Vitamin, 2, &mut events));
    assert_eq!(pet.dp, 2);
    assert!(pet.can_battle());
    assert!(pet.can_battle_pvp(), "stage 4 may link battle");
}

#[test]
fn test_guaranteed_sickness_on_loss_with_penalties() {
    let text = r#"
[module]
name = "grim"
sick_chance_win = 0
sick_chance_loss = 90
protein_sick_penalty = 5

[[species]]
name = "champ"
stage = 4
stomach = 4
heal_doses = 2
"#;
    let module = Module::from_toml(text).unwrap();
    let mut pet = Pet::hatchling(module, "champ", fast_sim(), 3).unwrap();
    pet.hunger = 4;
    pet.strength = 4;
    pet.protein_overdose = 2; // 90 + 2*5 = 100 percent
    let mut events = Vec::new();

    pet.finish_battle(&report(false), &mut events);
    assert!(events.contains(&PetEvent::Sickened));
    assert_eq!(pet.state, PetState::Sick);
    assert_eq!(pet.sick_doses, 2);
    assert_eq!(pet.injuries, 1);

    // two doses of medicine to cure
    assert!(pet.set_eating(FoodKind::Medicine, 1, &mut events));
    assert_eq!(pet.state, PetState::Sick);
    assert!(pet.set_eating(FoodKind::Medicine, 1, &mut events));
    assert_ne!(pet.state, PetState::Sick);
    assert_eq!(pet.sick_doses, 0);
}
