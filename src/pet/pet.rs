//! The pet entity and its per-tick fan-out
//!
//! One `update` call per frame drives everything: animation/movement
//! bookkeeping every tick, aging once per simulated day, the needs/
//! mistakes/evolution/death block once per simulated minute, vital gain
//! once per simulated hour. All boundary checks use exact tick-multiple
//! modulo semantics; a low frame rate that never lands on a multiple
//! skips the boundary, which is an inherited quirk the engine keeps.

use std::sync::Arc;

use ahash::AHashSet;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::core::clock::Clock;
use crate::core::config::SimConfig;
use crate::core::error::{PetError, Result};
use crate::core::types::{PetState, RulesetId, Tick};
use crate::modules::{Module, SpeciesRecord};
use crate::pet::events::PetEvent;
use crate::pet::gcell::GcellMeter;
use crate::registry::GlobalRegistry;
use crate::rulesets::{self, LifetimeRecord, RulesetStrategies};

/// Strength never exceeds four hearts
pub const MAX_STRENGTH: u32 = 4;
/// Vital values cap
pub const MAX_VITAL: u32 = 9999;
/// Weight cap
pub const MAX_WEIGHT: u32 = 99;
/// Shakes needed (while still an egg) for the shaken-egg flag
pub const SHAKEN_EGG_SHAKES: u32 = 99;

/// All mutable per-pet state
///
/// Fields are public: the entity is plain data driven by its methods, and
/// the scene/test layers read counters directly.
#[derive(Debug, Clone)]
pub struct Pet {
    pub module: Arc<Module>,
    pub species: SpeciesRecord,
    pub sim: SimConfig,
    pub ruleset: RulesetId,
    pub strategies: &'static RulesetStrategies,

    // presentation/state bookkeeping
    pub state: PetState,
    pub state_ticks: Tick,
    pub anim_frame: u8,
    pub anim_ticks: Tick,
    pub pos_x: f32,
    pub wander_dir: i8,
    pub wander_left: u32,

    // age
    pub age_ticks: Tick,
    pub age_days: u32,
    /// Ticks since the current species was applied; the evolution timer
    pub species_ticks: Tick,

    // needs
    pub hunger: u32,
    pub strength: u32,
    pub sick_doses: u32,
    pub weight: u32,
    pub dp: u32,
    pub overfeed_timer: u32,
    pub overfeed_count: u32,

    // progression
    pub level: u32,
    pub experience: u32,
    pub effort: u32,
    pub battles: u32,
    pub wins: u32,
    pub pvp_wins: u32,
    pub trophies: u32,
    pub vital_values: u32,
    pub quests_completed: u32,
    pub enemy_kills: [u32; 10],
    pub area: u32,

    // care-mistake tracking
    pub hunger_timer: u32,
    pub strength_timer: u32,
    pub sick_timer: u32,
    pub sleep_timer: u32,
    pub starvation_count: u32,
    pub mistakes: u32,
    pub condition_hearts: u32,
    /// Hearts-vs-mistakes accounting, fixed at construction
    pub uses_hearts: bool,

    // death-save state
    pub save_presses_left: u32,
    pub save_shakes_left: u32,
    pub dying: bool,
    pub immunity_minutes: u32,
    pub injuries: u32,

    // sleep
    pub sleep_ticks: Tick,
    pub sleep_disturbances: u32,
    pub disturbance_penalty: u32,
    pub back_to_sleep_in: Option<u32>,

    // meters and extras
    pub gcells: GcellMeter,
    pub bonus_stats: [i32; 3],
    pub protein_overdose: u32,
    pub shake_count: u32,
    pub shaken_egg: bool,
    pub special_encounter: bool,
    pub fragments: AHashSet<String>,
    pub gcell_hatch: bool,
    pub poops: u32,

    // vital-value activity flags, consumed once per gain cycle
    pub trained_this_cycle: bool,
    pub battled_this_cycle: bool,

    pub seed: u64,
    pub rng: ChaCha8Rng,
}

impl Pet {
    /// Construct a fresh egg from the module's species table
    pub fn hatchling(
        module: Arc<Module>,
        species_name: &str,
        sim: SimConfig,
        seed: u64,
    ) -> Result<Self> {
        let species = module
            .species_named(species_name)
            .cloned()
            .ok_or_else(|| PetError::UnknownSpecies {
                module: module.config.name.clone(),
                name: species_name.to_string(),
                version: 0,
            })?;
        let ruleset = module.config.ruleset;
        let uses_hearts = module.config.use_condition_hearts;
        let pet = Self {
            strategies: rulesets::strategies(ruleset),
            ruleset,
            sim,
            state: PetState::Idle,
            state_ticks: 0,
            anim_frame: 0,
            anim_ticks: 0,
            pos_x: 0.0,
            wander_dir: 0,
            wander_left: 0,
            age_ticks: 0,
            age_days: 0,
            species_ticks: 0,
            hunger: 0,
            strength: 0,
            sick_doses: 0,
            weight: species.start_weight,
            dp: species.max_dp,
            overfeed_timer: 0,
            overfeed_count: 0,
            level: 1,
            experience: 0,
            effort: 0,
            battles: 0,
            wins: 0,
            pvp_wins: 0,
            trophies: 0,
            vital_values: 0,
            quests_completed: 0,
            enemy_kills: [0; 10],
            area: 0,
            hunger_timer: 0,
            strength_timer: 0,
            sick_timer: 0,
            sleep_timer: 0,
            starvation_count: 0,
            mistakes: 0,
            condition_hearts: species.condition_hearts,
            uses_hearts,
            save_presses_left: 0,
            save_shakes_left: 0,
            dying: false,
            immunity_minutes: 0,
            injuries: 0,
            sleep_ticks: 0,
            sleep_disturbances: 0,
            disturbance_penalty: 0,
            back_to_sleep_in: None,
            gcells: GcellMeter::new(),
            bonus_stats: [0; 3],
            protein_overdose: 0,
            shake_count: 0,
            shaken_egg: false,
            special_encounter: false,
            fragments: AHashSet::new(),
            gcell_hatch: false,
            poops: 0,
            trained_this_cycle: false,
            battled_this_cycle: false,
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
            species,
            module,
        };
        tracing::info!(name = %pet.species.name, "pet hatched as egg");
        Ok(pet)
    }

    /// Simulated minutes elapsed since construction
    pub fn minutes_elapsed(&self) -> u64 {
        self.age_ticks / self.sim.ticks_per_minute()
    }

    /// Simulated minutes in the current species
    pub fn species_minutes(&self) -> u64 {
        self.species_ticks / self.sim.ticks_per_minute()
    }

    /// Advance one frame
    ///
    /// The order matters and is fixed: bookkeeping, movement, nap/poop
    /// handling, then the day/minute/hour boundary blocks.
    pub fn update(&mut self, clock: &dyn Clock, registry: &mut GlobalRegistry) -> Vec<PetEvent> {
        let mut events = Vec::new();

        self.age_ticks += 1;
        self.species_ticks += 1;
        self.state_ticks += 1;
        self.anim_ticks += 1;
        if self.anim_ticks % self.sim.animation_frame_ticks == 0 {
            self.anim_frame = (self.anim_frame + 1) % 2;
        }

        if self.state.is_roaming() {
            self.update_wander();
        }

        if self.state == PetState::Nap {
            self.sleep_ticks += 1;
            self.check_wake_up(clock, &mut events);
        }

        if self.state == PetState::Pooping && self.state_ticks == self.sim.poop_frame_offset {
            self.drop_poop(&mut events);
        }

        if self.age_ticks % self.sim.ticks_per_day == 0 {
            self.age_days += 1;
            events.push(PetEvent::AgedUp {
                days: self.age_days,
            });
        }

        if self.age_ticks % self.sim.ticks_per_minute() == 0 {
            self.on_minute(clock, registry, &mut events);
        }

        if self.age_ticks % self.sim.ticks_per_hour() == 0 {
            self.on_hour(&mut events);
        }

        events
    }

    fn on_minute(
        &mut self,
        clock: &dyn Clock,
        registry: &mut GlobalRegistry,
        events: &mut Vec<PetEvent>,
    ) {
        if self.state == PetState::Nap || self.state == PetState::Dead {
            return;
        }

        // eggs only wait out their hatch timer
        if self.species.stage == 0 {
            self.update_evolution(clock, registry, events);
            return;
        }

        self.update_needs();
        self.update_evolution(clock, registry, events);
        self.check_poop_schedule();
        self.update_care_mistakes(clock, events);
        self.update_vital_loss();
        self.update_back_to_sleep(clock, events);

        self.update_death_save(events);
        self.update_death(events);
        if self.immunity_minutes > 0 {
            self.immunity_minutes -= 1;
        }
    }

    fn on_hour(&mut self, _events: &mut Vec<PetEvent>) {
        if self.state == PetState::Nap || self.state == PetState::Dead {
            return;
        }
        self.update_vital_gain();
    }

    /// Randomized left/right drift while idle; touches nothing but the
    /// presentation fields
    fn update_wander(&mut self) {
        use rand::Rng;
        if self.wander_left == 0 {
            self.wander_dir = self.rng.gen_range(0..3i8) - 1;
            self.wander_left = self.rng.gen_range(30..120);
            let next = if self.wander_dir == 0 {
                PetState::Idle
            } else {
                PetState::Moving
            };
            if next != self.state {
                self.set_state(next, false);
            }
        } else {
            self.wander_left -= 1;
            self.pos_x = (self.pos_x + self.wander_dir as f32 * 0.25).clamp(-32.0, 32.0);
        }
    }

    pub(crate) fn drop_poop(&mut self, events: &mut Vec<PetEvent>) {
        self.poops += 1;
        self.weight = self.weight.saturating_sub(1).max(self.species.min_weight);
        self.set_state(PetState::Idle, true);
        events.push(PetEvent::Pooped);
    }

    /// Clear accumulated poops (the flush action in the scene layer)
    pub fn clean_poop(&mut self) {
        self.poops = 0;
    }

    /// Shake input handler; feeds both the shaken-egg tracker and the
    /// shake death save
    pub fn shake(&mut self) {
        self.shake_count += 1;
        if self.dying && self.save_shakes_left > 0 {
            self.save_shakes_left -= 1;
        }
    }

    /// Button-press input handler for the press death save
    pub fn death_save_press(&mut self) {
        if self.dying && self.save_presses_left > 0 {
            self.save_presses_left -= 1;
        }
    }

    /// Counters the traited-egg policies inspect at removal time
    pub fn lifetime_record(&self) -> LifetimeRecord {
        LifetimeRecord {
            stage: self.species.stage,
            age_days: self.age_days,
            battles: self.battles,
            wins: self.wins,
            vital_values: self.vital_values,
        }
    }

    /// Experience gain with the derived level curve
    pub(crate) fn gain_experience(&mut self, xp: u32) {
        self.experience = self.experience.saturating_add(xp);
        self.level = (1 + self.experience / 100).min(99);
    }

    /// Re-initialize stats from a new species record, resetting session
    /// counters while preserving identity/history counters
    pub(crate) fn apply_species(&mut self, species: SpeciesRecord) {
        self.hunger = self.hunger.min(species.stomach);
        self.strength = self.strength.min(MAX_STRENGTH);
        self.weight = self.weight.max(species.min_weight).min(MAX_WEIGHT);
        self.dp = species.max_dp;
        self.condition_hearts = species.condition_hearts;

        // session counters
        self.effort = 0;
        self.mistakes = 0;
        self.overfeed_count = 0;
        self.overfeed_timer = 0;
        self.hunger_timer = 0;
        self.strength_timer = 0;
        self.sick_timer = 0;
        self.sleep_timer = 0;
        self.starvation_count = 0;
        self.sick_doses = 0;
        self.sleep_disturbances = 0;
        self.protein_overdose = 0;
        self.species_ticks = 0;

        self.species = species;
    }
}
