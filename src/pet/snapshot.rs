//! Flat save/restore form of a pet
//!
//! `Pet` itself holds an `Arc<Module>` and a ruleset strategy reference,
//! so it never derives serde; the snapshot is the flat counters-only
//! form written to save files. Restoring re-resolves the species from
//! the module and re-seeds the RNG from the stored seed.

use std::sync::Arc;

use ahash::AHashSet;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::core::config::SimConfig;
use crate::core::error::{PetError, Result};
use crate::core::types::{PetState, Tick};
use crate::modules::Module;
use crate::pet::gcell::GcellMeter;
use crate::pet::pet::Pet;
use crate::rulesets;

/// Serializable form of one pet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PetSnapshot {
    pub module: String,
    pub species: String,
    pub species_version: u8,

    pub state: PetState,
    pub age_ticks: Tick,
    pub age_days: u32,
    pub species_ticks: Tick,

    pub hunger: u32,
    pub strength: u32,
    pub sick_doses: u32,
    pub weight: u32,
    pub dp: u32,
    pub overfeed_timer: u32,
    pub overfeed_count: u32,

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

    pub hunger_timer: u32,
    pub strength_timer: u32,
    pub sick_timer: u32,
    pub sleep_timer: u32,
    pub starvation_count: u32,
    pub mistakes: u32,
    pub condition_hearts: u32,

    pub save_presses_left: u32,
    pub save_shakes_left: u32,
    pub dying: bool,
    pub immunity_minutes: u32,
    pub injuries: u32,

    pub sleep_disturbances: u32,
    pub disturbance_penalty: u32,

    pub gcells: GcellMeter,
    pub bonus_stats: [i32; 3],
    pub protein_overdose: u32,
    pub shake_count: u32,
    pub shaken_egg: bool,
    pub special_encounter: bool,
    pub fragments: Vec<String>,
    pub gcell_hatch: bool,
    pub poops: u32,

    pub seed: u64,
}

impl Pet {
    /// The flat save-file form of this pet
    pub fn snapshot(&self) -> PetSnapshot {
        let mut fragments: Vec<String> = self.fragments.iter().cloned().collect();
        fragments.sort();
        PetSnapshot {
            module: self.module.config.name.clone(),
            species: self.species.name.clone(),
            species_version: self.species.version,
            state: self.state,
            age_ticks: self.age_ticks,
            age_days: self.age_days,
            species_ticks: self.species_ticks,
            hunger: self.hunger,
            strength: self.strength,
            sick_doses: self.sick_doses,
            weight: self.weight,
            dp: self.dp,
            overfeed_timer: self.overfeed_timer,
            overfeed_count: self.overfeed_count,
            level: self.level,
            experience: self.experience,
            effort: self.effort,
            battles: self.battles,
            wins: self.wins,
            pvp_wins: self.pvp_wins,
            trophies: self.trophies,
            vital_values: self.vital_values,
            quests_completed: self.quests_completed,
            enemy_kills: self.enemy_kills,
            area: self.area,
            hunger_timer: self.hunger_timer,
            strength_timer: self.strength_timer,
            sick_timer: self.sick_timer,
            sleep_timer: self.sleep_timer,
            starvation_count: self.starvation_count,
            mistakes: self.mistakes,
            condition_hearts: self.condition_hearts,
            save_presses_left: self.save_presses_left,
            save_shakes_left: self.save_shakes_left,
            dying: self.dying,
            immunity_minutes: self.immunity_minutes,
            injuries: self.injuries,
            sleep_disturbances: self.sleep_disturbances,
            disturbance_penalty: self.disturbance_penalty,
            gcells: self.gcells,
            bonus_stats: self.bonus_stats,
            protein_overdose: self.protein_overdose,
            shake_count: self.shake_count,
            shaken_egg: self.shaken_egg,
            special_encounter: self.special_encounter,
            fragments,
            gcell_hatch: self.gcell_hatch,
            poops: self.poops,
            seed: self.seed,
        }
    }

    /// Rebuild a pet from a snapshot against its (already loaded) module
    ///
    /// The animation cursor, wander state and in-flight nap bookkeeping
    /// are presentation details and restart from zero.
    pub fn from_snapshot(
        snapshot: &PetSnapshot,
        module: Arc<Module>,
        sim: SimConfig,
    ) -> Result<Pet> {
        if module.config.name != snapshot.module {
            return Err(PetError::ModuleNotLoaded(snapshot.module.clone()));
        }
        let species = module
            .species(&snapshot.species, snapshot.species_version)
            .cloned()
            .ok_or_else(|| PetError::UnknownSpecies {
                module: snapshot.module.clone(),
                name: snapshot.species.clone(),
                version: snapshot.species_version,
            })?;
        let ruleset = module.config.ruleset;
        let uses_hearts = module.config.use_condition_hearts;
        Ok(Pet {
            strategies: rulesets::strategies(ruleset),
            ruleset,
            sim,
            state: snapshot.state,
            state_ticks: 0,
            anim_frame: 0,
            anim_ticks: 0,
            pos_x: 0.0,
            wander_dir: 0,
            wander_left: 0,
            age_ticks: snapshot.age_ticks,
            age_days: snapshot.age_days,
            species_ticks: snapshot.species_ticks,
            hunger: snapshot.hunger,
            strength: snapshot.strength,
            sick_doses: snapshot.sick_doses,
            weight: snapshot.weight,
            dp: snapshot.dp,
            overfeed_timer: snapshot.overfeed_timer,
            overfeed_count: snapshot.overfeed_count,
            level: snapshot.level,
            experience: snapshot.experience,
            effort: snapshot.effort,
            battles: snapshot.battles,
            wins: snapshot.wins,
            pvp_wins: snapshot.pvp_wins,
            trophies: snapshot.trophies,
            vital_values: snapshot.vital_values,
            quests_completed: snapshot.quests_completed,
            enemy_kills: snapshot.enemy_kills,
            area: snapshot.area,
            hunger_timer: snapshot.hunger_timer,
            strength_timer: snapshot.strength_timer,
            sick_timer: snapshot.sick_timer,
            sleep_timer: snapshot.sleep_timer,
            starvation_count: snapshot.starvation_count,
            mistakes: snapshot.mistakes,
            condition_hearts: snapshot.condition_hearts,
            uses_hearts,
            save_presses_left: snapshot.save_presses_left,
            save_shakes_left: snapshot.save_shakes_left,
            dying: snapshot.dying,
            immunity_minutes: snapshot.immunity_minutes,
            injuries: snapshot.injuries,
            sleep_ticks: 0,
            sleep_disturbances: snapshot.sleep_disturbances,
            disturbance_penalty: snapshot.disturbance_penalty,
            back_to_sleep_in: None,
            gcells: snapshot.gcells,
            bonus_stats: snapshot.bonus_stats,
            protein_overdose: snapshot.protein_overdose,
            shake_count: snapshot.shake_count,
            shaken_egg: snapshot.shaken_egg,
            special_encounter: snapshot.special_encounter,
            fragments: snapshot.fragments.iter().cloned().collect::<AHashSet<_>>(),
            gcell_hatch: snapshot.gcell_hatch,
            poops: snapshot.poops,
            trained_this_cycle: false,
            battled_this_cycle: false,
            seed: snapshot.seed,
            rng: ChaCha8Rng::seed_from_u64(snapshot.seed),
            species,
            module,
        })
    }
}
