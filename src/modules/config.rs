//! Module-wide (ruleset-wide) tunables
//!
//! The original handhelds expose these as loose per-module attributes; here
//! every field is explicit with a documented default. A threshold of 0
//! means the corresponding rule is disabled, never an error.

use serde::{Deserialize, Serialize};

use crate::core::types::{Hhmm, RulesetId};

/// An unlockable recorded in the global registry
///
/// `kind == "evolution"` unlocks are re-checked whenever a pet evolves:
/// if the new species appears in `targets`, the unlock is marked achieved.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UnlockDef {
    pub key: String,
    pub kind: String,
    #[serde(default)]
    pub targets: Vec<String>,
}

/// Ruleset-wide tunables for one module
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleConfig {
    pub name: String,
    pub ruleset: RulesetId,

    // --- care mistake thresholds (simulated minutes; 0 = off) ---
    /// Minutes at hunger 0 before a hunger mistake registers
    pub meat_care_mistake_time: u32,
    /// Minutes at strength 0 before a strength mistake registers
    pub strength_care_mistake_time: u32,
    /// Minutes awake inside the sleep window before a sleep mistake
    pub sleep_care_mistake_time: u32,

    // --- death thresholds (0 = off) ---
    pub death_max_injuries: u32,
    /// Minutes of continuous sickness beyond which the pet can die
    pub death_sick_timer: u32,
    pub death_hunger_timer: u32,
    pub death_strength_timer: u32,
    /// Mistake count fatal at stages 4-5 (once past the evolution timer)
    pub death_stage45_mistakes: u32,
    /// Mistake count fatal at stage 6+ (once 48h old)
    pub death_stage67_mistakes: u32,
    pub death_old_age_days: u32,
    pub death_starvation_count: u32,
    pub death_care_mistakes: u32,

    // --- death-save minigame requirements (0 = that save disabled) ---
    pub death_save_presses: u32,
    pub death_save_shakes: u32,

    // --- feeding / training ---
    /// Minutes the overfeed cooldown runs after an overfeed
    pub overfeed_timer_minutes: u32,
    pub training_effort_gain: u32,
    pub training_strength_gain: u32,
    /// Strength delta applied on a training loss (can be negative)
    pub training_strength_loss: i32,
    /// When true, training strength gain scales with the 0..1 grade
    pub graded_strength_gain: bool,
    /// Weight shed by a training win (floored at the species minimum)
    pub training_weight_loss_win: u32,
    /// Weight shed by a training loss
    pub training_weight_loss_loss: u32,
    pub protein_overdose_max: u32,
    /// Extra sick-chance percent per protein overdose level on a loss
    pub protein_sick_penalty: u32,
    pub disturbance_penalty_max: u32,

    // --- battle sickness base rates (percent) ---
    pub sick_chance_win: u32,
    pub sick_chance_loss: u32,

    // --- vital values ---
    pub vital_gain: u32,
    pub vital_loss: u32,

    // --- sleep ---
    /// Hours of sleep required for a full DP restore on wake
    pub sleep_recovery_hours: u32,
    /// Minutes after a disturbance before the pet falls back asleep
    pub back_to_sleep_minutes: u32,
    /// Global sleep window overriding per-species times when set
    pub sleeps_override: Option<Hhmm>,
    pub wakes_override: Option<Hhmm>,

    // --- mistake accounting / meters ---
    /// Condition hearts replace the cumulative mistake counter
    pub use_condition_hearts: bool,
    pub use_gcells: bool,
    pub gcell_on_training_win: i32,
    pub gcell_on_training_loss: i32,
    pub gcell_on_training_loss_phase2: i32,
    pub gcell_on_care_mistake: i32,

    // --- fragments ---
    /// Substring of an enemy name that can drop a fragment on a win
    pub fragment_marker: Option<String>,
    /// Distinct fragments needed before the gcell-hatch flag raises
    pub fragments_needed: u32,

    /// Shaken-egg tracking (99 shakes while still an egg)
    pub track_shaken_egg: bool,

    #[serde(rename = "unlock", default)]
    pub unlocks: Vec<UnlockDef>,
}

impl Default for ModuleConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            ruleset: RulesetId::Dmc,

            meat_care_mistake_time: 60,
            strength_care_mistake_time: 60,
            sleep_care_mistake_time: 60,

            death_max_injuries: 20,
            death_sick_timer: 360,
            death_hunger_timer: 720,
            death_strength_timer: 720,
            death_stage45_mistakes: 0,
            death_stage67_mistakes: 0,
            death_old_age_days: 0,
            death_starvation_count: 0,
            death_care_mistakes: 0,

            death_save_presses: 0,
            death_save_shakes: 0,

            overfeed_timer_minutes: 30,
            training_effort_gain: 1,
            training_strength_gain: 1,
            training_strength_loss: 0,
            graded_strength_gain: false,
            training_weight_loss_win: 2,
            training_weight_loss_loss: 1,
            protein_overdose_max: 6,
            protein_sick_penalty: 5,
            disturbance_penalty_max: 10,

            sick_chance_win: 10,
            sick_chance_loss: 20,

            vital_gain: 50,
            vital_loss: 1,

            sleep_recovery_hours: 8,
            back_to_sleep_minutes: 10,
            sleeps_override: None,
            wakes_override: None,

            use_condition_hearts: false,
            use_gcells: false,
            gcell_on_training_win: 4,
            gcell_on_training_loss: -2,
            gcell_on_training_loss_phase2: -4,
            gcell_on_care_mistake: -8,

            fragment_marker: None,
            fragments_needed: 0,

            track_shaken_egg: false,

            unlocks: Vec::new(),
        }
    }
}
