//! Per-species stat records supplied by a module

use serde::{Deserialize, Serialize};

use crate::core::types::{Attribute, Hhmm, Stage};
use crate::evolution::requirements::EvolutionRequirement;

/// Read-only stat table for one species+version
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeciesRecord {
    pub name: String,
    pub version: u8,
    pub stage: Stage,
    pub attribute: Attribute,

    /// Per-species sleep window; `None` means the species never sleeps
    /// (unless the module sets a global override)
    pub sleeps: Option<Hhmm>,
    pub wakes: Option<Hhmm>,

    /// Simulated minutes before the evolution engine starts evaluating
    pub evolve_time_minutes: u32,
    /// Simulated minutes between scheduled poops (0 = never)
    pub poop_interval_minutes: u32,

    pub min_weight: u32,
    pub start_weight: u32,
    /// Hunger capacity
    pub stomach: u32,
    /// Minutes between hunger decrements (0 = hunger never drops)
    pub hunger_loss_minutes: u32,
    pub strength_loss_minutes: u32,

    pub power: u32,
    pub hp: u32,
    pub star: u32,
    pub attack: u32,
    pub max_dp: u32,

    /// Doses of medicine needed to cure sickness
    pub heal_doses: u32,
    /// Starting condition hearts (modules with `use_condition_hearts`)
    pub condition_hearts: u32,

    /// Special species require their unlock key achieved before the
    /// evolution engine may select them
    pub special: bool,
    pub special_key: Option<String>,
    pub jogress_available: bool,

    #[serde(rename = "evolution", default)]
    pub evolutions: Vec<EvolutionRequirement>,
}

impl Default for SpeciesRecord {
    fn default() -> Self {
        Self {
            name: String::new(),
            version: 1,
            stage: 0,
            attribute: Attribute::Free,
            sleeps: None,
            wakes: None,
            evolve_time_minutes: 0,
            poop_interval_minutes: 0,
            min_weight: 5,
            start_weight: 5,
            stomach: 4,
            hunger_loss_minutes: 0,
            strength_loss_minutes: 0,
            power: 0,
            hp: 0,
            star: 0,
            attack: 0,
            max_dp: 8,
            heal_doses: 1,
            condition_hearts: 0,
            special: false,
            special_key: None,
            jogress_available: false,
            evolutions: Vec::new(),
        }
    }
}
