//! vpet-core: a virtual-pet lifecycle simulation engine
//!
//! Pets are plain entities driven by a per-frame `update` call: needs
//! decay on species-specific schedules, neglect accumulates into care
//! mistakes, death conditions arm a save minigame, and a data-driven
//! evolution engine walks ordered candidate lists loaded from module
//! TOML files. Ruleset-specific behavior (power formulas, traited-egg
//! qualification) sits behind strategy traits selected once per pet.

pub mod core;
pub mod evolution;
pub mod modules;
pub mod pet;
pub mod registry;
pub mod rulesets;
pub mod simulation;

pub use crate::core::clock::{Clock, FixedClock, SystemClock};
pub use crate::core::config::SimConfig;
pub use crate::core::error::{PetError, Result};
pub use crate::core::types::{Attribute, CareMistakeKind, FoodKind, Hhmm, PetState, RulesetId};
pub use crate::modules::Module;
pub use crate::pet::{BattleReport, Pet, PetEvent, PetSnapshot};
pub use crate::registry::GlobalRegistry;
pub use crate::simulation::Roster;
