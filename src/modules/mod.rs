//! Module/monster data provider: ruleset tunables and species tables

pub mod config;
pub mod loader;
pub mod species;

pub use config::{ModuleConfig, UnlockDef};
pub use loader::Module;
pub use species::SpeciesRecord;
