//! The pet entity: needs, sleep, death, outcomes and persistence
//!
//! `Pet` is one struct whose behavior is split across focused impl
//! files; `pet.rs` owns the struct and the per-tick fan-out, the rest
//! each own one concern.

pub mod events;
pub mod gcell;
pub mod outcome;
#[allow(clippy::module_inception)]
pub mod pet;
pub mod snapshot;

mod death;
mod needs;
mod sleep;
mod state;
mod stats;

#[cfg(test)]
pub(crate) mod test_support;

pub use events::{DeathCause, DeathSaveKind, PetEvent};
pub use gcell::{GcellMeter, GCELL_MAX};
pub use outcome::BattleReport;
pub use pet::Pet;
pub use snapshot::PetSnapshot;

pub use death::{DEAD_REMOVAL_TICKS, IMMUNITY_MINUTES};
