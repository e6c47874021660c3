//! Events generated while updating a pet
//!
//! Returned by `Pet::update` for the scene layer's action log; carrying
//! them out instead of logging in place keeps the core presentation-free.

use serde::{Deserialize, Serialize};

use crate::core::types::CareMistakeKind;

/// Which death-save minigame was armed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeathSaveKind {
    ButtonPress,
    Shake,
}

/// Which death condition fired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeathCause {
    Injuries,
    Sickness,
    HungerNeglect,
    StrengthNeglect,
    StageMistakes,
    OldAge,
    Starvation,
    CareMistakes,
}

/// Something notable that happened during a tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PetEvent {
    /// The pet aged one simulated day
    AgedUp { days: u32 },
    /// A neglect timer crossed its threshold
    CareMistake { kind: CareMistakeKind },
    /// The evolution engine accepted a candidate
    Evolved { from: String, to: String },
    /// Death conditions resolved into an actual death
    Died { cause: DeathCause },
    /// Death conditions met; a save minigame was armed instead
    DeathSaveStarted { save: DeathSaveKind },
    /// The player completed the save; immunity granted
    DeathSaveResolved,
    /// A poop landed
    Pooped,
    /// Woke at the configured time; `restored_dp` when sleep was long enough
    WokeUp { restored_dp: bool },
    /// Fed while napping
    SleepDisturbed,
    /// Fell back asleep after a disturbance
    FellAsleep,
    /// A battle win dropped a named fragment
    FragmentFound { name: String },
    /// Post-battle sickness roll succeeded
    Sickened,
    /// The species was new to the discovery log
    Discovered { species: String },
}
