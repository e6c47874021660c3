//! Ruleset-specific behavior behind common traits
//!
//! The original engine branches on the ruleset string inside many methods;
//! here each ruleset is one implementation selected once at pet
//! construction. Adding a ruleset means adding a file, not touching the
//! pet.

pub mod dmc;
pub mod dmx;
pub mod penc;
pub mod vb;

use std::fmt;

use crate::core::types::{RulesetId, Stage};

/// Computes a pet's effective battle power
pub trait PowerCalculator: Sync {
    fn power(&self, base: u32, star: u32, level: u32) -> u32;
}

/// Lifetime counters a traited-egg policy may inspect at death
#[derive(Debug, Clone, Copy, Default)]
pub struct LifetimeRecord {
    pub stage: Stage,
    pub age_days: u32,
    pub battles: u32,
    pub wins: u32,
    pub vital_values: u32,
}

/// Decides whether a dead pet's line earns a traited egg
pub trait TraitedEggPolicy: Sync {
    fn eligible(&self, record: &LifetimeRecord) -> bool;
}

/// The strategy pair for one ruleset, resolved once per pet
#[derive(Clone, Copy)]
pub struct RulesetStrategies {
    pub power: &'static dyn PowerCalculator,
    pub traited_egg: &'static dyn TraitedEggPolicy,
}

impl fmt::Debug for RulesetStrategies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RulesetStrategies(..)")
    }
}

static DMC: RulesetStrategies = RulesetStrategies {
    power: &dmc::DmcPower,
    traited_egg: &dmc::DmcTraitedEgg,
};
static PENC: RulesetStrategies = RulesetStrategies {
    power: &penc::PencPower,
    traited_egg: &penc::PencTraitedEgg,
};
static DMX: RulesetStrategies = RulesetStrategies {
    power: &dmx::DmxPower,
    traited_egg: &dmx::DmxTraitedEgg,
};
static VB: RulesetStrategies = RulesetStrategies {
    power: &vb::VbPower,
    traited_egg: &vb::VbTraitedEgg,
};

/// Resolve the strategies for a ruleset
pub fn strategies(ruleset: RulesetId) -> &'static RulesetStrategies {
    match ruleset {
        RulesetId::Dmc => &DMC,
        RulesetId::Penc => &PENC,
        RulesetId::Dmx => &DMX,
        RulesetId::Vb => &VB,
    }
}
