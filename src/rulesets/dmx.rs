//! X-ruleset strategies

use crate::rulesets::{LifetimeRecord, PowerCalculator, TraitedEggPolicy};

/// X pets grow with their level on top of base power
pub struct DmxPower;

impl PowerCalculator for DmxPower {
    fn power(&self, base: u32, _star: u32, level: u32) -> u32 {
        base + level
    }
}

/// X lines pass on when the pet died at stage 6+ with 10 wins
pub struct DmxTraitedEgg;

impl TraitedEggPolicy for DmxTraitedEgg {
    fn eligible(&self, record: &LifetimeRecord) -> bool {
        record.stage >= 6 && record.wins >= 10
    }
}
