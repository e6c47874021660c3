//! Classic-ruleset strategies

use crate::rulesets::{LifetimeRecord, PowerCalculator, TraitedEggPolicy};

pub struct DmcPower;

impl PowerCalculator for DmcPower {
    fn power(&self, base: u32, _star: u32, _level: u32) -> u32 {
        base
    }
}

/// A classic pet that reached stage 5 and lived at least 8 days passes
/// its trait on
pub struct DmcTraitedEgg;

impl TraitedEggPolicy for DmcTraitedEgg {
    fn eligible(&self, record: &LifetimeRecord) -> bool {
        record.stage >= 5 && record.age_days >= 8
    }
}
