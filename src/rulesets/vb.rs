//! Vital-bracelet-ruleset strategies

use crate::rulesets::{LifetimeRecord, PowerCalculator, TraitedEggPolicy};

/// Bracelet pets weight their star rating heavily: each star is worth 16
/// power on top of the base
pub struct VbPower;

impl PowerCalculator for VbPower {
    fn power(&self, base: u32, star: u32, _level: u32) -> u32 {
        base + star * 16
    }
}

/// Bracelet lines pass on when the pet died with a nearly full vital
/// gauge
pub struct VbTraitedEgg;

impl TraitedEggPolicy for VbTraitedEgg {
    fn eligible(&self, record: &LifetimeRecord) -> bool {
        record.vital_values >= 8000
    }
}
