//! Pendulum-ruleset strategies

use crate::rulesets::{LifetimeRecord, PowerCalculator, TraitedEggPolicy};

pub struct PencPower;

impl PowerCalculator for PencPower {
    fn power(&self, base: u32, _star: u32, _level: u32) -> u32 {
        base
    }
}

/// Pendulum lines are earned through the battle record: at least 15
/// battles with a 40% win ratio
pub struct PencTraitedEgg;

impl TraitedEggPolicy for PencTraitedEgg {
    fn eligible(&self, record: &LifetimeRecord) -> bool {
        if record.battles < 15 {
            return false;
        }
        (record.wins * 100) / record.battles >= 40
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_traited_egg_win_ratio() {
        let mut record = LifetimeRecord {
            battles: 20,
            wins: 8,
            ..Default::default()
        };
        assert!(PencTraitedEgg.eligible(&record));
        record.wins = 7;
        assert!(!PencTraitedEgg.eligible(&record));
    }

    #[test]
    fn test_traited_egg_needs_battles() {
        let record = LifetimeRecord {
            battles: 10,
            wins: 10,
            ..Default::default()
        };
        assert!(!PencTraitedEgg.eligible(&record));
    }
}
