//! Feeding, training and battle outcome application
//!
//! Battles and training runs are resolved elsewhere (scene layer, match
//! server); the entity only applies their consequences. Sickness rolls
//! consume the protein-overdose and disturbed-sleep modifiers that
//! accumulated since the last roll.

use crate::core::types::{FoodKind, PetState, Stage};
use crate::pet::events::PetEvent;
use crate::pet::pet::{Pet, MAX_STRENGTH, MAX_WEIGHT};

/// What happened in one battle, as reported by the resolver
#[derive(Debug, Clone)]
pub struct BattleReport {
    pub won: bool,
    pub enemy_name: String,
    pub enemy_stage: Stage,
    /// Adventure area the battle belonged to (0 for casual fights)
    pub area: u32,
    /// Final boss of its area
    pub final_battle: bool,
    /// Random encounters never advance area progress or trophies
    pub random_encounter: bool,
}

impl Pet {
    /// Offer food; returns whether the pet actually ate
    ///
    /// Feeding a napping pet first wakes it as a sleep disturbance, then
    /// the meal proceeds as normal.
    pub fn set_eating(&mut self, food: FoodKind, amount: u32, events: &mut Vec<PetEvent>) -> bool {
        if self.state == PetState::Dead || self.species.stage == 0 {
            return false;
        }
        self.check_disturbed_sleep(events);

        match food {
            FoodKind::Meat => {
                if self.hunger >= self.species.stomach {
                    if self.overfeed_timer > 0 {
                        // refuses anything during the overfeed cooldown
                        self.set_state(PetState::Nope, false);
                        return false;
                    }
                    self.overfeed_count += 1;
                    self.overfeed_timer = self.module.config.overfeed_timer_minutes;
                } else {
                    self.hunger = (self.hunger + amount).min(self.species.stomach);
                }
                self.weight = (self.weight + 1).min(MAX_WEIGHT);
                self.set_state(PetState::Eat, true);
                true
            }
            FoodKind::Protein => {
                self.strength = (self.strength + amount).min(MAX_STRENGTH);
                self.protein_overdose =
                    (self.protein_overdose + 1).min(self.module.config.protein_overdose_max);
                self.weight = (self.weight + 1).min(MAX_WEIGHT);
                self.set_state(PetState::Eat, true);
                true
            }
            FoodKind::Vitamin => {
                self.dp = (self.dp + amount).min(self.species.max_dp);
                self.set_state(PetState::Eat, true);
                true
            }
            FoodKind::Medicine => {
                if self.sick_doses == 0 {
                    self.set_state(PetState::Nope, false);
                    return false;
                }
                self.sick_doses = self.sick_doses.saturating_sub(amount);
                if self.sick_doses == 0 {
                    self.set_state(PetState::Happy2, true);
                } else {
                    self.set_state(PetState::Sick, true);
                }
                true
            }
        }
    }

    /// Apply a finished training run
    ///
    /// `grade` is the 0..1 performance score from the minigame; `phase2`
    /// selects the harsher G-Cell loss used by second-phase drills.
    pub fn finish_training(&mut self, won: bool, grade: f32, phase2: bool) {
        let config = self.module.config.clone();
        self.trained_this_cycle = true;
        let weight_loss = if won {
            config.training_weight_loss_win
        } else {
            config.training_weight_loss_loss
        };
        self.weight = self
            .weight
            .saturating_sub(weight_loss)
            .max(self.species.min_weight);

        if won {
            self.effort += config.training_effort_gain;
            let gain = if config.graded_strength_gain {
                (config.training_strength_gain as f32 * grade.clamp(0.0, 1.0)).round() as u32
            } else {
                config.training_strength_gain
            };
            self.strength = (self.strength + gain).min(MAX_STRENGTH);
            // exercise works off some of the disturbed-sleep grumpiness
            self.disturbance_penalty = self.disturbance_penalty.saturating_sub(2);
            self.gain_experience(10);
            if config.use_gcells {
                self.gcells.add_points(config.gcell_on_training_win);
            }
            self.set_state(PetState::Happy2, true);
        } else {
            let strength = self.strength as i64 + config.training_strength_loss as i64;
            self.strength = strength.clamp(0, MAX_STRENGTH as i64) as u32;
            self.gain_experience(4);
            if config.use_gcells {
                let delta = if phase2 {
                    config.gcell_on_training_loss_phase2
                } else {
                    config.gcell_on_training_loss
                };
                self.gcells.add_points(delta);
            }
            self.set_state(PetState::Angry, true);
        }
    }

    /// Apply a finished battle
    pub fn finish_battle(&mut self, report: &BattleReport, events: &mut Vec<PetEvent>) {
        let config = self.module.config.clone();
        self.dp = self.dp.saturating_sub(1);
        self.battles += 1;
        self.battled_this_cycle = true;

        if report.won {
            self.wins += 1;
            self.gain_experience(12);
            let slot = (report.enemy_stage as usize).min(self.enemy_kills.len() - 1);
            self.enemy_kills[slot] += 1;

            if !report.random_encounter {
                if report.area > self.area {
                    self.area = report.area;
                }
                if report.final_battle {
                    self.trophies += 1;
                    self.quests_completed += 1;
                }
            }

            self.roll_fragment(report, events);
            self.set_state(PetState::Happy, true);
        } else {
            self.gain_experience(4);
            self.set_state(PetState::Lose, true);
        }

        self.roll_sickness(report.won, events);
    }

    /// Apply a finished versus (link) battle
    pub fn finish_versus(&mut self, won: bool, events: &mut Vec<PetEvent>) {
        self.dp = self.dp.saturating_sub(1);
        self.battles += 1;
        self.battled_this_cycle = true;
        if won {
            self.wins += 1;
            self.pvp_wins += 1;
            self.gain_experience(12);
            self.set_state(PetState::Happy, true);
        } else {
            self.gain_experience(4);
            self.set_state(PetState::Lose, true);
        }
        self.roll_sickness(won, events);
    }

    /// Immediate poop (the scene layer's potty item)
    pub fn force_poop(&mut self, events: &mut Vec<PetEvent>) {
        if self.state == PetState::Dead || self.species.stage == 0 {
            return;
        }
        self.drop_poop(events);
    }

    /// Chance of a fragment drop from a marked enemy
    fn roll_fragment(&mut self, report: &BattleReport, events: &mut Vec<PetEvent>) {
        use rand::Rng;
        let config = &self.module.config;
        if !config.use_gcells {
            return;
        }
        let Some(marker) = config.fragment_marker.as_deref() else {
            return;
        };
        if !report.enemy_name.contains(marker) {
            return;
        }
        if self.rng.gen_range(0..100) >= 15 {
            return;
        }
        if self.fragments.insert(report.enemy_name.clone()) {
            events.push(PetEvent::FragmentFound {
                name: report.enemy_name.clone(),
            });
        }
        if config.fragments_needed > 0 && self.fragments.len() as u32 >= config.fragments_needed {
            self.gcell_hatch = true;
        }
    }

    /// Post-battle sickness roll; consumes the accumulated modifiers
    fn roll_sickness(&mut self, won: bool, events: &mut Vec<PetEvent>) {
        use rand::Rng;
        let config = &self.module.config;
        let chance = if won {
            config.sick_chance_win
        } else {
            config.sick_chance_loss
                + self.protein_overdose * config.protein_sick_penalty
                + self.disturbance_penalty
        };
        self.protein_overdose = 0;
        self.disturbance_penalty = 0;

        let chance = chance.min(100);
        if chance == 0 || self.rng.gen_range(0..100) >= chance {
            return;
        }
        self.sick_doses = self.species.heal_doses.max(1);
        self.injuries += 1;
        self.set_state(PetState::Sick, true);
        events.push(PetEvent::Sickened);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pet::test_support::{gcell_module, hatched_pet, module_with, test_module};

    fn casual_win(name: &str) -> BattleReport {
        BattleReport {
            won: true,
            enemy_name: name.to_string(),
            enemy_stage: 3,
            area: 0,
            final_battle: false,
            random_encounter: false,
        }
    }

    #[test]
    fn test_meat_fills_stomach_and_caps() {
        let module = test_module();
        let mut pet = hatched_pet(&module);
        pet.hunger = 1;
        let mut events = Vec::new();
        assert!(pet.set_eating(FoodKind::Meat, 2, &mut events));
        assert_eq!(pet.hunger, 3);
        assert!(pet.set_eating(FoodKind::Meat, 2, &mut events));
        assert_eq!(pet.hunger, 4);
    }

    #[test]
    fn test_meat_when_full_starts_overfeed_then_refuses() {
        let module = test_module();
        let mut pet = hatched_pet(&module);
        let mut events = Vec::new();
        // full stomach: first extra meal overfeeds, second is refused
        assert!(pet.set_eating(FoodKind::Meat, 1, &mut events));
        assert_eq!(pet.overfeed_count, 1);
        assert_eq!(pet.overfeed_timer, module.config.overfeed_timer_minutes);
        assert!(!pet.set_eating(FoodKind::Meat, 1, &mut events));
        assert_eq!(pet.state, PetState::Nope);
        assert_eq!(pet.overfeed_count, 1);
    }

    #[test]
    fn test_feeding_napping_pet_disturbs_sleep() {
        let module = test_module();
        let mut pet = hatched_pet(&module);
        let clock = crate::core::clock::FixedClock::at(23, 0);
        assert!(pet.nap(&clock));
        pet.hunger = 2;
        let mut events = Vec::new();
        assert!(pet.set_eating(FoodKind::Meat, 1, &mut events));
        assert!(events.contains(&PetEvent::SleepDisturbed));
        assert_eq!(pet.sleep_disturbances, 1);
        assert_eq!(pet.hunger, 3);
    }

    #[test]
    fn test_protein_builds_overdose() {
        let module = test_module();
        let mut pet = hatched_pet(&module);
        let mut events = Vec::new();
        for _ in 0..20 {
            pet.set_eating(FoodKind::Protein, 1, &mut events);
        }
        assert_eq!(pet.protein_overdose, module.config.protein_overdose_max);
        assert_eq!(pet.strength, 4);
    }

    #[test]
    fn test_medicine_cures_by_doses() {
        let module = test_module();
        let mut pet = hatched_pet(&module);
        let mut events = Vec::new();
        assert!(!pet.set_eating(FoodKind::Medicine, 1, &mut events));

        pet.sick_doses = 2;
        pet.set_state(PetState::Sick, false);
        assert!(pet.set_eating(FoodKind::Medicine, 1, &mut events));
        assert_eq!(pet.sick_doses, 1);
        assert_eq!(pet.state, PetState::Sick);
        assert!(pet.set_eating(FoodKind::Medicine, 1, &mut events));
        assert_eq!(pet.sick_doses, 0);
        assert_eq!(pet.state, PetState::Happy2);
    }

    #[test]
    fn test_training_win_builds_effort_and_strength() {
        let module = test_module();
        let mut pet = hatched_pet(&module);
        pet.strength = 2;
        pet.finish_training(true, 1.0, false);
        assert_eq!(pet.effort, module.config.training_effort_gain);
        assert_eq!(pet.strength, 2 + module.config.training_strength_gain);
        assert!(pet.trained_this_cycle);
        assert_eq!(pet.state, PetState::Happy2);
    }

    #[test]
    fn test_training_win_works_off_disturbance_penalty() {
        let module = test_module();
        let mut pet = hatched_pet(&module);
        pet.disturbance_penalty = 3;
        pet.finish_training(true, 1.0, false);
        assert_eq!(pet.disturbance_penalty, 1);
        pet.finish_training(true, 1.0, false);
        assert_eq!(pet.disturbance_penalty, 0, "saturates at zero");

        // losses leave the penalty for the sickness roll
        pet.disturbance_penalty = 3;
        pet.finish_training(false, 0.0, false);
        assert_eq!(pet.disturbance_penalty, 3);
    }

    #[test]
    fn test_training_weight_loss_per_outcome() {
        let module = module_with("training_weight_loss_win = 3\ntraining_weight_loss_loss = 1");
        let mut pet = hatched_pet(&module);
        pet.weight = 20;
        pet.finish_training(true, 1.0, false);
        assert_eq!(pet.weight, 17);
        pet.finish_training(false, 0.0, false);
        assert_eq!(pet.weight, 16);

        // never drops under the species minimum
        pet.weight = pet.species.min_weight + 1;
        pet.finish_training(true, 1.0, false);
        assert_eq!(pet.weight, pet.species.min_weight);
    }

    #[test]
    fn test_training_gcell_deltas() {
        let module = gcell_module();
        let mut pet = hatched_pet(&module);
        pet.finish_training(true, 1.0, false);
        assert_eq!(
            pet.gcells.points(),
            module.config.gcell_on_training_win as u32
        );
        let before = pet.gcells.points() as i32;
        pet.finish_training(false, 0.0, true);
        assert_eq!(
            pet.gcells.points() as i32,
            (before + module.config.gcell_on_training_loss_phase2).max(0)
        );
    }

    #[test]
    fn test_battle_win_tracks_progress_except_random_encounters() {
        let module = module_with("sick_chance_win = 0");
        let mut pet = hatched_pet(&module);
        let mut events = Vec::new();

        let mut report = casual_win("goblin");
        report.area = 3;
        report.final_battle = true;
        pet.finish_battle(&report, &mut events);
        assert_eq!(pet.wins, 1);
        assert_eq!(pet.area, 3);
        assert_eq!(pet.trophies, 1);
        assert_eq!(pet.quests_completed, 1);
        assert_eq!(pet.enemy_kills[3], 1);
        assert_eq!(pet.dp, pet.species.max_dp - 1);

        let mut random = casual_win("slime");
        random.area = 9;
        random.final_battle = true;
        random.random_encounter = true;
        pet.finish_battle(&random, &mut events);
        assert_eq!(pet.wins, 2);
        assert_eq!(pet.area, 3, "random encounters never advance the area");
        assert_eq!(pet.trophies, 1);
    }

    #[test]
    fn test_loss_sickness_consumes_modifiers() {
        // guaranteed sickness on loss, none on win
        let module = module_with("sick_chance_loss = 100\nsick_chance_win = 0");
        let mut pet = hatched_pet(&module);
        pet.protein_overdose = 3;
        pet.disturbance_penalty = 2;
        let mut events = Vec::new();

        let mut report = casual_win("goblin");
        report.won = false;
        pet.finish_battle(&report, &mut events);
        assert!(events.contains(&PetEvent::Sickened));
        assert_eq!(pet.state, PetState::Sick);
        assert_eq!(pet.sick_doses, pet.species.heal_doses);
        assert_eq!(pet.injuries, 1);
        assert_eq!(pet.protein_overdose, 0, "modifier consumed by the roll");
        assert_eq!(pet.disturbance_penalty, 0);
    }

    #[test]
    fn test_win_with_zero_chance_never_sickens() {
        let module = module_with("sick_chance_win = 0");
        let mut pet = hatched_pet(&module);
        let mut events = Vec::new();
        for i in 0..50 {
            pet.dp = pet.species.max_dp;
            pet.set_state(PetState::Idle, true);
            pet.finish_battle(&casual_win(&format!("mob-{i}")), &mut events);
        }
        assert!(!events.contains(&PetEvent::Sickened));
        assert_eq!(pet.wins, 50);
    }

    #[test]
    fn test_versus_win_counts_pvp() {
        let module = module_with("sick_chance_win = 0\nsick_chance_loss = 0");
        let mut pet = hatched_pet(&module);
        let mut events = Vec::new();
        pet.finish_versus(true, &mut events);
        pet.finish_versus(false, &mut events);
        assert_eq!(pet.battles, 2);
        assert_eq!(pet.wins, 1);
        assert_eq!(pet.pvp_wins, 1);
    }

    #[test]
    fn test_fragments_eventually_raise_gcell_hatch() {
        let module = gcell_module();
        let mut pet = hatched_pet(&module);
        let mut events = Vec::new();
        // marked enemies; the 15% roll lands often enough over 200 wins
        for i in 0..200 {
            pet.finish_battle(&casual_win(&format!("gigas-{}", i % 2)), &mut events);
            pet.dp = pet.species.max_dp;
            pet.sick_doses = 0;
            pet.set_state(PetState::Idle, true);
        }
        let found = events
            .iter()
            .filter(|e| matches!(e, PetEvent::FragmentFound { .. }))
            .count();
        assert_eq!(found, 2, "each distinct fragment reported once");
        assert!(pet.gcell_hatch);
    }
}
