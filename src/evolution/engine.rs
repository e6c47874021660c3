//! The timer-driven evolution engine plus the explicit paths
//!
//! Candidates are evaluated in module order and the first satisfied one
//! wins, so module authors put specific forms before fallbacks. A locked
//! special target is skipped, never a failure. Jogress and item
//! candidates only fire through their explicit entry points.

use crate::core::clock::Clock;
use crate::core::error::{PetError, Result};
use crate::core::types::PetState;
use crate::evolution::requirements::{requirements_met, EvolutionCounters};
use crate::modules::SpeciesRecord;
use crate::pet::events::PetEvent;
use crate::pet::pet::{Pet, SHAKEN_EGG_SHAKES};
use crate::registry::GlobalRegistry;

impl Pet {
    /// Counter snapshot the requirement predicates read
    pub(crate) fn evolution_counters(&self) -> EvolutionCounters {
        EvolutionCounters {
            mistakes: self.mistakes,
            condition_hearts: self.condition_hearts,
            effort: self.effort,
            overfeed: self.overfeed_count,
            level: self.level,
            quests_completed: self.quests_completed,
            weight: self.weight,
            trophies: self.trophies,
            vital_values: self.vital_values,
            blue_gcells: self.gcells.blue(),
            yellow_gcells: self.gcells.yellow(),
            red_gcells: self.gcells.red(),
            gcell_level: self.gcells.level(),
            stage_kills: self.enemy_kills,
            pvp_wins: self.pvp_wins,
            sleep_disturbances: self.sleep_disturbances,
            battles: self.battles,
            wins: self.wins,
            special_encounter: self.special_encounter,
            gcell_hatch: self.gcell_hatch,
        }
    }

    /// Evaluate automatic evolution once per minute
    ///
    /// Runs only after the species' evolution timer elapsed, and (for
    /// anything but an egg) only while the pet is currently well cared
    /// for; a hungry, weak, sick or sleepy pet simply waits.
    pub(crate) fn update_evolution(
        &mut self,
        clock: &dyn Clock,
        registry: &mut GlobalRegistry,
        events: &mut Vec<PetEvent>,
    ) {
        if self.dying || self.species.evolutions.is_empty() {
            return;
        }
        // stage 6+ forms only change through the explicit paths
        if self.species.stage > 5 {
            return;
        }
        if self.species_minutes() < self.species.evolve_time_minutes as u64 {
            return;
        }
        let is_egg = self.species.stage == 0;
        if !is_egg && !self.well_cared_for(clock) {
            return;
        }

        let counters = self.evolution_counters();
        let now = clock.now_hhmm();
        let module = self.module.clone();
        for req in self.species.evolutions.clone() {
            if !req.auto_evaluable() {
                continue;
            }
            let version = req.to_version.unwrap_or(self.species.version);
            let Some(target) = module.species(&req.to, version) else {
                continue;
            };
            if target.special {
                let unlocked = target
                    .special_key
                    .as_deref()
                    .is_some_and(|key| registry.is_unlocked(key));
                if !unlocked {
                    continue;
                }
            }
            if requirements_met(&req, &counters, now) {
                self.accept_evolution(target.clone(), registry, events);
                return;
            }
        }
    }

    /// Explicit evolution to a named species (jogress flows, debug menus)
    pub fn evolve_to(
        &mut self,
        name: &str,
        version: Option<u8>,
        registry: &mut GlobalRegistry,
        events: &mut Vec<PetEvent>,
    ) -> Result<()> {
        let version = version.unwrap_or(self.species.version);
        let target = self
            .module
            .species(name, version)
            .cloned()
            .ok_or_else(|| PetError::UnknownSpecies {
                module: self.module.config.name.clone(),
                name: name.to_string(),
                version,
            })?;
        self.accept_evolution(target, registry, events);
        Ok(())
    }

    /// Item-triggered evolution; returns whether a candidate matched
    pub fn armor_evolve(
        &mut self,
        item: &str,
        registry: &mut GlobalRegistry,
        events: &mut Vec<PetEvent>,
    ) -> bool {
        let module = self.module.clone();
        let candidate = self
            .species
            .evolutions
            .iter()
            .find(|req| req.item.as_deref() == Some(item))
            .cloned();
        let Some(req) = candidate else {
            return false;
        };
        let version = req.to_version.unwrap_or(self.species.version);
        let Some(target) = module.species(&req.to, version) else {
            return false;
        };
        self.accept_evolution(target.clone(), registry, events);
        true
    }

    fn accept_evolution(
        &mut self,
        target: SpeciesRecord,
        registry: &mut GlobalRegistry,
        events: &mut Vec<PetEvent>,
    ) {
        let from = self.species.name.clone();
        let was_egg = self.species.stage == 0;

        if was_egg
            && self.module.config.track_shaken_egg
            && self.shake_count >= SHAKEN_EGG_SHAKES
        {
            self.shaken_egg = true;
        }

        self.apply_species(target);
        self.set_state(
            if was_egg {
                PetState::Hatch
            } else {
                PetState::Happy2
            },
            true,
        );

        if registry.discover(&self.species.name) {
            events.push(PetEvent::Discovered {
                species: self.species.name.clone(),
            });
        }
        for unlock in &self.module.config.unlocks {
            if unlock.kind == "evolution" && unlock.targets.iter().any(|t| t == &self.species.name)
            {
                registry.unlock(&unlock.key);
            }
        }

        tracing::info!(%from, to = %self.species.name, "evolved");
        events.push(PetEvent::Evolved {
            from,
            to: self.species.name.clone(),
        });
    }
}
