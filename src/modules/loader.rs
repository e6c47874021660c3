//! Load module data (ruleset tunables + species tables) from TOML files
//!
//! A module file carries one `[module]` table and any number of
//! `[[species]]` entries; validation happens once at load time so the
//! rest of the engine never checks shapes again.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::error::{PetError, Result};
use crate::modules::config::ModuleConfig;
use crate::modules::species::SpeciesRecord;

/// A fully loaded, validated module
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Module {
    #[serde(rename = "module")]
    pub config: ModuleConfig,
    #[serde(rename = "species", default)]
    pub species: Vec<SpeciesRecord>,
}

impl Module {
    /// Parse and validate a module from TOML text
    pub fn from_toml(text: &str) -> Result<Arc<Module>> {
        let module: Module = toml::from_str(text)?;
        module.validate()?;
        Ok(Arc::new(module))
    }

    /// Load a module from a file on disk
    pub fn load(path: &Path) -> Result<Arc<Module>> {
        let text = fs::read_to_string(path)?;
        let module = Self::from_toml(&text)?;
        tracing::info!(
            module = %module.config.name,
            ruleset = %module.config.ruleset,
            species = module.species.len(),
            "module loaded"
        );
        Ok(module)
    }

    /// Build an already-assembled module in memory (tests, embedded data)
    pub fn from_parts(config: ModuleConfig, species: Vec<SpeciesRecord>) -> Result<Arc<Module>> {
        let module = Module { config, species };
        module.validate()?;
        Ok(Arc::new(module))
    }

    /// Look up a species by exact name and version
    pub fn species(&self, name: &str, version: u8) -> Option<&SpeciesRecord> {
        self.species
            .iter()
            .find(|s| s.name == name && s.version == version)
    }

    /// Look up a species by name alone (first version wins)
    pub fn species_named(&self, name: &str) -> Option<&SpeciesRecord> {
        self.species.iter().find(|s| s.name == name)
    }

    fn validate(&self) -> Result<()> {
        if self.config.name.is_empty() {
            return Err(PetError::InvalidModule("module name is empty".into()));
        }
        for species in &self.species {
            if species.name.is_empty() {
                return Err(PetError::InvalidModule(format!(
                    "{}: species with empty name",
                    self.config.name
                )));
            }
            if species.stomach == 0 {
                return Err(PetError::InvalidModule(format!(
                    "{}: species '{}' has zero stomach capacity",
                    self.config.name, species.name
                )));
            }
            if species.min_weight > species.start_weight {
                return Err(PetError::InvalidModule(format!(
                    "{}: species '{}' starts below its minimum weight",
                    self.config.name, species.name
                )));
            }
            if species.special && species.special_key.is_none() {
                return Err(PetError::InvalidModule(format!(
                    "{}: special species '{}' has no unlock key",
                    self.config.name, species.name
                )));
            }
            for evo in &species.evolutions {
                let version = evo.to_version.unwrap_or(species.version);
                if self.species(&evo.to, version).is_none() {
                    return Err(PetError::InvalidModule(format!(
                        "{}: species '{}' evolves to unknown '{}' v{}",
                        self.config.name, species.name, evo.to, version
                    )));
                }
            }
        }
        if self.config.use_condition_hearts {
            // Hearts modules need per-species heart counts to mean anything
            let missing = self
                .species
                .iter()
                .filter(|s| s.stage > 0 && s.condition_hearts == 0)
                .count();
            if missing > 0 {
                tracing::warn!(
                    module = %self.config.name,
                    missing,
                    "condition-hearts module has species without hearts"
                );
            }
        }
        Ok(())
    }
}
