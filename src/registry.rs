//! Global discovery and unlock registries
//!
//! Constructed once at process start and passed by reference to the pets
//! that need them. Both sets are append-only and idempotent: registering
//! the same key twice is a no-op.

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

/// Process-wide registry of discovered species and achieved unlocks
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalRegistry {
    discovered: AHashSet<String>,
    unlocks: AHashSet<String>,
}

impl GlobalRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a species in the discovery log; returns true when new
    pub fn discover(&mut self, species: &str) -> bool {
        let new = self.discovered.insert(species.to_string());
        if new {
            tracing::info!(species, "species discovered");
        }
        new
    }

    pub fn is_discovered(&self, species: &str) -> bool {
        self.discovered.contains(species)
    }

    /// Mark an unlock achieved; returns true when newly achieved
    pub fn unlock(&mut self, key: &str) -> bool {
        let new = self.unlocks.insert(key.to_string());
        if new {
            tracing::info!(key, "unlock achieved");
        }
        new
    }

    pub fn is_unlocked(&self, key: &str) -> bool {
        self.unlocks.contains(key)
    }

    pub fn discovered_count(&self) -> usize {
        self.discovered.len()
    }
}
