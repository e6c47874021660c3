//! Evolution requirement data and predicates
//!
//! A species declares an ordered list of candidates; each candidate is a
//! set of optional requirement fields. Absent fields are not checked.
//! Every predicate is independently testable against a counter snapshot.

use serde::{Deserialize, Serialize};

use crate::core::types::Hhmm;

/// Inclusive numeric range requirement; either bound may be absent
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RangeReq {
    pub min: Option<u32>,
    pub max: Option<u32>,
}

impl RangeReq {
    pub fn at_least(min: u32) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    pub fn at_most(max: u32) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    pub fn between(min: u32, max: u32) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    pub fn contains(&self, value: u32) -> bool {
        if let Some(min) = self.min {
            if value < min {
                return false;
            }
        }
        if let Some(max) = self.max {
            if value > max {
                return false;
            }
        }
        true
    }
}

/// Wall-clock window requirement, overnight-aware
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TimeWindow {
    pub from: Hhmm,
    pub to: Hhmm,
}

impl TimeWindow {
    pub fn contains(&self, now: Hhmm) -> bool {
        now.in_window(self.from, self.to)
    }
}

/// One evolution candidate with its requirement set
///
/// `jogress` and `item` mark candidates reachable only through explicit
/// calls (`armor_evolve`, jogress flows); their presence disqualifies the
/// candidate from the timer-driven engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EvolutionRequirement {
    /// Target species name
    pub to: String,
    /// Target species version; defaults to the pet's current version
    pub to_version: Option<u8>,

    pub mistakes: Option<RangeReq>,
    pub condition_hearts: Option<RangeReq>,
    /// Effort counter accumulated through training
    pub training: Option<RangeReq>,
    pub overfeed: Option<RangeReq>,
    pub level: Option<RangeReq>,
    pub quests_completed: Option<RangeReq>,
    pub weight: Option<RangeReq>,
    pub trophies: Option<RangeReq>,
    pub vital_values: Option<RangeReq>,

    pub blue_gcells: Option<RangeReq>,
    pub yellow_gcells: Option<RangeReq>,
    pub red_gcells: Option<RangeReq>,
    pub gcell_level: Option<RangeReq>,

    /// Per-opponent-stage kill counts
    #[serde(rename = "stage-5")]
    pub stage5_kills: Option<RangeReq>,
    #[serde(rename = "stage-6")]
    pub stage6_kills: Option<RangeReq>,
    #[serde(rename = "stage-7")]
    pub stage7_kills: Option<RangeReq>,
    #[serde(rename = "stage-8")]
    pub stage8_kills: Option<RangeReq>,
    #[serde(rename = "stage-9")]
    pub stage9_kills: Option<RangeReq>,

    pub pvp: Option<RangeReq>,
    pub sleep_disturbances: Option<RangeReq>,
    pub battles: Option<RangeReq>,
    pub win_count: Option<RangeReq>,
    /// Integer win percentage; always fails with zero battles
    pub win_ratio: Option<RangeReq>,
    pub time_range: Option<TimeWindow>,

    /// When present, the pet's special-encounter flag must be true
    pub special_encounter: Option<bool>,
    /// When present, the pet's fragment-hatch flag must be true
    pub gcell_hatch: Option<bool>,

    /// Jogress partner species; excluded from automatic evaluation
    pub jogress: Option<String>,
    /// Item that triggers this evolution via `armor_evolve`
    pub item: Option<String>,
}

impl EvolutionRequirement {
    /// Whether the timer-driven engine may consider this candidate at all
    pub fn auto_evaluable(&self) -> bool {
        self.jogress.is_none() && self.item.is_none()
    }
}

/// Snapshot of the counters evolution predicates read
///
/// Built by the pet right before evaluation so the predicate functions
/// stay free functions over plain data.
#[derive(Debug, Clone, Copy, Default)]
pub struct EvolutionCounters {
    pub mistakes: u32,
    pub condition_hearts: u32,
    pub effort: u32,
    pub overfeed: u32,
    pub level: u32,
    pub quests_completed: u32,
    pub weight: u32,
    pub trophies: u32,
    pub vital_values: u32,
    pub blue_gcells: u32,
    pub yellow_gcells: u32,
    pub red_gcells: u32,
    pub gcell_level: u32,
    pub stage_kills: [u32; 10],
    pub pvp_wins: u32,
    pub sleep_disturbances: u32,
    pub battles: u32,
    pub wins: u32,
    pub special_encounter: bool,
    pub gcell_hatch: bool,
}

/// Test every present requirement against the counters; absent keys pass
pub fn requirements_met(req: &EvolutionRequirement, c: &EvolutionCounters, now: Hhmm) -> bool {
    let ranges = [
        (&req.mistakes, c.mistakes),
        (&req.condition_hearts, c.condition_hearts),
        (&req.training, c.effort),
        (&req.overfeed, c.overfeed),
        (&req.level, c.level),
        (&req.quests_completed, c.quests_completed),
        (&req.weight, c.weight),
        (&req.trophies, c.trophies),
        (&req.vital_values, c.vital_values),
        (&req.blue_gcells, c.blue_gcells),
        (&req.yellow_gcells, c.yellow_gcells),
        (&req.red_gcells, c.red_gcells),
        (&req.gcell_level, c.gcell_level),
        (&req.stage5_kills, c.stage_kills[5]),
        (&req.stage6_kills, c.stage_kills[6]),
        (&req.stage7_kills, c.stage_kills[7]),
        (&req.stage8_kills, c.stage_kills[8]),
        (&req.stage9_kills, c.stage_kills[9]),
        (&req.pvp, c.pvp_wins),
        (&req.sleep_disturbances, c.sleep_disturbances),
        (&req.battles, c.battles),
        (&req.win_count, c.wins),
    ];
    for (range, value) in ranges {
        if let Some(range) = range {
            if !range.contains(value) {
                return false;
            }
        }
    }

    if let Some(ratio) = &req.win_ratio {
        if c.battles == 0 {
            return false;
        }
        let pct = (c.wins * 100) / c.battles;
        if !ratio.contains(pct) {
            return false;
        }
    }

    if let Some(window) = &req.time_range {
        if !window.contains(now) {
            return false;
        }
    }

    if req.special_encounter == Some(true) && !c.special_encounter {
        return false;
    }
    if req.gcell_hatch == Some(true) && !c.gcell_hatch {
        return false;
    }

    true
}
