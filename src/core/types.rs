//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Game tick counter (simulation time unit)
pub type Tick = u64;

/// Evolution stage (0 = egg)
pub type Stage = u8;

/// Presentation and behavior state of a pet
///
/// Transitions go through `Pet::set_state`; `Dead` is absorbing and an egg
/// (stage 0) only accepts `Idle` and `Hatch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PetState {
    Idle,
    Moving,
    Happy,
    Happy2,
    Happy3,
    Angry,
    Sick,
    Nap,
    Pooping,
    Eat,
    Nope,
    Hatch,
    Lose,
    Dead,
    Tired,
    Train,
    Attack,
}

impl PetState {
    /// States during which idle-wander movement runs
    pub fn is_roaming(self) -> bool {
        matches!(self, PetState::Idle | PetState::Moving)
    }
}

/// Species attribute (rock-paper-scissors axis for the battle layer)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attribute {
    Data,
    Vaccine,
    Virus,
    Free,
}

impl Default for Attribute {
    fn default() -> Self {
        Attribute::Free
    }
}

/// Ruleset namespace a module belongs to
///
/// Each ruleset carries its own power formula and traited-egg policy
/// (see `crate::rulesets`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RulesetId {
    Dmc,
    Penc,
    Dmx,
    Vb,
}

impl Default for RulesetId {
    fn default() -> Self {
        RulesetId::Dmc
    }
}

impl fmt::Display for RulesetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RulesetId::Dmc => "dmc",
            RulesetId::Penc => "penc",
            RulesetId::Dmx => "dmx",
            RulesetId::Vb => "vb",
        };
        write!(f, "{}", s)
    }
}

/// Kinds of care mistake the supervisor can register
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CareMistakeKind {
    Hunger,
    Strength,
    Sleep,
}

/// Food kinds accepted by `Pet::set_eating`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FoodKind {
    Meat,
    Protein,
    Vitamin,
    Medicine,
}

/// Wall-clock time of day with minute resolution ("HH:MM")
///
/// Serialized as the string form so module TOML can write `sleeps = "22:00"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hhmm {
    pub hour: u8,
    pub minute: u8,
}

impl Hhmm {
    pub fn new(hour: u8, minute: u8) -> Self {
        Self { hour, minute }
    }

    /// Minutes since midnight
    pub fn minute_of_day(self) -> u32 {
        self.hour as u32 * 60 + self.minute as u32
    }

    /// Whether `self` falls inside [from, to), handling windows that span
    /// midnight (from later than to means the window wraps overnight)
    pub fn in_window(self, from: Hhmm, to: Hhmm) -> bool {
        let now = self.minute_of_day();
        let from = from.minute_of_day();
        let to = to.minute_of_day();
        if from <= to {
            now >= from && now < to
        } else {
            now >= from || now < to
        }
    }
}

impl From<chrono::NaiveTime> for Hhmm {
    fn from(t: chrono::NaiveTime) -> Self {
        use chrono::Timelike;
        Self {
            hour: t.hour() as u8,
            minute: t.minute() as u8,
        }
    }
}

impl fmt::Display for Hhmm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for Hhmm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (h, m) = s
            .split_once(':')
            .ok_or_else(|| format!("expected HH:MM, got '{}'", s))?;
        let hour: u8 = h.parse().map_err(|_| format!("bad hour in '{}'", s))?;
        let minute: u8 = m.parse().map_err(|_| format!("bad minute in '{}'", s))?;
        if hour > 23 || minute > 59 {
            return Err(format!("time out of range: '{}'", s));
        }
        Ok(Self { hour, minute })
    }
}

impl Serialize for Hhmm {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Hhmm {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
