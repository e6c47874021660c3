//! Evolution requirements and the engine that evaluates them

mod engine;
pub mod requirements;

pub use requirements::{
    requirements_met, EvolutionCounters, EvolutionRequirement, RangeReq, TimeWindow,
};
