//! Roster-level simulation driver

mod tick;

pub use tick::Roster;
