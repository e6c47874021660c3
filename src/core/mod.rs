//! Core types, timing configuration, clock seam and error handling

pub mod clock;
pub mod config;
pub mod error;
pub mod types;
