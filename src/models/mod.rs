//! Core data models for the replay meta explorer.

mod match_record;
mod stats;

pub use match_record::*;
pub use stats::*;
