//! # Replay Meta
//!
//! Usage and winrate explorer for scraped tournament replay data.
//!
//! Loads a JSON array of match records once per run, filters by
//! tournament, player, or roster member, and renders match cards plus an
//! aggregate usage/winrate table.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (match records, stat rows)
//! - **fetch**: One-shot dataset loading from a URL or file
//! - **normalize**: Canonical roster names and case folding
//! - **filter**: Subset selection over the loaded dataset
//! - **calculate**: Usage/winrate statistics computation
//! - **sprite**: Best-effort sprite URL resolution
//! - **render**: Terminal output of cards and tables
//! - **config**: Configuration loading and validation

pub mod calculate;
pub mod config;
pub mod fetch;
pub mod filter;
pub mod models;
pub mod normalize;
pub mod render;
pub mod sprite;

pub use models::*;
