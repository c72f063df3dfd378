//! Profile engine for Skyview.
//!
//! Ties the workspace together: loads configuration and reference tables,
//! gathers document-store lookups, and runs the synchronous pipeline that
//! turns one member of one profile into a
//! [`ProfileReport`](skyview_types::ProfileReport).
//!
//! # Modules
//!
//! - [`config`] -- YAML configuration and reference overrides
//! - [`engine`] -- [`ProfileEngine`], the pipeline entry point
//! - [`lookup`] -- Document-store trait and concurrent enrichment
//! - [`leaderboard`] -- Values for the ranking store
//! - [`error`] -- Engine error type

pub mod config;
pub mod engine;
pub mod error;
pub mod leaderboard;
pub mod lookup;

pub use config::{ConfigError, EngineConfig};
pub use engine::ProfileEngine;
pub use error::EngineError;
pub use leaderboard::{LeaderboardValues, leaderboard_values};
pub use lookup::{Enrichment, LookupFailure, LookupStore, StaticLookupStore, enrich};
