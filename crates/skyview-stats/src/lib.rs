//! Progression and stat computation for Skyview.
//!
//! Everything here is a pure function of the profile, the assembled
//! inventory and the reference tables.
//!
//! # Modules
//!
//! - [`curves`] -- Skill, slayer and pet level curves
//! - [`bonus`] -- Stepped bonus tables
//! - [`levels`] -- Skill summary and skill bonuses
//! - [`slayers`] -- Slayer summary and slayer bonuses
//! - [`pets`] -- Pets, missing pets and pet score
//! - [`fairy`] -- Fairy souls and the exchange bonus
//! - [`kills`] -- Kill, death and fishing counters
//! - [`aggregate`] -- The layered stat pipeline

pub mod aggregate;
pub mod bonus;
pub mod curves;
pub mod fairy;
pub mod kills;
pub mod levels;
pub mod pets;
pub mod slayers;

pub use aggregate::{AggregateStats, ProgressionBonuses, aggregate};
pub use fairy::{fairy_bonus, fairy_souls};
pub use levels::{skill_bonus, skill_summary};
pub use pets::{pet_bonus, pet_score_bonus, pet_summary};
pub use slayers::{slayer_bonus, slayer_summary};
