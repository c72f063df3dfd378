//! Shared type definitions for the Skyview profile engine.
//!
//! This crate is the single source of truth for the data model used across
//! the workspace. Output types flow downstream to `TypeScript` via `ts-rs`
//! for the presentation layer.
//!
//! # Modules
//!
//! - [`enums`] -- Closed vocabularies (rarity, item type, stats, skills, sections)
//! - [`stats`] -- The fixed-size [`StatMap`] record
//! - [`ids`] -- Deterministic identifier wrappers
//! - [`item`] -- The classified [`Item`] record
//! - [`profile`] -- Profile input documents in the upstream JSON shape
//! - [`report`] -- Output records assembled by the engine
//! - [`reference`] -- Immutable game reference tables
//! - [`warnings`] -- Recoverable issues recorded on the report

pub mod enums;
pub mod ids;
pub mod item;
pub mod profile;
pub mod reference;
pub mod report;
pub mod stats;
mod tables;
pub mod warnings;

// Re-export all public types at crate root for convenience.
pub use enums::{ItemType, Rarity, Section, Skill, SlayerBoss, StatName};
pub use ids::ItemUid;
pub use item::Item;
pub use profile::{
    Banking, ItemMetadata, ProfileInput, ProfileMember, RawPet, SectionData, SkillExperience,
    SkyblockProfile, SlayerBossProgress,
};
pub use reference::{BagSize, BagTier, BonusSteps, PetItem, PetMetadata, PetReward, ReferenceData};
pub use report::{
    ArmorSet, CollectionProgress, FairySouls, FishingStats, KillCount, LevelInfo, MemberAmount,
    MemberInfo, MissingPet, Pet, PetLevel, PetSummary, ProfileReport, SkillSummary, SlayerLevel,
    SlayerProgress, SlayerSummary,
};
pub use stats::StatMap;
pub use warnings::{ClassificationWarning, ConfigurationGap};
