//! Recoverable issues recorded on the report instead of failing it.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::enums::Section;

/// Something about an item could not be classified.
///
/// The affected derived field is left unset and processing continues.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum ClassificationWarning {
    /// A recognized stat line whose value is not a number.
    #[error("item {item_index}: unparseable stat line {line:?}")]
    UnparseableStat {
        /// Item the line belongs to.
        item_index: usize,
        /// The colour-stripped lore line.
        line: String,
    },

    /// The rarity line carries neither a known colour nor a known word.
    #[error("item {item_index}: unknown rarity {word:?}")]
    UnknownRarity {
        /// Item the line belongs to.
        item_index: usize,
        /// The rarity word as printed.
        word: String,
    },

    /// The skull texture property could not be decoded.
    #[error("item {item_index}: undecodable head texture")]
    TextureDecode {
        /// Item carrying the texture.
        item_index: usize,
    },

    /// A container held more slots than its capacity allows.
    #[error("{section:?}: {dropped} slots beyond capacity {capacity} dropped")]
    ContainerOverflow {
        /// Section that overflowed.
        section: Section,
        /// Capacity in slots.
        capacity: usize,
        /// Number of slots dropped.
        dropped: usize,
    },

    /// A backpack payload could not be decoded; its contents are missing.
    #[error("item {item_index}: nested contents skipped: {reason}")]
    NestedPayload {
        /// The container item.
        item_index: usize,
        /// Decoder message.
        reason: String,
    },
}

/// Reference data lacks an entry for something the profile references.
///
/// Placeholder metadata is used instead.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum ConfigurationGap {
    /// No metadata for a pet type.
    #[error("unknown pet type {pet_type}")]
    UnknownPet {
        /// The pet type.
        pet_type: String,
    },

    /// No description or stats for a pet held item.
    #[error("unknown pet item {item_id}")]
    UnknownPetItem {
        /// The held item id.
        item_id: String,
    },
}
