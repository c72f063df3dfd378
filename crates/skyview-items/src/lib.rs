//! Item classification and inventory assembly for Skyview.
//!
//! Raw slots from `skyview-nbt` become classified [`skyview_types::Item`]
//! records here. The crate also resolves which talismans count, groups the
//! wardrobe, and derives collection tiers and bag capacities.
//!
//! # Modules
//!
//! - [`lore`] -- Stat line tokenizer and rarity line parser
//! - [`classify`] -- Per-item classification
//! - [`talisman`] -- Talisman uniqueness and activation
//! - [`inventory`] -- Section decoding and derived views
//! - [`collections`] -- Collection tiers and bag sizes

pub mod classify;
pub mod collections;
pub mod inventory;
pub mod lore;
pub mod talisman;

pub use classify::classify;
pub use collections::{bag_sizes, collections};
pub use inventory::{Inventory, assemble};
pub use talisman::Candidate;
