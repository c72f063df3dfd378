//! The classified item record.
//!
//! Items live in a flat arena ordered by [`Item::item_index`]. A container
//! (backpack, cake bag, trick-or-treat bag) lists its children by index in
//! [`Item::contains_items`] and every child points back through
//! [`Item::parent`].

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{ItemType, Rarity, Section};
use crate::ids::ItemUid;
use crate::stats::StatMap;

/// One inventory slot after decoding and classification.
///
/// Empty slots are kept (with `id == None`) so that slot positions and
/// wardrobe grouping stay intact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Item {
    /// Dense position in the flattened arena.
    pub item_index: usize,
    /// Deterministic identifier, stable across runs.
    pub uid: ItemUid,
    /// Storage section the item (or its outermost container) came from.
    pub section: Section,
    /// Slot position inside its immediate container.
    pub slot: usize,
    /// Index of the containing item, for nested contents.
    pub parent: Option<usize>,
    /// Child indices, for container items.
    pub contains_items: Vec<usize>,
    /// Whether the item sits inside a backpack or bag item.
    pub in_backpack: bool,

    // --- raw slot fields ---
    /// Numeric block/item id; `None` marks an empty slot.
    pub id: Option<i16>,
    /// Damage or variant value.
    pub damage: i16,
    /// Stack size.
    pub count: u8,

    // --- derived fields ---
    /// Game identity key from `ExtraAttributes.id`.
    pub skyblock_id: Option<String>,
    /// Display name with formatting codes removed.
    pub display_name: Option<String>,
    /// Display name without the reforge word.
    pub base_name: Option<String>,
    /// Rarity read from the colour of the last lore line.
    pub rarity: Option<Rarity>,
    /// Equipment category.
    #[serde(rename = "type")]
    pub item_type: Option<ItemType>,
    /// Whether the category was printed as `dungeon <type>`.
    pub dungeon: bool,
    /// Whether the lore rarity word disagrees with its colour.
    pub localized: bool,
    /// Resolved texture path, for heads and dyed leather.
    pub texture_path: Option<String>,
    /// Reforge key from `ExtraAttributes.modifier`.
    pub reforge: Option<String>,
    /// Enchantment levels by key.
    pub enchantments: BTreeMap<String, i32>,
    /// Lore lines with formatting codes kept.
    pub lore_raw: Vec<String>,
    /// Lore lines with formatting codes removed.
    pub lore: Vec<String>,
    /// Stats parsed from lore plus any item-specific adjustments.
    #[ts(as = "BTreeMap<String, f64>")]
    pub stats: StatMap,
    /// Whether the item contributes nothing to aggregate stats.
    pub is_inactive: bool,
    /// Whether this is the only instance of its identity key.
    pub is_unique: bool,

    // --- extra attributes ---
    /// Whether a rarity upgrade was applied.
    pub recombobulated: bool,
    /// Anvil uses, net of hot potato books.
    pub anvil_uses: Option<i32>,
    /// When the item was obtained.
    pub obtained: Option<NaiveDateTime>,
    /// Dungeon item quality, out of 50.
    pub dungeon_quality: Option<i32>,
    /// Dungeon floor the item dropped on.
    pub dungeon_floor: Option<i32>,
    /// Year of a New Year cake.
    pub new_years_cake: Option<i32>,
    /// Whether a weapon is a third or later copy of the same id.
    pub hidden: bool,
}

impl Item {
    /// An empty slot.
    pub const fn empty(item_index: usize, uid: ItemUid, section: Section, slot: usize) -> Self {
        Self {
            item_index,
            uid,
            section,
            slot,
            parent: None,
            contains_items: Vec::new(),
            in_backpack: false,
            id: None,
            damage: 0,
            count: 0,
            skyblock_id: None,
            display_name: None,
            base_name: None,
            rarity: None,
            item_type: None,
            dungeon: false,
            localized: false,
            texture_path: None,
            reforge: None,
            enchantments: BTreeMap::new(),
            lore_raw: Vec::new(),
            lore: Vec::new(),
            stats: StatMap::zero(),
            is_inactive: false,
            is_unique: false,
            recombobulated: false,
            anvil_uses: None,
            obtained: None,
            dungeon_quality: None,
            dungeon_floor: None,
            new_years_cake: None,
            hidden: false,
        }
    }

    /// Whether the slot holds nothing.
    pub const fn is_empty(&self) -> bool {
        self.id.is_none()
    }

    /// The identity key, or `""` for vanilla items.
    pub fn key(&self) -> &str {
        self.skyblock_id.as_deref().unwrap_or("")
    }

    /// Whether the item is a talisman, ring or artifact.
    pub fn is_accessory(&self) -> bool {
        self.item_type == Some(ItemType::Accessory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_slot_has_no_key() {
        let uid = ItemUid::derive("member", Section::Inventory, "0");
        let item = Item::empty(0, uid, Section::Inventory, 0);

        assert!(item.is_empty());
        assert_eq!(item.key(), "");
        assert!(!item.is_accessory());
    }

    #[test]
    fn item_type_serializes_as_type() {
        let uid = ItemUid::derive("member", Section::Armor, "0");
        let mut item = Item::empty(0, uid, Section::Armor, 0);
        item.item_type = Some(ItemType::Boots);

        let json = serde_json::to_value(&item).ok();
        let kind = json
            .as_ref()
            .and_then(|value| value.get("type"))
            .and_then(serde_json::Value::as_str);
        assert_eq!(kind, Some("boots"));
    }
}
