//! Inventory assembly across storage sections.
//!
//! Every section present on the member is decoded, truncated to its
//! capacity, flattened and classified into one arena. Item indices are
//! dense and global across sections, in [`Section::ALL`] order. Derived
//! views (armor, wardrobe sets, weapons, rods, talismans) are lists of
//! arena indices.

use std::cmp::Reverse;
use std::collections::BTreeMap;

use skyview_nbt::{DecodeError, FlatItem, decode_base64, flatten, read_item_list};
use skyview_types::{
    ArmorSet, ClassificationWarning, Item, ItemType, ItemUid, ProfileMember, Rarity,
    ReferenceData, Section,
};
use tracing::{info, warn};

use crate::classify::classify;
use crate::talisman::{self, Candidate};

/// Bag that receives the candy bag contents as children.
const TRICK_OR_TREAT_BAG: &str = "TRICK_OR_TREAT_BAG";

/// Pieces that form a monster set when all four slots hold one of them.
const MONSTER_SET: [&str; 5] = [
    "SKELETON_HELMET",
    "GUARDIAN_CHESTPLATE",
    "CREEPER_LEGGINGS",
    "SPIDER_BOOTS",
    "TARANTULA_BOOTS",
];

/// Wardrobe slots per page (four rows of nine).
const WARDROBE_PAGE: usize = 36;
const WARDROBE_COLUMNS: usize = 9;

/// Weapons beyond this many copies of one id are hidden.
const VISIBLE_WEAPON_COPIES: usize = 2;

/// Every classified item plus the derived views the report shows.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    /// The arena.
    pub items: Vec<Item>,
    /// Top-level indices per section, in slot order.
    pub sections: BTreeMap<Section, Vec<usize>>,
    /// Worn armor pieces, empty slots removed.
    pub armor: Vec<usize>,
    /// Wardrobe sets of four (`None` for an empty piece).
    pub wardrobe: Vec<Vec<Option<usize>>>,
    /// Swords and bows, highest rarity first.
    pub weapons: Vec<usize>,
    /// Fishing rods, highest rarity first.
    pub rods: Vec<usize>,
    /// Resolved talismans, highest rarity first, active before inactive.
    pub talismans: Vec<usize>,
    /// Best sword outside backpacks.
    pub highest_rarity_sword: Option<usize>,
    /// Best bow outside backpacks.
    pub highest_rarity_bow: Option<usize>,
    /// Best rod outside backpacks.
    pub highest_rarity_rod: Option<usize>,
    /// Name of the worn armor set.
    pub armor_set: Option<ArmorSet>,
    /// Whether the main inventory is missing (API access disabled).
    pub no_inventory: bool,
    /// Recoverable problems met while decoding and classifying.
    pub warnings: Vec<ClassificationWarning>,
}

impl Inventory {
    /// Look up an item by arena index.
    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// Top-level items of `section`.
    pub fn section(&self, section: Section) -> impl Iterator<Item = &Item> + '_ {
        self.sections
            .get(&section)
            .into_iter()
            .flatten()
            .filter_map(|&index| self.items.get(index))
    }

    /// Worn armor pieces.
    pub fn armor_pieces(&self) -> impl Iterator<Item = &Item> + '_ {
        self.armor.iter().filter_map(|&index| self.items.get(index))
    }

    /// Talismans that count toward stats.
    pub fn active_talismans(&self) -> impl Iterator<Item = &Item> + '_ {
        self.talismans
            .iter()
            .filter_map(|&index| self.items.get(index))
            .filter(|item| !item.is_inactive)
    }
}

/// Decode and classify every section of `member`.
///
/// `scope` seeds the item identifiers (the member uuid). `bag_sizes` caps
/// bag sections; sections without a known capacity are never truncated.
/// Only a top-level section buffer can fail the call.
pub fn assemble(
    scope: &str,
    member: &ProfileMember,
    bag_sizes: &BTreeMap<Section, usize>,
    reference: &ReferenceData,
) -> Result<Inventory, DecodeError> {
    let mut inventory = Inventory::default();

    for section in Section::ALL {
        let Some(data) = member.section(section) else {
            continue;
        };
        let capacity = section
            .fixed_capacity()
            .or_else(|| bag_sizes.get(&section).copied());
        let mut slots = read_item_list(&decode_base64(&data.data)?)?;

        if let Some(capacity) = capacity
            && slots.len() > capacity
        {
            let dropped = slots.len().saturating_sub(capacity);
            warn!(section = section.key(), capacity, dropped, "container over capacity");
            inventory.warnings.push(ClassificationWarning::ContainerOverflow {
                section,
                capacity,
                dropped,
            });
            slots.truncate(capacity);
        }

        let flattened = flatten(slots);
        let base = inventory.items.len();
        for failure in flattened.failures {
            inventory.warnings.push(ClassificationWarning::NestedPayload {
                item_index: base.saturating_add(failure.position),
                reason: failure.error.to_string(),
            });
        }

        let mut top_level = Vec::new();
        for (position, flat) in flattened.items.into_iter().enumerate() {
            let index = base.saturating_add(position);
            if flat.parent.is_none() {
                top_level.push(index);
            }
            let item = place(scope, section, base, index, &flat, &mut inventory.warnings);
            inventory.items.push(item);
        }
        inventory.sections.insert(section, top_level);
    }

    attach_candy_bag(&mut inventory);

    inventory.armor = inventory
        .sections
        .get(&Section::Armor)
        .into_iter()
        .flatten()
        .copied()
        .filter(|&index| inventory.items.get(index).is_some_and(|item| !item.is_empty()))
        .collect();
    inventory.wardrobe = wardrobe_sets(&inventory);
    inventory.no_inventory = inventory
        .sections
        .get(&Section::Inventory)
        .is_none_or(Vec::is_empty);

    let candidates = talisman_candidates(&inventory);
    inventory.talismans = talisman::resolve(&mut inventory.items, &candidates, reference);

    sort_equipment(&mut inventory);
    inventory.armor_set = armor_set(&inventory);

    info!(
        scope,
        items = inventory.items.len(),
        talismans = inventory.talismans.len(),
        weapons = inventory.weapons.len(),
        warnings = inventory.warnings.len(),
        "inventory assembled"
    );
    Ok(inventory)
}

/// Classify one flattened entry at its global position.
fn place(
    scope: &str,
    section: Section,
    base: usize,
    index: usize,
    flat: &FlatItem,
    warnings: &mut Vec<ClassificationWarning>,
) -> Item {
    let slot = flat
        .slot
        .rsplit('/')
        .next()
        .and_then(|last| last.parse().ok())
        .unwrap_or_default();
    let uid = ItemUid::derive(scope, section, &flat.slot);

    let mut item = Item::empty(index, uid, section, slot);
    item.parent = flat.parent.map(|parent| base.saturating_add(parent));
    item.contains_items = flat
        .children
        .iter()
        .map(|child| base.saturating_add(*child))
        .collect();
    item.in_backpack = item.parent.is_some();

    let mut item = classify(&flat.raw, item, warnings);
    let stray_accessory = item.is_accessory()
        && !matches!(section, Section::Armor | Section::Inventory | Section::TalismanBag);
    item.is_inactive = item.in_backpack || section == Section::EnderChest || stray_accessory;
    item
}

/// Hand the candy bag contents to the first trick-or-treat bag.
fn attach_candy_bag(inventory: &mut Inventory) {
    let Some(candy) = inventory.sections.get(&Section::CandyBag).cloned() else {
        return;
    };
    let Some(bag_index) = inventory
        .items
        .iter()
        .find(|item| item.section != Section::CandyBag && item.key() == TRICK_OR_TREAT_BAG)
        .map(|item| item.item_index)
    else {
        return;
    };

    for &child in &candy {
        if let Some(item) = inventory.items.get_mut(child) {
            item.parent = Some(bag_index);
            item.in_backpack = true;
            item.is_inactive = true;
        }
    }
    if let Some(bag) = inventory.items.get_mut(bag_index) {
        bag.contains_items = candy;
    }
}

/// Group the wardrobe into sets of four.
///
/// Storage is paged: each page holds nine columns of four rows, so piece
/// `row` of set `column` sits at `36 * page + column % 9 + row * 9`.
fn wardrobe_sets(inventory: &Inventory) -> Vec<Vec<Option<usize>>> {
    let slots = inventory
        .sections
        .get(&Section::Wardrobe)
        .map_or(&[][..], Vec::as_slice);
    let columns = slots.len() / 4;

    (0..columns)
        .filter_map(|column| {
            let page = column / WARDROBE_COLUMNS;
            let set: Vec<Option<usize>> = (0..4)
                .map(|row: usize| {
                    let position = WARDROBE_PAGE
                        .saturating_mul(page)
                        .saturating_add(column % WARDROBE_COLUMNS)
                        .saturating_add(row.saturating_mul(WARDROBE_COLUMNS));
                    slots
                        .get(position)
                        .copied()
                        .filter(|&index| inventory.items.get(index).is_some_and(|item| !item.key().is_empty()))
                })
                .collect();
            set.iter().any(Option::is_some).then_some(set)
        })
        .collect()
}

/// Talisman instances in precedence order.
fn talisman_candidates(inventory: &Inventory) -> Vec<Candidate> {
    let mut candidates = Vec::new();
    let top = |section: Section| inventory.sections.get(&section).into_iter().flatten().copied();
    let is_accessory =
        |index: usize| inventory.items.get(index).is_some_and(Item::is_accessory);
    let children = |index: usize| {
        inventory
            .items
            .get(index)
            .map(|item| item.contains_items.clone())
            .unwrap_or_default()
    };

    candidates.extend(top(Section::Armor).filter(|&i| is_accessory(i)).map(Candidate::eligible));
    candidates.extend(top(Section::Inventory).filter(|&i| is_accessory(i)).map(Candidate::eligible));
    candidates.extend(top(Section::TalismanBag).map(Candidate::eligible));

    for index in top(Section::Inventory).chain(top(Section::EnderChest)) {
        if is_accessory(index) {
            if inventory.items.get(index).is_some_and(|item| item.section == Section::EnderChest) {
                candidates.push(Candidate::stored(index));
            }
            continue;
        }
        candidates.extend(
            children(index)
                .into_iter()
                .filter(|&child| is_accessory(child))
                .map(Candidate::stored),
        );
    }
    candidates
}

/// Weapons and rods by rarity, copies beyond the second hidden, and the
/// best of each kind outside backpacks.
fn sort_equipment(inventory: &mut Inventory) {
    let of_kind = |items: &[Item], kinds: &[ItemType]| -> Vec<usize> {
        let mut list: Vec<usize> = items
            .iter()
            .filter(|item| item.item_type.is_some_and(|kind| kinds.contains(&kind)))
            .map(|item| item.item_index)
            .collect();
        list.sort_by_key(|&index| {
            let item = items.get(index);
            (
                Reverse(item.and_then(|item| item.rarity)),
                item.is_some_and(|item| item.in_backpack),
                index,
            )
        });
        list
    };
    inventory.weapons = of_kind(&inventory.items, &[ItemType::Sword, ItemType::Bow]);
    inventory.rods = of_kind(&inventory.items, &[ItemType::FishingRod]);

    let mut copies: BTreeMap<String, usize> = BTreeMap::new();
    for &index in &inventory.weapons {
        if let Some(item) = inventory.items.get_mut(index) {
            let count = copies.entry(item.key().to_owned()).or_default();
            *count = count.saturating_add(1);
            item.hidden = *count > VISIBLE_WEAPON_COPIES;
        }
    }

    let best = |list: &[usize], kind: ItemType| {
        list.iter().copied().find(|&index| {
            inventory
                .items
                .get(index)
                .is_some_and(|item| item.item_type == Some(kind) && !item.in_backpack)
        })
    };
    inventory.highest_rarity_sword = best(&inventory.weapons, ItemType::Sword);
    inventory.highest_rarity_bow = best(&inventory.weapons, ItemType::Bow);
    inventory.highest_rarity_rod = best(&inventory.rods, ItemType::FishingRod);
}

// ---------------------------------------------------------------------------
// Armor set naming
// ---------------------------------------------------------------------------

/// Display name of a piece without stars or its reforge word.
fn piece_name(item: &Item) -> String {
    let name = item.display_name.as_deref().unwrap_or_default().replace('\u{272a}', "");
    let name = name.trim();
    if item.reforge.is_some() {
        name.split_once(' ').map_or(name, |(_, rest)| rest).to_owned()
    } else {
        name.to_owned()
    }
}

fn first_word(text: &str) -> &str {
    text.split(' ').next().unwrap_or_default()
}

/// Name the worn set: a lone piece by its name, four matching pieces by
/// their shared name with the common reforge in front.
fn armor_set(inventory: &Inventory) -> Option<ArmorSet> {
    let pieces: Vec<&Item> = inventory.armor_pieces().collect();

    match pieces.as_slice() {
        [piece] => Some(ArmorSet {
            name: piece.display_name.clone().unwrap_or_default(),
            rarity: piece.rarity,
        }),
        [first, ..] if pieces.len() == 4 => four_piece_set(first, &pieces),
        _ => None,
    }
}

fn all_pieces(pieces: &[&Item], check: impl Fn(&str) -> bool) -> bool {
    pieces.iter().all(|piece| check(piece.key()))
}

/// `Superior Dragon Boots` names the `Superior Dragon Armor`.
fn shared_name(piece_name: &str) -> String {
    let mut words: Vec<&str> = piece_name.split(' ').collect();
    words.pop();
    let name = words.join(" ");
    if name.ends_with("Armor") || name.starts_with("Armor") {
        name
    } else {
        format!("{name} Armor")
    }
}

fn four_piece_set(first: &Item, pieces: &[&Item]) -> Option<ArmorSet> {
    let names: Vec<String> = pieces.iter().map(|piece| piece_name(piece)).collect();
    let first_name = names.first()?;

    let monster = all_pieces(pieces, |key| MONSTER_SET.contains(&key));
    let shared_word = names
        .iter()
        .all(|name| first_word(name) == first_word(first_name));
    if !shared_word && !monster {
        return None;
    }

    let tier = |item: &Item| item.key().rsplit('_').next().map(str::to_owned);
    let name = if all_pieces(pieces, |key| key.starts_with("SPONGE_")) {
        "Sponge Armor".to_owned()
    } else if all_pieces(pieces, |key| key.starts_with("PERFECT_")) {
        let first_tier = tier(first);
        if pieces.iter().all(|piece| tier(*piece) == first_tier) {
            format!("Perfect Armor - Tier {}", first_tier.unwrap_or_default())
        } else {
            "Perfect Armor".to_owned()
        }
    } else if monster && first.key() == "SPIDER_BOOTS" {
        "Monster Hunter Armor".to_owned()
    } else if monster && first.key() == "TARANTULA_BOOTS" {
        "Monster Raider Armor".to_owned()
    } else {
        shared_name(first_name)
    };

    let shared_reforge = first.reforge.is_some()
        && pieces.iter().all(|piece| piece.reforge == first.reforge);
    let name = if shared_reforge {
        let reforge_word = first_word(first.display_name.as_deref().unwrap_or_default());
        format!("{reforge_word} {name}")
    } else {
        name
    };

    Some(ArmorSet {
        name,
        rarity: if monster { Some(Rarity::Rare) } else { first.rarity },
    })
}
