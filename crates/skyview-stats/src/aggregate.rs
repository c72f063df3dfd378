//! Stat aggregation.
//!
//! Aggregate stats are built by an ordered list of layers over one running
//! [`StatMap`]:
//!
//! 1. Base stats, then the fairy, skill, slayer, pet score and active pet
//!    bonuses, and Melody's Hair when exactly one is owned. The result is
//!    snapshotted as `base_stats`.
//! 2. Active talismans, including the crystal pair.
//! 3. Worn armor and its set bonuses.
//! 4. Full-set multipliers (Superior Dragon, then Renowned per piece).
//! 5. Floor, clamp at zero and derive effective health.
//!
//! Set bonuses and multipliers are also attributed to the first armor
//! piece so the item shows where the stats came from. Each weapon and rod
//! gets its own snapshot: the map after layer 3 plus the weapon's stats,
//! with the Mastiff, Superior and Tuxedo rules re-applied.

use std::collections::BTreeMap;

use skyview_items::Inventory;
use skyview_types::{Item, ItemUid, ReferenceData, Section, Skill, SlayerBoss, StatMap, StatName};
use tracing::debug;

const DAY_CRYSTAL: &str = "DAY_CRYSTAL";
const NIGHT_CRYSTAL: &str = "NIGHT_CRYSTAL";
const MELODY_HAIR: &str = "MELODY_HAIR";
const MELODY_HAIR_INTELLIGENCE: f64 = 26.0;
const CRYSTAL_BONUS: f64 = 5.0;

const CRAB_HAT: &str = "PARTY_HAT_CRAB";
const OBSIDIAN_CHESTPLATE: &str = "OBSIDIAN_CHESTPLATE";
const OBSIDIAN_BLOCK: i16 = 49;
const OBSIDIAN_PER_SPEED: f64 = 20.0;

const EMERALD_COLLECTION: &str = "EMERALD";
const EMERALD_PER_POINT: f64 = 3_000.0;
const EMERALD_CAP: f64 = 350.0;

const MASTIFF_HEALTH_PER_CRIT_DAMAGE: f64 = 50.0;
const SUPERIOR_FACTOR: f64 = 0.05;
const RENOWNED_FACTOR: f64 = 0.01;
const RENOWNED: &str = "renowned";

const FULL_SET: usize = 4;
const TUXEDO_PIECES: usize = 3;

/// Four-piece sets with a flat bonus.
const FLAT_SET_BONUSES: [(&str, StatName, f64); 4] = [
    ("LAPIS_ARMOR_", StatName::Health, 60.0),
    ("FAIRY_", StatName::Speed, 10.0),
    ("SPEEDSTER_", StatName::Speed, 20.0),
    ("YOUNG_DRAGON_", StatName::Speed, 70.0),
];

/// Three-piece tuxedo sets and the health they fix.
const TUXEDO_HEALTH: [(&str, f64); 3] = [
    ("CHEAP_TUXEDO_", 75.0),
    ("FANCY_TUXEDO_", 150.0),
    ("ELEGANT_TUXEDO_", 250.0),
];

// ---------------------------------------------------------------------------
// Inputs and outputs
// ---------------------------------------------------------------------------

/// Bonuses that do not depend on items.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProgressionBonuses {
    /// Fairy soul exchanges.
    pub fairy: StatMap,
    /// Per leveled skill.
    pub skills: BTreeMap<Skill, StatMap>,
    /// Per slayer line.
    pub slayers: BTreeMap<SlayerBoss, StatMap>,
    /// Pet score reward.
    pub pet_score: StatMap,
    /// Summoned pets' held items.
    pub pets: StatMap,
}

/// Result of the aggregation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AggregateStats {
    /// Final stats.
    pub stats: StatMap,
    /// Stats before any item is applied.
    pub base_stats: StatMap,
    /// Stats while holding each weapon or rod.
    pub weapon_stats: BTreeMap<ItemUid, StatMap>,
}

/// Worn armor rules, evaluated once.
#[derive(Debug, Clone, Copy, Default)]
struct ArmorRules {
    first: Option<usize>,
    mastiff: bool,
    superior: bool,
    renowned: usize,
    tuxedo_health: Option<f64>,
}

impl ArmorRules {
    fn of(inventory: &Inventory) -> Self {
        let pieces: Vec<&Item> = inventory.armor_pieces().collect();
        Self {
            first: inventory.armor.first().copied(),
            mastiff: full_set(&pieces, "MASTIFF_"),
            superior: full_set(&pieces, "SUPERIOR_DRAGON_"),
            renowned: pieces
                .iter()
                .filter(|piece| piece.reforge.as_deref() == Some(RENOWNED))
                .count(),
            tuxedo_health: TUXEDO_HEALTH
                .iter()
                .find(|(prefix, _)| count_prefixed(&pieces, prefix) == TUXEDO_PIECES)
                .map(|(_, health)| *health),
        }
    }
}

fn count_prefixed(pieces: &[&Item], prefix: &str) -> usize {
    pieces.iter().filter(|piece| piece.key().starts_with(prefix)).count()
}

fn full_set(pieces: &[&Item], prefix: &str) -> bool {
    pieces.len() == FULL_SET && count_prefixed(pieces, prefix) == FULL_SET
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

/// Run every layer over the member's inventory.
///
/// Item stats of the first armor piece and the Day Crystal are updated in
/// place with the bonuses attributed to them.
pub fn aggregate(
    inventory: &mut Inventory,
    bonuses: &ProgressionBonuses,
    collection: &BTreeMap<String, f64>,
    reference: &ReferenceData,
) -> AggregateStats {
    let mut stats = progression_layer(reference.base_stats, bonuses);
    melody_hair_layer(&mut stats, inventory);
    let base_stats = stats;

    talisman_layer(&mut stats, inventory);

    let rules = ArmorRules::of(inventory);
    let emerald = collection.get(EMERALD_COLLECTION).copied().unwrap_or(0.0);
    armor_layer(&mut stats, inventory, &rules, emerald);
    let before_multipliers = stats;

    superior_layer(&mut stats, inventory, &rules);
    renowned_layer(&mut stats, inventory, &rules);
    finish(&mut stats);

    let weapon_stats = inventory
        .weapons
        .iter()
        .chain(&inventory.rods)
        .filter_map(|&index| inventory.get(index))
        .map(|weapon| (weapon.uid, weapon_snapshot(before_multipliers, weapon, &rules)))
        .collect();

    debug!(
        health = stats.get(StatName::Health),
        defense = stats.get(StatName::Defense),
        weapons = inventory.weapons.len(),
        "stats aggregated"
    );

    AggregateStats {
        stats,
        base_stats,
        weapon_stats,
    }
}

/// Base stats plus every bonus that does not depend on items.
pub fn progression_layer(base: StatMap, bonuses: &ProgressionBonuses) -> StatMap {
    let mut stats = base;
    stats.add_all(&bonuses.fairy);
    for bonus in bonuses.skills.values().chain(bonuses.slayers.values()) {
        stats.add_all(bonus);
    }
    stats.add_all(&bonuses.pet_score);
    stats.add_all(&bonuses.pets);
    stats
}

/// Owning a single Melody's Hair, active or not, grants intelligence.
fn melody_hair_layer(stats: &mut StatMap, inventory: &Inventory) {
    let owned = inventory
        .talismans
        .iter()
        .filter_map(|&index| inventory.get(index))
        .filter(|item| item.key() == MELODY_HAIR)
        .count();
    if owned == 1 {
        stats.add(StatName::Intelligence, MELODY_HAIR_INTELLIGENCE);
    }
}

fn talisman_layer(stats: &mut StatMap, inventory: &mut Inventory) {
    let active = |inventory: &Inventory, key: &str| inventory.active_talismans().any(|item| item.key() == key);

    if active(inventory, DAY_CRYSTAL) && active(inventory, NIGHT_CRYSTAL) {
        let day = inventory
            .talismans
            .iter()
            .copied()
            .find(|&index| {
                inventory
                    .get(index)
                    .is_some_and(|item| !item.is_inactive && item.key() == DAY_CRYSTAL)
            });
        if let Some(crystal) = day.and_then(|index| inventory.items.get_mut(index)) {
            crystal.stats.add(StatName::Defense, CRYSTAL_BONUS);
            crystal.stats.add(StatName::Strength, CRYSTAL_BONUS);
        }
    }

    for talisman in inventory.active_talismans() {
        stats.add_all(&talisman.stats);
    }
}

fn armor_layer(stats: &mut StatMap, inventory: &mut Inventory, rules: &ArmorRules, emerald: f64) {
    let pieces: Vec<&Item> = inventory.armor_pieces().collect();

    let mut set_bonus = StatMap::zero();
    for (prefix, stat, value) in FLAT_SET_BONUSES {
        if full_set(&pieces, prefix) {
            set_bonus.add(stat, value);
        }
    }
    if full_set(&pieces, "EMERALD_ARMOR_") {
        let bonus = (emerald / EMERALD_PER_POINT).floor().min(EMERALD_CAP);
        set_bonus.add(StatName::Health, bonus);
        set_bonus.add(StatName::Defense, bonus);
    }
    let obsidian_speed = if pieces.iter().any(|piece| piece.key() == OBSIDIAN_CHESTPLATE) {
        (obsidian_count(inventory) / OBSIDIAN_PER_SPEED).floor()
    } else {
        0.0
    };

    attribute_to_first(inventory, rules, &set_bonus);
    // Set bonuses ride on the first piece; add them directly when that
    // piece does not count.
    if rules.first.and_then(|index| inventory.get(index)).is_some_and(|first| !counts(first)) {
        stats.add_all(&set_bonus);
    }

    for piece in inventory.armor_pieces() {
        if counts(piece) {
            stats.add_all(&piece.stats);
        } else if piece.key() == CRAB_HAT
            && let Some(intelligence) = crab_hat_bonus(piece)
        {
            stats.add(StatName::Intelligence, intelligence);
        }
    }

    if rules.mastiff {
        let bonus = MASTIFF_HEALTH_PER_CRIT_DAMAGE * stats.get(StatName::CritDamage);
        stats.add(StatName::Health, bonus);
        attribute_to_first(inventory, rules, &StatMap::zero().with(StatName::Health, bonus));
    }

    stats.add(StatName::Speed, obsidian_speed);

    if let Some(health) = rules.tuxedo_health {
        stats.set(StatName::Health, health);
    }
}

/// Armor pieces that are inactive or accessories only count through
/// their special cases.
fn counts(piece: &Item) -> bool {
    !piece.is_inactive && !piece.is_accessory()
}

/// Intelligence from a `Your bonus: +N Intelligence` lore line.
fn crab_hat_bonus(piece: &Item) -> Option<f64> {
    let line = piece.lore.iter().find(|line| line.starts_with("Your bonus:"))?;
    let amount = line.split(' ').nth(2)?;
    amount.get(1..)?.parse().ok()
}

fn obsidian_count(inventory: &Inventory) -> f64 {
    inventory
        .section(Section::Inventory)
        .filter(|item| item.id == Some(OBSIDIAN_BLOCK))
        .map(|item| f64::from(item.count))
        .sum()
}

fn superior_layer(stats: &mut StatMap, inventory: &mut Inventory, rules: &ArmorRules) {
    if !rules.superior {
        return;
    }
    let mut bonus = *stats;
    bonus.scale(SUPERIOR_FACTOR);
    stats.add_all(&bonus);
    attribute_to_first(inventory, rules, &bonus);
}

fn renowned_layer(stats: &mut StatMap, inventory: &mut Inventory, rules: &ArmorRules) {
    for _ in 0..rules.renowned {
        let mut bonus = *stats;
        bonus.scale(RENOWNED_FACTOR);
        stats.add_all(&bonus);
        attribute_to_first(inventory, rules, &bonus);
    }
}

fn attribute_to_first(inventory: &mut Inventory, rules: &ArmorRules, bonus: &StatMap) {
    if let Some(first) = rules.first.and_then(|index| inventory.items.get_mut(index)) {
        first.stats.add_all(bonus);
    }
}

/// Floor and clamp every stat, then derive effective health.
pub fn finish(stats: &mut StatMap) {
    stats.floor_non_negative();
    stats.set(
        StatName::EffectiveHealth,
        effective_health(stats.get(StatName::Health), stats.get(StatName::Defense)),
    );
}

/// `⌊health × (1 + defense / 100)⌋`, or plain health without defense.
pub fn effective_health(health: f64, defense: f64) -> f64 {
    if defense > 0.0 {
        (health + health * defense / 100.0).floor()
    } else {
        health
    }
}

fn weapon_snapshot(before_multipliers: StatMap, weapon: &Item, rules: &ArmorRules) -> StatMap {
    let mut stats = before_multipliers;
    stats.add_all(&weapon.stats);
    if rules.mastiff {
        stats.add(
            StatName::Health,
            MASTIFF_HEALTH_PER_CRIT_DAMAGE * weapon.stats.get(StatName::CritDamage),
        );
    }
    if rules.superior {
        stats.scale(1.0 + SUPERIOR_FACTOR);
    }
    if let Some(health) = rules.tuxedo_health {
        stats.set(StatName::Health, health);
    }
    finish(&mut stats);
    stats
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use skyview_types::{ItemType, Rarity};

    use super::*;

    fn item(index: usize, section: Section, key: &str, item_type: ItemType) -> Item {
        let uid = ItemUid::derive("member", section, &index.to_string());
        let mut item = Item::empty(index, uid, section, index);
        item.id = Some(1);
        item.count = 1;
        item.skyblock_id = Some(key.to_owned());
        item.item_type = Some(item_type);
        item.rarity = Some(Rarity::Legendary);
        item
    }

    fn with_stats(mut item: Item, pairs: &[(StatName, f64)]) -> Item {
        item.stats = StatMap::from_pairs(pairs.iter().copied());
        item
    }

    fn armor(prefix: &str) -> Vec<Item> {
        ["BOOTS", "LEGGINGS", "CHESTPLATE", "HELMET"]
            .iter()
            .enumerate()
            .map(|(index, piece)| {
                let item_type = match *piece {
                    "BOOTS" => ItemType::Boots,
                    "LEGGINGS" => ItemType::Leggings,
                    "CHESTPLATE" => ItemType::Chestplate,
                    _ => ItemType::Helmet,
                };
                let piece = item(index, Section::Armor, &format!("{prefix}{piece}"), item_type);
                with_stats(piece, &[(StatName::Defense, 10.0)])
            })
            .collect()
    }

    fn inventory(items: Vec<Item>) -> Inventory {
        let mut inventory = Inventory::default();
        for item in items {
            match item.item_type {
                Some(kind) if kind.is_armor() && item.section == Section::Armor => {
                    inventory.armor.push(item.item_index);
                }
                Some(ItemType::Accessory) => inventory.talismans.push(item.item_index),
                Some(kind) if kind.is_weapon() => inventory.weapons.push(item.item_index),
                _ => {}
            }
            inventory
                .sections
                .entry(item.section)
                .or_default()
                .push(item.item_index);
            inventory.items.push(item);
        }
        inventory
    }

    fn run(inventory: &mut Inventory) -> AggregateStats {
        aggregate(
            inventory,
            &ProgressionBonuses::default(),
            &BTreeMap::new(),
            &ReferenceData::default(),
        )
    }

    #[test]
    fn empty_profile_yields_base_stats() {
        let reference = ReferenceData::default();
        let output = run(&mut Inventory::default());

        assert_eq!(output.base_stats, reference.base_stats);
        assert!((output.stats.get(StatName::Health) - 100.0).abs() < f64::EPSILON);
        assert!((output.stats.get(StatName::EffectiveHealth) - 100.0).abs() < f64::EPSILON);
        assert!(output.weapon_stats.is_empty());
    }

    #[test]
    fn every_stat_is_a_non_negative_integer() {
        let mut talisman = item(0, Section::TalismanBag, "ODD_RING", ItemType::Accessory);
        talisman.stats = StatMap::from_pairs([(StatName::Strength, 2.7), (StatName::Speed, -300.0)]);
        let output = run(&mut inventory(vec![talisman]));

        for (_, value) in output.stats.iter() {
            assert!(value.is_finite() && value >= 0.0);
            assert!((value - value.floor()).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn lapis_set_fires_once_on_first_piece() {
        let mut inventory = inventory(armor("LAPIS_ARMOR_"));
        let output = run(&mut inventory);

        // 100 base + 60 set bonus.
        assert!((output.stats.get(StatName::Health) - 160.0).abs() < f64::EPSILON);
        assert!((output.stats.get(StatName::Defense) - 40.0).abs() < f64::EPSILON);
        let first = inventory.get(0).unwrap();
        assert!((first.stats.get(StatName::Health) - 60.0).abs() < f64::EPSILON);
        assert!(inventory.get(1).unwrap().stats.get(StatName::Health).abs() < f64::EPSILON);
        // 160 x 1.4.
        assert!((output.stats.get(StatName::EffectiveHealth) - 224.0).abs() < f64::EPSILON);
    }

    #[test]
    fn three_pieces_are_not_a_set() {
        let mut pieces = armor("LAPIS_ARMOR_");
        pieces.pop();
        let output = run(&mut inventory(pieces));

        assert!((output.stats.get(StatName::Health) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn emerald_bonus_scales_with_collection_and_caps() {
        let mut inventory = inventory(armor("EMERALD_ARMOR_"));
        let collection = BTreeMap::from([("EMERALD".to_owned(), 2_000_000.0)]);
        let output = aggregate(
            &mut inventory,
            &ProgressionBonuses::default(),
            &collection,
            &ReferenceData::default(),
        );

        assert!((output.stats.get(StatName::Health) - 450.0).abs() < f64::EPSILON);
        assert!((output.stats.get(StatName::Defense) - 390.0).abs() < f64::EPSILON);
    }

    #[test]
    fn superior_and_renowned_multiply_in_order() {
        let mut pieces = armor("SUPERIOR_DRAGON_");
        for piece in &mut pieces {
            piece.reforge = Some("renowned".to_owned());
        }
        let mut inventory = inventory(pieces);
        let output = run(&mut inventory);

        // 40 x 1.05 x 1.01^4 = 43.70...
        assert!((output.stats.get(StatName::Defense) - 43.0).abs() < f64::EPSILON);
        // 100 x 1.05 x 1.01^4 = 109.26...
        assert!((output.stats.get(StatName::Health) - 109.0).abs() < f64::EPSILON);
        let first = inventory.get(0).unwrap();
        assert!(first.stats.get(StatName::Health) > 9.0);
    }

    #[test]
    fn tuxedo_fixes_health() {
        let mut pieces = armor("ELEGANT_TUXEDO_");
        pieces.pop();
        let mut talisman = item(3, Section::TalismanBag, "HEALTH_RING", ItemType::Accessory);
        talisman.stats = StatMap::zero().with(StatName::Health, 500.0);
        pieces.push(talisman);
        let output = run(&mut inventory(pieces));

        assert!((output.stats.get(StatName::Health) - 250.0).abs() < f64::EPSILON);
    }

    #[test]
    fn mastiff_reads_running_crit_damage() {
        let mut pieces = armor("MASTIFF_");
        if let Some(first) = pieces.first_mut() {
            first.stats.add(StatName::CritDamage, 10.0);
        }
        let sword = with_stats(
            item(4, Section::Inventory, "ASPECT_OF_THE_END", ItemType::Sword),
            &[(StatName::CritDamage, 2.0), (StatName::Strength, 100.0)],
        );
        pieces.push(sword);
        let mut inventory = inventory(pieces);
        let output = run(&mut inventory);

        // Base 50 crit damage + 10 from the boots.
        let health = output.stats.get(StatName::Health);
        assert!((health - (100.0 + 50.0 * 60.0)).abs() < f64::EPSILON);

        let uid = inventory.get(4).unwrap().uid;
        let held = output.weapon_stats.get(&uid).unwrap();
        assert!((held.get(StatName::Health) - (health + 100.0)).abs() < f64::EPSILON);
        assert!((held.get(StatName::Strength) - (output.stats.get(StatName::Strength) + 100.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn crystals_and_melody_hair() {
        let day = item(0, Section::TalismanBag, DAY_CRYSTAL, ItemType::Accessory);
        let night = item(1, Section::TalismanBag, NIGHT_CRYSTAL, ItemType::Accessory);
        let mut hair = item(2, Section::TalismanBag, MELODY_HAIR, ItemType::Accessory);
        hair.is_inactive = true;
        let mut inventory = inventory(vec![day, night, hair]);
        let output = run(&mut inventory);

        let base = ReferenceData::default().base_stats;
        assert!((output.stats.get(StatName::Strength) - (base.get(StatName::Strength) + 5.0)).abs() < f64::EPSILON);
        assert!((output.stats.get(StatName::Intelligence) - (base.get(StatName::Intelligence) + 26.0)).abs() < f64::EPSILON);
        // The hair counts towards base stats; the crystals do not.
        assert!((output.base_stats.get(StatName::Intelligence) - (base.get(StatName::Intelligence) + 26.0)).abs() < f64::EPSILON);
        assert!((output.base_stats.get(StatName::Strength) - base.get(StatName::Strength)).abs() < f64::EPSILON);
        assert!((inventory.get(0).unwrap().stats.get(StatName::Defense) - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn two_melody_hairs_grant_nothing() {
        let first = item(0, Section::TalismanBag, MELODY_HAIR, ItemType::Accessory);
        let second = item(1, Section::Inventory, MELODY_HAIR, ItemType::Accessory);
        let output = run(&mut inventory(vec![first, second]));

        let base = ReferenceData::default().base_stats;
        assert!((output.stats.get(StatName::Intelligence) - base.get(StatName::Intelligence)).abs() < f64::EPSILON);
    }

    #[test]
    fn weapon_snapshot_applies_superior_once_without_renowned() {
        let mut pieces = armor("SUPERIOR_DRAGON_");
        if let Some(first) = pieces.first_mut() {
            first.reforge = Some(RENOWNED.to_owned());
        }
        let sword = with_stats(
            item(4, Section::Inventory, "ASPECT_OF_THE_END", ItemType::Sword),
            &[(StatName::Strength, 100.0)],
        );
        pieces.push(sword);
        let mut inventory = inventory(pieces);
        let output = run(&mut inventory);

        let uid = inventory.get(4).unwrap().uid;
        let held = output.weapon_stats.get(&uid).unwrap();

        // Before multipliers: 100 health, 40 defense, 0 strength; the sword adds 100 strength.
        assert!((held.get(StatName::Strength) - 105.0).abs() < f64::EPSILON);
        assert!((held.get(StatName::Defense) - 42.0).abs() < f64::EPSILON);
        // 100 x 1.05, with no renowned 1.01 on top.
        assert!((held.get(StatName::Health) - 105.0).abs() < f64::EPSILON);
        // 105 x 1.42 = 149.1.
        assert!((held.get(StatName::EffectiveHealth) - 149.0).abs() < f64::EPSILON);

        // The aggregate carries renowned; adding the sword to it would not match.
        assert!((output.stats.get(StatName::Health) - 106.0).abs() < f64::EPSILON);
        let naive = output.stats.get(StatName::Strength) + 100.0;
        assert!((held.get(StatName::Strength) - naive).abs() > f64::EPSILON);
    }

    #[test]
    fn weapon_snapshot_keeps_tuxedo_health() {
        let mut pieces = armor("CHEAP_TUXEDO_");
        pieces.pop();
        let sword = with_stats(
            item(4, Section::Inventory, "ASPECT_OF_THE_END", ItemType::Sword),
            &[(StatName::Health, 50.0), (StatName::Strength, 20.0)],
        );
        pieces.push(sword);
        let mut inventory = inventory(pieces);
        let output = run(&mut inventory);

        let uid = inventory.get(4).unwrap().uid;
        let held = output.weapon_stats.get(&uid).unwrap();
        assert!((output.stats.get(StatName::Health) - 75.0).abs() < f64::EPSILON);
        assert!((held.get(StatName::Health) - 75.0).abs() < f64::EPSILON);
        assert!((held.get(StatName::Strength) - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn crab_hat_grants_lore_intelligence() {
        let mut hat = item(0, Section::Armor, CRAB_HAT, ItemType::Accessory);
        hat.lore = vec!["Your bonus: +12 Intelligence".to_owned()];
        let mut inventory = inventory(vec![hat]);
        inventory.armor.push(0);
        let output = run(&mut inventory);

        let base = ReferenceData::default().base_stats;
        assert!((output.stats.get(StatName::Intelligence) - (base.get(StatName::Intelligence) + 12.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn obsidian_chestplate_counts_obsidian() {
        let chest = item(0, Section::Armor, OBSIDIAN_CHESTPLATE, ItemType::Chestplate);
        let mut obsidian = item(1, Section::Inventory, "", ItemType::Sword);
        obsidian.skyblock_id = None;
        obsidian.item_type = None;
        obsidian.id = Some(OBSIDIAN_BLOCK);
        obsidian.count = 64;
        let output = run(&mut inventory(vec![chest, obsidian]));

        assert!((output.stats.get(StatName::Speed) - 103.0).abs() < f64::EPSILON);
    }

    #[test]
    fn effective_health_formula() {
        assert!((effective_health(100.0, 0.0) - 100.0).abs() < f64::EPSILON);
        assert!((effective_health(250.0, 50.0) - 375.0).abs() < f64::EPSILON);
        assert!((effective_health(101.0, 33.0) - 134.0).abs() < f64::EPSILON);
    }
}
