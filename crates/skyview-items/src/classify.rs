//! Item classification.
//!
//! Turns one [`RawItem`] into a classified [`Item`]: display name, rarity
//! and category from the last lore line, stats from the stat lines,
//! textures, and the extra attributes the report shows. Missing fields
//! leave the derived field unset; nothing here fails the pipeline.

use std::collections::BTreeMap;

use base64::Engine as _;
use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD};
use chrono::{DateTime, NaiveDateTime};
use serde::Deserialize;
use skyview_nbt::{RawItem, Tag, strip_formatting};
use skyview_types::{ClassificationWarning, Item, ItemType, StatName};
use tracing::debug;

use crate::lore::{StatLine, parse_rarity_line, parse_stat_line};

/// Leather armor ids, helmet through boots.
const LEATHER_IDS: std::ops::RangeInclusive<i16> = 298..=301;
const LEATHER_PIECES: [&str; 4] = ["helmet", "chestplate", "leggings", "boots"];
const DEFAULT_LEATHER_COLOR: &str = "149,94,59";

/// Speed granted by the speed talisman line when lore carries no Speed stat.
const SPEED_TALISMANS: [(&str, f64); 3] = [
    ("SPEED_TALISMAN", 1.0),
    ("SPEED_RING", 3.0),
    ("SPEED_ARTIFACT", 5.0),
];

const SWORD_ENCHANTMENTS: [&str; 14] = [
    "sharpness",
    "critical",
    "ender_slayer",
    "execute",
    "first_strike",
    "giant_killer",
    "lethality",
    "life_steal",
    "looting",
    "luck",
    "scavenger",
    "vampirism",
    "bane_of_arthropods",
    "smite",
];

const BOW_ENCHANTMENTS: [&str; 7] = [
    "power",
    "aiming",
    "infinite_quiver",
    "snipe",
    "punch",
    "flame",
    "piercing",
];

const ROD_ENCHANTMENTS: [&str; 7] = [
    "angler",
    "blessing",
    "caster",
    "frail",
    "luck_of_the_sea",
    "lure",
    "magnet",
];

/// Classify `raw` into `item`, whose positional fields are already set.
///
/// Recoverable problems are appended to `warnings`.
pub fn classify(raw: &RawItem, mut item: Item, warnings: &mut Vec<ClassificationWarning>) -> Item {
    let Some(id) = raw.id else {
        return item;
    };
    item.id = Some(id);
    item.damage = raw.damage;
    item.count = u8::try_from(raw.count).unwrap_or_default();

    item.skyblock_id = raw.extra_str("id").map(str::to_owned);
    item.reforge = raw.extra_str("modifier").map(str::to_owned);
    item.enchantments = enchantments(raw);
    item.display_name = raw.display_name().map(strip_formatting);

    if item.display_name.as_deref() == Some("Water Bottle") {
        item.damage = 17;
    }
    if id == 358 {
        item.id = Some(395);
        item.damage = 0;
    }

    if LEATHER_IDS.contains(&id) {
        item.texture_path = Some(leather_texture(id, raw.extra_str("color")));
    }
    if let Some(value) = raw.skull_texture() {
        match head_texture(value) {
            Some(path) => item.texture_path = Some(path),
            None => warn_item(
                warnings,
                ClassificationWarning::TextureDecode {
                    item_index: item.item_index,
                },
            ),
        }
    }

    item.lore_raw = raw.lore();
    item.lore = item.lore_raw.iter().map(|line| strip_formatting(line)).collect();

    if let Some(last) = item.lore_raw.last() {
        let line = parse_rarity_line(last);
        if line.rarity.is_none() && !line.word.is_empty() {
            warn_item(
                warnings,
                ClassificationWarning::UnknownRarity {
                    item_index: item.item_index,
                    word: line.word.clone(),
                },
            );
        }
        let (item_type, dungeon) = line.item_type();
        item.rarity = line.rarity;
        item.localized = line.localized;
        item.item_type = item_type;
        item.dungeon = dungeon;
        if dungeon {
            item.damage = 0;
        }

        apply_lore_stats(&mut item, warnings);
    }

    if item.item_type.is_none() && item.key() != "ENCHANTED_BOOK" {
        item.item_type = infer_type(&item.enchantments);
    }

    apply_extra_attributes(raw, &mut item);
    item
}

fn warn_item(warnings: &mut Vec<ClassificationWarning>, warning: ClassificationWarning) {
    debug!(warning = %warning, "classification issue");
    warnings.push(warning);
}

/// Parse every lore line for stats, then apply the speed talisman rule.
fn apply_lore_stats(item: &mut Item, warnings: &mut Vec<ClassificationWarning>) {
    let mut speed_parsed = false;
    let mut unparseable = Vec::new();

    for line in &item.lore {
        match parse_stat_line(line) {
            StatLine::Stat(stat, value) => {
                speed_parsed |= stat == StatName::Speed;
                item.stats.set(stat, value);
            }
            StatLine::Unparseable(_) => unparseable.push(line.clone()),
            StatLine::Ignored => {}
        }
    }
    for line in unparseable {
        warn_item(
            warnings,
            ClassificationWarning::UnparseableStat {
                item_index: item.item_index,
                line,
            },
        );
    }

    if !speed_parsed
        && let Some((_, speed)) = SPEED_TALISMANS.iter().find(|(key, _)| *key == item.key())
    {
        item.stats.set(StatName::Speed, *speed);
    }
}

/// Guess a category from enchantments: sword, then bow, then fishing rod.
pub fn infer_type(enchantments: &BTreeMap<String, i32>) -> Option<ItemType> {
    let has_any = |set: &[&str]| set.iter().any(|key| enchantments.contains_key(*key));
    if has_any(&SWORD_ENCHANTMENTS) {
        Some(ItemType::Sword)
    } else if has_any(&BOW_ENCHANTMENTS) {
        Some(ItemType::Bow)
    } else if has_any(&ROD_ENCHANTMENTS) {
        Some(ItemType::FishingRod)
    } else {
        None
    }
}

fn enchantments(raw: &RawItem) -> BTreeMap<String, i32> {
    raw.extra_attributes()
        .and_then(|extra| extra.get("enchantments"))
        .and_then(Tag::as_compound)
        .map(|map| {
            map.iter()
                .filter_map(|(key, level)| Some((key.clone(), level.as_i32()?)))
                .collect()
        })
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Textures
// ---------------------------------------------------------------------------

/// `/leather/<piece>/<r,g,b>` from the `r:g:b` dye attribute.
fn leather_texture(id: i16, color: Option<&str>) -> String {
    let piece = usize::try_from(id.saturating_sub(*LEATHER_IDS.start()))
        .ok()
        .and_then(|offset| LEATHER_PIECES.get(offset))
        .copied()
        .unwrap_or("helmet");
    let color = color.map_or_else(|| DEFAULT_LEATHER_COLOR.to_owned(), |rgb| rgb.replace(':', ","));
    format!("/leather/{piece}/{color}")
}

#[derive(Debug, Deserialize)]
struct TextureProperty {
    textures: TextureSet,
}

#[derive(Debug, Deserialize)]
struct TextureSet {
    #[serde(rename = "SKIN")]
    skin: SkinTexture,
}

#[derive(Debug, Deserialize)]
struct SkinTexture {
    url: String,
}

/// `/head/<hash>` from a skull's base64 texture property.
pub fn head_texture(value: &str) -> Option<String> {
    let value = value.trim();
    let bytes = STANDARD
        .decode(value)
        .or_else(|_padding| STANDARD_NO_PAD.decode(value.trim_end_matches('=')))
        .ok()?;
    let property: TextureProperty = serde_json::from_slice(&bytes).ok()?;
    let hash = property.textures.skin.url.rsplit('/').next()?.to_owned();
    (!hash.is_empty()).then(|| format!("/head/{hash}"))
}

// ---------------------------------------------------------------------------
// Extra attributes
// ---------------------------------------------------------------------------

fn apply_extra_attributes(raw: &RawItem, item: &mut Item) {
    let int = |key: &str| raw.extra_i64(key).and_then(|value| i32::try_from(value).ok());

    item.recombobulated = int("rarity_upgrades").is_some_and(|upgrades| upgrades > 0);
    item.anvil_uses = int("anvil_uses")
        .map(|uses| uses.saturating_sub(int("hot_potato_count").unwrap_or_default()))
        .filter(|uses| *uses > 0);
    item.dungeon_quality = int("baseStatBoostPercentage");
    item.dungeon_floor = int("item_tier");
    item.new_years_cake = int("new_years_cake");
    item.obtained = raw
        .extra_attributes()
        .and_then(|extra| extra.get("timestamp"))
        .and_then(parse_obtained);
}

/// Obtainment time: epoch milliseconds, or one of the printed date formats.
pub fn parse_obtained(timestamp: &Tag) -> Option<NaiveDateTime> {
    if let Some(millis) = timestamp.as_i64() {
        return DateTime::from_timestamp_millis(millis).map(|time| time.naive_utc());
    }
    let text = timestamp.as_str()?.trim();
    if let Ok(millis) = text.parse::<i64>() {
        return DateTime::from_timestamp_millis(millis).map(|time| time.naive_utc());
    }

    let primary = if text.contains("AM") || text.contains("PM") {
        "%m/%d/%y %I:%M %p"
    } else {
        "%d/%m/%y %H:%M"
    };
    NaiveDateTime::parse_from_str(text, primary)
        .or_else(|_day_first| NaiveDateTime::parse_from_str(text, "%m/%d/%y %H:%M"))
        .ok()
}
