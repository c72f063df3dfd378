//! Pets, missing pets and the pet score.
//!
//! Pet levels come from [`crate::curves::pet_level`]. Held item names are
//! resolved by the caller (they live in the document store) and passed in
//! as a map; unknown pet types and held items fall back to placeholder
//! metadata and are reported as [`ConfigurationGap`]s.

use std::collections::{BTreeMap, BTreeSet};

use skyview_types::{
    ConfigurationGap, ItemMetadata, MissingPet, Pet, PetLevel, PetMetadata, PetSummary, Rarity,
    RawPet, ReferenceData, StatMap,
};
use tracing::debug;

use crate::curves::{MAX_PET_LEVEL, pet_level, whole};

/// Segments of the lore progress bar.
const PROGRESS_BAR_SEGMENTS: u32 = 20;

/// Candies a pet can be fed.
const MAX_CANDY: u32 = 10;

/// Derive every owned pet, sorted for display.
///
/// Pets without a tier are skipped. The held tier-boost item raises the
/// rarity by one, never beyond legendary.
pub fn pets(
    raw: &[RawPet],
    held_items: &BTreeMap<String, ItemMetadata>,
    reference: &ReferenceData,
    gaps: &mut Vec<ConfigurationGap>,
) -> Vec<Pet> {
    let mut output: Vec<Pet> = raw
        .iter()
        .filter_map(|pet| derive_pet(pet, held_items, reference, gaps))
        .collect();

    output.sort_by(|a, b| {
        b.active
            .cmp(&a.active)
            .then_with(|| b.rarity.cmp(&a.rarity))
            .then_with(|| b.level.level.cmp(&a.level.level))
            .then_with(|| a.pet_type.cmp(&b.pet_type))
    });
    output
}

fn derive_pet(
    raw: &RawPet,
    held_items: &BTreeMap<String, ItemMetadata>,
    reference: &ReferenceData,
    gaps: &mut Vec<ConfigurationGap>,
) -> Option<Pet> {
    let Some(mut rarity) = raw.tier.as_deref().and_then(Rarity::from_word) else {
        debug!(pet_type = %raw.pet_type, tier = ?raw.tier, "pet without a usable tier skipped");
        return None;
    };
    if raw.held_item.as_deref() == Some(reference.pet_tier_boost_item.as_str()) {
        rarity = rarity.boosted();
    }

    let metadata = if let Some(metadata) = reference.pets.get(&raw.pet_type) {
        metadata.clone()
    } else {
        debug!(pet_type = %raw.pet_type, "unknown pet type");
        gaps.push(ConfigurationGap::UnknownPet {
            pet_type: raw.pet_type.clone(),
        });
        PetMetadata::placeholder()
    };

    let level = pet_level(raw.exp, rarity, reference);
    let mut lore = progress_lore(raw, &metadata, &level);
    let mut stats = StatMap::zero();
    let mut held_item_name = None;

    if let Some(held) = &raw.held_item {
        let name = held_items.get(held).map_or_else(|| held.clone(), |item| item.name.clone());
        let color = held_items
            .get(held)
            .and_then(|item| item.tier)
            .unwrap_or(Rarity::Common)
            .color_code();
        lore.push(String::new());
        lore.push(format!("\u{a7}6Held Item: \u{a7}{color}{name}"));
        held_item_name = Some(name);

        if let Some(item) = reference.pet_items.get(held) {
            lore.push(item.description.clone());
            stats.add_all(&item.stats);
        } else {
            debug!(item_id = %held, "unknown pet item");
            gaps.push(ConfigurationGap::UnknownPetItem {
                item_id: held.clone(),
            });
        }
    }

    Some(Pet {
        display_name: title_case(&raw.pet_type),
        pet_type: raw.pet_type.clone(),
        rarity,
        exp: raw.exp,
        active: raw.active,
        candy_used: raw.candy_used,
        held_item: raw.held_item.clone(),
        held_item_name,
        level,
        stats,
        lore,
        skill: metadata.skill,
        emoji: metadata.emoji,
        texture_path: metadata.head,
    })
}

fn progress_lore(raw: &RawPet, metadata: &PetMetadata, level: &PetLevel) -> Vec<String> {
    let mut lore = vec![format!("\u{a7}8{} Pet", capitalize(&metadata.skill)), String::new()];

    match level.xp_for_next {
        Some(next) if level.level < MAX_PET_LEVEL => {
            let percent = (level.progress * 1_000.0).floor() / 10.0;
            lore.push(format!(
                "\u{a7}7Progress to Level {}: \u{a7}e{percent:.1}%",
                level.level.saturating_add(1)
            ));
            let filled = whole(level.progress * f64::from(PROGRESS_BAR_SEGMENTS)).min(PROGRESS_BAR_SEGMENTS);
            let empty = PROGRESS_BAR_SEGMENTS.saturating_sub(filled);
            lore.push(format!(
                "{}{} \u{a7}e{} \u{a7}6/ \u{a7}e{}",
                "\u{a7}2-".repeat(segments(filled)),
                "\u{a7}f-".repeat(segments(empty)),
                grouped(level.xp_current),
                grouped(next),
            ));
        }
        _ => lore.push("\u{a7}bMAX LEVEL".to_owned()),
    }

    lore.push(String::new());
    lore.push(format!(
        "\u{a7}7Total XP: \u{a7}e{} \u{a7}6/ \u{a7}e{}",
        grouped(raw.exp),
        grouped(level.xp_max_level)
    ));
    lore.push(format!(
        "\u{a7}7Candy Used: \u{a7}e{} \u{a7}6/ \u{a7}e{MAX_CANDY}",
        raw.candy_used
    ));
    lore
}

fn segments(count: u32) -> usize {
    usize::try_from(count).unwrap_or(0)
}

/// Known pet types the member does not own, shown at legendary.
pub fn missing_pets(owned: &[Pet], reference: &ReferenceData) -> Vec<MissingPet> {
    let owned: BTreeSet<&str> = owned.iter().map(|pet| pet.pet_type.as_str()).collect();

    reference
        .pets
        .iter()
        .filter(|(pet_type, _)| !owned.contains(pet_type.as_str()))
        .map(|(pet_type, metadata)| MissingPet {
            pet_type: pet_type.clone(),
            display_name: title_case(pet_type),
            rarity: Rarity::Legendary,
            skill: metadata.skill.clone(),
            emoji: metadata.emoji.clone(),
            texture_path: metadata.head.clone(),
        })
        .collect()
}

/// Sum over pet types of the value of the best owned rarity.
pub fn pet_score(owned: &[Pet], reference: &ReferenceData) -> u32 {
    let mut best: BTreeMap<&str, u32> = BTreeMap::new();
    for pet in owned {
        let value = reference.pet_value.get(&pet.rarity).copied().unwrap_or(0);
        let entry = best.entry(pet.pet_type.as_str()).or_insert(0);
        *entry = (*entry).max(value);
    }
    best.values().fold(0_u32, |total, value| total.saturating_add(*value))
}

/// Reward of the highest breakpoint the score reaches.
pub fn pet_score_bonus(score: u32, reference: &ReferenceData) -> StatMap {
    reference
        .pet_rewards
        .iter()
        .filter(|reward| reward.score <= score)
        .max_by_key(|reward| reward.score)
        .map_or_else(StatMap::zero, |reward| reward.stats)
}

/// Held item stats of the summoned pets.
pub fn pet_bonus(owned: &[Pet]) -> StatMap {
    let mut bonus = StatMap::zero();
    for pet in owned.iter().filter(|pet| pet.active) {
        bonus.add_all(&pet.stats);
    }
    bonus
}

/// Pets, missing pets and score in one record.
pub fn pet_summary(
    raw: &[RawPet],
    held_items: &BTreeMap<String, ItemMetadata>,
    reference: &ReferenceData,
    gaps: &mut Vec<ConfigurationGap>,
) -> PetSummary {
    let pets = pets(raw, held_items, reference, gaps);
    PetSummary {
        missing_pets: missing_pets(&pets, reference),
        pet_score: pet_score(&pets, reference),
        pets,
    }
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

/// `ENDER_DRAGON` -> `Ender Dragon`.
pub fn title_case(key: &str) -> String {
    key.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| capitalize(&word.to_lowercase()))
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Whole number with thousands separators.
fn grouped(value: f64) -> String {
    let digits = format!("{:.0}", value.max(0.0).floor());
    let groups: Vec<&str> = digits
        .as_bytes()
        .rchunks(3)
        .rev()
        .filter_map(|chunk| std::str::from_utf8(chunk).ok())
        .collect();
    groups.join(",")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use skyview_types::StatName;

    use super::*;

    fn raw(pet_type: &str, tier: &str) -> RawPet {
        RawPet {
            pet_type: pet_type.to_owned(),
            tier: Some(tier.to_owned()),
            ..RawPet::default()
        }
    }

    #[test]
    fn tier_boost_raises_rarity_once() {
        let reference = ReferenceData::default();
        let boosted = |tier: &str| RawPet {
            held_item: Some("PET_ITEM_TIER_BOOST".to_owned()),
            ..raw("ENDER_DRAGON", tier)
        };
        let mut gaps = Vec::new();
        let output = pets(
            &[boosted("RARE"), boosted("LEGENDARY")],
            &BTreeMap::new(),
            &reference,
            &mut gaps,
        );

        let rarities: Vec<Rarity> = output.iter().map(|pet| pet.rarity).collect();
        assert_eq!(rarities, vec![Rarity::Legendary, Rarity::Epic]);
        assert!(gaps.is_empty());
    }

    #[test]
    fn unknown_type_gets_placeholder_metadata() {
        let reference = ReferenceData::default();
        let mut gaps = Vec::new();
        let output = pets(&[raw("MOON_COW", "EPIC")], &BTreeMap::new(), &reference, &mut gaps);

        let pet = output.first().unwrap();
        assert_eq!(pet.skill, "???");
        assert_eq!(pet.emoji, "\u{2753}");
        assert_eq!(pet.display_name, "Moon Cow");
        assert_eq!(
            gaps,
            vec![ConfigurationGap::UnknownPet {
                pet_type: "MOON_COW".to_owned()
            }]
        );
    }

    #[test]
    fn pets_without_tier_are_skipped() {
        let pet = RawPet {
            pet_type: "BEE".to_owned(),
            ..RawPet::default()
        };
        let output = pets(&[pet], &BTreeMap::new(), &ReferenceData::default(), &mut Vec::new());
        assert!(output.is_empty());
    }

    #[test]
    fn sort_puts_active_first_then_rarity() {
        let active = RawPet {
            active: true,
            ..raw("BEE", "COMMON")
        };
        let output = pets(
            &[raw("ENDERMAN", "RARE"), active, raw("BLAZE", "LEGENDARY")],
            &BTreeMap::new(),
            &ReferenceData::default(),
            &mut Vec::new(),
        );

        let order: Vec<&str> = output.iter().map(|pet| pet.pet_type.as_str()).collect();
        assert_eq!(order, vec!["BEE", "BLAZE", "ENDERMAN"]);
    }

    #[test]
    fn held_item_adds_lore_and_stats() {
        let reference = ReferenceData::default();
        let (item_id, item) = reference
            .pet_items
            .iter()
            .find(|(_, item)| !item.stats.is_zero())
            .unwrap();
        let names = BTreeMap::from([(
            item_id.clone(),
            ItemMetadata {
                name: "Shiny Thing".to_owned(),
                tier: Some(Rarity::Rare),
            },
        )]);
        let pet = RawPet {
            held_item: Some(item_id.clone()),
            active: true,
            ..raw("BEE", "COMMON")
        };
        let output = pets(&[pet], &names, &reference, &mut Vec::new());
        let pet = output.first().unwrap();

        assert_eq!(pet.held_item_name.as_deref(), Some("Shiny Thing"));
        assert!(pet.lore.contains(&"\u{a7}6Held Item: \u{a7}9Shiny Thing".to_owned()));
        assert_eq!(pet.lore.last(), Some(&item.description));
        assert_eq!(pet_bonus(&output), item.stats);
    }

    #[test]
    fn lore_shows_progress_until_max() {
        let output = pets(&[raw("BEE", "COMMON")], &BTreeMap::new(), &ReferenceData::default(), &mut Vec::new());
        let lore = &output.first().unwrap().lore;

        assert_eq!(lore.first().map(String::as_str), Some("\u{a7}8Farming Pet"));
        assert_eq!(lore.get(2).map(String::as_str), Some("\u{a7}7Progress to Level 2: \u{a7}e0.0%"));
        assert!(lore.get(3).unwrap().starts_with(&"\u{a7}f-".repeat(20)));
        assert_eq!(lore.last().map(String::as_str), Some("\u{a7}7Candy Used: \u{a7}e0 \u{a7}6/ \u{a7}e10"));

        let maxed = RawPet {
            exp: 1.0e9,
            ..raw("BEE", "COMMON")
        };
        let output = pets(&[maxed], &BTreeMap::new(), &ReferenceData::default(), &mut Vec::new());
        assert!(output.first().unwrap().lore.contains(&"\u{a7}bMAX LEVEL".to_owned()));
    }

    #[test]
    fn score_counts_best_rarity_per_type() {
        let reference = ReferenceData::default();
        let output = pets(
            &[raw("BEE", "COMMON"), raw("BEE", "EPIC"), raw("BLAZE", "RARE")],
            &BTreeMap::new(),
            &reference,
            &mut Vec::new(),
        );

        // Epic bee (4) + rare blaze (3).
        assert_eq!(pet_score(&output, &reference), 7);
        assert!(pet_score_bonus(7, &reference).get(StatName::MagicFind).abs() < f64::EPSILON);
        assert!((pet_score_bonus(10, &reference).get(StatName::MagicFind) - 1.0).abs() < f64::EPSILON);
        assert!((pet_score_bonus(500, &reference).get(StatName::MagicFind) - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_pets_exclude_owned_types() {
        let reference = ReferenceData::default();
        let owned = pets(&[raw("BEE", "COMMON")], &BTreeMap::new(), &reference, &mut Vec::new());
        let missing = missing_pets(&owned, &reference);

        assert_eq!(missing.len(), reference.pets.len().saturating_sub(1));
        assert!(missing.iter().all(|pet| pet.pet_type != "BEE"));
        assert!(missing.iter().all(|pet| pet.rarity == Rarity::Legendary));
    }

    #[test]
    fn grouped_numbers() {
        assert_eq!(grouped(0.0), "0");
        assert_eq!(grouped(1_234_567.8), "1,234,567");
        assert_eq!(grouped(999.0), "999");
    }
}
