//! Immutable game reference tables.
//!
//! [`ReferenceData::default`] returns the built-in tables. A YAML document
//! may override any top-level table; tables it omits keep their built-in
//! value. The engine receives the data once and never mutates it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::enums::{Rarity, Section, Skill, SlayerBoss};
use crate::stats::StatMap;
use crate::tables;

/// Stepped bonus table: level threshold to the stats granted per level.
pub type BonusSteps = BTreeMap<u32, StatMap>;

/// Display metadata for a pet type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetMetadata {
    /// Head texture path.
    pub head: String,
    /// Skill the pet levels from.
    #[serde(rename = "type")]
    pub skill: String,
    /// Emoji shown next to the name.
    pub emoji: String,
}

impl PetMetadata {
    /// Metadata used when a pet type is unknown.
    pub fn placeholder() -> Self {
        Self {
            head: "/head/bc8ea1f51f253ff5142ca11ae45193a4ad8c3ab5e9c6eec8ba7a4fcb7bac40".to_owned(),
            skill: "???".to_owned(),
            emoji: "\u{2753}".to_owned(),
        }
    }
}

/// A pet held item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetItem {
    /// Tooltip line with formatting codes.
    pub description: String,
    /// Stats the item grants to the player.
    #[serde(default)]
    pub stats: StatMap,
}

/// Stats granted once the pet score reaches `score`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PetReward {
    /// Minimum pet score.
    pub score: u32,
    /// Reward.
    pub stats: StatMap,
}

/// Capacity steps of a bag, unlocked by a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BagSize {
    /// Collection whose tier unlocks slots.
    pub collection: String,
    /// Slots per minimum tier, ascending.
    pub sizes: Vec<BagTier>,
}

/// One capacity step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BagTier {
    /// Minimum collection tier.
    pub tier: u32,
    /// Slots unlocked.
    pub slots: usize,
}

/// Every table the engine reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceData {
    /// Stats every player starts with.
    pub base_stats: StatMap,
    /// Per-level costs of the regular skill curve.
    pub skill_xp: Vec<f64>,
    /// Per-level costs of the runecrafting curve.
    pub runecrafting_xp: Vec<f64>,
    /// Cumulative thresholds for slayer levels 1..=9.
    pub slayer_xp: BTreeMap<SlayerBoss, Vec<f64>>,
    /// Quest cost per one-based boss tier.
    pub slayer_tier_cost: BTreeMap<u32, f64>,
    /// Stepped skill bonuses.
    pub skill_bonuses: BTreeMap<Skill, BonusSteps>,
    /// Stepped slayer bonuses.
    pub slayer_bonuses: BTreeMap<SlayerBoss, BonusSteps>,
    /// Per-level costs of the shared pet curve.
    pub pet_xp: Vec<f64>,
    /// Where each rarity starts on the pet curve.
    pub pet_rarity_offset: BTreeMap<Rarity, usize>,
    /// Pet score value per rarity.
    pub pet_value: BTreeMap<Rarity, u32>,
    /// Pet score rewards, ascending by score.
    pub pet_rewards: Vec<PetReward>,
    /// Held item that raises pet rarity by one tier.
    pub pet_tier_boost_item: String,
    /// Pet metadata by type.
    pub pets: BTreeMap<String, PetMetadata>,
    /// Pet held items by id.
    pub pet_items: BTreeMap<String, PetItem>,
    /// Talisman id to the ids that supersede it.
    pub talisman_upgrades: BTreeMap<String, Vec<String>>,
    /// Talisman id to ids that make it non-unique.
    pub talisman_duplicates: BTreeMap<String, Vec<String>>,
    /// Id prefixes of tiered talisman families, `<PREFIX><tier>`.
    pub talisman_families: Vec<String>,
    /// Bag capacity steps per bag section.
    pub bag_sizes: BTreeMap<Section, BagSize>,
    /// Fairy souls in the game.
    pub max_fairy_souls: u32,
    /// Players excluded from leaderboards.
    pub blocked_players: Vec<String>,
    /// Readable names for mob keys that do not title-case well.
    pub mob_names: BTreeMap<String, String>,
    /// Mob key to the rider/mount keys merged into it.
    pub mob_mounts: BTreeMap<String, Vec<String>>,
    /// Readable names for area keys.
    pub area_names: BTreeMap<String, String>,
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self {
            base_stats: tables::base_stats(),
            skill_xp: tables::SKILL_XP.to_vec(),
            runecrafting_xp: tables::RUNECRAFTING_XP.to_vec(),
            slayer_xp: tables::slayer_xp(),
            slayer_tier_cost: tables::slayer_tier_cost(),
            skill_bonuses: tables::skill_bonuses(),
            slayer_bonuses: tables::slayer_bonuses(),
            pet_xp: tables::PET_XP.to_vec(),
            pet_rarity_offset: tables::pet_rarity_offset(),
            pet_value: tables::pet_value(),
            pet_rewards: tables::pet_rewards(),
            pet_tier_boost_item: "PET_ITEM_TIER_BOOST".to_owned(),
            pets: tables::pets(),
            pet_items: tables::pet_items(),
            talisman_upgrades: tables::talisman_upgrades(),
            talisman_duplicates: BTreeMap::new(),
            talisman_families: vec!["CAMPFIRE_TALISMAN_".to_owned(), "WEDDING_RING_".to_owned()],
            bag_sizes: tables::bag_sizes(),
            max_fairy_souls: 209,
            blocked_players: vec![
                "20934ef9488c465180a78f861586b4cf".to_owned(),
                "f025c1c7f55a4ea0b8d93f47d17dfe0f".to_owned(),
            ],
            mob_names: tables::mob_names(),
            mob_mounts: tables::mob_mounts(),
            area_names: tables::area_names(),
        }
    }
}

impl ReferenceData {
    /// Per-level costs for `skill`.
    pub fn skill_curve(&self, skill: Skill) -> &[f64] {
        match skill {
            Skill::Runecrafting => &self.runecrafting_xp,
            _ => &self.skill_xp,
        }
    }

    /// Cumulative level thresholds for `boss`.
    pub fn slayer_thresholds(&self, boss: SlayerBoss) -> &[f64] {
        self.slayer_xp.get(&boss).map_or(&[], Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::StatName;

    #[test]
    fn builtin_tables_have_expected_shapes() {
        let data = ReferenceData::default();

        assert_eq!(data.skill_xp.len(), 50);
        assert_eq!(data.runecrafting_xp.len(), 25);
        assert_eq!(data.slayer_thresholds(SlayerBoss::Wolf).len(), 9);
        assert!(data.pet_xp.len() >= 119);
        assert!((data.base_stats.get(StatName::Health) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn yaml_override_keeps_unlisted_tables() {
        let yaml = "max_fairy_souls: 220\nskill_xp: [10, 20, 30]\n";
        let parsed: Result<ReferenceData, _> = serde_yml::from_str(yaml);
        let data = parsed.ok().unwrap_or_default();

        assert_eq!(data.max_fairy_souls, 220);
        assert_eq!(data.skill_xp.len(), 3);
        assert_eq!(data.runecrafting_xp.len(), 25);
        assert!(data.pets.contains_key("ENDER_DRAGON"));
    }

    #[test]
    fn yaml_bonus_steps_parse() {
        let yaml = "skill_bonuses:\n  mining:\n    1: { defense: 1 }\n    15: { defense: 2 }\n";
        let parsed: Result<ReferenceData, _> = serde_yml::from_str(yaml);
        let data = parsed.ok().unwrap_or_default();

        let mining = data.skill_bonuses.get(&Skill::Mining);
        let step = mining.and_then(|steps| steps.get(&15));
        assert_eq!(step.map(|stats| stats.get(StatName::Defense)), Some(2.0));
        assert!(!data.skill_bonuses.contains_key(&Skill::Farming));
    }
}
