//! Output records assembled by the engine.
//!
//! # Structure
//!
//! - [`ProfileReport`] -- everything computed for one member
//! - [`SkillSummary`], [`SlayerSummary`], [`PetSummary`] -- progression
//! - [`CollectionProgress`], [`FairySouls`], [`KillCount`] -- counters
//!
//! Items are referenced by their index into [`ProfileReport::items`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{Rarity, Section, Skill, SlayerBoss};
use crate::ids::ItemUid;
use crate::item::Item;
use crate::stats::StatMap;
use crate::warnings::{ClassificationWarning, ConfigurationGap};

// ---------------------------------------------------------------------------
// Skills
// ---------------------------------------------------------------------------

/// Level derived from cumulative experience on a curve.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct LevelInfo {
    /// Total experience.
    pub xp: f64,
    /// Reached level.
    pub level: u32,
    /// Highest level of the curve.
    pub max_level: u32,
    /// Experience earned into the current level.
    pub xp_current: f64,
    /// Cost of the next level; `None` at max.
    pub xp_for_next: Option<f64>,
    /// Fraction of the next level, in `[0, 1]`.
    pub progress: f64,
}

/// All skill levels of a member.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SkillSummary {
    /// Level per skill.
    pub levels: BTreeMap<Skill, LevelInfo>,
    /// Average of level plus progress over the counted skills.
    pub average_level: f64,
    /// Average of whole levels over the counted skills.
    pub average_level_no_progress: f64,
    /// Experience summed over the counted skills.
    pub total_skill_xp: f64,
    /// Whether levels came from achievements instead of experience.
    pub from_achievements: bool,
}

// ---------------------------------------------------------------------------
// Slayers
// ---------------------------------------------------------------------------

/// Slayer level from claimed markers.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SlayerLevel {
    /// Highest claimed level.
    pub current_level: u32,
    /// Highest level of the boss line.
    pub max_level: u32,
    /// Slayer experience.
    pub xp: f64,
    /// Threshold of the next level; `None` at max.
    pub xp_for_next: Option<f64>,
    /// Experience over the next threshold; 1 at max.
    pub progress: f64,
}

/// Progress on one boss line.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SlayerProgress {
    /// Level and progress.
    pub level: SlayerLevel,
    /// Kills per one-based boss tier.
    pub kills: BTreeMap<u32, f64>,
    /// Kills over every tier.
    pub total_kills: f64,
    /// Coins spent starting quests.
    pub coins_spent: f64,
}

/// All slayer progress of a member.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SlayerSummary {
    /// Progress per boss line with claimed levels.
    pub slayers: BTreeMap<SlayerBoss, SlayerProgress>,
    /// Experience over every boss line.
    pub slayer_xp: f64,
    /// Coins spent over every boss line.
    pub slayer_coins_spent: f64,
}

// ---------------------------------------------------------------------------
// Pets
// ---------------------------------------------------------------------------

/// Pet level on the shared pet curve.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct PetLevel {
    /// Level, 1 to 100.
    pub level: u32,
    /// Always 100.
    pub max_level: u32,
    /// Experience earned into the current level.
    pub xp_current: f64,
    /// Cost of the next level; `None` at max.
    pub xp_for_next: Option<f64>,
    /// Fraction of the next level, in `[0, 1]`.
    pub progress: f64,
    /// Experience needed for level 100 at this rarity.
    pub xp_max_level: f64,
}

/// An owned pet with derived metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Pet {
    /// Pet type key.
    pub pet_type: String,
    /// Title-cased type.
    pub display_name: String,
    /// Rarity after the tier boost.
    pub rarity: Rarity,
    /// Pet experience.
    pub exp: f64,
    /// Whether the pet is summoned.
    pub active: bool,
    /// Pet candies fed.
    pub candy_used: u32,
    /// Held item id.
    pub held_item: Option<String>,
    /// Held item name from the item store.
    pub held_item_name: Option<String>,
    /// Level on the pet curve.
    pub level: PetLevel,
    /// Stats granted by the held item.
    #[ts(as = "BTreeMap<String, f64>")]
    pub stats: StatMap,
    /// Tooltip lines with formatting codes.
    pub lore: Vec<String>,
    /// Skill the pet levels from, or `???`.
    pub skill: String,
    /// Emoji, or `❓`.
    pub emoji: String,
    /// Head texture path.
    pub texture_path: String,
}

/// A pet type the member does not own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct MissingPet {
    /// Pet type key.
    pub pet_type: String,
    /// Title-cased type.
    pub display_name: String,
    /// Shown at legendary.
    pub rarity: Rarity,
    /// Skill the pet levels from.
    pub skill: String,
    /// Emoji.
    pub emoji: String,
    /// Head texture path.
    pub texture_path: String,
}

/// Pets, missing pets and the pet score.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct PetSummary {
    /// Owned pets, active first then by rarity and level.
    pub pets: Vec<Pet>,
    /// Known pet types not owned.
    pub missing_pets: Vec<MissingPet>,
    /// Sum over pet types of the best owned rarity value.
    pub pet_score: u32,
}

// ---------------------------------------------------------------------------
// Collections and counters
// ---------------------------------------------------------------------------

/// One coop member's contribution to a collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct MemberAmount {
    /// Member uuid.
    pub uuid: String,
    /// Member name, or the uuid when unresolved.
    pub display_name: String,
    /// Amount collected.
    pub amount: f64,
}

/// Progress on one collection.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CollectionProgress {
    /// Highest unlocked tier.
    pub tier: u32,
    /// This member's amount.
    pub amount: f64,
    /// Amount over the whole coop.
    pub total_amount: f64,
    /// Per-member amounts.
    pub amounts: Vec<MemberAmount>,
}

/// Fairy soul progress.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct FairySouls {
    /// Souls collected.
    pub collected: u32,
    /// Souls in the game.
    pub total: u32,
    /// Collected over total, at most 1.
    pub progress: f64,
}

/// A kill or death tally for one mob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct KillCount {
    /// Mob key.
    pub entity_id: String,
    /// Readable mob name.
    pub entity_name: String,
    /// Count.
    pub amount: f64,
}

/// Fishing counters.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct FishingStats {
    /// Items fished.
    pub total: f64,
    /// Treasures fished.
    pub treasure: f64,
    /// Large treasures fished.
    pub treasure_large: f64,
    /// Items fished with the shredder.
    pub shredder_fished: f64,
    /// Bait used by the shredder.
    pub shredder_bait: f64,
}

/// A coop member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct MemberInfo {
    /// Member uuid.
    pub uuid: String,
    /// Member name, or the uuid when unresolved.
    pub display_name: String,
    /// Last save, epoch milliseconds.
    pub last_save: Option<i64>,
}

/// Name of the worn armor set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ArmorSet {
    /// Set name, prefixed by a shared reforge.
    pub name: String,
    /// Rarity shown for the set.
    pub rarity: Option<Rarity>,
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// Everything computed for one member of one profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ProfileReport {
    /// Member uuid.
    pub uuid: String,
    /// Member name, or the uuid when unresolved.
    pub display_name: String,
    /// Profile id.
    pub profile_id: String,
    /// Profile fruit name.
    pub cute_name: Option<String>,
    /// Other coop members.
    pub members: Vec<MemberInfo>,

    // --- items ---
    /// Flattened item arena.
    pub items: Vec<Item>,
    /// Worn armor, non-empty pieces only.
    pub armor: Vec<usize>,
    /// Wardrobe sets of four, `None` for empty pieces.
    pub wardrobe: Vec<Vec<Option<usize>>>,
    /// Swords and bows, best rarity first.
    pub weapons: Vec<usize>,
    /// Fishing rods, best rarity first.
    pub rods: Vec<usize>,
    /// Talisman candidates, best rarity first, active before inactive.
    pub talismans: Vec<usize>,
    /// Best sword outside backpacks.
    pub highest_rarity_sword: Option<usize>,
    /// Best bow outside backpacks.
    pub highest_rarity_bow: Option<usize>,
    /// Best rod outside backpacks.
    pub highest_rarity_rod: Option<usize>,
    /// Worn armor set name.
    pub armor_set: Option<ArmorSet>,
    /// Whether the inventory API is disabled.
    pub no_inventory: bool,
    /// Capacity per bag section.
    pub bag_sizes: BTreeMap<Section, usize>,

    // --- stats ---
    /// Final aggregate stats.
    #[ts(as = "BTreeMap<String, f64>")]
    pub stats: StatMap,
    /// Stats before items are applied.
    #[ts(as = "BTreeMap<String, f64>")]
    pub base_stats: StatMap,
    /// Fairy soul exchange bonus.
    #[ts(as = "BTreeMap<String, f64>")]
    pub fairy_bonus: StatMap,
    /// Bonus per skill.
    #[ts(as = "BTreeMap<Skill, BTreeMap<String, f64>>")]
    pub skill_bonus: BTreeMap<Skill, StatMap>,
    /// Bonus per slayer line.
    #[ts(as = "BTreeMap<SlayerBoss, BTreeMap<String, f64>>")]
    pub slayer_bonus: BTreeMap<SlayerBoss, StatMap>,
    /// Pet score reward.
    #[ts(as = "BTreeMap<String, f64>")]
    pub pet_score_bonus: StatMap,
    /// Active pet held-item bonus.
    #[ts(as = "BTreeMap<String, f64>")]
    pub pet_bonus: StatMap,
    /// Stats while holding each weapon or rod.
    #[ts(as = "BTreeMap<ItemUid, BTreeMap<String, f64>>")]
    pub weapon_stats: BTreeMap<ItemUid, StatMap>,

    // --- progression ---
    /// Skill levels and averages.
    pub skills: SkillSummary,
    /// Slayer levels, kills and coins.
    pub slayers: SlayerSummary,
    /// Pets and pet score.
    pub pets: PetSummary,
    /// Collections by item id.
    pub collections: BTreeMap<String, CollectionProgress>,
    /// Fairy souls.
    pub fairy_souls: FairySouls,

    // --- counters ---
    /// Coins in the purse.
    pub purse: f64,
    /// Coins in the bank, when exposed.
    pub bank: Option<f64>,
    /// Kill tallies, most first.
    pub kills: Vec<KillCount>,
    /// Death tallies, most first.
    pub deaths: Vec<KillCount>,
    /// Fishing counters.
    pub fishing: FishingStats,
    /// Area key the member was last seen in.
    pub current_area: Option<String>,
    /// Readable area name.
    pub current_area_name: Option<String>,
    /// Selected wardrobe slot.
    pub wardrobe_equipped_slot: Option<i32>,
    /// Last save, epoch milliseconds.
    pub last_save: Option<i64>,
    /// First join, epoch milliseconds.
    pub first_join: Option<i64>,

    // --- diagnostics ---
    /// Recovered classification issues.
    pub warnings: Vec<ClassificationWarning>,
    /// Missing reference data.
    pub gaps: Vec<ConfigurationGap>,
}
