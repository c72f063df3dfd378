//! Profile input documents, in the upstream JSON shape.
//!
//! Every field is optional: members with hidden inventories or fresh
//! profiles simply omit sections, and the engine skips the layers that
//! depend on them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::enums::{Rarity, Section, Skill, SlayerBoss};

/// Everything the engine needs to process one player on one profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileInput {
    /// Player uuid (undashed) of the member to report on.
    pub uuid: String,
    /// The selected profile.
    pub profile: SkyblockProfile,
    /// The player's other profiles, for leaderboard maxima.
    pub other_profiles: Vec<SkyblockProfile>,
    /// Player achievements, used when skill experience is hidden.
    pub achievements: BTreeMap<String, f64>,
}

impl ProfileInput {
    /// The member record of [`ProfileInput::uuid`], if present.
    pub fn member(&self) -> Option<&ProfileMember> {
        self.profile.members.get(&self.uuid)
    }
}

/// A profile envelope shared by its coop members.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkyblockProfile {
    /// Upstream profile id.
    pub profile_id: String,
    /// Fruit name of the profile.
    pub cute_name: Option<String>,
    /// Members by uuid.
    pub members: BTreeMap<String, ProfileMember>,
    /// Shared bank, when the API exposes it.
    pub banking: Option<Banking>,
}

/// Coop bank.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Banking {
    /// Coins in the bank.
    pub balance: f64,
}

/// One member's state on a profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileMember {
    /// Skill experience, flattened `experience_skill_*` fields.
    #[serde(flatten)]
    pub experience: SkillExperience,
    /// Slayer progress by boss key.
    pub slayer_bosses: BTreeMap<String, SlayerBossProgress>,
    /// Owned pets.
    pub pets: Vec<RawPet>,
    /// Collection amounts by item id.
    pub collection: BTreeMap<String, f64>,
    /// Unlocked collection tiers as `<ITEM>_<tier>`.
    pub unlocked_coll_tiers: Vec<String>,
    /// Crafted minion tiers as `<MINION>_<tier>`.
    pub crafted_generators: Vec<String>,
    /// Fairy souls collected.
    pub fairy_souls_collected: u32,
    /// Fairy soul exchanges performed.
    pub fairy_exchanges: u32,
    /// Coins in the purse.
    pub coin_purse: f64,
    /// Misc counters (`kills_*`, `deaths_*`, fishing totals).
    pub stats: BTreeMap<String, f64>,
    /// Last save, epoch milliseconds.
    pub last_save: Option<i64>,
    /// First join, epoch milliseconds.
    pub first_join: Option<i64>,
    /// Area the member was last seen in.
    pub current_area: Option<String>,
    /// Selected wardrobe slot.
    pub wardrobe_equipped_slot: Option<i32>,

    /// Worn armor.
    pub inv_armor: Option<SectionData>,
    /// Main inventory.
    pub inv_contents: Option<SectionData>,
    /// Ender storage.
    pub ender_chest_contents: Option<SectionData>,
    /// Accessory bag.
    pub talisman_bag: Option<SectionData>,
    /// Fishing bag.
    pub fishing_bag: Option<SectionData>,
    /// Quiver.
    pub quiver: Option<SectionData>,
    /// Potion bag.
    pub potion_bag: Option<SectionData>,
    /// Wardrobe.
    pub wardrobe_contents: Option<SectionData>,
    /// Candy bag.
    pub candy_inventory_contents: Option<SectionData>,
}

impl ProfileMember {
    /// The encoded buffer for `section`, if the API exposed it.
    pub const fn section(&self, section: Section) -> Option<&SectionData> {
        match section {
            Section::Armor => self.inv_armor.as_ref(),
            Section::Inventory => self.inv_contents.as_ref(),
            Section::EnderChest => self.ender_chest_contents.as_ref(),
            Section::TalismanBag => self.talisman_bag.as_ref(),
            Section::FishingBag => self.fishing_bag.as_ref(),
            Section::Quiver => self.quiver.as_ref(),
            Section::PotionBag => self.potion_bag.as_ref(),
            Section::Wardrobe => self.wardrobe_contents.as_ref(),
            Section::CandyBag => self.candy_inventory_contents.as_ref(),
        }
    }

    /// Slayer progress for a known boss.
    pub fn slayer(&self, boss: SlayerBoss) -> Option<&SlayerBossProgress> {
        self.slayer_bosses.get(boss.key())
    }
}

/// A base64 section buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionData {
    /// Base64 text of a gzip-compressed tag tree.
    pub data: String,
}

/// Raw `experience_skill_*` fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct SkillExperience {
    #[serde(rename = "experience_skill_taming", skip_serializing_if = "Option::is_none")]
    pub taming: Option<f64>,
    #[serde(rename = "experience_skill_farming", skip_serializing_if = "Option::is_none")]
    pub farming: Option<f64>,
    #[serde(rename = "experience_skill_mining", skip_serializing_if = "Option::is_none")]
    pub mining: Option<f64>,
    #[serde(rename = "experience_skill_combat", skip_serializing_if = "Option::is_none")]
    pub combat: Option<f64>,
    #[serde(rename = "experience_skill_foraging", skip_serializing_if = "Option::is_none")]
    pub foraging: Option<f64>,
    #[serde(rename = "experience_skill_fishing", skip_serializing_if = "Option::is_none")]
    pub fishing: Option<f64>,
    #[serde(rename = "experience_skill_enchanting", skip_serializing_if = "Option::is_none")]
    pub enchanting: Option<f64>,
    #[serde(rename = "experience_skill_alchemy", skip_serializing_if = "Option::is_none")]
    pub alchemy: Option<f64>,
    #[serde(rename = "experience_skill_carpentry", skip_serializing_if = "Option::is_none")]
    pub carpentry: Option<f64>,
    #[serde(rename = "experience_skill_runecrafting", skip_serializing_if = "Option::is_none")]
    pub runecrafting: Option<f64>,
}

impl SkillExperience {
    /// Experience for one skill.
    pub const fn get(&self, skill: Skill) -> Option<f64> {
        match skill {
            Skill::Taming => self.taming,
            Skill::Farming => self.farming,
            Skill::Mining => self.mining,
            Skill::Combat => self.combat,
            Skill::Foraging => self.foraging,
            Skill::Fishing => self.fishing,
            Skill::Enchanting => self.enchanting,
            Skill::Alchemy => self.alchemy,
            Skill::Carpentry => self.carpentry,
            Skill::Runecrafting => self.runecrafting,
        }
    }

    /// Whether any skill experience is present at all.
    pub fn any(&self) -> bool {
        Skill::ALL.iter().any(|skill| self.get(*skill).is_some())
    }
}

/// Progress on one slayer boss line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlayerBossProgress {
    /// Slayer experience.
    pub xp: f64,
    /// Claimed level markers, `level_<n>`.
    pub claimed_levels: BTreeMap<String, bool>,
    /// Everything else, including `boss_kills_tier_<n>` counters.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl SlayerBossProgress {
    /// Kill counters keyed by the zero-based tier suffix of
    /// `boss_kills_tier_<n>`.
    pub fn kills_by_tier(&self) -> BTreeMap<u32, f64> {
        self.extra
            .iter()
            .filter_map(|(key, value)| {
                let tier = key.strip_prefix("boss_kills_tier_")?.parse().ok()?;
                Some((tier, value.as_f64()?))
            })
            .collect()
    }

    /// Whether the member ever claimed a level on this boss.
    pub fn has_claimed_levels(&self) -> bool {
        !self.claimed_levels.is_empty()
    }
}

/// A pet as stored upstream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawPet {
    /// Pet type, e.g. `ENDER_DRAGON`.
    #[serde(rename = "type")]
    pub pet_type: String,
    /// Upper-case tier word; pets without one are skipped.
    pub tier: Option<String>,
    /// Pet experience.
    pub exp: f64,
    /// Whether the pet is summoned.
    pub active: bool,
    /// Held item id.
    #[serde(rename = "heldItem")]
    pub held_item: Option<String>,
    /// Pet candies fed.
    #[serde(rename = "candyUsed")]
    pub candy_used: u32,
}

/// Display metadata for an item id, as kept by the document store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemMetadata {
    /// Display name.
    pub name: String,
    /// Rarity, when known.
    #[serde(default)]
    pub tier: Option<Rarity>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn member_deserializes_with_missing_fields() {
        let json = r#"{
            "experience_skill_combat": 1250.5,
            "fairy_exchanges": 3,
            "slayer_bosses": {
                "zombie": {
                    "xp": 1500,
                    "claimed_levels": { "level_1": true, "level_3": true },
                    "boss_kills_tier_0": 12,
                    "boss_kills_tier_2": 4
                }
            }
        }"#;
        let member: ProfileMember = serde_json::from_str(json)
            .ok()
            .unwrap_or_default();

        assert_eq!(member.experience.get(Skill::Combat), Some(1250.5));
        assert_eq!(member.experience.get(Skill::Mining), None);
        assert_eq!(member.fairy_exchanges, 3);
        assert!(member.inv_armor.is_none());

        let kills = member
            .slayer(SlayerBoss::Zombie)
            .map(SlayerBossProgress::kills_by_tier)
            .unwrap_or_default();
        assert_eq!(kills.len(), 2);
        assert_eq!(kills.get(&2).copied(), Some(4.0));
    }

    #[test]
    fn skill_presence_detection() {
        let empty = SkillExperience::default();
        assert!(!empty.any());

        let some = SkillExperience {
            runecrafting: Some(0.0),
            ..SkillExperience::default()
        };
        assert!(some.any());
    }
}
