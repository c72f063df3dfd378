//! Enumeration types for the Skyview profile engine.
//!
//! Closed vocabularies shared by every stage of the pipeline: item rarity,
//! equipment categories, the aggregate stat names, skills, slayer bosses
//! and the storage sections an inventory is read from.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Rarity
// ---------------------------------------------------------------------------

/// Canonical item tier, ordered from least to most valuable.
///
/// The rarity of an item is read from the colour code of its last lore
/// line; the printed word may be localized and is only used to detect that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum Rarity {
    /// White (`§f`).
    Common,
    /// Green (`§a`).
    Uncommon,
    /// Blue (`§9`).
    Rare,
    /// Purple (`§5`).
    Epic,
    /// Gold (`§6`).
    Legendary,
    /// Pink (`§d`).
    Mythic,
    /// Red (`§c`).
    Special,
}

impl Rarity {
    /// Every rarity in ascending order.
    pub const ALL: [Self; 7] = [
        Self::Common,
        Self::Uncommon,
        Self::Rare,
        Self::Epic,
        Self::Legendary,
        Self::Mythic,
        Self::Special,
    ];

    /// Map a formatting colour code to its rarity.
    pub const fn from_color_code(code: char) -> Option<Self> {
        match code {
            'f' => Some(Self::Common),
            'a' => Some(Self::Uncommon),
            '9' => Some(Self::Rare),
            '5' => Some(Self::Epic),
            '6' => Some(Self::Legendary),
            'd' => Some(Self::Mythic),
            'c' => Some(Self::Special),
            _ => None,
        }
    }

    /// The formatting colour code of this rarity.
    pub const fn color_code(self) -> char {
        match self {
            Self::Common => 'f',
            Self::Uncommon => 'a',
            Self::Rare => '9',
            Self::Epic => '5',
            Self::Legendary => '6',
            Self::Mythic => 'd',
            Self::Special => 'c',
        }
    }

    /// Parse the English rarity word printed in lore (case-insensitive).
    pub fn from_word(word: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|rarity| rarity.as_str().eq_ignore_ascii_case(word))
    }

    /// The lowercase name used in serialized output.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Common => "common",
            Self::Uncommon => "uncommon",
            Self::Rare => "rare",
            Self::Epic => "epic",
            Self::Legendary => "legendary",
            Self::Mythic => "mythic",
            Self::Special => "special",
        }
    }

    /// One tier higher, never beyond legendary.
    ///
    /// Used by the pet tier-boost item; mythic and special stay put.
    pub const fn boosted(self) -> Self {
        match self {
            Self::Common => Self::Uncommon,
            Self::Uncommon => Self::Rare,
            Self::Rare => Self::Epic,
            Self::Epic | Self::Legendary => Self::Legendary,
            Self::Mythic => Self::Mythic,
            Self::Special => Self::Special,
        }
    }
}

// ---------------------------------------------------------------------------
// Item Types
// ---------------------------------------------------------------------------

/// Equipment category printed after the rarity word on the last lore line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum ItemType {
    /// Melee weapon.
    Sword,
    /// Ranged weapon.
    Bow,
    /// Fishing tool.
    #[serde(rename = "fishing rod")]
    FishingRod,
    /// Magic weapon.
    Wand,
    /// Foraging tool.
    Axe,
    /// Farming tool.
    Hoe,
    /// Digging tool.
    Shovel,
    /// Mining tool.
    Pickaxe,
    /// Talisman, ring or artifact.
    Accessory,
    /// Head armor.
    Helmet,
    /// Torso armor.
    Chestplate,
    /// Leg armor.
    Leggings,
    /// Foot armor.
    Boots,
}

impl ItemType {
    /// Every category in declaration order.
    pub const ALL: [Self; 13] = [
        Self::Sword,
        Self::Bow,
        Self::FishingRod,
        Self::Wand,
        Self::Axe,
        Self::Hoe,
        Self::Shovel,
        Self::Pickaxe,
        Self::Accessory,
        Self::Helmet,
        Self::Chestplate,
        Self::Leggings,
        Self::Boots,
    ];

    /// The lowercase label as printed in lore.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sword => "sword",
            Self::Bow => "bow",
            Self::FishingRod => "fishing rod",
            Self::Wand => "wand",
            Self::Axe => "axe",
            Self::Hoe => "hoe",
            Self::Shovel => "shovel",
            Self::Pickaxe => "pickaxe",
            Self::Accessory => "accessory",
            Self::Helmet => "helmet",
            Self::Chestplate => "chestplate",
            Self::Leggings => "leggings",
            Self::Boots => "boots",
        }
    }

    /// Parse a lore type label (case-insensitive, surrounding space ignored).
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(label))
    }

    /// Sword or bow.
    pub const fn is_weapon(self) -> bool {
        matches!(self, Self::Sword | Self::Bow)
    }

    /// One of the four armor slots.
    pub const fn is_armor(self) -> bool {
        matches!(
            self,
            Self::Helmet | Self::Chestplate | Self::Leggings | Self::Boots
        )
    }
}

// ---------------------------------------------------------------------------
// Stat Names
// ---------------------------------------------------------------------------

/// A single aggregate character stat.
///
/// The set is closed: lore lines naming anything else are dropped at the
/// classification boundary. The declaration order is the storage order of
/// [`StatMap`](crate::StatMap).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum StatName {
    /// Weapon base damage.
    Damage,
    /// Hit points.
    Health,
    /// Damage reduction.
    Defense,
    /// Health scaled by defense.
    EffectiveHealth,
    /// Melee damage scaling.
    Strength,
    /// Flat damage multiplier.
    DamageIncrease,
    /// Movement speed.
    Speed,
    /// Chance to land a critical hit, in percent.
    CritChance,
    /// Bonus damage of a critical hit, in percent.
    CritDamage,
    /// Attack speed bonus, in percent.
    BonusAttackSpeed,
    /// Mana pool and ability damage.
    Intelligence,
    /// Chance to fish up a sea creature, in percent.
    SeaCreatureChance,
    /// Rare drop chance.
    MagicFind,
    /// Rare pet drop chance.
    PetLuck,
}

impl StatName {
    /// Number of stats.
    pub const COUNT: usize = 14;

    /// Every stat in storage order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Damage,
        Self::Health,
        Self::Defense,
        Self::EffectiveHealth,
        Self::Strength,
        Self::DamageIncrease,
        Self::Speed,
        Self::CritChance,
        Self::CritDamage,
        Self::BonusAttackSpeed,
        Self::Intelligence,
        Self::SeaCreatureChance,
        Self::MagicFind,
        Self::PetLuck,
    ];

    /// Position of this stat in [`StatMap`](crate::StatMap) storage.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The `snake_case` key used in serialized maps.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Damage => "damage",
            Self::Health => "health",
            Self::Defense => "defense",
            Self::EffectiveHealth => "effective_health",
            Self::Strength => "strength",
            Self::DamageIncrease => "damage_increase",
            Self::Speed => "speed",
            Self::CritChance => "crit_chance",
            Self::CritDamage => "crit_damage",
            Self::BonusAttackSpeed => "bonus_attack_speed",
            Self::Intelligence => "intelligence",
            Self::SeaCreatureChance => "sea_creature_chance",
            Self::MagicFind => "magic_find",
            Self::PetLuck => "pet_luck",
        }
    }

    /// Parse a `snake_case` key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|stat| stat.key() == key)
    }
}

// ---------------------------------------------------------------------------
// Skills
// ---------------------------------------------------------------------------

/// A levelled skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum Skill {
    /// Pet experience.
    Taming,
    /// Crops and animals.
    Farming,
    /// Ores and stone.
    Mining,
    /// Killing mobs.
    Combat,
    /// Chopping trees.
    Foraging,
    /// Fishing.
    Fishing,
    /// Enchanting tables.
    Enchanting,
    /// Brewing.
    Alchemy,
    /// Crafting. Cosmetic, excluded from the average.
    Carpentry,
    /// Runes. Uses its own curve, excluded from the average.
    Runecrafting,
}

impl Skill {
    /// Every skill in display order.
    pub const ALL: [Self; 10] = [
        Self::Taming,
        Self::Farming,
        Self::Mining,
        Self::Combat,
        Self::Foraging,
        Self::Fishing,
        Self::Enchanting,
        Self::Alchemy,
        Self::Carpentry,
        Self::Runecrafting,
    ];

    /// The lowercase skill key.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Taming => "taming",
            Self::Farming => "farming",
            Self::Mining => "mining",
            Self::Combat => "combat",
            Self::Foraging => "foraging",
            Self::Fishing => "fishing",
            Self::Enchanting => "enchanting",
            Self::Alchemy => "alchemy",
            Self::Carpentry => "carpentry",
            Self::Runecrafting => "runecrafting",
        }
    }

    /// Whether this skill counts toward the average skill level.
    pub const fn counts_toward_average(self) -> bool {
        !matches!(self, Self::Carpentry | Self::Runecrafting)
    }

    /// Player achievement holding this skill's level, used as a fallback
    /// when the profile exposes no skill experience at all.
    pub const fn achievement_key(self) -> Option<&'static str> {
        match self {
            Self::Taming => Some("skyblock_domesticator"),
            Self::Farming => Some("skyblock_harvester"),
            Self::Mining => Some("skyblock_excavator"),
            Self::Combat => Some("skyblock_combat"),
            Self::Foraging => Some("skyblock_gatherer"),
            Self::Fishing => Some("skyblock_angler"),
            Self::Enchanting => Some("skyblock_augmentation"),
            Self::Alchemy => Some("skyblock_concoctor"),
            Self::Carpentry | Self::Runecrafting => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Slayer Bosses
// ---------------------------------------------------------------------------

/// A slayer boss line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum SlayerBoss {
    /// Revenant Horror.
    Zombie,
    /// Tarantula Broodfather.
    Spider,
    /// Sven Packmaster.
    Wolf,
}

impl SlayerBoss {
    /// Every boss in display order.
    pub const ALL: [Self; 3] = [Self::Zombie, Self::Spider, Self::Wolf];

    /// The lowercase boss key used by the profile document.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Zombie => "zombie",
            Self::Spider => "spider",
            Self::Wolf => "wolf",
        }
    }
}

// ---------------------------------------------------------------------------
// Storage Sections
// ---------------------------------------------------------------------------

/// A storage section of a profile member, each a separately encoded buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum Section {
    /// The four worn armor slots.
    Armor,
    /// Main inventory including the hotbar.
    Inventory,
    /// Ender storage. Contents never count as active.
    EnderChest,
    /// Accessory bag.
    TalismanBag,
    /// Fishing bag.
    FishingBag,
    /// Arrow quiver.
    Quiver,
    /// Potion bag.
    PotionBag,
    /// Stored armor sets.
    Wardrobe,
    /// Candy bag, attached to the trick-or-treat bag item.
    CandyBag,
}

impl Section {
    /// Every section in processing order.
    pub const ALL: [Self; 9] = [
        Self::Armor,
        Self::Inventory,
        Self::EnderChest,
        Self::TalismanBag,
        Self::FishingBag,
        Self::Quiver,
        Self::PotionBag,
        Self::Wardrobe,
        Self::CandyBag,
    ];

    /// Stable key used for identifiers and log fields.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Armor => "armor",
            Self::Inventory => "inventory",
            Self::EnderChest => "ender_chest",
            Self::TalismanBag => "talisman_bag",
            Self::FishingBag => "fishing_bag",
            Self::Quiver => "quiver",
            Self::PotionBag => "potion_bag",
            Self::Wardrobe => "wardrobe",
            Self::CandyBag => "candy_bag",
        }
    }

    /// Fixed slot capacity, when the section has one.
    ///
    /// Bag capacities depend on collection progress and come from the
    /// bag-size table instead. Paged storage has no fixed limit.
    pub const fn fixed_capacity(self) -> Option<usize> {
        match self {
            Self::Armor => Some(4),
            Self::Inventory => Some(36),
            Self::EnderChest
            | Self::Wardrobe
            | Self::CandyBag
            | Self::TalismanBag
            | Self::FishingBag
            | Self::Quiver
            | Self::PotionBag => None,
        }
    }

    /// Whether the bag-size table governs this section's capacity.
    pub const fn is_bag(self) -> bool {
        matches!(
            self,
            Self::TalismanBag | Self::FishingBag | Self::Quiver | Self::PotionBag
        )
    }
}
