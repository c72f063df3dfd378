//! Built-in reference tables.

use std::collections::BTreeMap;

use crate::enums::{Rarity, Section, Skill, SlayerBoss, StatName};
use crate::reference::{BagSize, BagTier, BonusSteps, PetItem, PetMetadata, PetReward};
use crate::stats::StatMap;

/// Per-level costs, levels 1..=50.
pub(crate) const SKILL_XP: [f64; 50] = [
    50.0, 125.0, 200.0, 300.0, 500.0, 750.0, 1_000.0, 1_500.0, 2_000.0, 3_500.0, 5_000.0,
    7_500.0, 10_000.0, 15_000.0, 20_000.0, 30_000.0, 50_000.0, 75_000.0, 100_000.0, 200_000.0,
    300_000.0, 400_000.0, 500_000.0, 600_000.0, 700_000.0, 800_000.0, 900_000.0, 1_000_000.0,
    1_100_000.0, 1_200_000.0, 1_300_000.0, 1_400_000.0, 1_500_000.0, 1_600_000.0, 1_700_000.0,
    1_800_000.0, 1_900_000.0, 2_000_000.0, 2_100_000.0, 2_200_000.0, 2_300_000.0, 2_400_000.0,
    2_500_000.0, 2_600_000.0, 2_750_000.0, 2_900_000.0, 3_100_000.0, 3_400_000.0, 3_700_000.0,
    4_000_000.0,
];

/// Per-level costs, levels 1..=25.
pub(crate) const RUNECRAFTING_XP: [f64; 25] = [
    50.0, 100.0, 125.0, 160.0, 200.0, 250.0, 315.0, 400.0, 500.0, 625.0, 785.0, 1_000.0, 1_250.0,
    1_600.0, 2_000.0, 2_465.0, 3_125.0, 4_000.0, 5_000.0, 6_200.0, 7_800.0, 9_800.0, 12_200.0,
    15_300.0, 19_050.0,
];

/// Shared pet curve; each rarity reads 99 entries from its offset.
pub(crate) const PET_XP: [f64; 119] = [
    100.0, 110.0, 120.0, 130.0, 145.0, 160.0, 175.0, 190.0, 210.0, 230.0, 250.0, 275.0, 300.0,
    330.0, 360.0, 400.0, 440.0, 490.0, 540.0, 600.0, 660.0, 730.0, 800.0, 880.0, 960.0, 1_050.0,
    1_150.0, 1_260.0, 1_380.0, 1_510.0, 1_650.0, 1_800.0, 1_960.0, 2_130.0, 2_310.0, 2_500.0,
    2_700.0, 2_920.0, 3_160.0, 3_420.0, 3_700.0, 4_000.0, 4_350.0, 4_750.0, 5_200.0, 5_700.0,
    6_300.0, 7_000.0, 7_800.0, 8_700.0, 9_700.0, 10_800.0, 12_000.0, 13_300.0, 14_700.0, 16_200.0,
    17_800.0, 19_500.0, 21_300.0, 23_200.0, 25_200.0, 27_400.0, 29_800.0, 32_400.0, 35_200.0,
    38_200.0, 41_400.0, 44_800.0, 48_400.0, 52_200.0, 56_200.0, 60_400.0, 64_800.0, 69_400.0,
    74_200.0, 79_200.0, 84_700.0, 90_700.0, 97_200.0, 104_200.0, 111_700.0, 119_700.0, 128_200.0,
    137_200.0, 146_700.0, 156_700.0, 167_700.0, 179_700.0, 192_700.0, 206_700.0, 221_700.0,
    237_700.0, 254_700.0, 272_700.0, 291_700.0, 311_700.0, 333_700.0, 357_700.0, 383_700.0,
    411_700.0, 441_700.0, 476_700.0, 516_700.0, 561_700.0, 611_700.0, 666_700.0, 726_700.0,
    791_700.0, 861_700.0, 936_700.0, 1_016_700.0, 1_101_700.0, 1_191_700.0, 1_286_700.0,
    1_386_700.0, 1_496_700.0, 1_616_700.0, 1_746_700.0, 1_886_700.0,
];

/// (type, skill, emoji, head)
const PETS: &[(&str, &str, &str, &str)] = &[
    ("BAT", "mining", "🦇", "/head/382fc3f71b41769376a9e92fe3adbaac3772b999b219c9d6b4680ba9983e527"),
    ("BLAZE", "combat", "🔥", "/head/b78ef2e4cf2c41a2d14bfde9caff10219f5b1bf5b35a49eb51c6467882cb5f0"),
    ("CHICKEN", "farming", "🐔", "/head/7f37d524c3eed171ce149887ea1dee4ed399904727d521865688ece3bac75e"),
    ("HORSE", "combat", "🐴", "/head/36fcd3ec3bc84bafb4123ea479471f9d2f42d8fb9c5f11cf5f4e0d93226"),
    ("JERRY", "combat", "🧑", "/head/822d8e751c8f2fd4c8942c44bdb2f5ca4d8ae8e575ed3eb34c18a86e93b"),
    ("OCELOT", "foraging", "🐈", "/head/5657cd5c2989ff97570fec4ddcdc6926a68a3393250c1be1f0b114a1db1"),
    ("PIGMAN", "combat", "🐷", "/head/63d9cb6513f2072e5d4e426d70a5557bc398554c880d4e7b7ec8ef4945eb02f2"),
    ("RABBIT", "farming", "🐇", "/head/117bffc1972acd7f3b4a8f43b5b6c7534695b8fd62677e0306b2831574b"),
    ("SHEEP", "alchemy", "🐑", "/head/64e22a46047d272e89a1cfa13e9734b7e12827e235c2012c1a95962874da0"),
    ("SILVERFISH", "mining", "🐛", "/head/da91dab8391af5fda54acd2c0b18fbd819b865e1a8f1d623813fa761e924540"),
    ("WITHER_SKELETON", "mining", "💀", "/head/f5ec964645a8efac76be2f160d7c9956362f32b6517390c59c3085034f050cff"),
    ("SKELETON_HORSE", "combat", "🐴", "/head/47effce35132c86ff72bcae77dfbb1d22587e94df3cbc2570ed17cf8973a"),
    ("WOLF", "combat", "🐺", "/head/dc3dd984bb659849bd52994046964c22725f717e986b12d548fd169367d494"),
    ("ENDERMAN", "combat", "🔮", "/head/6eab75eaa5c9f2c43a0d23cfdce35f4df632e9815001850377385f7b2f039ce1"),
    ("PHOENIX", "combat", "🐦", "/head/23aaf7b1a778949696cb99d4f04ad1aa518ceee256c72e5ed65bfa5c2d88d9e"),
    ("MAGMA_CUBE", "combat", "🌋", "/head/38957d5023c937c4c41aa2412d43410bda23cf79a9f6ab36b76fef2d7c429"),
    ("FLYING_FISH", "fishing", "🐟", "/head/40cd71fbbbbb66c7baf7881f415c64fa84f6504958a57ccdb8589252647ea"),
    ("BLUE_WHALE", "fishing", "🐋", "/head/dab779bbccc849f88273d844e8ca2f3a67a1699cb216c0a11b44326ce2cc20"),
    ("TIGER", "combat", "🐯", "/head/fc42638744922b5fcf62cd9bf27eeab91b2e72d6c70e86cc5aa3883993e9d84"),
    ("LION", "foraging", "🦁", "/head/38ff473bd52b4db2c06f1ac87fe1367bce7574fac330ffac7956229f82efba1"),
    ("PARROT", "alchemy", "🦜", "/head/5df4b3401a4d06ad66ac8b5c4d189618ae617f9c143071c8ac39a563cf4e4208"),
    ("SNOWMAN", "combat", "⛄", "/head/11136616d8c4a87a54ce78a97b551610c2b2c8f6d410bc38b858f974b113b208"),
    ("TURTLE", "combat", "🐢", "/head/212b58c841b394863dbcc54de1c2ad2648af8f03e648988c1f9cef0bc20ee23c"),
    ("BEE", "farming", "🐝", "/head/7e941987e825a24ea7baafab9819344b6c247c75c54a691987cd296bc163c263"),
    ("ENDER_DRAGON", "combat", "🐲", "/head/aec3ff563290b13ff3bcc36898af7eaa988b6cc18dc254147f58374afe9b21b9"),
    ("GUARDIAN", "combat", "🐡", "/head/221025434045bda7025b3e514b316a4b770c6faa4ba9adb4be3809526db77f9d"),
    ("SQUID", "fishing", "🦑", "/head/01433be242366af126da434b8735df1eb5b3cb2cede39145974e9c483607bac"),
    ("GIRAFFE", "foraging", "🦒", "/head/176b4e390f2ecdb8a78dc611789ca0af1e7e09229319c3a7aa8209b63b9"),
    ("ELEPHANT", "farming", "🐘", "/head/7071a76f669db5ed6d32b48bb2dba55d5317d7f45225cb3267ec435cfa514"),
    ("MONKEY", "foraging", "🐒", "/head/13cf8db84807c471d7c6922302261ac1b5a179f96d1191156ecf3e1b1d3ca"),
    ("SPIDER", "combat", "🕷️", "/head/cd541541daaff50896cd258bdbdd4cf80c3ba816735726078bfe393927e57f1"),
    ("ENDERMITE", "mining", "🐛", "/head/5a1a0831aa03afb4212adcbb24e5dfaa7f476a1173fce259ef75a85855"),
    ("GHOUL", "combat", "🧟", "/head/87934565bf522f6f4726cdfe127137be11d37c310db34d8c70253392b5ff5b"),
    ("JELLYFISH", "alchemy", "🎐", "/head/913f086ccb56323f238ba3489ff2a1a34c0fdceeafc483acff0e5488cfd6c2f1"),
    ("PIG", "farming", "🐷", "/head/621668ef7cb79dd9c22ce3d1f3f4cb6e2559893b6df4a469514e667c16aa4"),
    ("ROCK", "mining", "🗿", "/head/cb2b5d48e57577563aca31735519cb622219bc058b1f34648b67b8e71bc0fa"),
    ("SKELETON", "combat", "💀", "/head/fca445749251bdd898fb83f667844e38a1dff79a1529f79a42447a0599310ea4"),
    ("ZOMBIE", "combat", "🧟", "/head/56fc854bb84cf4b7697297973e02b79bc10698460b51a639c60e5e417734e11"),
    ("DOLPHIN", "fishing", "🐬", "/head/cefe7d803a45aa2af1993df2544a28df849a762663719bfefc58bf389ab7f5"),
    ("BABY_YETI", "fishing", "❄️", "/head/ab126814fc3fa846dad934c349628a7a1de5b415021a03ef4211d62514d5"),
    ("GOLEM", "combat", "🗿", "/head/89091d79ea0f59ef7ef94d7bba6e5f17f2f7d4572c44f90f76c4819a714"),
    ("HOUND", "combat", "👹", "/head/b7c8bef6beb77e29af8627ecdc38d86aa2fea7ccd163dc73c00f9f258f9a1457"),
    ("TARANTULA", "combat", "🕸️", "/head/8300986ed0a04ea79904f6ae53f49ed3a0ff5b1df62bba622ecbd3777f156df8"),
    ("BLACK_CAT", "combat", "🐱", "/head/e4b45cbaa19fe3d68c856cd3846c03b5f59de81a480eec921ab4fa3cd81317"),
    ("SPIRIT", "combat", "👻", "/head/8d9ccc670677d0cebaad4058d6aaf9acfab09abea5d86379a059902f2fe22655"),
    ("GRIFFIN", "combat", "🦅", "/head/4c27e3cb52a64968e60c861ef1ab84e0a0cb5f07be103ac78da67761731f00c8"),
    ("MEGALODON", "fishing", "🦈", "/head/a94ae433b301c7fb7c68cba625b0bd36b0b14190f20e34a7c8ee0d9de06d53b9"),
    ("MITHRIL_GOLEM", "mining", "🗿", "/head/c1b2dfe8ed5dffc5b1687bc1c249c39de2d8a6c3d90305c95f6d1a1a330a0b1"),
    ("GRANDMA_WOLF", "combat", "👵", "/head/4e794274c1bb197ad306540286a7aa952974f5661bccf2b725424f6ed79c7884"),
    ("RAT", "combat", "🐀", "/head/a8abb471db0ab78703011979dc8b40798a941f3a4dec3ec61cbeec2af8cffe8"),
    ("BAL", "combat", "🔥", "/head/c469ba2047122e0a2de3c7437ad3dd5d31f1ac2d27abde9f8841e1d92a8c5b75"),
    ("SCATHA", "mining", "🪱", "/head/df03ad96092f3f789902436709cdf69de6b727c121b3c2daef9ffa1ccaed186c"),
    ("GOLDEN_DRAGON", "combat", "🐉", "/head/2e9f9b1fc014166cb46a093e5349b2bf6edd201b680d62e48dbf3af9b0459116"),
    ("AMMONITE", "fishing", "🐌", "/head/a074a7bd976fe6aba1624161793be547d54c835cf422243a851ba09d1e650553"),
    ("ARMADILLO", "mining", "🐢", "/head/c1eb6df4736ae24dd12a3d00f91e6e3aa7ade6bbefb0978afef2f0f92461018f"),
];

/// Talisman id and the ids that supersede it.
const TALISMAN_UPGRADES: &[(&str, &[&str])] = &[
    ("WOLF_TALISMAN", &["WOLF_RING"]),
    ("RING_POTION_AFFINITY", &["ARTIFACT_POTION_AFFINITY"]),
    ("POTION_AFFINITY_TALISMAN", &["RING_POTION_AFFINITY", "ARTIFACT_POTION_AFFINITY"]),
    ("FEATHER_RING", &["FEATHER_ARTIFACT"]),
    ("FEATHER_TALISMAN", &["FEATHER_RING", "FEATHER_ARTIFACT"]),
    ("SEA_CREATURE_RING", &["SEA_CREATURE_ARTIFACT"]),
    ("SEA_CREATURE_TALISMAN", &["SEA_CREATURE_RING", "SEA_CREATURE_ARTIFACT"]),
    ("HEALING_TALISMAN", &["HEALING_RING"]),
    ("CANDY_RING", &["CANDY_ARTIFACT"]),
    ("CANDY_TALISMAN", &["CANDY_RING", "CANDY_ARTIFACT"]),
    ("INTIMIDATION_RING", &["INTIMIDATION_ARTIFACT"]),
    ("INTIMIDATION_TALISMAN", &["INTIMIDATION_RING", "INTIMIDATION_ARTIFACT"]),
    ("SPIDER_RING", &["SPIDER_ARTIFACT"]),
    ("SPIDER_TALISMAN", &["SPIDER_RING", "SPIDER_ARTIFACT"]),
    ("RED_CLAW_RING", &["RED_CLAW_ARTIFACT"]),
    ("RED_CLAW_TALISMAN", &["RED_CLAW_RING", "RED_CLAW_ARTIFACT"]),
    ("HUNTER_TALISMAN", &["HUNTER_RING"]),
    ("ZOMBIE_RING", &["ZOMBIE_ARTIFACT"]),
    ("ZOMBIE_TALISMAN", &["ZOMBIE_RING", "ZOMBIE_ARTIFACT"]),
    ("BAT_RING", &["BAT_ARTIFACT"]),
    ("BAT_TALISMAN", &["BAT_RING", "BAT_ARTIFACT"]),
    ("BROKEN_PIGGY_BANK", &["CRACKED_PIGGY_BANK", "PIGGY_BANK"]),
    ("CRACKED_PIGGY_BANK", &["PIGGY_BANK"]),
    ("SPEED_TALISMAN", &["SPEED_RING", "SPEED_ARTIFACT"]),
    ("SPEED_RING", &["SPEED_ARTIFACT"]),
    ("PERSONAL_COMPACTOR_4000", &["PERSONAL_COMPACTOR_5000", "PERSONAL_COMPACTOR_6000"]),
    ("PERSONAL_COMPACTOR_5000", &["PERSONAL_COMPACTOR_6000"]),
    ("SCARF_STUDIES", &["SCARF_THESIS", "SCARF_GRIMOIRE"]),
    ("SCARF_THESIS", &["SCARF_GRIMOIRE"]),
    ("CAT_TALISMAN", &["LYNX_TALISMAN", "CHEETAH_TALISMAN"]),
    ("LYNX_TALISMAN", &["CHEETAH_TALISMAN"]),
];

pub(crate) fn base_stats() -> StatMap {
    StatMap::from_pairs([
        (StatName::Health, 100.0),
        (StatName::EffectiveHealth, 100.0),
        (StatName::Speed, 100.0),
        (StatName::CritChance, 30.0),
        (StatName::CritDamage, 50.0),
        (StatName::SeaCreatureChance, 20.0),
        (StatName::MagicFind, 10.0),
    ])
}

pub(crate) fn slayer_xp() -> BTreeMap<SlayerBoss, Vec<f64>> {
    BTreeMap::from([
        (
            SlayerBoss::Zombie,
            vec![5.0, 15.0, 200.0, 1_000.0, 5_000.0, 20_000.0, 100_000.0, 400_000.0, 1_000_000.0],
        ),
        (
            SlayerBoss::Spider,
            vec![5.0, 25.0, 200.0, 1_000.0, 5_000.0, 20_000.0, 100_000.0, 400_000.0, 1_000_000.0],
        ),
        (
            SlayerBoss::Wolf,
            vec![10.0, 30.0, 250.0, 1_500.0, 5_000.0, 20_000.0, 100_000.0, 400_000.0, 1_000_000.0],
        ),
    ])
}

pub(crate) fn slayer_tier_cost() -> BTreeMap<u32, f64> {
    BTreeMap::from([(1, 100.0), (2, 2_000.0), (3, 10_000.0), (4, 50_000.0)])
}

fn steps<const N: usize>(entries: [(u32, StatMap); N]) -> BonusSteps {
    BTreeMap::from(entries)
}

fn one(stat: StatName, value: f64) -> StatMap {
    StatMap::zero().with(stat, value)
}

pub(crate) fn skill_bonuses() -> BTreeMap<Skill, BonusSteps> {
    let health_steps = || {
        steps([
            (1, one(StatName::Health, 2.0)),
            (15, one(StatName::Health, 3.0)),
            (20, one(StatName::Health, 4.0)),
            (26, one(StatName::Health, 5.0)),
        ])
    };
    let intelligence_steps = || {
        steps([
            (1, one(StatName::Intelligence, 1.0)),
            (15, one(StatName::Intelligence, 2.0)),
        ])
    };

    BTreeMap::from([
        (Skill::Taming, steps([(1, one(StatName::PetLuck, 1.0))])),
        (Skill::Farming, health_steps()),
        (Skill::Fishing, health_steps()),
        (
            Skill::Mining,
            steps([(1, one(StatName::Defense, 1.0)), (15, one(StatName::Defense, 2.0))]),
        ),
        (
            Skill::Combat,
            steps([(
                1,
                StatMap::from_pairs([(StatName::CritChance, 0.5), (StatName::DamageIncrease, 0.04)]),
            )]),
        ),
        (
            Skill::Foraging,
            steps([(1, one(StatName::Strength, 1.0)), (15, one(StatName::Strength, 2.0))]),
        ),
        (Skill::Enchanting, intelligence_steps()),
        (Skill::Alchemy, intelligence_steps()),
        (Skill::Carpentry, BonusSteps::new()),
        (Skill::Runecrafting, BonusSteps::new()),
    ])
}

pub(crate) fn slayer_bonuses() -> BTreeMap<SlayerBoss, BonusSteps> {
    BTreeMap::from([
        (
            SlayerBoss::Zombie,
            steps([
                (1, one(StatName::Health, 2.0)),
                (3, one(StatName::Health, 3.0)),
                (5, one(StatName::Health, 4.0)),
                (7, one(StatName::Health, 5.0)),
                (9, one(StatName::Health, 6.0)),
            ]),
        ),
        (
            SlayerBoss::Spider,
            steps([
                (1, one(StatName::CritDamage, 1.0)),
                (5, one(StatName::CritDamage, 2.0)),
                (7, one(StatName::CritChance, 1.0)),
                (8, one(StatName::CritDamage, 3.0)),
            ]),
        ),
        (
            SlayerBoss::Wolf,
            steps([
                (1, one(StatName::Speed, 1.0)),
                (2, one(StatName::Health, 2.0)),
                (3, one(StatName::Speed, 1.0)),
                (4, one(StatName::Health, 2.0)),
                (5, one(StatName::CritDamage, 1.0)),
                (6, one(StatName::Health, 3.0)),
                (7, one(StatName::CritDamage, 2.0)),
                (8, one(StatName::Speed, 1.0)),
            ]),
        ),
    ])
}

pub(crate) fn pet_rarity_offset() -> BTreeMap<Rarity, usize> {
    BTreeMap::from([
        (Rarity::Common, 0),
        (Rarity::Uncommon, 6),
        (Rarity::Rare, 11),
        (Rarity::Epic, 16),
        (Rarity::Legendary, 20),
        (Rarity::Mythic, 20),
    ])
}

pub(crate) fn pet_value() -> BTreeMap<Rarity, u32> {
    BTreeMap::from([
        (Rarity::Common, 1),
        (Rarity::Uncommon, 2),
        (Rarity::Rare, 3),
        (Rarity::Epic, 4),
        (Rarity::Legendary, 5),
        (Rarity::Mythic, 6),
    ])
}

pub(crate) fn pet_rewards() -> Vec<PetReward> {
    [(0, 0.0), (10, 1.0), (25, 2.0), (50, 3.0), (75, 4.0), (100, 5.0), (130, 6.0), (175, 7.0)]
        .into_iter()
        .map(|(score, magic_find)| PetReward {
            score,
            stats: one(StatName::MagicFind, magic_find),
        })
        .collect()
}

pub(crate) fn pets() -> BTreeMap<String, PetMetadata> {
    PETS.iter()
        .map(|(pet_type, skill, emoji, head)| {
            (
                (*pet_type).to_owned(),
                PetMetadata {
                    head: (*head).to_owned(),
                    skill: (*skill).to_owned(),
                    emoji: (*emoji).to_owned(),
                },
            )
        })
        .collect()
}

pub(crate) fn pet_items() -> BTreeMap<String, PetItem> {
    let described = |description: &str| PetItem {
        description: description.to_owned(),
        stats: StatMap::zero(),
    };
    let granting = |description: &str, stat: StatName, value: f64| PetItem {
        description: description.to_owned(),
        stats: one(stat, value),
    };

    let mut items = BTreeMap::from([
        (
            "PET_ITEM_ALL_SKILLS_BOOST_COMMON".to_owned(),
            described("§7Gives +§a10% §7pet exp for all skills"),
        ),
        (
            "PET_ITEM_BIG_TEETH_COMMON".to_owned(),
            granting("§7Increases §9Crit Chance §7by §a5%", StatName::CritChance, 5.0),
        ),
        (
            "PET_ITEM_IRON_CLAWS_COMMON".to_owned(),
            described(
                "§7Increases the pet's §9Crit Damage §7by §a40% §7and §9Crit Chance §7by §a40%",
            ),
        ),
        (
            "PET_ITEM_SHARPENED_CLAWS_UNCOMMON".to_owned(),
            granting("§7Increases §9Crit Damage §7by §a15%", StatName::CritDamage, 15.0),
        ),
        (
            "PET_ITEM_HARDENED_SCALES_UNCOMMON".to_owned(),
            granting("§7Increases §aDefense §7by §a25", StatName::Defense, 25.0),
        ),
        (
            "PET_ITEM_BUBBLEGUM".to_owned(),
            described("§7Your pet fuses its power with placed §aOrbs §7to give them §a2x §7duration"),
        ),
        (
            "PET_ITEM_LUCKY_CLOVER".to_owned(),
            granting("§7Increases §bMagic Find §7by §a7", StatName::MagicFind, 7.0),
        ),
        (
            "PET_ITEM_TEXTBOOK".to_owned(),
            described("§7Increases the pet's §bIntelligence §7by §a100%"),
        ),
        (
            "PET_ITEM_SADDLE".to_owned(),
            described("§7Increase horse speed by §a50% §7 and jump boost by §a100%"),
        ),
        (
            "PET_ITEM_EXP_SHARE".to_owned(),
            described(
                "§7While unequipped this pet gains §a25% §7of the equipped pet's xp, this is §7split between all pets holding the item.",
            ),
        ),
        (
            "PET_ITEM_TIER_BOOST".to_owned(),
            described("§7Boosts the §ararity §7of your pet by 1 tier!"),
        ),
    ]);

    for skill in ["Combat", "Fishing", "Foraging", "Mining", "Farming"] {
        for (tier, percent) in [("COMMON", 20), ("UNCOMMON", 30), ("RARE", 40), ("EPIC", 50)] {
            items.insert(
                format!("PET_ITEM_{}_SKILL_BOOST_{tier}", skill.to_uppercase()),
                described(&format!("§7Gives +§a{percent}% §7pet exp for {skill}")),
            );
        }
    }

    items
}

pub(crate) fn talisman_upgrades() -> BTreeMap<String, Vec<String>> {
    TALISMAN_UPGRADES
        .iter()
        .map(|(base, upgrades)| {
            (
                (*base).to_owned(),
                upgrades.iter().map(|id| (*id).to_owned()).collect(),
            )
        })
        .collect()
}

pub(crate) fn bag_sizes() -> BTreeMap<Section, BagSize> {
    let bag = |collection: &str, sizes: &[(u32, usize)]| BagSize {
        collection: collection.to_owned(),
        sizes: sizes
            .iter()
            .map(|(tier, slots)| BagTier {
                tier: *tier,
                slots: *slots,
            })
            .collect(),
    };

    BTreeMap::from([
        (
            Section::TalismanBag,
            bag(
                "REDSTONE",
                &[(2, 3), (7, 9), (9, 15), (10, 21), (11, 27), (12, 33), (13, 39), (14, 45)],
            ),
        ),
        (
            Section::PotionBag,
            bag("NETHER_STALK", &[(2, 9), (5, 18), (8, 27), (10, 36), (11, 45)]),
        ),
        (
            Section::FishingBag,
            bag("RAW_FISH", &[(3, 9), (7, 18), (9, 27), (10, 36), (11, 45)]),
        ),
        (Section::Quiver, bag("STRING", &[(3, 27), (6, 36), (9, 45)])),
    ])
}

fn owned_map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
        .collect()
}

pub(crate) fn mob_names() -> BTreeMap<String, String> {
    owned_map(&[
        ("unburried_zombie", "Crypt Ghoul"),
        ("zealot_enderman", "Zealot"),
        ("invisible_creeper", "Sneaky Creeper"),
        ("generator_ghast", "Minion Ghast"),
        ("generator_magma_cube", "Minion Magma Cube"),
        ("generator_slime", "Minion Slime"),
        ("brood_mother_spider", "Brood Mother"),
        ("sea_emperor", "Sea Emperor"),
        ("monster_of_the_deep", "Monster of the Deep"),
    ])
}

pub(crate) fn mob_mounts() -> BTreeMap<String, Vec<String>> {
    BTreeMap::from([
        (
            "sea_emperor".to_owned(),
            vec!["guardian_emperor".to_owned(), "skeleton_emperor".to_owned()],
        ),
        (
            "monster_of_the_deep".to_owned(),
            vec!["zombie_deep".to_owned(), "chicken_deep".to_owned()],
        ),
    ])
}

pub(crate) fn area_names() -> BTreeMap<String, String> {
    owned_map(&[
        ("dynamic", "Private Island"),
        ("hub", "Hub"),
        ("mining_1", "Gold Mine"),
        ("mining_2", "Deep Caverns"),
        ("combat_1", "Spider's Den"),
        ("combat_2", "Blazing Fortress"),
        ("combat_3", "The End"),
        ("farming_1", "The Barn"),
        ("farming_2", "Mushroom Desert"),
        ("foraging_1", "The Park"),
        ("winter", "Jerry's Workshop"),
    ])
}
