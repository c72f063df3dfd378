//! End-to-end runs of the profile engine over encoded inventories.

#![allow(clippy::unwrap_used)]

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use skyview_core::{EngineError, Enrichment, ProfileEngine, StaticLookupStore};
use skyview_nbt::Tag;
use skyview_nbt::fixtures::{self, ItemBuilder};
use skyview_types::{
    ItemMetadata, ProfileInput, ProfileMember, Rarity, RawPet, ReferenceData, SectionData,
    SkyblockProfile, StatName,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const PLAYER: &str = "player";

fn section(slots: Vec<Tag>) -> Option<SectionData> {
    Some(SectionData {
        data: fixtures::encode_base64(&fixtures::inventory(slots)).unwrap(),
    })
}

fn accessory(key: &str) -> Tag {
    ItemBuilder::new(397)
        .name(key)
        .lore(&["\u{a7}9\u{a7}lRARE ACCESSORY"])
        .skyblock_id(key)
        .build()
}

fn lapis(piece: &str) -> Tag {
    ItemBuilder::new(310)
        .name(&format!("Lapis {piece}"))
        .lore(&[&format!("\u{a7}9\u{a7}lRARE {piece}")])
        .skyblock_id(&format!("LAPIS_ARMOR_{piece}"))
        .build()
}

fn input(member: ProfileMember) -> ProfileInput {
    let coop = ProfileMember {
        last_save: Some(1_600_000_000_000),
        ..ProfileMember::default()
    };
    ProfileInput {
        uuid: PLAYER.to_owned(),
        profile: SkyblockProfile {
            profile_id: "profile".to_owned(),
            cute_name: Some("Banana".to_owned()),
            members: BTreeMap::from([(PLAYER.to_owned(), member), ("coop".to_owned(), coop)]),
            banking: None,
        },
        other_profiles: Vec::new(),
        achievements: BTreeMap::new(),
    }
}

fn engine() -> ProfileEngine {
    ProfileEngine::new(Arc::new(ReferenceData::default()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn empty_member_reports_base_stats() {
    let report = engine().process(&input(ProfileMember::default()), &Enrichment::default()).unwrap();

    assert_eq!(report.stats, ReferenceData::default().base_stats);
    assert!(report.no_inventory);
    assert!(report.items.is_empty());
    assert_eq!(report.display_name, PLAYER);
    assert_eq!(report.members.len(), 1);
    assert_eq!(report.members.first().map(|member| member.display_name.as_str()), Some("coop"));
}

#[test]
fn repeated_runs_serialize_identically() {
    let member = ProfileMember {
        inv_armor: section(vec![lapis("BOOTS"), lapis("LEGGINGS"), lapis("CHESTPLATE"), lapis("HELMET")]),
        inv_contents: section(vec![accessory("SPEED_TALISMAN"), fixtures::empty_slot()]),
        fairy_exchanges: 12,
        ..ProfileMember::default()
    };
    let input = input(member);
    let engine = engine();

    let first = serde_json::to_string(&engine.process(&input, &Enrichment::default()).unwrap()).unwrap();
    let second = serde_json::to_string(&engine.process(&input, &Enrichment::default()).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn duplicate_talismans_count_once() {
    let member = ProfileMember {
        inv_contents: section(vec![accessory("FARMING_TALISMAN")]),
        talisman_bag: section(vec![accessory("FARMING_TALISMAN"), accessory("FARMING_TALISMAN")]),
        ..ProfileMember::default()
    };
    let report = engine().process(&input(member), &Enrichment::default()).unwrap();

    let active = report
        .items
        .iter()
        .filter(|item| item.key() == "FARMING_TALISMAN" && !item.is_inactive)
        .count();
    assert_eq!(active, 1);
}

#[test]
fn wardrobe_copy_of_a_talisman_is_inactive() {
    let member = ProfileMember {
        talisman_bag: section(vec![accessory("FARMING_TALISMAN")]),
        wardrobe_contents: section(vec![accessory("FARMING_TALISMAN")]),
        ..ProfileMember::default()
    };
    let report = engine().process(&input(member), &Enrichment::default()).unwrap();

    let active = report
        .items
        .iter()
        .filter(|item| item.key() == "FARMING_TALISMAN" && !item.is_inactive)
        .count();
    assert_eq!(active, 1);
}

#[test]
fn lapis_set_bonus_lands_on_one_piece() {
    let member = ProfileMember {
        inv_armor: section(vec![lapis("BOOTS"), lapis("LEGGINGS"), lapis("CHESTPLATE"), lapis("HELMET")]),
        ..ProfileMember::default()
    };
    let report = engine().process(&input(member), &Enrichment::default()).unwrap();

    assert!((report.stats.get(StatName::Health) - 160.0).abs() < f64::EPSILON);
    let carrying: Vec<usize> = report
        .armor
        .iter()
        .copied()
        .filter(|&index| report.items.get(index).unwrap().stats.get(StatName::Health) > 0.0)
        .collect();
    assert_eq!(carrying.len(), 1);
    assert!(report.armor_set.is_some());
}

#[test]
fn unknown_player_is_an_error() {
    let mut input = input(ProfileMember::default());
    input.uuid = "stranger".to_owned();

    let error = engine().process(&input, &Enrichment::default()).unwrap_err();
    assert!(matches!(error, EngineError::UnknownMember { ref uuid, .. } if uuid == "stranger"));
}

#[test]
fn corrupt_inventory_is_a_decode_error() {
    let member = ProfileMember {
        inv_contents: Some(SectionData {
            data: "not base64 at all!".to_owned(),
        }),
        ..ProfileMember::default()
    };

    let error = engine().process(&input(member), &Enrichment::default()).unwrap_err();
    assert!(matches!(error, EngineError::Decode(_)));
}

#[tokio::test]
async fn lookups_fill_names_and_held_items() {
    let member = ProfileMember {
        pets: vec![RawPet {
            pet_type: "TIGER".to_owned(),
            tier: Some("LEGENDARY".to_owned()),
            exp: 0.0,
            active: true,
            held_item: Some("PET_ITEM_TEXTBOOK".to_owned()),
            candy_used: 0,
        }],
        ..ProfileMember::default()
    };
    let store = StaticLookupStore::new()
        .with_name(PLAYER, "Steve")
        .with_name("coop", "Alex")
        .with_item(
            "PET_ITEM_TEXTBOOK",
            ItemMetadata {
                name: "Textbook".to_owned(),
                tier: Some(Rarity::Legendary),
            },
        );

    let report = engine()
        .process_with_lookups(&input(member), &store, Duration::from_secs(1))
        .await
        .unwrap();

    assert_eq!(report.display_name, "Steve");
    assert_eq!(report.members.first().map(|member| member.display_name.as_str()), Some("Alex"));
    let pet = report.pets.pets.first().unwrap();
    assert_eq!(pet.held_item_name.as_deref(), Some("Textbook"));
    assert!(pet.lore.iter().any(|line| line == "\u{a7}6Held Item: \u{a7}6Textbook"));
}
