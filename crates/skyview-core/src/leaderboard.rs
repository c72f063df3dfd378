//! Values published to the ranking store.
//!
//! Player values are the maximum over every profile the player is a member
//! of; totals are summed from those maxima. Bank balance and unique minion
//! crafts belong to the profile, not the player.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use skyview_stats::skill_summary;
use skyview_types::{ProfileInput, ProfileMember, Rarity, ReferenceData, SkyblockProfile};
use tracing::debug;

/// Kills against players needed before the kill/death ratio is published.
const MIN_PLAYER_KILLS_FOR_RATIO: f64 = 100.0;

/// Scores for the ranking store.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LeaderboardValues {
    /// Player scores by leaderboard key.
    pub player: BTreeMap<String, f64>,
    /// Profile scores (`bank`, `unique_minions`) by profile id, then key.
    pub profiles: BTreeMap<String, BTreeMap<String, f64>>,
}

/// Leaderboard values for [`ProfileInput::uuid`] across its profiles.
///
/// Blocked players produce no values.
pub fn leaderboard_values(input: &ProfileInput, reference: &ReferenceData) -> LeaderboardValues {
    if reference.blocked_players.contains(&input.uuid) {
        debug!(uuid = %input.uuid, "blocked player, no leaderboard values");
        return LeaderboardValues::default();
    }

    let profiles: Vec<&SkyblockProfile> = std::iter::once(&input.profile)
        .chain(&input.other_profiles)
        .collect();

    let mut player: BTreeMap<String, f64> = BTreeMap::new();
    for member in profiles.iter().filter_map(|profile| profile.members.get(&input.uuid)) {
        for (key, value) in member_values(member, &input.achievements, reference) {
            let entry = player.entry(key).or_insert(value);
            *entry = entry.max(value);
        }
    }
    add_totals(&mut player);

    let profiles = profiles
        .iter()
        .map(|profile| (profile.profile_id.clone(), profile_values(profile)))
        .collect();

    LeaderboardValues { player, profiles }
}

/// Values of one member record, before maxima and totals.
fn member_values(
    member: &ProfileMember,
    achievements: &BTreeMap<String, f64>,
    reference: &ReferenceData,
) -> BTreeMap<String, f64> {
    let mut values = BTreeMap::new();

    values.insert("pet_score".to_owned(), f64::from(raw_pet_score(member, reference)));
    values.insert("fairy_souls".to_owned(), f64::from(member.fairy_souls_collected));

    let skills = skill_summary(&member.experience, achievements, reference);
    values.insert("average_level".to_owned(), skills.average_level);
    values.insert("total_skill_xp".to_owned(), skills.total_skill_xp);
    for (skill, info) in &skills.levels {
        values.insert(format!("skill_{}_xp", skill.key()), info.xp);
    }

    let mut slayer_xp = 0.0;
    for (boss, progress) in &member.slayer_bosses {
        slayer_xp += progress.xp;
        values.insert(format!("{boss}_slayer_xp"), progress.xp);
        for (tier, kills) in progress.kills_by_tier() {
            values.insert(format!("{boss}_slayer_boss_kills_tier_{tier}"), kills);
        }
    }
    values.insert("slayer_xp".to_owned(), slayer_xp);

    for (item, amount) in &member.collection {
        values.insert(format!("collection_{}", item.to_lowercase()), *amount);
    }

    values.extend(misc_stats(&member.stats, reference));
    values
}

/// Pet score from raw tiers, without the tier boost.
fn raw_pet_score(member: &ProfileMember, reference: &ReferenceData) -> u32 {
    let mut best: BTreeMap<&str, u32> = BTreeMap::new();
    for pet in &member.pets {
        let Some(rarity) = pet.tier.as_deref().and_then(Rarity::from_word) else {
            continue;
        };
        let value = reference.pet_value.get(&rarity).copied().unwrap_or(0);
        let entry = best.entry(pet.pet_type.as_str()).or_insert(0);
        *entry = (*entry).max(value);
    }
    best.values().fold(0_u32, |total, value| total.saturating_add(*value))
}

/// Misc counters, with mount components folded into their merged key.
fn misc_stats(stats: &BTreeMap<String, f64>, reference: &ReferenceData) -> BTreeMap<String, f64> {
    let mut values = stats.clone();
    for (merged, parts) in &reference.mob_mounts {
        for prefix in ["kills_", "deaths_"] {
            let total: f64 = parts
                .iter()
                .filter_map(|part| values.remove(&format!("{prefix}{part}")))
                .sum();
            values.insert(format!("{prefix}{merged}"), total);
        }
    }
    values
}

fn add_totals(values: &mut BTreeMap<String, f64>) {
    let sum = |values: &BTreeMap<String, f64>, matches: &dyn Fn(&str) -> bool| -> f64 {
        values
            .iter()
            .filter(|(key, _)| matches(key.as_str()))
            .map(|(_, value)| value)
            .sum()
    };

    let boss_kills = sum(values, &|key| key.contains("_slayer_boss_kills_tier_"));
    if boss_kills > 0.0 {
        values.insert("total_slayer_boss_kills".to_owned(), boss_kills);
    }

    let collected = sum(values, &|key| key.starts_with("collection_"));
    if collected > 0.0 {
        values.insert("total_collected_items".to_owned(), collected);
    }

    let dragon_kills = sum(values, &|key| key.starts_with("kills_") && key.ends_with("dragon"));
    let dragon_deaths = sum(values, &|key| key.starts_with("deaths_") && key.ends_with("dragon"));
    values.insert("total_dragon_kills".to_owned(), dragon_kills);
    values.insert("total_dragon_deaths".to_owned(), dragon_deaths);

    let player_kills = values.get("kills_player").copied().unwrap_or(0.0);
    let player_deaths = values.get("deaths_player").copied().unwrap_or(0.0);
    if player_kills >= MIN_PLAYER_KILLS_FOR_RATIO && player_deaths > 0.0 {
        values.insert("player_kills_k/d".to_owned(), player_kills / player_deaths);
    }
}

fn profile_values(profile: &SkyblockProfile) -> BTreeMap<String, f64> {
    let mut values = BTreeMap::new();
    if let Some(banking) = profile.banking {
        values.insert("bank".to_owned(), banking.balance);
    }

    let minions: BTreeSet<&str> = profile
        .members
        .values()
        .flat_map(|member| &member.crafted_generators)
        .map(String::as_str)
        .collect();
    #[allow(clippy::cast_precision_loss)]
    let unique = minions.len() as f64;
    values.insert("unique_minions".to_owned(), unique);
    values
}
