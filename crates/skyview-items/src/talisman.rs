//! Talisman uniqueness and activation.
//!
//! Only one instance of a talisman counts toward stats. Candidates arrive
//! in precedence order (armor slots, inventory, talisman bag, then storage
//! and backpacks); the first instance of each identity key may be active,
//! later ones are inactive. Family tiers, upgrade chains and duplicate
//! groups from the reference tables then deactivate or de-unique the
//! superseded pieces.

use std::collections::{BTreeMap, BTreeSet};

use skyview_types::{Item, ReferenceData, StatName};
use tracing::debug;

/// Skyblock id of the bag whose health grows with distinct cake years.
const CAKE_BAG_ID: &str = "NEW_YEAR_CAKE_BAG";

/// One talisman instance offered to the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    /// Arena index of the item.
    pub index: usize,
    /// Storage copies never count, whatever their precedence.
    pub forced_inactive: bool,
}

impl Candidate {
    /// A candidate that may become active.
    pub const fn eligible(index: usize) -> Self {
        Self {
            index,
            forced_inactive: false,
        }
    }

    /// A candidate that is always inactive.
    pub const fn stored(index: usize) -> Self {
        Self {
            index,
            forced_inactive: true,
        }
    }
}

/// Resolve `candidates` in place and return the talisman list, sorted by
/// rarity (highest first) with active pieces ahead of inactive ones.
pub fn resolve(items: &mut [Item], candidates: &[Candidate], reference: &ReferenceData) -> Vec<usize> {
    let mut talismans = Vec::new();
    let mut instances: BTreeMap<String, usize> = BTreeMap::new();
    let mut active: BTreeSet<String> = BTreeSet::new();

    for candidate in candidates {
        let Some(item) = items.get_mut(candidate.index) else {
            continue;
        };
        let key = item.key().to_owned();
        if key.is_empty() {
            continue;
        }

        let count = instances.entry(key.clone()).or_default();
        item.is_unique = *count == 0;
        *count = count.saturating_add(1);

        item.is_inactive = candidate.forced_inactive || active.contains(&key);
        if !item.is_inactive {
            active.insert(key);
        }
        talismans.push(candidate.index);
    }

    for &index in &talismans {
        if let Some(item) = items.get_mut(index)
            && instances.get(item.key()).is_some_and(|count| *count > 1)
        {
            item.is_unique = false;
        }
    }

    apply_families(items, &talismans, &reference.talisman_families);
    apply_upgrades(items, &talismans, &reference.talisman_upgrades);
    apply_duplicates(items, &talismans, &reference.talisman_duplicates);
    apply_cake_bag(items, &talismans);
    apply_base_names(items, &talismans);

    sort_talismans(items, &mut talismans);
    debug!(
        talismans = talismans.len(),
        active = talismans
            .iter()
            .filter(|&&index| items.get(index).is_some_and(|item| !item.is_inactive))
            .count(),
        "talismans resolved"
    );
    talismans
}

fn keys_of(items: &[Item], talismans: &[usize]) -> Vec<(usize, String, bool)> {
    talismans
        .iter()
        .filter_map(|&index| {
            let item = items.get(index)?;
            Some((index, item.key().to_owned(), !item.is_inactive))
        })
        .collect()
}

/// Tier number of `key` within `family`, for keys like `WEDDING_RING_3`.
fn family_tier(key: &str, family: &str) -> Option<u32> {
    key.strip_prefix(family)?.parse().ok()
}

/// Within each tiered family only the highest tier counts.
fn apply_families(items: &mut [Item], talismans: &[usize], families: &[String]) {
    let keys = keys_of(items, talismans);
    for family in families {
        let Some(highest) = keys
            .iter()
            .filter_map(|(_, key, _)| family_tier(key, family))
            .max()
        else {
            continue;
        };
        for (index, key, _) in &keys {
            if family_tier(key, family).is_some_and(|tier| tier < highest)
                && let Some(item) = items.get_mut(*index)
            {
                item.is_unique = false;
                item.is_inactive = true;
            }
        }
    }
}

/// A base talisman yields to any of its upgrades.
fn apply_upgrades(items: &mut [Item], talismans: &[usize], upgrades: &BTreeMap<String, Vec<String>>) {
    for &index in talismans {
        let keys = keys_of(items, talismans);
        let Some(item) = items.get_mut(index) else {
            continue;
        };
        let Some(successors) = upgrades.get(item.key()) else {
            continue;
        };
        let mut present = keys.iter().filter(|(_, key, _)| successors.contains(key));
        let any_active = present.clone().any(|(_, _, active)| *active);
        if present.next().is_some() {
            item.is_unique = false;
        }
        if any_active {
            item.is_inactive = true;
        }
    }
}

/// Duplicate groups only clear uniqueness.
fn apply_duplicates(items: &mut [Item], talismans: &[usize], duplicates: &BTreeMap<String, Vec<String>>) {
    let keys = keys_of(items, talismans);
    for (index, key, _) in &keys {
        let Some(group) = duplicates.get(key) else {
            continue;
        };
        if keys.iter().any(|(_, other, _)| group.contains(other))
            && let Some(item) = items.get_mut(*index)
        {
            item.is_unique = false;
        }
    }
}

/// The cake bag's health is the number of distinct cake years inside it.
#[allow(clippy::cast_precision_loss)]
fn apply_cake_bag(items: &mut [Item], talismans: &[usize]) {
    for &index in talismans {
        let Some(bag) = items.get(index).filter(|item| item.key() == CAKE_BAG_ID) else {
            continue;
        };
        let years: BTreeSet<i32> = bag
            .contains_items
            .iter()
            .filter_map(|&child| items.get(child)?.new_years_cake)
            .collect();
        if let Some(bag) = items.get_mut(index) {
            bag.stats.set(StatName::Health, years.len() as f64);
        }
    }
}

/// Display name without the leading reforge word.
fn apply_base_names(items: &mut [Item], talismans: &[usize]) {
    for &index in talismans {
        let Some(item) = items.get_mut(index) else {
            continue;
        };
        item.base_name = item.display_name.as_deref().map(|name| {
            if item.reforge.is_some() {
                name.split_once(' ').map_or(name, |(_, rest)| rest).to_owned()
            } else {
                name.to_owned()
            }
        });
    }
}

fn sort_talismans(items: &[Item], talismans: &mut [usize]) {
    talismans.sort_by_key(|&index| {
        let item = items.get(index);
        (
            std::cmp::Reverse(item.and_then(|item| item.rarity)),
            item.is_some_and(|item| item.is_inactive),
        )
    });
}
