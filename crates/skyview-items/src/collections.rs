//! Collection tiers and the bag capacities they unlock.

use std::collections::BTreeMap;

use skyview_types::{CollectionProgress, MemberAmount, ReferenceData, Section, SkyblockProfile};

/// Highest unlocked tier, member amount and coop totals per collection.
///
/// Tier markers look like `WHEAT_5` or `INK_SACK:3_-1`; the suffix after
/// the last underscore is the tier (negative markers count as tier 0).
/// `display_names` maps member uuids to names; unknown members show their
/// uuid.
pub fn collections(
    uuid: &str,
    profile: &SkyblockProfile,
    display_names: &BTreeMap<String, String>,
) -> BTreeMap<String, CollectionProgress> {
    let mut output: BTreeMap<String, CollectionProgress> = BTreeMap::new();
    let Some(member) = profile.members.get(uuid) else {
        return output;
    };

    for marker in &member.unlocked_coll_tiers {
        let Some((collection, tier)) = marker.rsplit_once('_') else {
            continue;
        };
        let tier = tier.parse::<i64>().map_or(0, |tier| u32::try_from(tier.max(0)).unwrap_or(0));

        if output
            .get(collection)
            .is_some_and(|existing| existing.tier >= tier)
        {
            continue;
        }

        let amounts: Vec<MemberAmount> = profile
            .members
            .iter()
            .filter(|(_, other)| !other.collection.is_empty())
            .map(|(member_uuid, other)| MemberAmount {
                uuid: member_uuid.clone(),
                display_name: display_names
                    .get(member_uuid)
                    .cloned()
                    .unwrap_or_else(|| member_uuid.clone()),
                amount: other.collection.get(collection).copied().unwrap_or(0.0),
            })
            .collect();

        output.insert(
            collection.to_owned(),
            CollectionProgress {
                tier,
                amount: member.collection.get(collection).copied().unwrap_or(0.0),
                total_amount: amounts.iter().map(|entry| entry.amount).sum(),
                amounts,
            },
        );
    }
    output
}

/// Slots per bag section, from the collection tiers that unlock them.
///
/// Bags whose collection is not unlocked at all are absent.
pub fn bag_sizes(
    collections: &BTreeMap<String, CollectionProgress>,
    reference: &ReferenceData,
) -> BTreeMap<Section, usize> {
    reference
        .bag_sizes
        .iter()
        .filter_map(|(section, bag)| {
            let tier = collections.get(&bag.collection)?.tier;
            let slots = bag
                .sizes
                .iter()
                .rev()
                .find(|step| tier >= step.tier)
                .map_or(0, |step| step.slots);
            Some((*section, slots))
        })
        .collect()
}
