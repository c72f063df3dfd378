//! Kill, death and fishing counters from the member's misc stats.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use skyview_types::{FishingStats, KillCount, ReferenceData};

/// Kill tallies, most first.
pub fn kills(stats: &BTreeMap<String, f64>, reference: &ReferenceData) -> Vec<KillCount> {
    tallies(stats, "kills_", reference)
}

/// Death tallies, most first.
pub fn deaths(stats: &BTreeMap<String, f64>, reference: &ReferenceData) -> Vec<KillCount> {
    tallies(stats, "deaths_", reference)
}

/// Counters under `prefix`, with rider and mount pairs merged into one
/// entry per [`ReferenceData::mob_mounts`].
fn tallies(stats: &BTreeMap<String, f64>, prefix: &str, reference: &ReferenceData) -> Vec<KillCount> {
    let mut amounts: BTreeMap<String, f64> = stats
        .iter()
        .filter_map(|(key, amount)| Some((key.strip_prefix(prefix)?.to_owned(), *amount)))
        .filter(|(entity, _)| !entity.is_empty())
        .collect();

    for (merged, parts) in &reference.mob_mounts {
        let found: Vec<f64> = parts.iter().filter_map(|part| amounts.remove(part)).collect();
        if !found.is_empty() {
            *amounts.entry(merged.clone()).or_insert(0.0) += found.iter().sum::<f64>();
        }
    }

    let mut output: Vec<KillCount> = amounts
        .into_iter()
        .map(|(entity_id, amount)| KillCount {
            entity_name: mob_name(&entity_id, reference),
            entity_id,
            amount,
        })
        .collect();
    output.sort_by(|a, b| b.amount.partial_cmp(&a.amount).unwrap_or(Ordering::Equal));
    output
}

fn mob_name(entity_id: &str, reference: &ReferenceData) -> String {
    if let Some(name) = reference.mob_names.get(entity_id) {
        return name.clone();
    }
    entity_id
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Fishing totals; absent counters read as zero.
pub fn fishing(stats: &BTreeMap<String, f64>) -> FishingStats {
    let read = |key: &str| stats.get(key).copied().unwrap_or(0.0);
    FishingStats {
        total: read("items_fished"),
        treasure: read("items_fished_treasure"),
        treasure_large: read("items_fished_large_treasure"),
        shredder_fished: read("shredder_fished"),
        shredder_bait: read("shredder_bait"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats() -> BTreeMap<String, f64> {
        [
            ("kills_zombie", 40.0),
            ("kills_zealot_enderman", 120.0),
            ("kills_guardian_emperor", 2.0),
            ("kills_skeleton_emperor", 3.0),
            ("kills_ruin_wolf", 7.0),
            ("deaths_fall", 9.0),
            ("items_fished", 310.0),
            ("items_fished_treasure", 4.0),
        ]
        .into_iter()
        .map(|(key, value)| (key.to_owned(), value))
        .collect()
    }

    #[test]
    fn kills_sorted_and_named() {
        let output = kills(&stats(), &ReferenceData::default());
        let rows: Vec<(&str, f64)> = output
            .iter()
            .map(|row| (row.entity_name.as_str(), row.amount))
            .collect();

        assert_eq!(
            rows,
            vec![
                ("Zealot", 120.0),
                ("Zombie", 40.0),
                ("Ruin Wolf", 7.0),
                ("Sea Emperor", 5.0),
            ]
        );
    }

    #[test]
    fn merged_parts_are_removed() {
        let output = kills(&stats(), &ReferenceData::default());
        assert!(output.iter().all(|row| row.entity_id != "guardian_emperor"));
        assert!(output.iter().any(|row| row.entity_id == "sea_emperor"));
        assert!(output.iter().all(|row| row.entity_id != "monster_of_the_deep"));
    }

    #[test]
    fn deaths_and_fishing() {
        let deaths = deaths(&stats(), &ReferenceData::default());
        assert_eq!(deaths.len(), 1);
        assert_eq!(deaths.first().map(|row| row.entity_name.as_str()), Some("Fall"));

        let fishing = fishing(&stats());
        assert!((fishing.total - 310.0).abs() < f64::EPSILON);
        assert!((fishing.treasure - 4.0).abs() < f64::EPSILON);
        assert!(fishing.shredder_bait.abs() < f64::EPSILON);
    }
}
