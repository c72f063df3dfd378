//! Slayer levels, kills, quest costs and slayer bonuses.

use std::collections::BTreeMap;

use skyview_types::{
    ProfileMember, ReferenceData, SlayerBoss, SlayerProgress, SlayerSummary, StatMap,
};

use crate::bonus::{MAX_SLAYER_BONUS_LEVEL, stepped_bonus};
use crate::curves::slayer_level;

/// Slayer progress of a member.
///
/// Boss lines without any claimed level are left out. Kill counters are
/// re-keyed to one-based tiers; coins spent are kills times the quest cost
/// of the tier.
pub fn slayer_summary(member: &ProfileMember, reference: &ReferenceData) -> SlayerSummary {
    let mut summary = SlayerSummary::default();

    for boss in SlayerBoss::ALL {
        let Some(progress) = member.slayer(boss) else {
            continue;
        };
        if !progress.has_claimed_levels() {
            continue;
        }

        let kills: BTreeMap<u32, f64> = progress
            .kills_by_tier()
            .into_iter()
            .map(|(tier, kills)| (tier.saturating_add(1), kills))
            .collect();
        let coins_spent: f64 = kills
            .iter()
            .map(|(tier, kills)| kills * reference.slayer_tier_cost.get(tier).copied().unwrap_or(0.0))
            .sum();
        let level = slayer_level(progress, reference.slayer_thresholds(boss));

        summary.slayer_xp += level.xp;
        summary.slayer_coins_spent += coins_spent;
        summary.slayers.insert(
            boss,
            SlayerProgress {
                level,
                total_kills: kills.values().sum(),
                kills,
                coins_spent,
            },
        );
    }
    summary
}

/// Stepped bonus per boss line with at least one claimed level.
pub fn slayer_bonus(summary: &SlayerSummary, reference: &ReferenceData) -> BTreeMap<SlayerBoss, StatMap> {
    summary
        .slayers
        .iter()
        .filter_map(|(boss, progress)| {
            let steps = reference.slayer_bonuses.get(boss)?;
            let bonus = stepped_bonus(progress.level.current_level, steps, MAX_SLAYER_BONUS_LEVEL);
            Some((*boss, bonus))
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use skyview_types::{SlayerBossProgress, StatName};

    use super::*;

    fn member() -> ProfileMember {
        let zombie = SlayerBossProgress {
            xp: 1_500.0,
            claimed_levels: BTreeMap::from([
                ("level_1".to_owned(), true),
                ("level_3".to_owned(), true),
            ]),
            extra: BTreeMap::from([
                ("boss_kills_tier_0".to_owned(), serde_json::json!(12)),
                ("boss_kills_tier_2".to_owned(), serde_json::json!(4)),
            ]),
        };
        let spider = SlayerBossProgress {
            xp: 20.0,
            ..SlayerBossProgress::default()
        };
        ProfileMember {
            slayer_bosses: BTreeMap::from([
                ("zombie".to_owned(), zombie),
                ("spider".to_owned(), spider),
            ]),
            ..ProfileMember::default()
        }
    }

    #[test]
    fn kills_are_one_based_and_priced() {
        let summary = slayer_summary(&member(), &ReferenceData::default());
        let zombie = summary.slayers.get(&SlayerBoss::Zombie).unwrap();

        assert_eq!(zombie.kills.get(&1).copied(), Some(12.0));
        assert_eq!(zombie.kills.get(&3).copied(), Some(4.0));
        assert!((zombie.total_kills - 16.0).abs() < f64::EPSILON);
        // 12 x 100 + 4 x 10000.
        assert!((zombie.coins_spent - 41_200.0).abs() < f64::EPSILON);
        assert!((summary.slayer_coins_spent - 41_200.0).abs() < f64::EPSILON);
        assert_eq!(zombie.level.current_level, 3);
    }

    #[test]
    fn unclaimed_lines_are_skipped() {
        let summary = slayer_summary(&member(), &ReferenceData::default());

        assert!(!summary.slayers.contains_key(&SlayerBoss::Spider));
        assert!((summary.slayer_xp - 1_500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn bonus_follows_claimed_level() {
        let reference = ReferenceData::default();
        let summary = slayer_summary(&member(), &reference);
        let bonus = slayer_bonus(&summary, &reference);

        let zombie = bonus.get(&SlayerBoss::Zombie).unwrap();
        assert!(zombie.get(StatName::Health) > 0.0);
        assert!(!bonus.contains_key(&SlayerBoss::Spider));
    }
}
