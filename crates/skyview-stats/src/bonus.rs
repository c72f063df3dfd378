//! Stepped bonus tables.

use skyview_types::{BonusSteps, StatMap};

/// Highest skill level that grants a bonus.
pub const MAX_SKILL_BONUS_LEVEL: u32 = 50;

/// Highest slayer level that grants a bonus.
pub const MAX_SLAYER_BONUS_LEVEL: u32 = 9;

/// Sum the per-level bonus for every level up to `level`.
///
/// Each level from the first step up to `min(level, max_level)` grants the
/// stats of the highest step at or below it.
pub fn stepped_bonus(level: u32, steps: &BonusSteps, max_level: u32) -> StatMap {
    let mut bonus = StatMap::zero();
    let Some(&first) = steps.keys().next() else {
        return bonus;
    };

    for reached in first..=level.min(max_level) {
        if let Some((_, stats)) = steps.range(..=reached).next_back() {
            bonus.add_all(stats);
        }
    }
    bonus
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::BTreeMap;

    use skyview_types::{ReferenceData, Skill, StatName};

    use super::*;

    fn steps() -> BonusSteps {
        BTreeMap::from([
            (1, StatMap::zero().with(StatName::Health, 2.0)),
            (15, StatMap::zero().with(StatName::Health, 3.0)),
        ])
    }

    #[test]
    fn each_level_uses_the_highest_step_below_it() {
        // Levels 1-14 give 2 each, 15-16 give 3 each.
        let bonus = stepped_bonus(16, &steps(), MAX_SKILL_BONUS_LEVEL);
        assert!((bonus.get(StatName::Health) - 34.0).abs() < f64::EPSILON);
    }

    #[test]
    fn level_zero_and_empty_tables_grant_nothing() {
        assert!(stepped_bonus(0, &steps(), MAX_SKILL_BONUS_LEVEL).is_zero());
        assert!(stepped_bonus(10, &BonusSteps::new(), MAX_SKILL_BONUS_LEVEL).is_zero());
    }

    #[test]
    fn levels_beyond_the_cap_are_ignored() {
        let capped = stepped_bonus(20, &steps(), 14);
        assert!((capped.get(StatName::Health) - 28.0).abs() < f64::EPSILON);
    }

    #[test]
    fn builtin_farming_table_at_max() {
        let reference = ReferenceData::default();
        let farming = reference.skill_bonuses.get(&Skill::Farming).unwrap();
        let bonus = stepped_bonus(60, farming, MAX_SKILL_BONUS_LEVEL);

        assert!(bonus.get(StatName::Health) > 0.0);
    }
}
