//! Skill levels, averages and skill bonuses.

use std::collections::BTreeMap;

use skyview_types::{ReferenceData, Skill, SkillExperience, SkillSummary, StatMap};
use tracing::debug;

use crate::bonus::{MAX_SKILL_BONUS_LEVEL, stepped_bonus};
use crate::curves::{level_by_xp, whole, xp_by_level};

/// Skill levels of a member.
///
/// With any skill experience present, every skill is leveled from its
/// experience (missing skills count as 0). Otherwise the skills that have
/// an achievement counterpart are leveled from the achievement value and
/// converted back to experience with [`xp_by_level`].
pub fn skill_summary(
    experience: &SkillExperience,
    achievements: &BTreeMap<String, f64>,
    reference: &ReferenceData,
) -> SkillSummary {
    if experience.any() {
        from_experience(experience, reference)
    } else {
        debug!("skill experience hidden, using achievement levels");
        from_achievements(achievements, reference)
    }
}

fn from_experience(experience: &SkillExperience, reference: &ReferenceData) -> SkillSummary {
    let levels: BTreeMap<_, _> = Skill::ALL
        .into_iter()
        .map(|skill| {
            let xp = experience.get(skill).unwrap_or(0.0);
            (skill, level_by_xp(xp, reference.skill_curve(skill)))
        })
        .collect();

    let counted: Vec<_> = levels
        .iter()
        .filter(|(skill, _)| skill.counts_toward_average())
        .map(|(_, info)| info)
        .collect();
    let sum_with_progress: f64 = counted
        .iter()
        .map(|info| f64::from(info.level) + info.progress)
        .sum();
    let sum_levels: f64 = counted.iter().map(|info| f64::from(info.level)).sum();

    SkillSummary {
        average_level: average(sum_with_progress, counted.len()),
        average_level_no_progress: average(sum_levels, counted.len()),
        total_skill_xp: counted.iter().map(|info| info.xp).sum(),
        levels,
        from_achievements: false,
    }
}

fn from_achievements(achievements: &BTreeMap<String, f64>, reference: &ReferenceData) -> SkillSummary {
    let levels: BTreeMap<_, _> = Skill::ALL
        .into_iter()
        .filter_map(|skill| {
            let key = skill.achievement_key()?;
            let level = whole(achievements.get(key).copied().unwrap_or(0.0));
            Some((skill, xp_by_level(level, reference.skill_curve(skill))))
        })
        .collect();

    let sum_levels: f64 = levels.values().map(|info| f64::from(info.level)).sum();
    let average_level = average(sum_levels, levels.len());

    SkillSummary {
        average_level,
        average_level_no_progress: average_level,
        total_skill_xp: levels.values().map(|info| info.xp).sum(),
        levels,
        from_achievements: true,
    }
}

#[allow(clippy::cast_precision_loss)]
fn average(sum: f64, count: usize) -> f64 {
    if count == 0 { 0.0 } else { sum / count as f64 }
}

/// Stepped bonus per leveled skill; skills at level 0 are absent.
pub fn skill_bonus(summary: &SkillSummary, reference: &ReferenceData) -> BTreeMap<Skill, StatMap> {
    summary
        .levels
        .iter()
        .filter(|(_, info)| info.level > 0)
        .filter_map(|(skill, info)| {
            let steps = reference.skill_bonuses.get(skill)?;
            Some((*skill, stepped_bonus(info.level, steps, MAX_SKILL_BONUS_LEVEL)))
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use skyview_types::StatName;

    use super::*;

    #[test]
    fn averages_exclude_runecrafting_and_carpentry() {
        let reference = ReferenceData::default();
        let experience = SkillExperience {
            // 50 + 125 = level 2 exactly.
            farming: Some(175.0),
            runecrafting: Some(1_000_000.0),
            carpentry: Some(1_000_000.0),
            ..SkillExperience::default()
        };
        let summary = skill_summary(&experience, &BTreeMap::new(), &reference);

        assert!(!summary.from_achievements);
        assert_eq!(summary.levels.len(), Skill::ALL.len());
        assert_eq!(summary.levels.get(&Skill::Farming).unwrap().level, 2);
        assert!((summary.average_level_no_progress - 0.25).abs() < f64::EPSILON);
        assert!((summary.total_skill_xp - 175.0).abs() < f64::EPSILON);
    }

    #[test]
    fn hidden_experience_falls_back_to_achievements() {
        let reference = ReferenceData::default();
        let achievements = BTreeMap::from([
            ("skyblock_harvester".to_owned(), 8.0),
            ("skyblock_excavator".to_owned(), 16.0),
        ]);
        let summary = skill_summary(&SkillExperience::default(), &achievements, &reference);

        assert!(summary.from_achievements);
        assert_eq!(summary.levels.get(&Skill::Mining).unwrap().level, 16);
        assert!(!summary.levels.contains_key(&Skill::Runecrafting));
        // (8 + 16) over the eight skills with achievements.
        assert!((summary.average_level - 3.0).abs() < f64::EPSILON);
        assert!(summary.total_skill_xp > 0.0);
    }

    #[test]
    fn bonus_only_for_leveled_skills() {
        let reference = ReferenceData::default();
        let experience = SkillExperience {
            mining: Some(175.0),
            ..SkillExperience::default()
        };
        let summary = skill_summary(&experience, &BTreeMap::new(), &reference);
        let bonus = skill_bonus(&summary, &reference);

        assert_eq!(bonus.len(), 1);
        let mining = bonus.get(&Skill::Mining).unwrap();
        assert!((mining.get(StatName::Defense) - 2.0).abs() < f64::EPSILON);
    }
}
