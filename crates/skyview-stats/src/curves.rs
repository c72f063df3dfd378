//! Progression curves.
//!
//! Skill and pet curves are lists of per-level costs that are walked
//! cumulatively. Slayer curves are cumulative thresholds, but the level
//! itself comes from the claimed markers rather than the experience.

use skyview_types::{LevelInfo, PetLevel, Rarity, ReferenceData, SlayerBossProgress, SlayerLevel};

/// Highest pet level.
pub const MAX_PET_LEVEL: u32 = 100;

/// Per-level costs a pet walks through, levels 2 to 100.
const PET_LEVEL_COSTS: usize = 99;

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

/// Negative and non-finite experience reads as zero.
fn sanitize(xp: f64) -> f64 {
    if xp.is_finite() && xp > 0.0 { xp } else { 0.0 }
}

/// Level counts always fit; saturate rather than wrap.
fn level_count(levels: usize) -> u32 {
    u32::try_from(levels).unwrap_or(u32::MAX)
}

/// Whole part of a non-negative value, saturating at the `u32` range.
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub(crate) fn whole(value: f64) -> u32 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    // Float-to-int `as` saturates at the target bounds.
    value.floor() as u32
}

fn fraction(current: f64, next: f64) -> f64 {
    if next > 0.0 {
        (current / next).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

// ---------------------------------------------------------------------------
// Skills
// ---------------------------------------------------------------------------

/// Level reached with `xp` on a per-level cost `curve`.
///
/// The level is the number of leading costs whose running sum stays at or
/// below `xp`. At the end of the curve progress is 1 and there is no next
/// cost.
pub fn level_by_xp(xp: f64, curve: &[f64]) -> LevelInfo {
    let xp = sanitize(xp);
    let mut total = 0.0;
    let mut level = 0_usize;

    for cost in curve {
        if total + cost > xp {
            break;
        }
        total += cost;
        level = level.saturating_add(1);
    }

    let xp_current = (xp - total).floor();
    let xp_for_next = curve.get(level).map(|cost| cost.ceil());
    let progress = xp_for_next.map_or(1.0, |next| fraction(xp_current, next));

    LevelInfo {
        xp,
        level: level_count(level),
        max_level: level_count(curve.len()),
        xp_current,
        xp_for_next,
        progress,
    }
}

/// Inverse of [`level_by_xp`]: the experience a level is worth.
///
/// Used when only achievement levels are visible. The level is capped at
/// the curve length, and progress inside the level is unknown (0).
pub fn xp_by_level(level: u32, curve: &[f64]) -> LevelInfo {
    let reached = usize::try_from(level)
        .unwrap_or(usize::MAX)
        .min(curve.len());
    let xp: f64 = curve.iter().take(reached).sum();
    let xp_for_next = curve.get(reached).copied();

    LevelInfo {
        xp,
        level: level_count(reached),
        max_level: level_count(curve.len()),
        xp_current: 0.0,
        xp_for_next,
        progress: if xp_for_next.is_some() { 0.0 } else { 1.0 },
    }
}

// ---------------------------------------------------------------------------
// Slayers
// ---------------------------------------------------------------------------

/// Slayer level from the claimed `level_<n>` markers.
///
/// `thresholds` holds the cumulative experience of levels 1 and up; its
/// length is the max level. Progress is experience over the next level's
/// threshold, at most 1.
pub fn slayer_level(progress: &SlayerBossProgress, thresholds: &[f64]) -> SlayerLevel {
    let max_level = thresholds.len();
    let current = progress
        .claimed_levels
        .iter()
        .filter(|(_, claimed)| **claimed)
        .filter_map(|(marker, _)| marker.strip_prefix("level_")?.parse::<usize>().ok())
        .max()
        .unwrap_or(0)
        .min(max_level);

    let xp = sanitize(progress.xp);
    let xp_for_next = thresholds.get(current).copied();
    let progress = xp_for_next.map_or(1.0, |next| if next > 0.0 { (xp / next).min(1.0) } else { 1.0 });

    SlayerLevel {
        current_level: level_count(current),
        max_level: level_count(max_level),
        xp,
        xp_for_next,
        progress,
    }
}

// ---------------------------------------------------------------------------
// Pets
// ---------------------------------------------------------------------------

/// Pet level for `exp` at `rarity`.
///
/// The shared pet table is sliced at the rarity's offset; a pet starts at
/// level 1 and each cost it can pay raises the level, up to
/// [`MAX_PET_LEVEL`].
pub fn pet_level(exp: f64, rarity: Rarity, reference: &ReferenceData) -> PetLevel {
    let offset = reference
        .pet_rarity_offset
        .get(&rarity)
        .copied()
        .unwrap_or(0);
    let costs = reference.pet_xp.get(offset..).unwrap_or_default();
    let costs = costs.get(..PET_LEVEL_COSTS).unwrap_or(costs);
    let xp_max_level: f64 = costs.iter().sum();

    let exp = sanitize(exp);
    let mut total = 0.0;
    let mut paid = 0_usize;
    for cost in costs {
        if total + cost > exp {
            break;
        }
        total += cost;
        paid = paid.saturating_add(1);
    }

    let level = level_count(paid.saturating_add(1)).min(MAX_PET_LEVEL);
    match costs.get(paid) {
        Some(next) if level < MAX_PET_LEVEL => {
            let xp_current = (exp - total).floor();
            let xp_for_next = next.ceil();
            PetLevel {
                level,
                max_level: MAX_PET_LEVEL,
                xp_current,
                xp_for_next: Some(xp_for_next),
                progress: fraction(xp_current, xp_for_next),
                xp_max_level,
            }
        }
        _ => PetLevel {
            level,
            max_level: MAX_PET_LEVEL,
            xp_current: (exp - xp_max_level).max(0.0).floor(),
            xp_for_next: None,
            progress: 1.0,
            xp_max_level,
        },
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[test]
    fn skill_level_walks_cumulative_costs() {
        let curve = [50.0, 125.0, 200.0];

        let info = level_by_xp(100.0, &curve);
        assert_eq!(info.level, 1);
        assert_eq!(info.max_level, 3);
        assert!((info.xp_current - 50.0).abs() < f64::EPSILON);
        assert_eq!(info.xp_for_next, Some(125.0));
        assert!((info.progress - 0.4).abs() < 1e-9);

        // Exactly paying a cost reaches the level.
        assert_eq!(level_by_xp(175.0, &curve).level, 2);
    }

    #[test]
    fn skill_level_at_max_has_full_progress() {
        let info = level_by_xp(1_000.0, &[50.0, 125.0]);

        assert_eq!(info.level, 2);
        assert_eq!(info.xp_for_next, None);
        assert!((info.progress - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn negative_or_missing_xp_is_level_zero() {
        let info = level_by_xp(-5.0, &[50.0]);
        assert_eq!(info.level, 0);
        assert!(info.xp.abs() < f64::EPSILON);

        assert_eq!(level_by_xp(f64::NAN, &[50.0]).level, 0);
    }

    #[test]
    fn builtin_skill_curve_caps_at_fifty() {
        let reference = ReferenceData::default();
        let total: f64 = reference.skill_xp.iter().sum();

        let info = level_by_xp(total, &reference.skill_xp);
        assert_eq!(info.level, 50);

        let runecrafting = level_by_xp(f64::MAX, &reference.runecrafting_xp);
        assert_eq!(runecrafting.level, 25);
    }

    #[test]
    fn xp_by_level_inverts_the_curve() {
        let curve = [50.0, 125.0, 200.0];

        let info = xp_by_level(2, &curve);
        assert!((info.xp - 175.0).abs() < f64::EPSILON);
        assert_eq!(info.xp_for_next, Some(200.0));
        assert_eq!(level_by_xp(info.xp, &curve).level, 2);

        let capped = xp_by_level(60, &curve);
        assert_eq!(capped.level, 3);
        assert!((capped.progress - 1.0).abs() < f64::EPSILON);
    }

    fn slayer(xp: f64, claimed: &[&str]) -> SlayerBossProgress {
        SlayerBossProgress {
            xp,
            claimed_levels: claimed.iter().map(|key| ((*key).to_owned(), true)).collect(),
            extra: BTreeMap::new(),
        }
    }

    #[test]
    fn slayer_level_comes_from_claimed_markers() {
        let thresholds = [5.0, 15.0, 200.0, 1_000.0];

        // 500 xp would be level 3, but only level 2 was claimed.
        let level = slayer_level(&slayer(500.0, &["level_1", "level_2"]), &thresholds);
        assert_eq!(level.current_level, 2);
        assert_eq!(level.xp_for_next, Some(200.0));
        assert!((level.progress - 1.0).abs() < f64::EPSILON);

        let level = slayer_level(&slayer(100.0, &["level_2"]), &thresholds);
        assert!((level.progress - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn slayer_level_caps_at_table_length() {
        let level = slayer_level(&slayer(10.0, &["level_9"]), &[5.0, 15.0]);

        assert_eq!(level.current_level, 2);
        assert_eq!(level.xp_for_next, None);
        assert!((level.progress - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn pet_starts_at_level_one() {
        let reference = ReferenceData::default();
        let level = pet_level(0.0, Rarity::Common, &reference);

        assert_eq!(level.level, 1);
        assert_eq!(level.xp_for_next, reference.pet_xp.first().map(|cost| cost.ceil()));
        assert!(level.progress.abs() < f64::EPSILON);
    }

    #[test]
    fn pet_rarity_shifts_the_curve() {
        let reference = ReferenceData::default();
        let exp = 100_000.0;

        let common = pet_level(exp, Rarity::Common, &reference);
        let legendary = pet_level(exp, Rarity::Legendary, &reference);
        assert!(common.level > legendary.level);
        assert!(common.xp_max_level < legendary.xp_max_level);
    }

    #[test]
    fn pet_caps_at_one_hundred() {
        let reference = ReferenceData::default();
        let max = pet_level(0.0, Rarity::Legendary, &reference).xp_max_level;

        let level = pet_level(max + 1_000.0, Rarity::Legendary, &reference);
        assert_eq!(level.level, MAX_PET_LEVEL);
        assert_eq!(level.xp_for_next, None);
        assert!((level.xp_current - 1_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn whole_saturates() {
        assert_eq!(whole(-3.5), 0);
        assert_eq!(whole(7.9), 7);
        assert_eq!(whole(f64::INFINITY), 0);
    }
}
