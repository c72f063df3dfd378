//! Fairy soul progress and the exchange bonus.

use skyview_types::{FairySouls, StatMap, StatName};

/// Stats granted by `exchanges` fairy soul exchanges.
///
/// Strength and defense grow by one per exchange plus one per five, speed
/// by one per ten, and health by `3n + ⌊n(n − 1) / 10⌋`.
pub fn fairy_bonus(exchanges: u32) -> StatMap {
    let n = f64::from(exchanges);
    let strength = n + (n / 5.0).floor();

    StatMap::zero()
        .with(StatName::Strength, strength)
        .with(StatName::Defense, strength)
        .with(StatName::Speed, (n / 10.0).floor())
        .with(StatName::Health, 3.0 * n + (n * (n - 1.0) / 10.0).floor())
}

/// Collected souls against the total in the game.
pub fn fairy_souls(collected: u32, total: u32) -> FairySouls {
    let progress = if total == 0 {
        0.0
    } else {
        (f64::from(collected) / f64::from(total)).min(1.0)
    };
    FairySouls {
        collected,
        total,
        progress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_exchanges() {
        let bonus = fairy_bonus(10);

        assert!((bonus.get(StatName::Speed) - 1.0).abs() < f64::EPSILON);
        assert!((bonus.get(StatName::Strength) - 12.0).abs() < f64::EPSILON);
        assert!((bonus.get(StatName::Defense) - 12.0).abs() < f64::EPSILON);
        assert!((bonus.get(StatName::Health) - 39.0).abs() < f64::EPSILON);
    }

    #[test]
    fn no_exchanges_no_bonus() {
        assert!(fairy_bonus(0).is_zero());
    }

    #[test]
    fn soul_progress_is_capped() {
        let souls = fairy_souls(250, 209);
        assert!((souls.progress - 1.0).abs() < f64::EPSILON);

        assert!(fairy_souls(3, 0).progress.abs() < f64::EPSILON);
    }
}
