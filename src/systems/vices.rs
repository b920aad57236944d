//! Vice tracking: clean-day streaks with relapse resets.

use chrono::NaiveDate;

use crate::constants::VICE_MILESTONE_DAYS;
use crate::tracker::Vice;

/// Record a relapse for `date`. Returns the clean-day count that was lost.
pub fn record_relapse(vice: &mut Vice, date: NaiveDate) -> u32 {
    let lost = vice.days_clean(date);
    vice.last_relapse = Some(date);
    lost
}

/// Milestone reached exactly on `today`, if any. Used for a one-time
/// congratulation notification.
pub fn milestone_reached(vice: &Vice, today: NaiveDate) -> Option<u32> {
    let clean = vice.days_clean(today);
    VICE_MILESTONE_DAYS.iter().copied().find(|&m| m == clean)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    #[test]
    fn relapse_resets_clean_days() {
        let mut vice = Vice::new("v".into(), "Cigarro".into(), date(1));
        assert_eq!(vice.days_clean(date(10)), 9);

        let lost = record_relapse(&mut vice, date(10));

        assert_eq!(lost, 9);
        assert_eq!(vice.days_clean(date(10)), 0);
        assert_eq!(vice.days_clean(date(12)), 2);
    }

    #[test]
    fn milestone_fires_only_on_the_exact_day() {
        let vice = Vice::new("v".into(), "Cigarro".into(), date(1));
        assert_eq!(milestone_reached(&vice, date(8)), Some(7));
        assert_eq!(milestone_reached(&vice, date(9)), None);
    }
}
