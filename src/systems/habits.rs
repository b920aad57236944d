//! Habit progress recording.
//!
//! Recording is an idempotent toggle: a second action on an already
//! completed day reverts that day and claws back the reward. Streaks use
//! a "near-win" threshold of `target - 1` for multi-count habits; this is
//! intentional and user-visible, do not collapse the two thresholds.

use chrono::NaiveDate;

use crate::constants::*;
use crate::tracker::{DayProgress, Habit};

/// What a single recording did. The caller applies the XP/MP deltas to
/// the player status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HabitOutcome {
    /// The habit is not scheduled on this weekday; nothing changed.
    NotScheduled,
    /// Progress went up but neither threshold was reached.
    Progressed { progress: u32 },
    /// The near-win threshold was reached; the streak advanced.
    StreakWin { progress: u32 },
    /// The full target was reached: XP reward plus a small MP restore.
    /// For a target of 1 this is also the streak win.
    Completed { xp: u32, mp_restore: i32 },
    /// The day was already complete and has been reverted to zero.
    Reverted { xp_revoked: u32 },
}

/// Record one unit of progress for `date`, or revert the day if it was
/// already complete.
pub fn record_progress(habit: &mut Habit, date: NaiveDate) -> HabitOutcome {
    if !habit.scheduled_on(date) {
        return HabitOutcome::NotScheduled;
    }

    let current = habit.progress_on(date);
    if current >= habit.target_value {
        habit.completed_days.insert(date, DayProgress::Count(0));
        habit.streak = habit.streak.saturating_sub(1);
        return HabitOutcome::Reverted {
            xp_revoked: habit.xp_reward,
        };
    }

    let progress = current + 1;
    habit.completed_days.insert(date, DayProgress::Count(progress));

    let streak_win = if habit.target_value > 1 {
        progress == habit.target_value - 1
    } else {
        progress == habit.target_value
    };
    if streak_win {
        habit.streak += 1;
    }

    if progress >= habit.target_value {
        HabitOutcome::Completed {
            xp: habit.xp_reward,
            mp_restore: HABIT_MP_RESTORE,
        }
    } else if streak_win {
        HabitOutcome::StreakWin { progress }
    } else {
        HabitOutcome::Progressed { progress }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn every_day() -> BTreeSet<u8> {
        (0..7).collect()
    }

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 3).unwrap()
    }

    #[test]
    fn unscheduled_weekday_is_soft_rejected() {
        // Scheduled only on Sundays; 2024-06-03 is a Monday.
        let mut habit = Habit::new("h".into(), "Correr".into(), [0].into(), 1);
        let before = habit.clone();

        let outcome = record_progress(&mut habit, monday());

        assert_eq!(outcome, HabitOutcome::NotScheduled);
        assert_eq!(habit.streak, before.streak);
        assert_eq!(habit.progress_on(monday()), 0);
    }

    #[test]
    fn single_target_completes_and_wins_streak_in_one_step() {
        let mut habit = Habit::new("h".into(), "Meditar".into(), every_day(), 1);
        habit.xp_reward = 100;

        let outcome = record_progress(&mut habit, monday());

        assert_eq!(
            outcome,
            HabitOutcome::Completed {
                xp: 100,
                mp_restore: HABIT_MP_RESTORE
            }
        );
        assert_eq!(habit.streak, 1);
        assert!(habit.completed_on(monday()));
    }

    #[test]
    fn toggle_is_an_involution_for_single_target() {
        let mut habit = Habit::new("h".into(), "Meditar".into(), every_day(), 1);
        habit.xp_reward = 100;

        let first = record_progress(&mut habit, monday());
        let second = record_progress(&mut habit, monday());

        assert!(matches!(first, HabitOutcome::Completed { xp: 100, .. }));
        assert_eq!(second, HabitOutcome::Reverted { xp_revoked: 100 });
        assert_eq!(habit.streak, 0);
        assert_eq!(habit.progress_on(monday()), 0);
        assert!(!habit.completed_on(monday()));
    }

    #[test]
    fn near_win_threshold_advances_streak_before_completion() {
        let mut habit = Habit::new("h".into(), "Flexões".into(), every_day(), 3);

        let first = record_progress(&mut habit, monday());
        assert_eq!(first, HabitOutcome::Progressed { progress: 1 });
        assert_eq!(habit.streak, 0);

        // target - 1 counts as the streak win.
        let second = record_progress(&mut habit, monday());
        assert_eq!(second, HabitOutcome::StreakWin { progress: 2 });
        assert_eq!(habit.streak, 1);

        // Full target grants the reward but not a second streak increment.
        let third = record_progress(&mut habit, monday());
        assert!(matches!(third, HabitOutcome::Completed { .. }));
        assert_eq!(habit.streak, 1);
    }

    #[test]
    fn revert_after_full_completion_decrements_streak_once() {
        let mut habit = Habit::new("h".into(), "Flexões".into(), every_day(), 3);
        for _ in 0..3 {
            record_progress(&mut habit, monday());
        }
        assert_eq!(habit.streak, 1);

        let outcome = record_progress(&mut habit, monday());

        assert!(matches!(outcome, HabitOutcome::Reverted { .. }));
        assert_eq!(habit.streak, 0);
        assert_eq!(habit.progress_on(monday()), 0);
    }

    #[test]
    fn legacy_true_day_reverts_like_a_counted_day() {
        use crate::tracker::DayProgress;
        let mut habit = Habit::new("h".into(), "Ler".into(), every_day(), 2);
        habit.streak = 3;
        habit
            .completed_days
            .insert(monday(), DayProgress::Done(true));

        let outcome = record_progress(&mut habit, monday());

        assert!(matches!(outcome, HabitOutcome::Reverted { .. }));
        assert_eq!(habit.streak, 2);
        assert_eq!(habit.progress_on(monday()), 0);
    }
}
