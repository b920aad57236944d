//! Tracked records: habits, tasks, and vices.
//!
//! Weekday indices follow the original saves: 0 = Sunday through
//! 6 = Saturday.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::constants::*;

/// Weekday index for a date, 0 = Sunday.
pub fn weekday_index(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

/// Progress recorded for one day. Old saves stored a plain boolean where
/// `true` means the full target was reached; newer saves store a count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DayProgress {
    Done(bool),
    Count(u32),
}

/// A recurring habit with a weekly schedule and a per-day target count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habit {
    pub id: String,
    pub name: String,
    /// Weekday indices (0 = Sunday) on which the habit is scheduled.
    pub days: BTreeSet<u8>,
    pub completed_days: BTreeMap<NaiveDate, DayProgress>,
    pub target_value: u32,
    pub xp_reward: u32,
    pub streak: u32,
}

impl Habit {
    pub fn new(id: String, name: String, days: BTreeSet<u8>, target_value: u32) -> Self {
        Self {
            id,
            name,
            days,
            completed_days: BTreeMap::new(),
            target_value: target_value.max(1),
            xp_reward: HABIT_DEFAULT_XP,
            streak: 0,
        }
    }

    /// Recorded progress for a date, normalizing the legacy boolean form.
    pub fn progress_on(&self, date: NaiveDate) -> u32 {
        match self.completed_days.get(&date) {
            Some(DayProgress::Done(true)) => self.target_value,
            Some(DayProgress::Done(false)) | None => 0,
            Some(DayProgress::Count(n)) => *n,
        }
    }

    pub fn scheduled_on(&self, date: NaiveDate) -> bool {
        self.days.contains(&weekday_index(date))
    }

    pub fn completed_on(&self, date: NaiveDate) -> bool {
        self.progress_on(date) >= self.target_value
    }
}

/// A one-shot or recurring task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub name: String,
    pub xp_reward: u32,
    pub is_recurring: bool,
    /// Weekday schedule, only meaningful when `is_recurring`.
    pub days: BTreeSet<u8>,
    pub completed: bool,
    pub last_completed: Option<NaiveDate>,
}

impl Task {
    pub fn one_shot(id: String, name: String) -> Self {
        Self {
            id,
            name,
            xp_reward: TASK_DEFAULT_XP,
            is_recurring: false,
            days: BTreeSet::new(),
            completed: false,
            last_completed: None,
        }
    }

    pub fn recurring(id: String, name: String, days: BTreeSet<u8>) -> Self {
        Self {
            id,
            name,
            xp_reward: TASK_DEFAULT_XP,
            is_recurring: true,
            days,
            completed: false,
            last_completed: None,
        }
    }

    /// Whether the task counts as done for the given date.
    pub fn done_on(&self, date: NaiveDate) -> bool {
        if self.is_recurring {
            self.last_completed == Some(date)
        } else {
            self.completed
        }
    }
}

/// A habit being broken: tracked by days clean rather than completions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vice {
    pub id: String,
    pub name: String,
    pub started: NaiveDate,
    pub last_relapse: Option<NaiveDate>,
}

impl Vice {
    pub fn new(id: String, name: String, started: NaiveDate) -> Self {
        Self {
            id,
            name,
            started,
            last_relapse: None,
        }
    }

    /// Consecutive clean days as of `today`.
    pub fn days_clean(&self, today: NaiveDate) -> u32 {
        let since = self.last_relapse.unwrap_or(self.started);
        (today - since).num_days().max(0) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn weekday_index_is_zero_for_sunday() {
        // 2024-06-02 is a Sunday.
        assert_eq!(weekday_index(date(2024, 6, 2)), 0);
        assert_eq!(weekday_index(date(2024, 6, 3)), 1);
        assert_eq!(weekday_index(date(2024, 6, 8)), 6);
    }

    #[test]
    fn legacy_boolean_progress_means_full_target() {
        let mut habit = Habit::new("h1".into(), "Ler".into(), (0..7).collect(), 3);
        habit
            .completed_days
            .insert(date(2024, 6, 2), DayProgress::Done(true));
        assert_eq!(habit.progress_on(date(2024, 6, 2)), 3);
        assert!(habit.completed_on(date(2024, 6, 2)));
        assert_eq!(habit.progress_on(date(2024, 6, 3)), 0);
    }

    #[test]
    fn day_progress_deserializes_both_forms() {
        let legacy: DayProgress = serde_json::from_str("true").unwrap();
        let counted: DayProgress = serde_json::from_str("2").unwrap();
        assert_eq!(legacy, DayProgress::Done(true));
        assert_eq!(counted, DayProgress::Count(2));
    }

    #[test]
    fn vice_days_clean_resets_on_relapse() {
        let mut vice = Vice::new("v1".into(), "Açúcar".into(), date(2024, 5, 1));
        assert_eq!(vice.days_clean(date(2024, 5, 31)), 30);
        vice.last_relapse = Some(date(2024, 5, 30));
        assert_eq!(vice.days_clean(date(2024, 5, 31)), 1);
    }
}
