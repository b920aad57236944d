//! Task completion toggles.

use chrono::NaiveDate;

use crate::tracker::Task;

/// Result of toggling a task. The caller applies the XP delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskOutcome {
    /// Recurring task not scheduled on this weekday; nothing changed.
    NotScheduled,
    Completed { xp: u32 },
    /// The completion for today (or the one-shot flag) was undone.
    Reopened { xp_revoked: u32 },
}

/// Toggle a task's completion for `date`.
///
/// One-shot tasks flip their `completed` flag. Recurring tasks complete
/// at most once per scheduled day and toggle off when re-clicked.
pub fn toggle_task(task: &mut Task, date: NaiveDate) -> TaskOutcome {
    if task.is_recurring {
        if !task.days.contains(&crate::tracker::weekday_index(date)) {
            return TaskOutcome::NotScheduled;
        }
        if task.last_completed == Some(date) {
            task.last_completed = None;
            return TaskOutcome::Reopened {
                xp_revoked: task.xp_reward,
            };
        }
        task.last_completed = Some(date);
        TaskOutcome::Completed { xp: task.xp_reward }
    } else if task.completed {
        task.completed = false;
        TaskOutcome::Reopened {
            xp_revoked: task.xp_reward,
        }
    } else {
        task.completed = true;
        task.last_completed = Some(date);
        TaskOutcome::Completed { xp: task.xp_reward }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sunday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 2).unwrap()
    }

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 3).unwrap()
    }

    #[test]
    fn one_shot_task_toggles() {
        let mut task = Task::one_shot("t".into(), "Declarar impostos".into());
        task.xp_reward = 75;

        assert_eq!(toggle_task(&mut task, monday()), TaskOutcome::Completed { xp: 75 });
        assert!(task.completed);
        assert_eq!(
            toggle_task(&mut task, monday()),
            TaskOutcome::Reopened { xp_revoked: 75 }
        );
        assert!(!task.completed);
    }

    #[test]
    fn recurring_task_rejects_unscheduled_weekday() {
        let mut task = Task::recurring("t".into(), "Lavar roupa".into(), [0].into());

        let outcome = toggle_task(&mut task, monday());

        assert_eq!(outcome, TaskOutcome::NotScheduled);
        assert_eq!(task.last_completed, None);
    }

    #[test]
    fn recurring_task_completes_once_per_day_and_toggles() {
        let mut task = Task::recurring("t".into(), "Lavar roupa".into(), [0].into());
        task.xp_reward = 30;

        assert_eq!(toggle_task(&mut task, sunday()), TaskOutcome::Completed { xp: 30 });
        assert!(task.done_on(sunday()));
        assert_eq!(
            toggle_task(&mut task, sunday()),
            TaskOutcome::Reopened { xp_revoked: 30 }
        );
        assert!(!task.done_on(sunday()));
    }
}
