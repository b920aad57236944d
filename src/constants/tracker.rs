//! Habit, task, and vice tracking constants.

/// MP restored when a habit reaches its full target for the day
pub const HABIT_MP_RESTORE: i32 = 5;
/// Default XP reward for a freshly created habit
pub const HABIT_DEFAULT_XP: u32 = 50;
/// Default XP reward for a freshly created task
pub const TASK_DEFAULT_XP: u32 = 75;
/// Clean-day milestones that trigger a congratulation notification
pub const VICE_MILESTONE_DAYS: [u32; 4] = [7, 30, 90, 365];
