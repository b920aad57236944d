//! Domain logic systems organized by concern.
//!
//! All systems are pure: they mutate the records they are given and
//! report what happened through outcome values. Persistence, events, and
//! notifications are the engine's job.
//!
//! - `progression`: XP grants, level-ups, rank-ups, milestones
//! - `combat`: one-round resolution of the three-choice exchange
//! - `habits`: per-day progress recording with toggle-undo semantics
//! - `tasks`: one-shot and recurring task completion
//! - `vices`: clean-day streaks and relapses
//! - `equipment`: slot management and trial gating

pub mod combat;
pub mod equipment;
pub mod habits;
pub mod progression;
pub mod tasks;
pub mod vices;

// Re-export commonly used items
pub use combat::{resolve_round, roll_intent, CombatAction, RoundOutcome};
pub use habits::{record_progress, HabitOutcome};
pub use progression::{grant_xp, revoke_xp, EvolutionEvent};
pub use tasks::{toggle_task, TaskOutcome};
