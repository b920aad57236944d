//! Game event system for decoupled communication between systems.
//!
//! Systems and the engine emit events; the notification surface and the
//! evolution modal react to them without tight coupling.

use crate::systems::progression::EvolutionEvent;

/// Events emitted while applying user actions.
#[derive(Debug, Clone)]
pub enum GameEvent {
    /// A level-up (possibly with a rank-up) happened
    Evolution(EvolutionEvent),
    /// A habit reached its full target for the day
    HabitCompleted { name: String, xp: u32 },
    /// A habit's streak advanced (near-win threshold)
    StreakAdvanced { name: String, streak: u32 },
    /// A completed day was toggled back and its XP revoked
    HabitReverted { name: String, xp: u32 },
    /// Action on a habit/task not scheduled for today (soft warning)
    NotScheduledToday { name: String },
    TaskCompleted { name: String, xp: u32 },
    TaskReopened { name: String, xp: u32 },
    /// A vice relapse reset its clean-day counter
    RelapseRecorded { name: String, days_lost: u32 },
    /// A vice reached a clean-day milestone today
    CleanMilestone { name: String, days: u32 },
    /// An ordinary duel ended in victory
    DuelWon { enemy: String, xp: u32, gold: u32 },
    /// A duel was lost; no persisted penalty
    DuelLost { enemy: String },
    /// A trial was won, unlocking a piece of equipment
    TrialCompleted { trial: String, unlocked: String },
    ItemEquipped { name: String },
    /// Equip attempt on a gated item without its trial
    TrialRequired { item: String, trial: String },
    /// MAGIA chosen without enough MP
    InsufficientMp,
}

/// Simple event queue - events are pushed during update, processed at end of frame
#[derive(Default)]
pub struct EventQueue {
    events: Vec<GameEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Push an event to be processed later
    pub fn push(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Drain all events for processing
    pub fn drain(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.events.drain(..)
    }

    /// Check if there are pending events
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
