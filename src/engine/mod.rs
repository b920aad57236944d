//! Game engine - owns all game state and provides a clean API to the
//! application shell.
//!
//! The engine handles:
//! - The active save slot (`GameState`) and the rank-select mode
//! - Applying `UiActions` collected by the UI each frame
//! - Translating game events into notifications and modal state
//!
//! The application shell (main.rs) only handles:
//! - Window creation and event loop
//! - Forwarding frame ticks to the engine
//! - Running the egui pass

pub mod dungeon;
mod game_state;

pub use game_state::GameState;

use chrono::{Local, NaiveDate};
use std::rc::Rc;

use crate::events::{EventQueue, GameEvent};
use crate::notifications::{NotificationCenter, NotificationKind};
use crate::persistence::StoragePort;
use crate::ui::{UiActions, UiState};

/// Game mode - whether we're on the rank-select screen or playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Save-slot (rank) selection screen
    RankSelect,
    /// Playing the selected slot
    Playing,
}

pub struct Engine {
    pub mode: GameMode,
    pub state: Option<GameState>,
    pub notifications: NotificationCenter,
    events: EventQueue,
    storage: Rc<dyn StoragePort>,
    /// Tracks the calendar day so day-bound checks run once per day.
    current_date: NaiveDate,
}

impl Engine {
    pub fn new(storage: Rc<dyn StoragePort>) -> Self {
        Self {
            mode: GameMode::RankSelect,
            state: None,
            notifications: NotificationCenter::new(),
            events: EventQueue::new(),
            storage,
            current_date: Local::now().date_naive(),
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.current_date
    }

    /// The shared save store (also used by the rank-select screen to show
    /// the global level).
    pub fn storage(&self) -> &dyn StoragePort {
        &*self.storage
    }

    /// Per-frame upkeep: age notifications, roll the calendar day.
    pub fn tick(&mut self, dt: f32) {
        puffin::profile_function!();
        self.notifications.update(dt);

        let now = Local::now().date_naive();
        if now != self.current_date {
            self.current_date = now;
            if let Some(state) = &self.state {
                state.check_vice_milestones(now, &mut self.events);
            }
        }
    }

    /// Apply everything the UI asked for this frame, then turn the
    /// resulting events into notifications and modal state.
    pub fn apply_actions(&mut self, actions: UiActions, ui_state: &mut UiState) {
        let today = self.current_date;
        let mut rng = rand::thread_rng();

        if let Some(rank) = actions.select_rank {
            let state = GameState::load_or_new(rank, self.storage.clone());
            state.check_vice_milestones(today, &mut self.events);
            self.notifications.push(
                NotificationKind::Info,
                format!("Bem-vindo, Caçador Rank {}", state.player.rank.letter()),
            );
            self.state = Some(state);
            self.mode = GameMode::Playing;
        }

        if actions.switch_slot {
            self.state = None;
            self.mode = GameMode::RankSelect;
            *ui_state = UiState::new();
        }

        if actions.dismiss_evolution {
            ui_state.pending_evolution = None;
        }

        if let Some(state) = &mut self.state {
            if let Some(draft) = actions.add_habit {
                state.add_habit(draft.name, draft.days, draft.target_value);
            }
            if let Some(habit_id) = actions.record_habit {
                state.record_habit(&habit_id, today, &mut self.events);
            }
            if let Some(draft) = actions.add_task {
                state.add_task(draft.name, draft.recurring_days);
            }
            if let Some(task_id) = actions.toggle_task {
                state.toggle_task(&task_id, today, &mut self.events);
            }
            if let Some(name) = actions.add_vice {
                state.add_vice(name, today);
            }
            if let Some(vice_id) = actions.record_relapse {
                state.record_relapse(&vice_id, today, &mut self.events);
            }
            if let Some(attr) = actions.spend_point {
                state.spend_stat_point(attr);
            }
            if let Some(item_id) = actions.equip_item {
                state.equip_item(&item_id, &mut self.events);
            }
            if let Some(slot) = actions.unequip_slot {
                state.unequip_slot(slot);
            }

            if actions.dungeon_scan {
                state.dungeon_scan(&mut rng);
            }
            if let Some(trial_id) = actions.dungeon_scan_trial {
                state.dungeon_scan_trial(&trial_id, &mut rng);
            }
            if actions.dungeon_enter {
                state.dungeon.enter_duel();
            }
            if actions.dungeon_flee {
                state.dungeon.flee();
            }
            if let Some(action) = actions.dungeon_action {
                state.dungeon_round(action, today, &mut rng, &mut self.events);
            }
            if actions.dungeon_finish {
                state.dungeon.finish();
            }
        }

        self.process_events(ui_state);
    }

    /// Turn queued events into toasts and modal state.
    fn process_events(&mut self, ui_state: &mut UiState) {
        for event in self.events.drain() {
            match event {
                GameEvent::Evolution(evolution) => {
                    match evolution.new_rank {
                        Some(rank) => self.notifications.push(
                            NotificationKind::Success,
                            format!("RANK UP! Você alcançou o rank {}", rank.letter()),
                        ),
                        None => self.notifications.push(
                            NotificationKind::Success,
                            format!("LEVEL UP! Nível {}", evolution.new_level),
                        ),
                    }
                    ui_state.pending_evolution = Some(evolution);
                }
                GameEvent::HabitCompleted { name, xp } => self
                    .notifications
                    .push(NotificationKind::Success, format!("{name}: +{xp} XP")),
                GameEvent::StreakAdvanced { name, streak } => self.notifications.push(
                    NotificationKind::Info,
                    format!("Sequência de {name}: {streak}"),
                ),
                GameEvent::HabitReverted { name, xp } => self.notifications.push(
                    NotificationKind::Info,
                    format!("Conclusão desfeita: {name} (-{xp} XP)"),
                ),
                GameEvent::NotScheduledToday { name } => self.notifications.push(
                    NotificationKind::Warning,
                    format!("{name} não está agendado para hoje"),
                ),
                GameEvent::TaskCompleted { name, xp } => self
                    .notifications
                    .push(NotificationKind::Success, format!("{name}: +{xp} XP")),
                GameEvent::TaskReopened { name, xp } => self.notifications.push(
                    NotificationKind::Info,
                    format!("Missão reaberta: {name} (-{xp} XP)"),
                ),
                GameEvent::RelapseRecorded { name, days_lost } => self.notifications.push(
                    NotificationKind::Warning,
                    format!("Recaída em {name}: {days_lost} dias perdidos"),
                ),
                GameEvent::CleanMilestone { name, days } => self.notifications.push(
                    NotificationKind::Success,
                    format!("{days} dias livre de {name}!"),
                ),
                GameEvent::DuelWon { enemy, xp, gold } => self.notifications.push(
                    NotificationKind::Success,
                    format!("Vitória contra {enemy}! +{xp} XP, +{gold} ouro"),
                ),
                GameEvent::DuelLost { enemy } => self
                    .notifications
                    .push(NotificationKind::Warning, format!("Derrotado por {enemy}")),
                GameEvent::TrialCompleted { unlocked, .. } => self.notifications.push(
                    NotificationKind::Success,
                    format!("Provação concluída! {unlocked} desbloqueado"),
                ),
                GameEvent::ItemEquipped { name } => self
                    .notifications
                    .push(NotificationKind::Info, format!("{name} equipado")),
                GameEvent::TrialRequired { item, trial } => self.notifications.push(
                    NotificationKind::Warning,
                    format!("{item} exige a {trial}"),
                ),
                GameEvent::InsufficientMp => self
                    .notifications
                    .push(NotificationKind::Warning, "MP insuficiente para MAGIA"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStorage;
    use crate::player::Rank;

    fn engine() -> Engine {
        Engine::new(Rc::new(MemoryStorage::new()))
    }

    #[test]
    fn selecting_a_rank_enters_play_mode() {
        let mut engine = engine();
        let mut ui_state = UiState::new();
        let actions = UiActions {
            select_rank: Some(Rank::D),
            ..Default::default()
        };

        engine.apply_actions(actions, &mut ui_state);

        assert_eq!(engine.mode, GameMode::Playing);
        let state = engine.state.as_ref().unwrap();
        assert_eq!(state.slot, Rank::D);
        assert!(!engine.notifications.is_empty());
    }

    #[test]
    fn switching_slot_returns_to_rank_select() {
        let mut engine = engine();
        let mut ui_state = UiState::new();
        engine.apply_actions(
            UiActions {
                select_rank: Some(Rank::E),
                ..Default::default()
            },
            &mut ui_state,
        );

        engine.apply_actions(
            UiActions {
                switch_slot: true,
                ..Default::default()
            },
            &mut ui_state,
        );

        assert_eq!(engine.mode, GameMode::RankSelect);
        assert!(engine.state.is_none());
    }

    #[test]
    fn evolution_event_opens_the_modal_and_a_toast() {
        let mut engine = engine();
        let mut ui_state = UiState::new();
        engine.apply_actions(
            UiActions {
                select_rank: Some(Rank::E),
                ..Default::default()
            },
            &mut ui_state,
        );
        {
            let state = engine.state.as_mut().unwrap();
            state.add_habit("Meditar".into(), (0..7).collect(), 1);
            state.habits[0].xp_reward = 2000; // guarantees a level-up
        }
        let habit_id = engine.state.as_ref().unwrap().habits[0].id.clone();

        engine.apply_actions(
            UiActions {
                record_habit: Some(habit_id),
                ..Default::default()
            },
            &mut ui_state,
        );

        assert!(ui_state.pending_evolution.is_some());

        engine.apply_actions(
            UiActions {
                dismiss_evolution: true,
                ..Default::default()
            },
            &mut ui_state,
        );
        assert!(ui_state.pending_evolution.is_none());
    }
}
