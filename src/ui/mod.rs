//! UI rendering using egui.
//!
//! Every window collects its intents into [`UiActions`]; the engine applies
//! them after the frame. The UI never mutates game state directly.

pub mod dungeon_window;
pub mod evolution_modal;
pub mod habits_window;
pub mod rank_select;
pub mod status_window;
pub mod style;
pub mod tasks_window;
pub mod toasts;
pub mod vices_window;

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::engine::GameState;
use crate::player::{Attribute, EquipSlot, Rank};
use crate::systems::combat::CombatAction;
use crate::systems::progression::EvolutionEvent;

/// Weekday labels, Sunday first (matching the stored day indices).
pub const WEEKDAY_LABELS: [&str; 7] = ["Dom", "Seg", "Ter", "Qua", "Qui", "Sex", "Sáb"];

/// A new habit as entered in the add form.
pub struct HabitDraft {
    pub name: String,
    pub days: BTreeSet<u8>,
    pub target_value: u32,
}

/// A new task as entered in the add form.
pub struct TaskDraft {
    pub name: String,
    /// `None` for a one-shot task.
    pub recurring_days: Option<BTreeSet<u8>>,
}

/// Actions the UI wants to perform (returned to game logic)
#[derive(Default)]
pub struct UiActions {
    pub select_rank: Option<Rank>,
    pub switch_slot: bool,
    pub dismiss_evolution: bool,

    pub add_habit: Option<HabitDraft>,
    pub record_habit: Option<String>,
    pub add_task: Option<TaskDraft>,
    pub toggle_task: Option<String>,
    pub add_vice: Option<String>,
    pub record_relapse: Option<String>,

    pub spend_point: Option<Attribute>,
    pub equip_item: Option<String>,
    pub unequip_slot: Option<EquipSlot>,

    pub dungeon_scan: bool,
    pub dungeon_scan_trial: Option<String>,
    pub dungeon_enter: bool,
    pub dungeon_flee: bool,
    pub dungeon_action: Option<CombatAction>,
    pub dungeon_finish: bool,
}

/// Which main tab is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Status,
    Habits,
    Tasks,
    Vices,
    Dungeon,
}

impl Tab {
    pub const ALL: [Tab; 5] = [Tab::Status, Tab::Habits, Tab::Tasks, Tab::Vices, Tab::Dungeon];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Status => "STATUS",
            Tab::Habits => "HÁBITOS",
            Tab::Tasks => "MISSÕES",
            Tab::Vices => "VÍCIOS",
            Tab::Dungeon => "MASMORRA",
        }
    }
}

/// In-progress form text for the habit add form.
#[derive(Default)]
pub struct HabitForm {
    pub name: String,
    pub days: [bool; 7],
    pub target_text: String,
}

/// In-progress form text for the task add form.
#[derive(Default)]
pub struct TaskForm {
    pub name: String,
    pub recurring: bool,
    pub days: [bool; 7],
}

/// Persistent UI state that survives across frames.
pub struct UiState {
    pub tab: Tab,
    /// Set when an evolution event fires; drives the modal.
    pub pending_evolution: Option<EvolutionEvent>,
    pub habit_form: HabitForm,
    pub task_form: TaskForm,
    pub vice_name: String,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            tab: Tab::Status,
            pending_evolution: None,
            habit_form: HabitForm::default(),
            task_form: TaskForm::default(),
            vice_name: String::new(),
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

/// Draw the main play-mode interface: tab bar plus the active tab.
pub fn draw_game(
    ctx: &egui::Context,
    state: &GameState,
    today: NaiveDate,
    ui_state: &mut UiState,
    actions: &mut UiActions,
) {
    egui::TopBottomPanel::top("tab_bar")
        .frame(style::system_window_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                for tab in Tab::ALL {
                    let selected = ui_state.tab == tab;
                    let text = if selected {
                        egui::RichText::new(tab.label()).color(style::colors::SYSTEM_CYAN)
                    } else {
                        egui::RichText::new(tab.label())
                    };
                    if ui.selectable_label(selected, text).clicked() {
                        ui_state.tab = tab;
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Trocar Rank").clicked() {
                        actions.switch_slot = true;
                    }
                    ui.label(
                        egui::RichText::new(format!(
                            "Rank {}  ·  Nível {}",
                            state.player.rank.letter(),
                            state.player.level
                        ))
                        .color(style::colors::TEXT_MUTED),
                    );
                });
            });
        });

    egui::CentralPanel::default()
        .frame(style::system_window_frame())
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| match ui_state.tab {
                Tab::Status => status_window::draw_status_tab(ui, state, actions),
                Tab::Habits => {
                    habits_window::draw_habits_tab(ui, &state.habits, today, ui_state, actions)
                }
                Tab::Tasks => {
                    tasks_window::draw_tasks_tab(ui, &state.tasks, today, ui_state, actions)
                }
                Tab::Vices => {
                    vices_window::draw_vices_tab(ui, &state.vices, today, ui_state, actions)
                }
                Tab::Dungeon => dungeon_window::draw_dungeon_tab(ui, state, actions),
            });
        });

    evolution_modal::draw_evolution_modal(ctx, ui_state, actions);
}
