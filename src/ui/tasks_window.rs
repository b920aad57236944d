//! Tasks tab: one-shot and recurring missions.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use super::style;
use super::{TaskDraft, UiActions, UiState, WEEKDAY_LABELS};
use crate::tracker::Task;

pub fn draw_tasks_tab(
    ui: &mut egui::Ui,
    tasks: &[Task],
    today: NaiveDate,
    ui_state: &mut UiState,
    actions: &mut UiActions,
) {
    ui.heading(egui::RichText::new("MISSÕES").color(style::colors::SYSTEM_CYAN));
    ui.separator();
    ui.add_space(8.0);

    if tasks.is_empty() {
        ui.label(
            egui::RichText::new("Nenhuma missão pendente.")
                .italics()
                .color(style::colors::TEXT_MUTED),
        );
    }

    for task in tasks {
        let done = task.done_on(today);

        ui.horizontal(|ui| {
            let mark = if done { "☑" } else { "☐" };
            if ui
                .button(egui::RichText::new(mark).size(16.0))
                .on_hover_text(if done { "Reabrir" } else { "Concluir" })
                .clicked()
            {
                actions.toggle_task = Some(task.id.clone());
            }

            let name = if done {
                egui::RichText::new(&task.name)
                    .strikethrough()
                    .color(style::colors::TEXT_MUTED)
            } else {
                egui::RichText::new(&task.name)
            };
            ui.label(name);

            if task.is_recurring {
                let days: Vec<&str> = task
                    .days
                    .iter()
                    .filter_map(|day| WEEKDAY_LABELS.get(*day as usize).copied())
                    .collect();
                ui.label(
                    egui::RichText::new(format!("↻ {}", days.join(", ")))
                        .small()
                        .color(style::colors::TEXT_MUTED),
                );
            }
        });
        ui.add_space(2.0);
    }

    ui.add_space(16.0);
    ui.separator();
    ui.collapsing("Nova missão", |ui| {
        let form = &mut ui_state.task_form;

        ui.horizontal(|ui| {
            ui.label("Nome:");
            ui.text_edit_singleline(&mut form.name);
        });
        ui.checkbox(&mut form.recurring, "Recorrente");
        if form.recurring {
            ui.horizontal(|ui| {
                ui.label("Dias:");
                for (index, label) in WEEKDAY_LABELS.iter().enumerate() {
                    ui.toggle_value(&mut form.days[index], *label);
                }
            });
        }

        let days: BTreeSet<u8> = form
            .days
            .iter()
            .enumerate()
            .filter(|(_, on)| **on)
            .map(|(index, _)| index as u8)
            .collect();
        let ready = !form.name.trim().is_empty() && (!form.recurring || !days.is_empty());

        if ui.add_enabled(ready, egui::Button::new("Adicionar")).clicked() {
            actions.add_task = Some(TaskDraft {
                name: form.name.trim().to_string(),
                recurring_days: form.recurring.then_some(days),
            });
            *form = Default::default();
        }
    });
}
