//! Habits tab: daily progress recording and the add form.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use super::style;
use super::{HabitDraft, UiActions, UiState, WEEKDAY_LABELS};
use crate::tracker::Habit;

pub fn draw_habits_tab(
    ui: &mut egui::Ui,
    habits: &[Habit],
    today: NaiveDate,
    ui_state: &mut UiState,
    actions: &mut UiActions,
) {
    ui.heading(egui::RichText::new("HÁBITOS DIÁRIOS").color(style::colors::SYSTEM_CYAN));
    ui.separator();
    ui.add_space(8.0);

    if habits.is_empty() {
        ui.label(
            egui::RichText::new("Nenhum hábito ainda. Crie o primeiro abaixo.")
                .italics()
                .color(style::colors::TEXT_MUTED),
        );
    }

    for habit in habits {
        let scheduled = habit.scheduled_on(today);
        let progress = habit.progress_on(today);
        let complete = habit.completed_on(today);

        ui.horizontal(|ui| {
            let name = if scheduled {
                egui::RichText::new(&habit.name)
            } else {
                egui::RichText::new(&habit.name).color(style::colors::TEXT_MUTED)
            };
            ui.label(name).on_hover_text(schedule_text(habit));

            ui.label(
                egui::RichText::new(format!("{}/{}", progress, habit.target_value))
                    .color(if complete {
                        style::colors::SUCCESS
                    } else {
                        style::colors::TEXT_MUTED
                    }),
            );

            if habit.streak > 0 {
                ui.label(
                    egui::RichText::new(format!("🔥 {}", habit.streak))
                        .color(style::colors::SYSTEM_GOLD),
                );
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let button_label = if complete { "Desfazer" } else { "Registrar" };
                if ui.button(button_label).clicked() {
                    actions.record_habit = Some(habit.id.clone());
                }
                if !scheduled {
                    ui.label(
                        egui::RichText::new("fora da agenda")
                            .small()
                            .color(style::colors::TEXT_MUTED),
                    );
                }
            });
        });
        ui.add_space(2.0);
    }

    ui.add_space(16.0);
    ui.separator();
    ui.collapsing("Novo hábito", |ui| {
        let form = &mut ui_state.habit_form;

        ui.horizontal(|ui| {
            ui.label("Nome:");
            ui.text_edit_singleline(&mut form.name);
        });
        ui.horizontal(|ui| {
            ui.label("Dias:");
            for (index, label) in WEEKDAY_LABELS.iter().enumerate() {
                ui.toggle_value(&mut form.days[index], *label);
            }
        });
        ui.horizontal(|ui| {
            ui.label("Meta por dia:");
            ui.add_sized([60.0, 18.0], egui::TextEdit::singleline(&mut form.target_text));
        });

        let days: BTreeSet<u8> = form
            .days
            .iter()
            .enumerate()
            .filter(|(_, on)| **on)
            .map(|(index, _)| index as u8)
            .collect();
        let ready = !form.name.trim().is_empty() && !days.is_empty();

        if ui.add_enabled(ready, egui::Button::new("Adicionar")).clicked() {
            let target_value = form.target_text.trim().parse().unwrap_or(1);
            actions.add_habit = Some(HabitDraft {
                name: form.name.trim().to_string(),
                days,
                target_value,
            });
            *form = Default::default();
        }
    });
}

fn schedule_text(habit: &Habit) -> String {
    let days: Vec<&str> = habit
        .days
        .iter()
        .filter_map(|day| WEEKDAY_LABELS.get(*day as usize).copied())
        .collect();
    format!("Agendado: {}", days.join(", "))
}
