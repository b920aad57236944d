//! Vices tab: clean-day counters and relapse recording.

use chrono::NaiveDate;

use super::style;
use super::{UiActions, UiState};
use crate::constants::VICE_MILESTONE_DAYS;
use crate::tracker::Vice;

pub fn draw_vices_tab(
    ui: &mut egui::Ui,
    vices: &[Vice],
    today: NaiveDate,
    ui_state: &mut UiState,
    actions: &mut UiActions,
) {
    ui.heading(egui::RichText::new("VÍCIOS").color(style::colors::SYSTEM_CYAN));
    ui.separator();
    ui.add_space(8.0);

    if vices.is_empty() {
        ui.label(
            egui::RichText::new("Nenhum vício rastreado.")
                .italics()
                .color(style::colors::TEXT_MUTED),
        );
    }

    for vice in vices {
        let clean = vice.days_clean(today);

        ui.horizontal(|ui| {
            ui.label(&vice.name);
            ui.label(
                egui::RichText::new(format!("{clean} dias limpo"))
                    .color(style::colors::SUCCESS),
            );
            if let Some(next) = next_milestone(clean) {
                ui.label(
                    egui::RichText::new(format!("próximo marco: {next}"))
                        .small()
                        .color(style::colors::TEXT_MUTED),
                );
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let button =
                    egui::Button::new(egui::RichText::new("Recaí").color(style::colors::DANGER));
                if ui.add(button).clicked() {
                    actions.record_relapse = Some(vice.id.clone());
                }
            });
        });
        ui.add_space(2.0);
    }

    ui.add_space(16.0);
    ui.separator();
    ui.collapsing("Novo vício", |ui| {
        ui.horizontal(|ui| {
            ui.label("Nome:");
            ui.text_edit_singleline(&mut ui_state.vice_name);
        });
        let ready = !ui_state.vice_name.trim().is_empty();
        if ui.add_enabled(ready, egui::Button::new("Adicionar")).clicked() {
            actions.add_vice = Some(ui_state.vice_name.trim().to_string());
            ui_state.vice_name.clear();
        }
    });
}

fn next_milestone(clean_days: u32) -> Option<u32> {
    VICE_MILESTONE_DAYS.iter().copied().find(|m| *m > clean_days)
}
