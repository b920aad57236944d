//! Evolution modal, shown once per level-up event.

use super::style;
use super::{UiActions, UiState};

pub fn draw_evolution_modal(ctx: &egui::Context, ui_state: &UiState, actions: &mut UiActions) {
    let Some(evolution) = &ui_state.pending_evolution else {
        return;
    };

    egui::Window::new("evolution")
        .title_bar(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .frame(style::system_window_frame())
        .resizable(false)
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(12.0);
                ui.heading(
                    egui::RichText::new("EVOLUÇÃO")
                        .size(32.0)
                        .color(style::colors::SYSTEM_CYAN),
                );
                ui.add_space(10.0);

                if let Some(rank) = evolution.new_rank {
                    ui.label(
                        egui::RichText::new(format!("RANK {} ALCANÇADO", rank.letter()))
                            .size(20.0)
                            .color(style::colors::SYSTEM_GOLD),
                    );
                    ui.add_space(6.0);
                }

                ui.label(format!("Nível {}", evolution.new_level));
                if evolution.levels_gained > 1 {
                    ui.label(
                        egui::RichText::new(format!("({} níveis de uma vez)", evolution.levels_gained))
                            .small()
                            .color(style::colors::TEXT_MUTED),
                    );
                }
                ui.label(
                    egui::RichText::new(format!(
                        "+{} pontos de atributo",
                        evolution.stat_points_gained
                    ))
                    .color(style::colors::SUCCESS),
                );
                ui.label(
                    egui::RichText::new("HP e MP restaurados")
                        .small()
                        .color(style::colors::TEXT_MUTED),
                );

                ui.add_space(14.0);
                if ui
                    .add(egui::Button::new("Continuar").min_size(egui::vec2(140.0, 32.0)))
                    .clicked()
                {
                    actions.dismiss_evolution = true;
                }
                ui.add_space(8.0);
            });
        });
}
