//! Rank selection screen.
//!
//! Each rank tier is an independent save slot; picking one loads (or
//! creates) that slot.

use super::style;
use super::UiActions;
use crate::player::Rank;

/// Draw the rank-select screen. Sets `actions.select_rank` when a tier is
/// clicked.
pub fn draw_rank_select(ctx: &egui::Context, global_level: Option<u32>, actions: &mut UiActions) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none().fill(style::colors::PANEL_BG))
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(100.0);

                // Title
                ui.heading(
                    egui::RichText::new("O SISTEMA")
                        .size(48.0)
                        .color(style::colors::SYSTEM_CYAN),
                );

                ui.add_space(12.0);
                ui.label(
                    egui::RichText::new("Levante-se, Caçador.")
                        .size(16.0)
                        .color(style::colors::TEXT_MUTED),
                );

                if let Some(level) = global_level {
                    ui.add_space(8.0);
                    ui.label(
                        egui::RichText::new(format!("Maior nível alcançado: {level}"))
                            .size(14.0)
                            .color(style::colors::SYSTEM_GOLD),
                    );
                }

                ui.add_space(40.0);
                ui.label(
                    egui::RichText::new("Escolha seu Rank")
                        .size(24.0)
                        .color(egui::Color32::WHITE),
                );
                ui.add_space(30.0);

                // Rank slot buttons
                ui.horizontal(|ui| {
                    let rank_count = Rank::ALL.len() as f32;
                    let total_width = rank_count * 90.0 + (rank_count - 1.0) * 16.0;
                    ui.add_space((ui.available_width() - total_width) / 2.0);

                    for rank in Rank::ALL {
                        let (response, painter) =
                            ui.allocate_painter(egui::vec2(90.0, 110.0), egui::Sense::click());

                        let bg_color = if response.hovered() {
                            style::colors::BUTTON_HOVER
                        } else {
                            style::colors::BUTTON_BG
                        };
                        painter.rect_filled(response.rect, 4.0, bg_color);

                        let border_color = if response.hovered() {
                            style::colors::SYSTEM_CYAN
                        } else {
                            style::colors::BUTTON_BORDER
                        };
                        painter.rect_stroke(
                            response.rect,
                            4.0,
                            egui::Stroke::new(2.0, border_color),
                        );

                        painter.text(
                            response.rect.center() - egui::vec2(0.0, 10.0),
                            egui::Align2::CENTER_CENTER,
                            rank.letter(),
                            egui::FontId::proportional(40.0),
                            rank_color(rank),
                        );
                        painter.text(
                            response.rect.center() + egui::vec2(0.0, 30.0),
                            egui::Align2::CENTER_CENTER,
                            "Rank",
                            egui::FontId::proportional(13.0),
                            style::colors::TEXT_MUTED,
                        );

                        if response.clicked() {
                            actions.select_rank = Some(rank);
                        }

                        ui.add_space(16.0);
                    }
                });

                ui.add_space(30.0);
                ui.label(
                    egui::RichText::new("Cada rank é um slot de progresso separado.")
                        .size(13.0)
                        .color(style::colors::TEXT_MUTED),
                );
            });
        });
}

fn rank_color(rank: Rank) -> egui::Color32 {
    match rank {
        Rank::E => egui::Color32::from_rgb(150, 150, 150),
        Rank::D => egui::Color32::from_rgb(130, 190, 130),
        Rank::C => egui::Color32::from_rgb(110, 170, 230),
        Rank::B => egui::Color32::from_rgb(180, 130, 230),
        Rank::A => style::colors::SYSTEM_GOLD,
        Rank::S => style::colors::DANGER,
    }
}
