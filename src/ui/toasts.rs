//! Notification toasts, stacked in the top-right corner.

use super::style;
use crate::notifications::{NotificationCenter, NotificationKind};

pub fn draw_toasts(ctx: &egui::Context, notifications: &NotificationCenter) {
    if notifications.is_empty() {
        return;
    }

    egui::Area::new(egui::Id::new("toasts"))
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-12.0, 12.0))
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            for notification in notifications.iter() {
                let color = match notification.kind {
                    NotificationKind::Info => style::colors::TEXT_PRIMARY,
                    NotificationKind::Success => style::colors::SUCCESS,
                    NotificationKind::Warning => style::colors::SYSTEM_GOLD,
                };
                let color = color.gamma_multiply(notification.opacity());

                egui::Frame::none()
                    .fill(style::colors::PANEL_BG.gamma_multiply(notification.opacity()))
                    .stroke(egui::Stroke::new(
                        1.0,
                        style::colors::PANEL_BORDER.gamma_multiply(notification.opacity()),
                    ))
                    .inner_margin(egui::Margin::symmetric(10.0, 6.0))
                    .show(ui, |ui| {
                        ui.label(egui::RichText::new(&notification.text).color(color));
                    });
                ui.add_space(4.0);
            }
        });
}
