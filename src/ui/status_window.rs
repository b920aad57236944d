//! Status tab: vitals, attributes, equipment, milestones.

use super::style;
use super::UiActions;
use crate::catalog;
use crate::engine::GameState;
use crate::player::{Attribute, EquipSlot};

pub fn draw_status_tab(ui: &mut egui::Ui, state: &GameState, actions: &mut UiActions) {
    let player = &state.player;

    ui.heading(
        egui::RichText::new(format!(
            "Caçador Rank {} — Nível {}",
            player.rank.letter(),
            player.level
        ))
        .color(style::colors::SYSTEM_CYAN),
    );
    ui.separator();
    ui.add_space(8.0);

    // Vitals
    ui.horizontal(|ui| {
        ui.label("HP");
        ui.add_sized(
            [240.0, 18.0],
            egui::ProgressBar::new(player.hp as f32 / player.max_hp.max(1) as f32)
                .fill(style::colors::HP_BAR)
                .text(format!("{}/{}", player.hp, player.max_hp)),
        );
    });
    ui.horizontal(|ui| {
        ui.label("MP");
        ui.add_sized(
            [240.0, 18.0],
            egui::ProgressBar::new(player.mp as f32 / player.max_mp.max(1) as f32)
                .fill(style::colors::MP_BAR)
                .text(format!("{}/{}", player.mp, player.max_mp)),
        );
    });
    ui.horizontal(|ui| {
        ui.label("XP");
        ui.add_sized(
            [240.0, 18.0],
            egui::ProgressBar::new(player.xp_progress())
                .fill(style::colors::XP_BAR)
                .text(format!("{}/{}", player.xp, player.max_xp)),
        );
    });

    ui.add_space(6.0);
    ui.label(
        egui::RichText::new(format!("Ouro: {}", player.gold)).color(style::colors::SYSTEM_GOLD),
    );

    ui.add_space(14.0);
    ui.heading("ATRIBUTOS");
    ui.separator();

    if player.stat_points > 0 {
        ui.label(
            egui::RichText::new(format!("Pontos disponíveis: {}", player.stat_points))
                .color(style::colors::SUCCESS),
        );
    }
    for attr in Attribute::ALL {
        ui.horizontal(|ui| {
            ui.label(format!("{}: {}", attr.label(), player.stats.get(attr)));
            if player.stat_points > 0 && ui.small_button("+").clicked() {
                actions.spend_point = Some(attr);
            }
        });
    }

    ui.add_space(14.0);
    ui.heading("EQUIPAMENTO");
    ui.separator();

    for slot in EquipSlot::ALL {
        ui.horizontal(|ui| {
            ui.label(format!("{}:", slot.label()));
            match player.equipment.get(&slot) {
                Some(item) => {
                    ui.label(
                        egui::RichText::new(&item.name).color(style::colors::TEXT_ACCENT),
                    )
                    .on_hover_text(item_tooltip(item));
                    if ui.small_button("Remover").clicked() {
                        actions.unequip_slot = Some(slot);
                    }
                }
                None => {
                    ui.label(
                        egui::RichText::new("(vazio)")
                            .italics()
                            .color(style::colors::TEXT_MUTED),
                    );
                }
            }
        });
    }

    ui.add_space(10.0);
    ui.collapsing("Arsenal", |ui| {
        for item in catalog::equipment_catalog() {
            let equipped = player
                .equipment
                .get(&item.slot)
                .is_some_and(|current| current.id == item.id);
            let unlocked = item
                .required_trial
                .as_ref()
                .map_or(true, |trial| player.completed_trials.contains(trial));

            ui.horizontal(|ui| {
                let name = if unlocked {
                    egui::RichText::new(&item.name)
                } else {
                    egui::RichText::new(format!("{} 🔒", item.name))
                        .color(style::colors::TEXT_MUTED)
                };
                ui.label(name).on_hover_text(item_tooltip(&item));

                if equipped {
                    ui.label(
                        egui::RichText::new("equipado").color(style::colors::SUCCESS),
                    );
                } else if ui.small_button("Equipar").clicked() {
                    actions.equip_item = Some(item.id.clone());
                }
            });
        }
    });

    ui.add_space(14.0);
    ui.collapsing("Marcos", |ui| {
        if player.milestones.is_empty() {
            ui.label(
                egui::RichText::new("(nenhum ainda)")
                    .italics()
                    .color(style::colors::TEXT_MUTED),
            );
        }
        for milestone in player.milestones.iter().rev() {
            ui.label(
                egui::RichText::new(format!("{} — {}", milestone.date, milestone.title))
                    .color(style::colors::SYSTEM_GOLD),
            );
            ui.label(
                egui::RichText::new(&milestone.description)
                    .small()
                    .color(style::colors::TEXT_MUTED),
            );
            ui.add_space(4.0);
        }
    });
}

fn item_tooltip(item: &crate::player::EquipmentItem) -> String {
    let mut lines = vec![item.name.clone()];
    if item.damage_bonus > 0 {
        lines.push(format!("Dano +{}", item.damage_bonus));
    }
    if item.defense_bonus > 0 {
        lines.push(format!("Defesa +{}", item.defense_bonus));
    }
    if item.penetration > 0.0 {
        lines.push(format!("Penetração {:.0}%", item.penetration * 100.0));
    }
    if let Some(trial) = &item.required_trial {
        let name = catalog::trial_by_id(trial)
            .map(|t| t.name)
            .unwrap_or(trial.as_str());
        lines.push(format!("Exige: {name}"));
    }
    lines.join("\n")
}
