//! Dungeon tab: radar, lobby, duel, and the terminal screens.

use super::style;
use super::UiActions;
use crate::catalog;
use crate::constants::MAGIC_MP_COST;
use crate::engine::dungeon::{DuelEnd, DungeonScreen, Encounter};
use crate::engine::GameState;
use crate::systems::combat::CombatAction;

pub fn draw_dungeon_tab(ui: &mut egui::Ui, state: &GameState, actions: &mut UiActions) {
    ui.heading(egui::RichText::new("MASMORRA").color(style::colors::SYSTEM_CYAN));
    ui.separator();
    ui.add_space(8.0);

    match state.dungeon.screen {
        DungeonScreen::Radar => draw_radar(ui, state, actions),
        DungeonScreen::Lobby => {
            if let Some(encounter) = &state.dungeon.encounter {
                draw_lobby(ui, encounter, actions);
            }
        }
        DungeonScreen::Duel => {
            if let Some(encounter) = &state.dungeon.encounter {
                draw_duel(ui, encounter, actions);
            }
        }
        DungeonScreen::Victory | DungeonScreen::Defeat | DungeonScreen::TrialSuccess => {
            draw_summary(ui, state, actions);
        }
    }
}

fn draw_radar(ui: &mut egui::Ui, state: &GameState, actions: &mut UiActions) {
    ui.label("O radar procura portais compatíveis com o seu rank.");
    ui.add_space(10.0);

    let scan = egui::Button::new(
        egui::RichText::new("Escanear Portal")
            .size(18.0)
            .color(style::colors::SYSTEM_CYAN),
    )
    .min_size(egui::vec2(200.0, 40.0));
    if ui.add(scan).clicked() {
        actions.dungeon_scan = true;
    }

    ui.add_space(20.0);
    ui.heading("PROVAÇÕES");
    ui.separator();
    ui.label(
        egui::RichText::new("Guardiões únicos. Vencer desbloqueia equipamento permanente.")
            .small()
            .color(style::colors::TEXT_MUTED),
    );
    ui.add_space(6.0);

    for trial in catalog::TRIAL_DEFS {
        let completed = state.player.completed_trials.contains(trial.id);
        ui.horizontal(|ui| {
            ui.label(trial.name);
            if completed {
                ui.label(egui::RichText::new("✔ concluída").color(style::colors::SUCCESS));
            } else if ui.button("Desafiar").clicked() {
                actions.dungeon_scan_trial = Some(trial.id.to_string());
            }
            if let Some(item) = catalog::equipment_by_id(trial.unlocks) {
                ui.label(
                    egui::RichText::new(format!("recompensa: {}", item.name))
                        .small()
                        .color(style::colors::SYSTEM_GOLD),
                );
            }
        });
    }
}

fn draw_lobby(ui: &mut egui::Ui, encounter: &Encounter, actions: &mut UiActions) {
    let enemy = &encounter.enemy;

    ui.label("Portal encontrado. O inimigo aguarda:");
    ui.add_space(10.0);

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.heading(egui::RichText::new(&enemy.name).color(style::colors::DANGER));
        ui.label(format!("HP: {}", enemy.max_hp));
        ui.label(format!(
            "ATK: {}   DEF: {}   VEL: {}",
            enemy.atk, enemy.def, enemy.speed
        ));
        if encounter.trial_id.is_some() {
            ui.label(
                egui::RichText::new("⚠ Provação: o dano sofrido aqui é permanente.")
                    .color(style::colors::SYSTEM_GOLD),
            );
        }
    });

    ui.add_space(14.0);
    ui.horizontal(|ui| {
        if ui
            .add(egui::Button::new("Enfrentar").min_size(egui::vec2(120.0, 32.0)))
            .clicked()
        {
            actions.dungeon_enter = true;
        }
        if ui
            .add(egui::Button::new("Fugir").min_size(egui::vec2(120.0, 32.0)))
            .clicked()
        {
            actions.dungeon_flee = true;
        }
    });
}

fn draw_duel(ui: &mut egui::Ui, encounter: &Encounter, actions: &mut UiActions) {
    let enemy = &encounter.enemy;

    ui.heading(egui::RichText::new(&enemy.name).color(style::colors::DANGER));
    ui.add_sized(
        [260.0, 18.0],
        egui::ProgressBar::new(enemy.hp as f32 / enemy.max_hp.max(1) as f32)
            .fill(style::colors::DANGER)
            .text(format!("{}/{}", enemy.hp, enemy.max_hp)),
    );
    ui.label(
        egui::RichText::new(format!("Intenção: {}", enemy.next_intent.label()))
            .color(style::colors::SYSTEM_GOLD),
    );

    ui.add_space(12.0);
    ui.separator();
    ui.add_space(12.0);

    ui.horizontal(|ui| {
        ui.label("HP");
        ui.add_sized(
            [200.0, 18.0],
            egui::ProgressBar::new(encounter.player_hp as f32 / encounter.player_max_hp.max(1) as f32)
                .fill(style::colors::HP_BAR)
                .text(format!("{}/{}", encounter.player_hp, encounter.player_max_hp)),
        );
        ui.label(
            egui::RichText::new(format!("MP {}", encounter.player_mp))
                .color(style::colors::MP_BAR),
        );
    });

    ui.add_space(10.0);
    ui.horizontal(|ui| {
        for action in CombatAction::ALL {
            let mut text = egui::RichText::new(action.label()).size(16.0);
            if action == CombatAction::Magic && encounter.player_mp < MAGIC_MP_COST {
                text = text.color(style::colors::TEXT_MUTED);
            }
            let button = egui::Button::new(text).min_size(egui::vec2(110.0, 36.0));
            let mut response = ui.add(button);
            if action == CombatAction::Magic {
                response = response.on_hover_text(format!("Custa {MAGIC_MP_COST} MP"));
            }
            if response.clicked() {
                actions.dungeon_action = Some(action);
            }
        }
    });

    ui.add_space(12.0);
    egui::ScrollArea::vertical()
        .max_height(140.0)
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for line in &encounter.log {
                ui.label(egui::RichText::new(line).small().color(style::colors::TEXT_MUTED));
            }
        });
}

fn draw_summary(ui: &mut egui::Ui, state: &GameState, actions: &mut UiActions) {
    match &state.dungeon.last_end {
        Some(DuelEnd::Victory { reward }) => {
            ui.heading(egui::RichText::new("VITÓRIA").color(style::colors::SUCCESS));
            ui.add_space(8.0);
            ui.label(format!("+{} XP", reward.xp));
            ui.label(
                egui::RichText::new(format!("+{} ouro", reward.gold))
                    .color(style::colors::SYSTEM_GOLD),
            );
        }
        Some(DuelEnd::Defeat) => {
            ui.heading(egui::RichText::new("DERROTA").color(style::colors::DANGER));
            ui.add_space(8.0);
            ui.label("Você foi expulso do portal. Nada foi perdido.");
        }
        Some(DuelEnd::TrialSuccess { trial_id, reward, .. }) => {
            ui.heading(egui::RichText::new("PROVAÇÃO CONCLUÍDA").color(style::colors::SYSTEM_CYAN));
            ui.add_space(8.0);
            if let Some(item) = catalog::trial_by_id(trial_id)
                .and_then(|t| catalog::equipment_by_id(t.unlocks))
            {
                ui.label(
                    egui::RichText::new(format!("Desbloqueado: {}", item.name))
                        .color(style::colors::SYSTEM_GOLD),
                );
            }
            ui.label(format!("+{} XP", reward.xp));
            ui.label(format!("+{} ouro", reward.gold));
        }
        None => {}
    }

    ui.add_space(16.0);
    if ui
        .add(egui::Button::new("Continuar").min_size(egui::vec2(140.0, 32.0)))
        .clicked()
    {
        actions.dungeon_finish = true;
    }
}
