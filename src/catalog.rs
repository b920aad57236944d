//! Static catalog: equipment, enemies, and trials.
//!
//! Data-driven tables so new gear and portals can be added without
//! touching the dungeon or equipment code.

use rand::Rng;

use crate::constants::*;
use crate::engine::dungeon::Enemy;
use crate::player::{EquipSlot, EquipmentItem, Rank};
use crate::systems::combat::roll_intent;

/// Definition of an enemy type - everything needed to start a duel.
#[derive(Debug, Clone)]
pub struct EnemyDef {
    pub name: &'static str,
    /// Lowest rank whose portals can produce this enemy
    pub min_rank: Rank,
    pub hp: i32,
    pub atk: i32,
    pub def: i32,
    pub speed: i32,
    pub xp_reward: u32,
}

impl EnemyDef {
    /// Instantiate this enemy, scaled to the player's level.
    pub fn summon(&self, player_level: u32, rng: &mut impl Rng) -> Enemy {
        let level_bonus = player_level.saturating_sub(1) as i32;
        let hp = self.hp + level_bonus * ENEMY_HP_PER_PLAYER_LEVEL;
        Enemy {
            name: self.name.to_string(),
            hp,
            max_hp: hp,
            atk: self.atk + level_bonus * ENEMY_ATK_PER_PLAYER_LEVEL,
            def: self.def,
            speed: self.speed,
            next_intent: roll_intent(rng),
            xp_reward: self.xp_reward + player_level * 5,
            gold_reward: rng.gen_range(ENEMY_GOLD_DROP_MIN..=ENEMY_GOLD_DROP_MAX),
        }
    }
}

pub const ENEMY_DEFS: &[EnemyDef] = &[
    EnemyDef { name: "Goblin Ferino", min_rank: Rank::E, hp: 40, atk: 12, def: 4, speed: 8, xp_reward: 60 },
    EnemyDef { name: "Lobo das Sombras", min_rank: Rank::E, hp: 55, atk: 16, def: 6, speed: 14, xp_reward: 90 },
    EnemyDef { name: "Soldado Esquelético", min_rank: Rank::D, hp: 80, atk: 20, def: 12, speed: 7, xp_reward: 140 },
    EnemyDef { name: "Mago Renegado", min_rank: Rank::C, hp: 95, atk: 28, def: 10, speed: 10, xp_reward: 210 },
    EnemyDef { name: "Cavaleiro Caído", min_rank: Rank::B, hp: 140, atk: 34, def: 22, speed: 9, xp_reward: 320 },
    EnemyDef { name: "Senhor do Abismo", min_rank: Rank::A, hp: 200, atk: 45, def: 28, speed: 12, xp_reward: 500 },
];

/// Enemies eligible for portals of the given rank.
pub fn enemies_for_rank(rank: Rank) -> Vec<&'static EnemyDef> {
    ENEMY_DEFS.iter().filter(|def| def.min_rank <= rank).collect()
}

/// A gated encounter that unlocks one piece of equipment when won once.
#[derive(Debug, Clone)]
pub struct TrialDef {
    pub id: &'static str,
    pub name: &'static str,
    /// The trial's guardian, fought at fixed strength.
    pub enemy: EnemyDef,
    /// Equipment id unlocked by winning.
    pub unlocks: &'static str,
}

pub const TRIAL_DEFS: &[TrialDef] = &[
    TrialDef {
        id: "trial-lamina",
        name: "Provação da Lâmina",
        enemy: EnemyDef { name: "Guardião da Lâmina", min_rank: Rank::E, hp: 120, atk: 26, def: 15, speed: 11, xp_reward: 250 },
        unlocks: "espada-do-monarca",
    },
    TrialDef {
        id: "trial-colosso",
        name: "Provação do Colosso",
        enemy: EnemyDef { name: "Colosso de Pedra", min_rank: Rank::D, hp: 180, atk: 22, def: 30, speed: 4, xp_reward: 380 },
        unlocks: "armadura-do-colosso",
    },
];

pub fn trial_by_id(id: &str) -> Option<&'static TrialDef> {
    TRIAL_DEFS.iter().find(|t| t.id == id)
}

/// The full equipment catalog. Gated items name the trial that unlocks
/// them.
pub fn equipment_catalog() -> Vec<EquipmentItem> {
    vec![
        EquipmentItem {
            id: "adaga-enferrujada".into(),
            name: "Adaga Enferrujada".into(),
            slot: EquipSlot::Weapon,
            damage_bonus: 3,
            defense_bonus: 0,
            penetration: 0.0,
            required_trial: None,
        },
        EquipmentItem {
            id: "espada-curta".into(),
            name: "Espada Curta".into(),
            slot: EquipSlot::Weapon,
            damage_bonus: 7,
            defense_bonus: 0,
            penetration: 0.1,
            required_trial: None,
        },
        EquipmentItem {
            id: "espada-do-monarca".into(),
            name: "Espada do Monarca".into(),
            slot: EquipSlot::Weapon,
            damage_bonus: 15,
            defense_bonus: 0,
            penetration: 0.35,
            required_trial: Some("trial-lamina".into()),
        },
        EquipmentItem {
            id: "tunica-de-couro".into(),
            name: "Túnica de Couro".into(),
            slot: EquipSlot::Armor,
            damage_bonus: 0,
            defense_bonus: 5,
            penetration: 0.0,
            required_trial: None,
        },
        EquipmentItem {
            id: "armadura-do-colosso".into(),
            name: "Armadura do Colosso".into(),
            slot: EquipSlot::Armor,
            damage_bonus: 0,
            defense_bonus: 14,
            penetration: 0.0,
            required_trial: Some("trial-colosso".into()),
        },
        EquipmentItem {
            id: "amuleto-de-foco".into(),
            name: "Amuleto de Foco".into(),
            slot: EquipSlot::Amulet,
            damage_bonus: 2,
            defense_bonus: 2,
            penetration: 0.0,
            required_trial: None,
        },
    ]
}

pub fn equipment_by_id(id: &str) -> Option<EquipmentItem> {
    equipment_catalog().into_iter().find(|item| item.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_trial_unlocks_a_catalog_item() {
        for trial in TRIAL_DEFS {
            let item = equipment_by_id(trial.unlocks)
                .unwrap_or_else(|| panic!("trial {} unlocks unknown item", trial.id));
            assert_eq!(item.required_trial.as_deref(), Some(trial.id));
        }
    }

    #[test]
    fn rank_filter_widens_with_rank() {
        let e = enemies_for_rank(Rank::E).len();
        let s = enemies_for_rank(Rank::S).len();
        assert!(e >= 1);
        assert_eq!(s, ENEMY_DEFS.len());
        assert!(e < s);
    }

    #[test]
    fn summoned_enemy_scales_with_player_level() {
        let mut rng = rand::thread_rng();
        let low = ENEMY_DEFS[0].summon(1, &mut rng);
        let high = ENEMY_DEFS[0].summon(10, &mut rng);
        assert!(high.max_hp > low.max_hp);
        assert!(high.atk > low.atk);
        assert_eq!(low.hp, low.max_hp);
    }
}
