//! Turn-based combat resolution.
//!
//! One round of a three-choice exchange. Dominance is cyclic:
//! DEFESA beats ATAQUE, ATAQUE beats MAGIA, MAGIA beats DEFESA.
//! The resolver is a pure function; the encounter loop lives in the
//! engine's dungeon module.

use rand::Rng;

use crate::constants::*;
use crate::player::{EquipSlot, PlayerStatus};

/// The three combat choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatAction {
    Attack,
    Defend,
    Magic,
}

impl CombatAction {
    pub const ALL: [CombatAction; 3] = [
        CombatAction::Attack,
        CombatAction::Defend,
        CombatAction::Magic,
    ];

    /// Cyclic dominance rule.
    pub fn beats(self, other: CombatAction) -> bool {
        matches!(
            (self, other),
            (CombatAction::Defend, CombatAction::Attack)
                | (CombatAction::Attack, CombatAction::Magic)
                | (CombatAction::Magic, CombatAction::Defend)
        )
    }

    /// UI label (the app's surface language is Portuguese).
    pub fn label(self) -> &'static str {
        match self {
            CombatAction::Attack => "ATAQUE",
            CombatAction::Defend => "DEFESA",
            CombatAction::Magic => "MAGIA",
        }
    }
}

/// Damage deltas for one resolved round, from the player's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundOutcome {
    pub damage_dealt: i32,
    pub damage_taken: i32,
}

/// Resolve one round of the exchange.
///
/// `penetration` is the fraction of `enemy_defense` ignored on an
/// advantaged hit. The advantaged/disadvantaged multipliers are
/// deliberately asymmetric (countered side deals 10%, losing side deals
/// 30% and takes 150%); this mirrors the reference behavior.
pub fn resolve_round(
    player: CombatAction,
    enemy: CombatAction,
    player_power: i32,
    enemy_power: i32,
    enemy_defense: i32,
    penetration: f32,
) -> RoundOutcome {
    if player == enemy {
        return RoundOutcome {
            damage_dealt: scale(player_power, COMBAT_TIE_MULT),
            damage_taken: scale(enemy_power, COMBAT_TIE_MULT),
        };
    }

    if player.beats(enemy) {
        let effective_defense = (enemy_defense as f32 * (1.0 - penetration)).floor() as i32;
        RoundOutcome {
            damage_dealt: (scale(player_power, COMBAT_COUNTER_MULT) - effective_defense).max(0),
            damage_taken: scale(enemy_power, COMBAT_COUNTERED_MULT),
        }
    } else {
        RoundOutcome {
            damage_dealt: scale(player_power, COMBAT_LOSS_MULT),
            damage_taken: scale(enemy_power, COMBAT_LOSS_TAKEN_MULT),
        }
    }
}

fn scale(power: i32, mult: f32) -> i32 {
    (power as f32 * mult).floor() as i32
}

/// Physical base power for a status record.
pub fn attack_power(status: &PlayerStatus) -> i32 {
    (status.stats.strength as f32 * ATTACK_POWER_PER_STRENGTH).floor() as i32
        + weapon_damage_bonus(status)
}

/// Magic base power for a status record.
pub fn magic_power(status: &PlayerStatus) -> i32 {
    (status.stats.intelligence as f32 * MAGIC_POWER_PER_INTELLIGENCE).floor() as i32
        + (weapon_damage_bonus(status) as f32 * MAGIC_WEAPON_BONUS_MULT).floor() as i32
}

/// Base power for the chosen action. Defending still deals damage on a
/// tie or counter, using physical power.
pub fn power_for_action(status: &PlayerStatus, action: CombatAction) -> i32 {
    match action {
        CombatAction::Attack | CombatAction::Defend => attack_power(status),
        CombatAction::Magic => magic_power(status),
    }
}

fn weapon_damage_bonus(status: &PlayerStatus) -> i32 {
    status
        .equipment
        .get(&EquipSlot::Weapon)
        .map(|w| w.damage_bonus)
        .unwrap_or(0)
}

/// Penetration factor from the equipped weapon, if any.
pub fn weapon_penetration(status: &PlayerStatus) -> f32 {
    status
        .equipment
        .get(&EquipSlot::Weapon)
        .map(|w| w.penetration)
        .unwrap_or(0.0)
}

/// Total defense from equipped items.
pub fn equipment_defense(status: &PlayerStatus) -> i32 {
    status.equipment.values().map(|item| item.defense_bonus).sum()
}

/// Roll the enemy's next intent, uniform over the three actions.
/// The intent is shown to the player before they choose.
pub fn roll_intent(rng: &mut impl Rng) -> CombatAction {
    CombatAction::ALL[rng.gen_range(0..CombatAction::ALL.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::{EquipmentItem, Rank};

    #[test]
    fn tie_deals_half_power_both_ways() {
        for (p, e) in [(0, 0), (100, 60), (7, 13), (101, 99)] {
            let outcome = resolve_round(CombatAction::Attack, CombatAction::Attack, p, e, 0, 0.0);
            assert_eq!(outcome.damage_dealt, (p as f32 * 0.5).floor() as i32);
            assert_eq!(outcome.damage_taken, (e as f32 * 0.5).floor() as i32);
        }
    }

    #[test]
    fn dominance_is_cyclic_and_total() {
        for a in CombatAction::ALL {
            for b in CombatAction::ALL {
                if a == b {
                    assert!(!a.beats(b));
                } else {
                    // Exactly one side is advantaged.
                    assert!(a.beats(b) ^ b.beats(a));
                }
            }
        }
    }

    #[test]
    fn swapping_arguments_swaps_the_advantage() {
        let win = resolve_round(CombatAction::Defend, CombatAction::Attack, 100, 100, 0, 0.0);
        let loss = resolve_round(CombatAction::Attack, CombatAction::Defend, 100, 100, 0, 0.0);
        assert!(win.damage_dealt > win.damage_taken);
        assert!(loss.damage_taken > loss.damage_dealt);
    }

    #[test]
    fn counter_subtracts_defense_from_doubled_power() {
        // DEFESA vs ATAQUE, power 100, enemy defense 20, no penetration.
        let outcome = resolve_round(CombatAction::Defend, CombatAction::Attack, 100, 45, 20, 0.0);
        assert_eq!(outcome.damage_dealt, 180);
        assert_eq!(outcome.damage_taken, 4); // floor(45 * 0.1)
    }

    #[test]
    fn penetration_reduces_effective_defense() {
        let none = resolve_round(CombatAction::Attack, CombatAction::Magic, 50, 10, 40, 0.0);
        let half = resolve_round(CombatAction::Attack, CombatAction::Magic, 50, 10, 40, 0.5);
        assert_eq!(none.damage_dealt, 60);
        assert_eq!(half.damage_dealt, 80);
    }

    #[test]
    fn counter_damage_never_goes_negative() {
        let outcome = resolve_round(CombatAction::Magic, CombatAction::Defend, 5, 10, 100, 0.0);
        assert_eq!(outcome.damage_dealt, 0);
    }

    #[test]
    fn losing_side_deals_thirty_and_takes_one_fifty() {
        let outcome = resolve_round(CombatAction::Attack, CombatAction::Defend, 100, 60, 0, 0.0);
        assert_eq!(outcome.damage_dealt, 30);
        assert_eq!(outcome.damage_taken, 90);
    }

    #[test]
    fn power_formulas_follow_stats_and_weapon() {
        let mut status = PlayerStatus::new(Rank::E);
        status.stats.strength = 14;
        status.stats.intelligence = 11;
        status.equipment.insert(
            EquipSlot::Weapon,
            EquipmentItem {
                id: "w".into(),
                name: "Adaga".into(),
                slot: EquipSlot::Weapon,
                damage_bonus: 5,
                defense_bonus: 0,
                penetration: 0.2,
                required_trial: None,
            },
        );

        assert_eq!(attack_power(&status), 21 + 5); // floor(14 * 1.5) + 5
        assert_eq!(magic_power(&status), 22 + 2); // floor(11 * 2.0) + floor(5 * 0.5)
        assert_eq!(weapon_penetration(&status), 0.2);
    }

    #[test]
    fn roll_intent_covers_all_actions() {
        let mut rng = rand::thread_rng();
        let mut seen = [false; 3];
        for _ in 0..200 {
            match roll_intent(&mut rng) {
                CombatAction::Attack => seen[0] = true,
                CombatAction::Defend => seen[1] = true,
                CombatAction::Magic => seen[2] = true,
            }
        }
        assert_eq!(seen, [true, true, true]);
    }
}
