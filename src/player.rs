//! Player progression data: rank, attributes, status record, milestones.
//!
//! These records are persisted wholesale after every mutation; see the
//! persistence module for the key scheme.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::constants::*;

/// Coarse progression tier. Doubles as the save-slot namespace: each rank
/// has its own set of habits, tasks, vices, and status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    E,
    D,
    C,
    B,
    A,
    S,
}

impl Rank {
    /// All ranks in ascending order.
    pub const ALL: [Rank; 6] = [Rank::E, Rank::D, Rank::C, Rank::B, Rank::A, Rank::S];

    /// The next tier up, or None at the top.
    pub fn next(self) -> Option<Rank> {
        match self {
            Rank::E => Some(Rank::D),
            Rank::D => Some(Rank::C),
            Rank::C => Some(Rank::B),
            Rank::B => Some(Rank::A),
            Rank::A => Some(Rank::S),
            Rank::S => None,
        }
    }

    /// Single-letter form used in storage keys and UI badges.
    pub fn letter(self) -> &'static str {
        match self {
            Rank::E => "E",
            Rank::D => "D",
            Rank::C => "C",
            Rank::B => "B",
            Rank::A => "A",
            Rank::S => "S",
        }
    }
}

/// Spendable attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Attribute {
    Strength,
    Agility,
    Intelligence,
    Perception,
    Vitality,
}

impl Attribute {
    pub const ALL: [Attribute; 5] = [
        Attribute::Strength,
        Attribute::Agility,
        Attribute::Intelligence,
        Attribute::Perception,
        Attribute::Vitality,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Attribute::Strength => "Força",
            Attribute::Agility => "Agilidade",
            Attribute::Intelligence => "Inteligência",
            Attribute::Perception => "Percepção",
            Attribute::Vitality => "Vitalidade",
        }
    }
}

/// Character attributes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Stats {
    pub strength: i32,
    pub agility: i32,
    pub intelligence: i32,
    pub perception: i32,
    pub vitality: i32,
}

impl Stats {
    pub fn get(&self, attr: Attribute) -> i32 {
        match attr {
            Attribute::Strength => self.strength,
            Attribute::Agility => self.agility,
            Attribute::Intelligence => self.intelligence,
            Attribute::Perception => self.perception,
            Attribute::Vitality => self.vitality,
        }
    }

    pub fn add(&mut self, attr: Attribute, amount: i32) {
        match attr {
            Attribute::Strength => self.strength += amount,
            Attribute::Agility => self.agility += amount,
            Attribute::Intelligence => self.intelligence += amount,
            Attribute::Perception => self.perception += amount,
            Attribute::Vitality => self.vitality += amount,
        }
    }
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            strength: PLAYER_STARTING_STAT,
            agility: PLAYER_STARTING_STAT,
            intelligence: PLAYER_STARTING_STAT,
            perception: PLAYER_STARTING_STAT,
            vitality: PLAYER_STARTING_STAT,
        }
    }
}

/// Equipment slots. At most one item per slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EquipSlot {
    Weapon,
    Armor,
    Amulet,
}

impl EquipSlot {
    pub const ALL: [EquipSlot; 3] = [EquipSlot::Weapon, EquipSlot::Armor, EquipSlot::Amulet];

    pub fn label(self) -> &'static str {
        match self {
            EquipSlot::Weapon => "Arma",
            EquipSlot::Armor => "Armadura",
            EquipSlot::Amulet => "Amuleto",
        }
    }
}

/// An equippable item from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentItem {
    pub id: String,
    pub name: String,
    pub slot: EquipSlot,
    pub damage_bonus: i32,
    pub defense_bonus: i32,
    /// Fraction of enemy defense ignored on an advantaged hit (0.0 - 1.0).
    pub penetration: f32,
    /// Trial that must be completed before this can be equipped.
    pub required_trial: Option<String>,
}

/// Immutable evolution record, appended once per level-up/rank-up event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Milestone {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub rank: Rank,
    pub level: u32,
}

/// One progression-tier save slot worth of player state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerStatus {
    pub level: u32,
    pub xp: u32,
    pub max_xp: u32,
    pub rank: Rank,
    pub hp: i32,
    pub max_hp: i32,
    pub mp: i32,
    pub max_mp: i32,
    pub gold: u32,
    pub stat_points: u32,
    pub stats: Stats,
    pub equipment: BTreeMap<EquipSlot, EquipmentItem>,
    pub milestones: Vec<Milestone>,
    pub completed_trials: BTreeSet<String>,
}

impl PlayerStatus {
    /// Fresh status for a tier selected for the first time.
    pub fn new(rank: Rank) -> Self {
        Self {
            level: 1,
            xp: 0,
            max_xp: BASE_MAX_XP,
            rank,
            hp: PLAYER_STARTING_HP,
            max_hp: PLAYER_STARTING_HP,
            mp: PLAYER_STARTING_MP,
            max_mp: PLAYER_STARTING_MP,
            gold: 0,
            stat_points: 0,
            stats: Stats::default(),
            equipment: BTreeMap::new(),
            milestones: Vec::new(),
            completed_trials: BTreeSet::new(),
        }
    }

    pub fn xp_progress(&self) -> f32 {
        if self.max_xp == 0 {
            return 0.0;
        }
        (self.xp as f32 / self.max_xp as f32).clamp(0.0, 1.0)
    }

    /// Clamp current HP into [0, max].
    pub fn take_damage(&mut self, amount: i32) {
        self.hp = (self.hp - amount).clamp(0, self.max_hp);
    }

    pub fn restore_mp(&mut self, amount: i32) {
        self.mp = (self.mp + amount).min(self.max_mp);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_ordering_is_e_through_s() {
        let mut rank = Rank::E;
        let mut seen = vec![rank];
        while let Some(next) = rank.next() {
            seen.push(next);
            rank = next;
        }
        assert_eq!(seen, Rank::ALL);
        assert_eq!(Rank::S.next(), None);
    }

    #[test]
    fn take_damage_clamps_to_zero() {
        let mut status = PlayerStatus::new(Rank::E);
        status.take_damage(status.max_hp + 50);
        assert_eq!(status.hp, 0);
    }

    #[test]
    fn restore_mp_caps_at_max() {
        let mut status = PlayerStatus::new(Rank::E);
        status.mp = status.max_mp - 1;
        status.restore_mp(10);
        assert_eq!(status.mp, status.max_mp);
    }
}
