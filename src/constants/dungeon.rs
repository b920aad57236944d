//! Dungeon encounter constants.

/// Minimum gold dropped by a defeated enemy
pub const ENEMY_GOLD_DROP_MIN: u32 = 10;
/// Maximum gold dropped by a defeated enemy
pub const ENEMY_GOLD_DROP_MAX: u32 = 40;
/// Extra HP an enemy gains per player level above 1
pub const ENEMY_HP_PER_PLAYER_LEVEL: i32 = 4;
/// Extra attack an enemy gains per player level above 1
pub const ENEMY_ATK_PER_PLAYER_LEVEL: i32 = 1;
