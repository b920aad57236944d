//! Progression constants (starting status, XP curve, rank-ups).

/// XP required to go from level 1 to level 2
pub const BASE_MAX_XP: u32 = 1000;
/// Geometric growth applied to the XP requirement on every level gained
pub const XP_GROWTH_FACTOR: f32 = 1.2;
/// A new rank is reached every this many levels
pub const RANK_UP_LEVEL_INTERVAL: u32 = 100;
/// Stat points granted on an ordinary level-up
pub const STAT_POINTS_PER_LEVEL: u32 = 5;
/// Stat points granted when the level-up also advances the rank
pub const STAT_POINTS_PER_RANK_UP: u32 = 10;

/// Player's default starting health
pub const PLAYER_STARTING_HP: i32 = 100;
/// Player's default starting mana
pub const PLAYER_STARTING_MP: i32 = 50;
/// Default value for every attribute on a fresh save slot
pub const PLAYER_STARTING_STAT: i32 = 10;
