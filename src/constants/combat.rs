//! Combat resolution constants.

/// Damage fraction dealt by both sides when the actions tie
pub const COMBAT_TIE_MULT: f32 = 0.5;
/// Damage fraction dealt by the advantaged side of a counter pairing
pub const COMBAT_COUNTER_MULT: f32 = 2.0;
/// Damage fraction dealt back by the countered side
pub const COMBAT_COUNTERED_MULT: f32 = 0.1;
/// Damage fraction dealt by the losing side of a pairing
pub const COMBAT_LOSS_MULT: f32 = 0.3;
/// Damage fraction taken by the losing side of a pairing
pub const COMBAT_LOSS_TAKEN_MULT: f32 = 1.5;

/// Attack power per point of strength
pub const ATTACK_POWER_PER_STRENGTH: f32 = 1.5;
/// Magic power per point of intelligence
pub const MAGIC_POWER_PER_INTELLIGENCE: f32 = 2.0;
/// Fraction of the weapon damage bonus applied to magic power
pub const MAGIC_WEAPON_BONUS_MULT: f32 = 0.5;

/// MP consumed by a MAGIA action
pub const MAGIC_MP_COST: i32 = 10;
