//! Experience and evolution system.
//!
//! XP grants carry the remainder forward across level-ups, the XP
//! requirement grows geometrically once per level gained, and ranks
//! advance one tier at fixed level intervals.

use chrono::NaiveDate;

use crate::constants::*;
use crate::player::{Milestone, PlayerStatus, Rank};

/// Everything that changed in one evolution, consumed by the modal.
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionEvent {
    pub levels_gained: u32,
    pub new_level: u32,
    /// Set when one of the gained levels crossed a rank boundary.
    pub new_rank: Option<Rank>,
    pub stat_points_gained: u32,
}

/// Grant XP, resolving any level-ups and rank-ups.
///
/// Returns `Some` if at least one level was gained. Exactly one milestone
/// is appended per grant call that crosses a threshold, even when several
/// levels are gained at once.
pub fn grant_xp(status: &mut PlayerStatus, amount: u32, today: NaiveDate) -> Option<EvolutionEvent> {
    status.xp += amount;

    let mut levels_gained = 0;
    let mut stat_points_gained = 0;
    let mut new_rank = None;

    while status.xp >= status.max_xp {
        status.xp -= status.max_xp;
        status.level += 1;
        levels_gained += 1;

        let mut ranked_up = false;
        if status.level % RANK_UP_LEVEL_INTERVAL == 0 {
            if let Some(next) = status.rank.next() {
                status.rank = next;
                new_rank = Some(next);
                ranked_up = true;
            }
        }

        // Growth applies once per level gained, not once per grant.
        status.max_xp = (status.max_xp as f32 * XP_GROWTH_FACTOR).floor() as u32;

        stat_points_gained += if ranked_up {
            STAT_POINTS_PER_RANK_UP
        } else {
            STAT_POINTS_PER_LEVEL
        };
    }

    if levels_gained == 0 {
        return None;
    }

    status.stat_points += stat_points_gained;

    // Evolution rewards a free full heal.
    status.hp = status.max_hp;
    status.mp = status.max_mp;

    status.milestones.push(evolution_milestone(status, today, new_rank));

    Some(EvolutionEvent {
        levels_gained,
        new_level: status.level,
        new_rank,
        stat_points_gained,
    })
}

/// Claw back previously granted XP (habit/task undo). Never de-levels.
pub fn revoke_xp(status: &mut PlayerStatus, amount: u32) {
    status.xp = status.xp.saturating_sub(amount);
}

fn evolution_milestone(status: &PlayerStatus, today: NaiveDate, new_rank: Option<Rank>) -> Milestone {
    let (title, description) = match new_rank {
        Some(rank) => (
            format!("Rank {} alcançado", rank.letter()),
            format!("Evoluiu para o nível {} e ascendeu ao rank {}.", status.level, rank.letter()),
        ),
        None => (
            format!("Nível {}", status.level),
            format!("Evoluiu para o nível {}.", status.level),
        ),
    };
    Milestone {
        id: format!("lvl{}-{}", status.level, today),
        title,
        description,
        date: today,
        rank: status.rank,
        level: status.level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn grant_below_threshold_does_not_evolve() {
        let mut status = PlayerStatus::new(Rank::E);
        let event = grant_xp(&mut status, 500, today());
        assert!(event.is_none());
        assert_eq!(status.xp, 500);
        assert_eq!(status.level, 1);
        assert!(status.milestones.is_empty());
    }

    #[test]
    fn level_up_carries_remainder_and_grows_requirement() {
        let mut status = PlayerStatus::new(Rank::E);
        status.xp = 950;
        status.max_xp = 1000;
        status.hp = 30;
        status.mp = 5;

        let event = grant_xp(&mut status, 100, today()).unwrap();

        assert_eq!(status.level, 2);
        assert_eq!(status.xp, 50);
        assert_eq!(status.max_xp, 1200);
        assert_eq!(status.stat_points, 5);
        assert_eq!(status.hp, status.max_hp);
        assert_eq!(status.mp, status.max_mp);
        assert_eq!(status.milestones.len(), 1);
        assert_eq!(event.levels_gained, 1);
        assert_eq!(event.new_rank, None);
    }

    #[test]
    fn multi_level_grant_applies_growth_per_iteration() {
        let mut status = PlayerStatus::new(Rank::E);
        status.max_xp = 1000;

        // 1000 + 1200 + 100 crosses two thresholds with 100 left over.
        let event = grant_xp(&mut status, 2300, today()).unwrap();

        assert_eq!(event.levels_gained, 2);
        assert_eq!(status.level, 3);
        assert_eq!(status.xp, 100);
        assert_eq!(status.max_xp, 1440);
        assert_eq!(status.stat_points, 10);
        // One milestone per grant call, not per level.
        assert_eq!(status.milestones.len(), 1);
    }

    #[test]
    fn rank_advances_at_level_one_hundred() {
        let mut status = PlayerStatus::new(Rank::E);
        status.level = 99;
        status.xp = status.max_xp - 1;

        let event = grant_xp(&mut status, 1, today()).unwrap();

        assert_eq!(status.level, 100);
        assert_eq!(status.rank, Rank::D);
        assert_eq!(event.new_rank, Some(Rank::D));
        assert_eq!(event.stat_points_gained, 10);
    }

    #[test]
    fn rank_never_advances_past_s() {
        let mut status = PlayerStatus::new(Rank::S);
        status.level = 599;
        status.xp = status.max_xp - 1;

        let event = grant_xp(&mut status, 1, today()).unwrap();

        assert_eq!(status.rank, Rank::S);
        assert_eq!(event.new_rank, None);
        // Without a rank to advance into, the grant is an ordinary level-up.
        assert_eq!(event.stat_points_gained, 5);
    }

    #[test]
    fn rank_only_advances_at_interval_multiples() {
        let mut status = PlayerStatus::new(Rank::E);
        status.level = 50;
        status.xp = status.max_xp - 1;

        grant_xp(&mut status, 1, today()).unwrap();

        assert_eq!(status.level, 51);
        assert_eq!(status.rank, Rank::E);
    }

    #[test]
    fn revoke_xp_saturates_and_keeps_level() {
        let mut status = PlayerStatus::new(Rank::E);
        status.level = 3;
        status.xp = 40;

        revoke_xp(&mut status, 100);

        assert_eq!(status.xp, 0);
        assert_eq!(status.level, 3);
    }
}
