//! Dungeon encounter state machine.
//!
//! `RADAR -> LOBBY -> DUEL -> {VICTORY | DEFEAT | TRIAL_SUCCESS}`, with
//! every terminal screen returning to the radar. Duels run on a session
//! copy of the player's HP/MP: ordinary portals never write back to the
//! persisted status, trial duels do (handled by the game state when the
//! duel ends).

use rand::Rng;

use crate::catalog::{self, TrialDef};
use crate::constants::*;
use crate::player::PlayerStatus;
use crate::systems::combat::{
    self, equipment_defense, power_for_action, weapon_penetration, CombatAction, RoundOutcome,
};

/// The dungeon view's screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DungeonScreen {
    Radar,
    Lobby,
    Duel,
    Victory,
    Defeat,
    TrialSuccess,
}

/// An opponent. Exists only while its encounter does; never persisted.
#[derive(Debug, Clone)]
pub struct Enemy {
    pub name: String,
    pub hp: i32,
    pub max_hp: i32,
    pub atk: i32,
    pub def: i32,
    pub speed: i32,
    /// Rolled before each round and shown to the player.
    pub next_intent: CombatAction,
    pub xp_reward: u32,
    pub gold_reward: u32,
}

/// XP and gold granted for a won duel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reward {
    pub xp: u32,
    pub gold: u32,
}

/// Live duel state.
#[derive(Debug, Clone)]
pub struct Encounter {
    pub enemy: Enemy,
    /// Session copies of the player's pools.
    pub player_hp: i32,
    pub player_max_hp: i32,
    pub player_mp: i32,
    /// Set when this encounter is a trial.
    pub trial_id: Option<String>,
    pub log: Vec<String>,
}

/// How a duel ended.
#[derive(Debug, Clone, PartialEq)]
pub enum DuelEnd {
    Victory { reward: Reward },
    Defeat,
    TrialSuccess {
        trial_id: String,
        reward: Reward,
        /// HP the player leaves the trial with; written back to status.
        remaining_hp: i32,
    },
}

/// Result of one player action inside a duel.
#[derive(Debug, Clone, PartialEq)]
pub enum RoundResult {
    /// Not on the duel screen; nothing happened.
    NotInDuel,
    /// MAGIA without enough MP; soft rejection, no state change.
    InsufficientMp,
    /// Both sides still standing.
    Exchanged(RoundOutcome),
    /// The duel ended this round.
    Ended(DuelEnd),
}

/// The dungeon view's state. One per game state; survives between visits
/// to the dungeon tab but never touches persistence.
pub struct DungeonSession {
    pub screen: DungeonScreen,
    pub encounter: Option<Encounter>,
    /// End state kept for the terminal screen's summary.
    pub last_end: Option<DuelEnd>,
}

impl DungeonSession {
    pub fn new() -> Self {
        Self {
            screen: DungeonScreen::Radar,
            encounter: None,
            last_end: None,
        }
    }

    /// Scan for a portal: pick a rank-appropriate enemy and open the lobby.
    pub fn scan(&mut self, status: &PlayerStatus, rng: &mut impl Rng) {
        if self.screen != DungeonScreen::Radar {
            return;
        }
        let pool = catalog::enemies_for_rank(status.rank);
        let def = pool[rng.gen_range(0..pool.len())];
        self.open_lobby(def.summon(status.level, rng), None, status);
    }

    /// Open the lobby for a trial's guardian (fought at fixed strength).
    pub fn scan_trial(&mut self, trial: &TrialDef, status: &PlayerStatus, rng: &mut impl Rng) {
        if self.screen != DungeonScreen::Radar {
            return;
        }
        self.open_lobby(trial.enemy.summon(1, rng), Some(trial.id.to_string()), status);
    }

    fn open_lobby(&mut self, enemy: Enemy, trial_id: Option<String>, status: &PlayerStatus) {
        self.encounter = Some(Encounter {
            enemy,
            player_hp: status.hp,
            player_max_hp: status.max_hp,
            player_mp: status.mp,
            trial_id,
            log: Vec::new(),
        });
        self.screen = DungeonScreen::Lobby;
        self.last_end = None;
    }

    /// Back out of the lobby without fighting.
    pub fn flee(&mut self) {
        if self.screen == DungeonScreen::Lobby {
            self.encounter = None;
            self.screen = DungeonScreen::Radar;
        }
    }

    /// Start the duel from the lobby.
    pub fn enter_duel(&mut self) {
        if self.screen == DungeonScreen::Lobby && self.encounter.is_some() {
            self.screen = DungeonScreen::Duel;
        }
    }

    /// Resolve one round against the enemy's telegraphed intent.
    pub fn play_round(
        &mut self,
        status: &PlayerStatus,
        action: CombatAction,
        rng: &mut impl Rng,
    ) -> RoundResult {
        if self.screen != DungeonScreen::Duel {
            return RoundResult::NotInDuel;
        }
        let Some(encounter) = self.encounter.as_mut() else {
            return RoundResult::NotInDuel;
        };

        if action == CombatAction::Magic && encounter.player_mp < MAGIC_MP_COST {
            return RoundResult::InsufficientMp;
        }
        if action == CombatAction::Magic {
            encounter.player_mp -= MAGIC_MP_COST;
        }

        let enemy_action = encounter.enemy.next_intent;
        let outcome = combat::resolve_round(
            action,
            enemy_action,
            power_for_action(status, action),
            encounter.enemy.atk,
            encounter.enemy.def,
            weapon_penetration(status),
        );

        // Equipment softens incoming damage but never heals.
        let taken = (outcome.damage_taken - equipment_defense(status)).max(0);
        encounter.enemy.hp = (encounter.enemy.hp - outcome.damage_dealt).max(0);
        encounter.player_hp = (encounter.player_hp - taken).max(0);
        encounter.log.push(format!(
            "{} vs {}: causou {}, sofreu {}",
            action.label(),
            enemy_action.label(),
            outcome.damage_dealt,
            taken
        ));

        if encounter.enemy.hp <= 0 {
            let reward = Reward {
                xp: encounter.enemy.xp_reward,
                gold: encounter.enemy.gold_reward,
            };
            let end = match encounter.trial_id.clone() {
                Some(trial_id) => {
                    self.screen = DungeonScreen::TrialSuccess;
                    DuelEnd::TrialSuccess {
                        trial_id,
                        reward,
                        remaining_hp: encounter.player_hp,
                    }
                }
                None => {
                    self.screen = DungeonScreen::Victory;
                    DuelEnd::Victory { reward }
                }
            };
            self.last_end = Some(end.clone());
            return RoundResult::Ended(end);
        }

        if encounter.player_hp <= 0 {
            self.screen = DungeonScreen::Defeat;
            self.last_end = Some(DuelEnd::Defeat);
            return RoundResult::Ended(DuelEnd::Defeat);
        }

        encounter.enemy.next_intent = combat::roll_intent(rng);
        RoundResult::Exchanged(outcome)
    }

    /// Leave a terminal screen, returning control to the radar.
    pub fn finish(&mut self) {
        if matches!(
            self.screen,
            DungeonScreen::Victory | DungeonScreen::Defeat | DungeonScreen::TrialSuccess
        ) {
            self.encounter = None;
            self.screen = DungeonScreen::Radar;
        }
    }
}

impl Default for DungeonSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::Rank;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn strong_player() -> PlayerStatus {
        let mut status = PlayerStatus::new(Rank::E);
        status.stats.strength = 200; // one-shots every catalog enemy
        status
    }

    #[test]
    fn scan_moves_radar_to_lobby() {
        let mut session = DungeonSession::new();
        let status = PlayerStatus::new(Rank::E);

        session.scan(&status, &mut rng());

        assert_eq!(session.screen, DungeonScreen::Lobby);
        let encounter = session.encounter.as_ref().unwrap();
        assert_eq!(encounter.player_hp, status.hp);
        assert!(encounter.trial_id.is_none());
    }

    #[test]
    fn scan_outside_radar_is_ignored() {
        let mut session = DungeonSession::new();
        let status = PlayerStatus::new(Rank::E);
        session.scan(&status, &mut rng());
        let name = session.encounter.as_ref().unwrap().enemy.name.clone();

        session.scan(&status, &mut rng());

        assert_eq!(session.screen, DungeonScreen::Lobby);
        assert_eq!(session.encounter.as_ref().unwrap().enemy.name, name);
    }

    #[test]
    fn flee_returns_to_radar_and_drops_the_encounter() {
        let mut session = DungeonSession::new();
        session.scan(&PlayerStatus::new(Rank::E), &mut rng());

        session.flee();

        assert_eq!(session.screen, DungeonScreen::Radar);
        assert!(session.encounter.is_none());
    }

    #[test]
    fn winning_an_ordinary_duel_reaches_victory_then_radar() {
        let mut session = DungeonSession::new();
        let status = strong_player();
        let mut rng = rng();
        session.scan(&status, &mut rng);
        session.enter_duel();

        let result = session.play_round(&status, CombatAction::Attack, &mut rng);

        match result {
            RoundResult::Ended(DuelEnd::Victory { reward }) => {
                assert!(reward.xp > 0);
                assert!(reward.gold >= ENEMY_GOLD_DROP_MIN);
            }
            other => panic!("expected victory, got {other:?}"),
        }
        assert_eq!(session.screen, DungeonScreen::Victory);

        session.finish();
        assert_eq!(session.screen, DungeonScreen::Radar);
        assert!(session.encounter.is_none());
    }

    #[test]
    fn duel_runs_on_a_session_hp_copy() {
        let mut session = DungeonSession::new();
        let status = PlayerStatus::new(Rank::E);
        let mut rng = rng();
        session.scan(&status, &mut rng);
        session.enter_duel();

        // Pick the losing action against the telegraphed intent so damage
        // definitely comes back.
        let intent = session.encounter.as_ref().unwrap().enemy.next_intent;
        let losing = CombatAction::ALL
            .into_iter()
            .find(|a| intent.beats(*a))
            .unwrap();
        session.play_round(&status, losing, &mut rng);

        let encounter = session.encounter.as_ref().unwrap();
        assert!(encounter.player_hp < status.hp);
        assert_eq!(status.hp, PLAYER_STARTING_HP); // persisted status untouched
    }

    #[test]
    fn defeat_is_terminal_and_returns_to_radar() {
        let mut session = DungeonSession::new();
        let mut status = PlayerStatus::new(Rank::E);
        status.hp = 1;
        let mut rng = rng();
        session.scan(&status, &mut rng);
        session.enter_duel();

        // Keep losing until the session HP runs out.
        let mut ended = false;
        for _ in 0..50 {
            let intent = session.encounter.as_ref().unwrap().enemy.next_intent;
            let losing = CombatAction::ALL
                .into_iter()
                .find(|a| intent.beats(*a))
                .unwrap();
            if let RoundResult::Ended(end) = session.play_round(&status, losing, &mut rng) {
                assert_eq!(end, DuelEnd::Defeat);
                ended = true;
                break;
            }
        }
        assert!(ended);
        assert_eq!(session.screen, DungeonScreen::Defeat);

        session.finish();
        assert_eq!(session.screen, DungeonScreen::Radar);
    }

    #[test]
    fn trial_victory_reports_remaining_hp_and_trial_id() {
        let mut session = DungeonSession::new();
        let status = strong_player();
        let mut rng = rng();
        let trial = catalog::trial_by_id("trial-lamina").unwrap();
        session.scan_trial(trial, &status, &mut rng);
        session.enter_duel();

        // The guardian may survive a round where it counters; keep attacking.
        let mut end = None;
        for _ in 0..10 {
            if let RoundResult::Ended(e) = session.play_round(&status, CombatAction::Attack, &mut rng) {
                end = Some(e);
                break;
            }
        }

        match end {
            Some(DuelEnd::TrialSuccess {
                trial_id,
                remaining_hp,
                ..
            }) => {
                assert_eq!(trial_id, "trial-lamina");
                assert!(remaining_hp <= status.hp);
            }
            other => panic!("expected trial success, got {other:?}"),
        }
        assert_eq!(session.screen, DungeonScreen::TrialSuccess);
    }

    #[test]
    fn magic_without_mp_is_soft_rejected() {
        let mut session = DungeonSession::new();
        let mut status = PlayerStatus::new(Rank::E);
        status.mp = MAGIC_MP_COST - 1;
        let mut rng = rng();
        session.scan(&status, &mut rng);
        session.enter_duel();
        let enemy_hp_before = session.encounter.as_ref().unwrap().enemy.hp;

        let result = session.play_round(&status, CombatAction::Magic, &mut rng);

        assert_eq!(result, RoundResult::InsufficientMp);
        assert_eq!(session.encounter.as_ref().unwrap().enemy.hp, enemy_hp_before);
        assert_eq!(session.screen, DungeonScreen::Duel);
    }
}
