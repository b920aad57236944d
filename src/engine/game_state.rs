//! Core game state - owns the player record and the tracked lists.
//!
//! Every mutation goes through a method here so the outcome can be
//! translated into events and the whole slot can be autosaved. The
//! storage handle is shared (`Rc`) because the app keeps it across
//! rank switches.

use chrono::NaiveDate;
use rand::Rng;
use std::collections::BTreeSet;
use std::rc::Rc;

use crate::catalog;
use crate::engine::dungeon::{DuelEnd, DungeonSession, RoundResult};
use crate::events::{EventQueue, GameEvent};
use crate::persistence::{self, StoragePort, GLOBAL_LEVEL_KEY};
use crate::player::{Attribute, EquipSlot, PlayerStatus, Rank};
use crate::systems::combat::CombatAction;
use crate::systems::equipment::EquipError;
use crate::systems::habits::HabitOutcome;
use crate::systems::tasks::TaskOutcome;
use crate::systems::{equipment, habits, progression, tasks, vices};
use crate::tracker::{Habit, Task, Vice};

/// One save slot's worth of live state.
pub struct GameState {
    /// The tier selected on the start screen; fixes the storage namespace.
    pub slot: Rank,
    pub player: PlayerStatus,
    pub habits: Vec<Habit>,
    pub tasks: Vec<Task>,
    pub vices: Vec<Vice>,
    pub dungeon: DungeonSession,
    storage: Rc<dyn StoragePort>,
    next_id: u64,
}

impl GameState {
    /// Load the slot for a tier, creating defaults on first selection.
    pub fn load_or_new(slot: Rank, storage: Rc<dyn StoragePort>) -> Self {
        let player =
            load_domain(&*storage, slot, "status").unwrap_or_else(|| PlayerStatus::new(slot));
        let habits: Vec<Habit> = load_domain(&*storage, slot, "habits").unwrap_or_default();
        let tasks: Vec<Task> = load_domain(&*storage, slot, "tasks").unwrap_or_default();
        let vices: Vec<Vice> = load_domain(&*storage, slot, "vices").unwrap_or_default();

        // Seed the id counter past anything already stored.
        let next_id = 1 + habits.len() as u64 + tasks.len() as u64 + vices.len() as u64;

        Self {
            slot,
            player,
            habits,
            tasks,
            vices,
            dungeon: DungeonSession::new(),
            storage,
            next_id,
        }
    }

    /// Persist the whole slot. Failures are logged and dropped; durability
    /// is best-effort by design.
    pub fn autosave(&self) {
        let slot = self.slot;
        save_domain(&*self.storage, slot, "status", &self.player);
        save_domain(&*self.storage, slot, "habits", &self.habits);
        save_domain(&*self.storage, slot, "tasks", &self.tasks);
        save_domain(&*self.storage, slot, "vices", &self.vices);

        let global = persistence::load::<u32>(&*self.storage, GLOBAL_LEVEL_KEY)
            .ok()
            .flatten()
            .unwrap_or(0);
        if self.player.level > global {
            if let Err(err) =
                persistence::save(&*self.storage, GLOBAL_LEVEL_KEY, &self.player.level)
            {
                eprintln!("autosave failed for {GLOBAL_LEVEL_KEY}: {err}");
            }
        }
    }

    fn fresh_id(&mut self, prefix: &str) -> String {
        let id = format!("{prefix}-{}", self.next_id);
        self.next_id += 1;
        id
    }

    fn grant_xp(&mut self, amount: u32, today: NaiveDate, events: &mut EventQueue) {
        if let Some(evolution) = progression::grant_xp(&mut self.player, amount, today) {
            events.push(GameEvent::Evolution(evolution));
        }
    }

    // ---- habits -----------------------------------------------------------

    pub fn add_habit(&mut self, name: String, days: BTreeSet<u8>, target_value: u32) {
        let id = self.fresh_id("habit");
        self.habits.push(Habit::new(id, name, days, target_value));
        self.autosave();
    }

    /// Record one unit of progress (or revert) for a habit today.
    pub fn record_habit(&mut self, habit_id: &str, today: NaiveDate, events: &mut EventQueue) {
        let Some(index) = self.habits.iter().position(|h| h.id == habit_id) else {
            return;
        };

        let outcome = habits::record_progress(&mut self.habits[index], today);
        let habit = &self.habits[index];
        match outcome {
            HabitOutcome::NotScheduled => {
                events.push(GameEvent::NotScheduledToday {
                    name: habit.name.clone(),
                });
                return; // no state change, no save
            }
            HabitOutcome::Progressed { .. } => {}
            HabitOutcome::StreakWin { .. } => {
                events.push(GameEvent::StreakAdvanced {
                    name: habit.name.clone(),
                    streak: habit.streak,
                });
            }
            HabitOutcome::Completed { xp, mp_restore } => {
                events.push(GameEvent::HabitCompleted {
                    name: habit.name.clone(),
                    xp,
                });
                if habit.target_value == 1 {
                    events.push(GameEvent::StreakAdvanced {
                        name: habit.name.clone(),
                        streak: habit.streak,
                    });
                }
                self.player.restore_mp(mp_restore);
                self.grant_xp(xp, today, events);
            }
            HabitOutcome::Reverted { xp_revoked } => {
                events.push(GameEvent::HabitReverted {
                    name: habit.name.clone(),
                    xp: xp_revoked,
                });
                progression::revoke_xp(&mut self.player, xp_revoked);
            }
        }
        self.autosave();
    }

    // ---- tasks ------------------------------------------------------------

    pub fn add_task(&mut self, name: String, recurring_days: Option<BTreeSet<u8>>) {
        let id = self.fresh_id("task");
        let task = match recurring_days {
            Some(days) => Task::recurring(id, name, days),
            None => Task::one_shot(id, name),
        };
        self.tasks.push(task);
        self.autosave();
    }

    pub fn toggle_task(&mut self, task_id: &str, today: NaiveDate, events: &mut EventQueue) {
        let Some(index) = self.tasks.iter().position(|t| t.id == task_id) else {
            return;
        };

        let outcome = tasks::toggle_task(&mut self.tasks[index], today);
        let name = self.tasks[index].name.clone();
        match outcome {
            TaskOutcome::NotScheduled => {
                events.push(GameEvent::NotScheduledToday { name });
                return;
            }
            TaskOutcome::Completed { xp } => {
                events.push(GameEvent::TaskCompleted { name, xp });
                self.grant_xp(xp, today, events);
            }
            TaskOutcome::Reopened { xp_revoked } => {
                events.push(GameEvent::TaskReopened {
                    name,
                    xp: xp_revoked,
                });
                progression::revoke_xp(&mut self.player, xp_revoked);
            }
        }
        self.autosave();
    }

    // ---- vices ------------------------------------------------------------

    pub fn add_vice(&mut self, name: String, today: NaiveDate) {
        let id = self.fresh_id("vice");
        self.vices.push(Vice::new(id, name, today));
        self.autosave();
    }

    pub fn record_relapse(&mut self, vice_id: &str, today: NaiveDate, events: &mut EventQueue) {
        let Some(vice) = self.vices.iter_mut().find(|v| v.id == vice_id) else {
            return;
        };
        let days_lost = vices::record_relapse(vice, today);
        events.push(GameEvent::RelapseRecorded {
            name: vice.name.clone(),
            days_lost,
        });
        self.autosave();
    }

    /// Surface clean-day milestones reached today (called once per day
    /// change by the engine).
    pub fn check_vice_milestones(&self, today: NaiveDate, events: &mut EventQueue) {
        for vice in &self.vices {
            if let Some(days) = vices::milestone_reached(vice, today) {
                events.push(GameEvent::CleanMilestone {
                    name: vice.name.clone(),
                    days,
                });
            }
        }
    }

    // ---- attributes & equipment -------------------------------------------

    pub fn spend_stat_point(&mut self, attr: Attribute) {
        if self.player.stat_points == 0 {
            return;
        }
        self.player.stat_points -= 1;
        self.player.stats.add(attr, 1);
        self.autosave();
    }

    pub fn equip_item(&mut self, item_id: &str, events: &mut EventQueue) {
        let Some(item) = catalog::equipment_by_id(item_id) else {
            return;
        };
        let name = item.name.clone();
        match equipment::equip(&mut self.player, item) {
            Ok(_) => {
                events.push(GameEvent::ItemEquipped { name });
                self.autosave();
            }
            Err(EquipError::TrialRequired(trial_id)) => {
                let trial = catalog::trial_by_id(&trial_id)
                    .map(|t| t.name.to_string())
                    .unwrap_or(trial_id);
                events.push(GameEvent::TrialRequired { item: name, trial });
            }
        }
    }

    pub fn unequip_slot(&mut self, slot: EquipSlot) {
        if equipment::unequip(&mut self.player, slot).is_some() {
            self.autosave();
        }
    }

    // ---- dungeon -----------------------------------------------------------

    pub fn dungeon_scan(&mut self, rng: &mut impl Rng) {
        self.dungeon.scan(&self.player, rng);
    }

    pub fn dungeon_scan_trial(&mut self, trial_id: &str, rng: &mut impl Rng) {
        if self.player.completed_trials.contains(trial_id) {
            return; // trials are won once
        }
        if let Some(trial) = catalog::trial_by_id(trial_id) {
            self.dungeon.scan_trial(trial, &self.player, rng);
        }
    }

    /// Resolve one duel round and apply any end-of-duel consequences.
    pub fn dungeon_round(
        &mut self,
        action: CombatAction,
        today: NaiveDate,
        rng: &mut impl Rng,
        events: &mut EventQueue,
    ) {
        let enemy_name = self
            .dungeon
            .encounter
            .as_ref()
            .map(|e| e.enemy.name.clone())
            .unwrap_or_default();

        match self.dungeon.play_round(&self.player, action, rng) {
            RoundResult::NotInDuel | RoundResult::Exchanged(_) => {}
            RoundResult::InsufficientMp => events.push(GameEvent::InsufficientMp),
            RoundResult::Ended(DuelEnd::Victory { reward }) => {
                events.push(GameEvent::DuelWon {
                    enemy: enemy_name,
                    xp: reward.xp,
                    gold: reward.gold,
                });
                self.player.gold += reward.gold;
                self.grant_xp(reward.xp, today, events);
                self.autosave();
            }
            RoundResult::Ended(DuelEnd::Defeat) => {
                // Ordinary defeats carry no persisted penalty.
                events.push(GameEvent::DuelLost { enemy: enemy_name });
            }
            RoundResult::Ended(DuelEnd::TrialSuccess {
                trial_id,
                reward,
                remaining_hp,
            }) => {
                // Trial duels do write the surviving HP back.
                self.player.hp = remaining_hp.clamp(0, self.player.max_hp);
                self.player.completed_trials.insert(trial_id.clone());
                let unlocked = catalog::trial_by_id(&trial_id)
                    .and_then(|t| catalog::equipment_by_id(t.unlocks))
                    .map(|item| item.name)
                    .unwrap_or_default();
                events.push(GameEvent::TrialCompleted {
                    trial: trial_id,
                    unlocked,
                });
                self.player.gold += reward.gold;
                self.grant_xp(reward.xp, today, events);
                self.autosave();
            }
        }
    }
}

fn load_domain<T: serde::de::DeserializeOwned>(
    storage: &dyn StoragePort,
    slot: Rank,
    domain: &str,
) -> Option<T> {
    match persistence::load(storage, &persistence::domain_key(slot, domain)) {
        Ok(value) => value,
        Err(err) => {
            eprintln!("load failed for rank_{}_{domain}: {err}", slot.letter());
            None
        }
    }
}

fn save_domain<T: serde::Serialize>(storage: &dyn StoragePort, slot: Rank, domain: &str, value: &T) {
    if let Err(err) = persistence::save(storage, &persistence::domain_key(slot, domain), value) {
        eprintln!("autosave failed for rank_{}_{domain}: {err}", slot.letter());
    }
}
