//! Equipment management: one item per slot, trial-gated unlocks.

use crate::player::{EquipSlot, EquipmentItem, PlayerStatus};

/// Soft rejection when equipping a gated item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EquipError {
    /// The item requires a trial that has not been completed yet.
    TrialRequired(String),
}

/// Equip an item into its slot, returning the item it replaced.
pub fn equip(status: &mut PlayerStatus, item: EquipmentItem) -> Result<Option<EquipmentItem>, EquipError> {
    if let Some(trial_id) = &item.required_trial {
        if !status.completed_trials.contains(trial_id) {
            return Err(EquipError::TrialRequired(trial_id.clone()));
        }
    }
    Ok(status.equipment.insert(item.slot, item))
}

/// Remove and return the item in a slot, if any.
pub fn unequip(status: &mut PlayerStatus, slot: EquipSlot) -> Option<EquipmentItem> {
    status.equipment.remove(&slot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::Rank;

    fn sword(id: &str, trial: Option<&str>) -> EquipmentItem {
        EquipmentItem {
            id: id.into(),
            name: "Espada".into(),
            slot: EquipSlot::Weapon,
            damage_bonus: 8,
            defense_bonus: 0,
            penetration: 0.0,
            required_trial: trial.map(String::from),
        }
    }

    #[test]
    fn equipping_swaps_within_the_slot() {
        let mut status = PlayerStatus::new(Rank::E);

        assert_eq!(equip(&mut status, sword("a", None)), Ok(None));
        let replaced = equip(&mut status, sword("b", None)).unwrap();

        assert_eq!(replaced.unwrap().id, "a");
        assert_eq!(status.equipment.len(), 1);
        assert_eq!(status.equipment[&EquipSlot::Weapon].id, "b");
    }

    #[test]
    fn gated_item_requires_its_trial() {
        let mut status = PlayerStatus::new(Rank::E);
        let gated = sword("g", Some("trial-lamina"));

        let rejected = equip(&mut status, gated.clone());
        assert_eq!(rejected, Err(EquipError::TrialRequired("trial-lamina".into())));
        assert!(status.equipment.is_empty());

        status.completed_trials.insert("trial-lamina".into());
        assert_eq!(equip(&mut status, gated), Ok(None));
    }

    #[test]
    fn unequip_empties_the_slot() {
        let mut status = PlayerStatus::new(Rank::E);
        equip(&mut status, sword("a", None)).unwrap();

        let removed = unequip(&mut status, EquipSlot::Weapon);

        assert_eq!(removed.unwrap().id, "a");
        assert!(unequip(&mut status, EquipSlot::Weapon).is_none());
    }
}
