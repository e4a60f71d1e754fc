//! Item module
//!
//! Items live in the [`GameState`](crate::GameState) catalog and are referenced
//! everywhere else by id. Rooms and the player only ever hold ids.

use crate::Id;

/// Anything that can hold items by id: the player's pack or a room floor.
pub trait ItemHolder {
    fn add_item(&mut self, item_id: Id);
    /// Removes one instance of `item_id`, returning false if none was held.
    fn remove_item(&mut self, item_id: &str) -> bool;
    fn contains_item(&self, item_id: &str) -> bool;
}

/// A thing that can be carried, examined, used as a key, or swung.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: Id,
    pub description: String,
    /// Damage dealt when the item is swung in a fight.
    pub damage: i32,
}

/// Remove the first instance of `item_id` from an ordered id list.
pub(crate) fn remove_first(ids: &mut Vec<Id>, item_id: &str) -> bool {
    if let Some(idx) = ids.iter().position(|id| id == item_id) {
        ids.remove(idx);
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_first_only_takes_one_duplicate() {
        let mut ids = vec!["coin".to_string(), "key".to_string(), "coin".to_string()];
        assert!(remove_first(&mut ids, "coin"));
        assert_eq!(ids, vec!["key".to_string(), "coin".to_string()]);
    }

    #[test]
    fn remove_first_reports_missing() {
        let mut ids = vec!["key".to_string()];
        assert!(!remove_first(&mut ids, "lamp"));
        assert_eq!(ids.len(), 1);
    }
}
