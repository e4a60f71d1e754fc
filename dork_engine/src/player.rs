//! Player -- module for the player character in Dork
use crate::Id;
use crate::health::LivingEntity;
use crate::item::{ItemHolder, remove_first};

/// Where the player is, and where the game ends.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Position {
    pub location: Id,
    /// Entering this room ends the game.
    pub last_room: Id,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stats {
    pub health: i32,
    pub attack: i32,
    pub score: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Player {
    pub position: Position,
    /// Ordered item ids; duplicates are allowed.
    pub inventory: Vec<Id>,
    pub stats: Stats,
}
impl Player {
    /// Add points to the score. The score never goes down.
    pub fn award_points(&mut self, points: u32) {
        self.stats.score = self.stats.score.saturating_add(points);
    }

    /// True once the player stands in the designated ending room.
    pub fn at_last_room(&self) -> bool {
        self.position.location == self.position.last_room
    }

    /// Returns the first token that names an item in the inventory.
    pub fn held_item_in<'a>(&self, tokens: &'a [String]) -> Option<&'a String> {
        tokens.iter().find(|token| self.contains_item(token))
    }
}
impl ItemHolder for Player {
    fn add_item(&mut self, item_id: Id) {
        self.inventory.push(item_id);
    }

    fn remove_item(&mut self, item_id: &str) -> bool {
        remove_first(&mut self.inventory, item_id)
    }

    fn contains_item(&self, item_id: &str) -> bool {
        self.inventory.iter().any(|id| id == item_id)
    }
}
impl LivingEntity for Player {
    fn health(&self) -> i32 {
        self.stats.health
    }

    fn set_health(&mut self, health: i32) {
        self.stats.health = health;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_saturates_instead_of_wrapping() {
        let mut player = Player::default();
        player.stats.score = u32::MAX - 1;
        player.award_points(10);
        assert_eq!(player.stats.score, u32::MAX);
    }

    #[test]
    fn held_item_in_finds_first_held_token() {
        let mut player = Player::default();
        player.add_item("sword".into());
        player.add_item("key".into());
        let tokens: Vec<String> = ["use", "key", "sword"].iter().map(ToString::to_string).collect();
        assert_eq!(player.held_item_in(&tokens).map(String::as_str), Some("key"));
    }

    #[test]
    fn remove_item_keeps_duplicates() {
        let mut player = Player::default();
        player.add_item("coin".into());
        player.add_item("coin".into());
        assert!(player.remove_item("coin"));
        assert!(player.contains_item("coin"));
        assert_eq!(player.inventory.len(), 1);
    }
}
