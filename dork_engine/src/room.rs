//! Room definitions.
//!
//! Every node of the maze is a `Room`: up to four directional paths, a door
//! that may be locked with a key item, any items lying around, and an optional
//! scripted encounter.

use std::collections::BTreeMap;
use std::fmt::Display;

use crate::Id;
use crate::item::{ItemHolder, remove_first};

/// The four canonical directions every directional synonym resolves to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, variantly::Variantly)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}
impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}
impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lock state for the way into this room, plus whatever is lying on the floor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Door {
    pub locked: bool,
    /// The item that opens the door, if any does.
    pub unlock: Option<Id>,
    /// Items present in the room, in the order they were put there.
    pub items: Vec<Id>,
}

/// Scripted encounter bound to a room.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fight {
    pub active: bool,
    pub enemy: Option<Id>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomMessages {
    pub description: String,
    pub inspect: String,
    pub unlock: String,
}

/// Any visitable location in the maze.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Room {
    pub id: Id,
    /// Missing directions are walls.
    pub paths: BTreeMap<Direction, Id>,
    pub door: Door,
    pub fight: Fight,
    pub messages: RoomMessages,
}
impl Room {
    /// Id of the neighboring room in `direction`, or `None` for a wall.
    pub fn path(&self, direction: Direction) -> Option<&Id> {
        self.paths.get(&direction)
    }

    /// Returns the first token naming an item lying in this room.
    pub fn item_in<'a>(&self, tokens: &'a [String]) -> Option<&'a String> {
        tokens.iter().find(|token| self.contains_item(token))
    }

    /// True if one of `tokens` is exactly this room's key.
    pub fn key_matches(&self, tokens: &[String]) -> bool {
        self.door
            .unlock
            .as_ref()
            .is_some_and(|key| tokens.iter().any(|token| token == key))
    }
}
impl ItemHolder for Room {
    fn add_item(&mut self, item_id: Id) {
        self.door.items.push(item_id);
    }

    fn remove_item(&mut self, item_id: &str) -> bool {
        remove_first(&mut self.door.items, item_id)
    }

    fn contains_item(&self, item_id: &str) -> bool {
        self.door.items.iter().any(|id| id == item_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn missing_path_is_a_wall() {
        let mut room = Room::default();
        room.paths.insert(Direction::Up, "hall".into());
        assert_eq!(room.path(Direction::Up), Some(&"hall".to_string()));
        assert!(room.path(Direction::Left).is_none());
    }

    #[test]
    fn key_matches_requires_exact_token() {
        let room = Room {
            door: Door {
                locked: true,
                unlock: Some("key".into()),
                items: Vec::new(),
            },
            ..Room::default()
        };
        assert!(room.key_matches(&tokens(&["use", "key"])));
        assert!(!room.key_matches(&tokens(&["use", "keys"])));
    }

    #[test]
    fn room_without_key_never_matches() {
        let room = Room::default();
        assert!(!room.key_matches(&tokens(&["use", "key"])));
    }

    #[test]
    fn item_in_finds_floor_item() {
        let mut room = Room::default();
        room.add_item("lamp".into());
        assert_eq!(room.item_in(&tokens(&["pick", "up", "lamp"])).map(String::as_str), Some("lamp"));
        assert!(room.item_in(&tokens(&["pick", "up", "sword"])).is_none());
    }

    #[test]
    fn direction_display_is_canonical_name() {
        let names: Vec<String> = Direction::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(names, vec!["up", "down", "left", "right"]);
    }
}
