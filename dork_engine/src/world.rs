//! Data structures representing the game world.
//!
//! This module defines [`GameState`], the single value every command handler
//! takes and mutates. There is no other game state anywhere in the engine.

use crate::DORK_VERSION;
use crate::{Id, Item, Npc, Player, Room};

use anyhow::{Result, anyhow};
use log::info;
use std::collections::HashMap;

/// Complete state of the running game.
///
/// `GameState` contains every room, item and NPC along with the player. It is
/// built wholesale by the loader and then mutated in place during play.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameState {
    pub rooms: HashMap<Id, Room>,
    pub items: HashMap<Id, Item>,
    pub npcs: HashMap<Id, Npc>,
    pub player: Player,
    /// Engine version that wrote the save this state came from.
    pub version: String,
}
impl GameState {
    /// Create a new empty state with a default player.
    pub fn new_empty() -> GameState {
        let state = Self {
            rooms: HashMap::new(),
            items: HashMap::new(),
            npcs: HashMap::new(),
            player: Player::default(),
            version: DORK_VERSION.to_string(),
        };
        info!("new, empty 'GameState' created");
        state
    }

    /// Obtain a reference to the room the player occupies.
    /// # Errors
    /// - if the player's room id is not found
    pub fn player_room_ref(&self) -> Result<&Room> {
        self.room_ref(&self.player.position.location)
    }

    /// Obtain a mutable reference to the room the player occupies.
    /// # Errors
    /// - if the player's room id is not found
    pub fn player_room_mut(&mut self) -> Result<&mut Room> {
        let location = &self.player.position.location;
        self.rooms
            .get_mut(location)
            .ok_or_else(|| anyhow!("player's room ({location}) not found in world"))
    }

    /// Look up a room by id.
    /// # Errors
    /// - if `room_id` is not in the room graph
    pub fn room_ref(&self, room_id: &str) -> Result<&Room> {
        self.rooms
            .get(room_id)
            .ok_or_else(|| anyhow!("room ({room_id}) not found in world"))
    }

    /// Look up a room by id for mutation.
    /// # Errors
    /// - if `room_id` is not in the room graph
    pub fn room_mut(&mut self, room_id: &str) -> Result<&mut Room> {
        self.rooms
            .get_mut(room_id)
            .ok_or_else(|| anyhow!("room ({room_id}) not found in world"))
    }

    /// Look up an item in the catalog.
    /// # Errors
    /// - if `item_id` is not in the item catalog
    pub fn item_ref(&self, item_id: &str) -> Result<&Item> {
        self.items
            .get(item_id)
            .ok_or_else(|| anyhow!("item ({item_id}) not found in catalog"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_room(id: &str) -> GameState {
        let mut state = GameState::new_empty();
        state.rooms.insert(
            id.into(),
            Room {
                id: id.into(),
                ..Room::default()
            },
        );
        state.player.position.location = id.into();
        state
    }

    #[test]
    fn new_empty_has_current_version() {
        let state = GameState::new_empty();
        assert!(state.rooms.is_empty());
        assert!(state.items.is_empty());
        assert!(state.npcs.is_empty());
        assert_eq!(state.version, DORK_VERSION);
    }

    #[test]
    fn player_room_ref_works() {
        let state = state_with_room("cell");
        assert_eq!(state.player_room_ref().unwrap().id, "cell");
    }

    #[test]
    fn player_room_ref_errors_when_room_missing() {
        let mut state = state_with_room("cell");
        state.player.position.location = "void".into();
        assert!(state.player_room_ref().is_err());
    }

    #[test]
    fn player_room_mut_edits_in_place() {
        let mut state = state_with_room("cell");
        state.player_room_mut().unwrap().door.locked = true;
        assert!(state.rooms["cell"].door.locked);
    }

    #[test]
    fn item_ref_errors_for_unknown_item() {
        let state = GameState::new_empty();
        assert!(state.item_ref("ghost").is_err());
    }
}
