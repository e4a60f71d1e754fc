use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Stable identifier used across `GameDef` references.
pub type Id = String;

/// Top-level document for a maze or a saved game.
///
/// Mazes and saves share one shape: a save is simply a maze snapshot taken
/// mid-game, so either can be loaded to start a session.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct GameDef {
    /// Engine version that wrote the file (empty for hand-authored mazes).
    #[serde(default)]
    pub version: String,
    pub rooms: BTreeMap<Id, RoomDef>,
    #[serde(default)]
    pub items: BTreeMap<Id, ItemDef>,
    #[serde(default)]
    pub npcs: BTreeMap<Id, NpcDef>,
    pub player: PlayerDef,
}

/// A single room and everything attached to it.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct RoomDef {
    #[serde(default)]
    pub paths: PathsDef,
    #[serde(default)]
    pub door: DoorDef,
    #[serde(default)]
    pub fight: FightDef,
    pub messages: MessagesDef,
}

/// Neighboring rooms by canonical direction. `None` is a wall.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PathsDef {
    #[serde(default)]
    pub up: Option<Id>,
    #[serde(default)]
    pub down: Option<Id>,
    #[serde(default)]
    pub left: Option<Id>,
    #[serde(default)]
    pub right: Option<Id>,
}
impl PathsDef {
    /// All present edges as `(direction name, target id)` pairs.
    pub fn edges(&self) -> impl Iterator<Item = (&'static str, &Id)> {
        [
            ("up", self.up.as_ref()),
            ("down", self.down.as_ref()),
            ("left", self.left.as_ref()),
            ("right", self.right.as_ref()),
        ]
        .into_iter()
        .filter_map(|(dir, to)| to.map(|to| (dir, to)))
    }
}

/// Lock state of the room's entrance, plus the loose items lying in the room.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DoorDef {
    #[serde(default)]
    pub locked: bool,
    /// Item that opens this room's door.
    #[serde(default)]
    pub unlock: Option<Id>,
    #[serde(default)]
    pub items: Vec<Id>,
}

/// Scripted encounter bound to a room.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct FightDef {
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub enemy: Option<Id>,
}

/// Narrative text for a room.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct MessagesDef {
    pub description: String,
    #[serde(default)]
    pub inspect: String,
    #[serde(default)]
    pub unlock: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ItemDef {
    pub description: String,
    /// Damage dealt when swung as a weapon.
    #[serde(default)]
    pub damage: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct NpcDef {
    pub health: i32,
    pub attack: i32,
    #[serde(default)]
    pub points: u32,
}

/// Player definition: where they stand, what they carry, how tough they are.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PlayerDef {
    pub position: PositionDef,
    #[serde(default)]
    pub inventory: Vec<Id>,
    pub stats: StatsDef,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PositionDef {
    pub location: Id,
    /// Reaching this room ends the game.
    pub last_room: Id,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct StatsDef {
    pub health: i32,
    pub attack: i32,
    #[serde(default)]
    pub score: u32,
}
