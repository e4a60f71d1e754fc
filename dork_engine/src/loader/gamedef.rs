//! Conversions between the on-disk `GameDef` and the runtime `GameState`.

use std::collections::BTreeMap;

use dork_data::{
    DoorDef, FightDef, GameDef, ItemDef, MessagesDef, NpcDef, PathsDef, PlayerDef, PositionDef, RoomDef, StatsDef,
};

use crate::player::{Position, Stats};
use crate::room::{Door, Fight, RoomMessages};
use crate::{Direction, GameState, Item, Npc, Player, Room};

/// Build a runtime world from a (validated) definition.
pub fn state_from_def(def: &GameDef) -> GameState {
    let mut world = GameState::new_empty();
    world.version.clone_from(&def.version);

    for (id, room_def) in &def.rooms {
        world.rooms.insert(id.clone(), room_from_def(id, room_def));
    }
    for (id, item_def) in &def.items {
        world.items.insert(
            id.clone(),
            Item {
                id: id.clone(),
                description: item_def.description.clone(),
                damage: item_def.damage,
            },
        );
    }
    for (id, npc_def) in &def.npcs {
        world.npcs.insert(
            id.clone(),
            Npc {
                id: id.clone(),
                health: npc_def.health,
                attack: npc_def.attack,
                points: npc_def.points,
            },
        );
    }
    world.player = player_from_def(&def.player);
    world
}

fn room_from_def(id: &str, def: &RoomDef) -> Room {
    let paths = def
        .paths
        .edges()
        .filter_map(|(name, to)| direction_named(name).map(|dir| (dir, to.clone())))
        .collect();
    Room {
        id: id.to_string(),
        paths,
        door: Door {
            locked: def.door.locked,
            unlock: def.door.unlock.clone(),
            items: def.door.items.clone(),
        },
        fight: Fight {
            active: def.fight.active,
            enemy: def.fight.enemy.clone(),
        },
        messages: RoomMessages {
            description: def.messages.description.clone(),
            inspect: def.messages.inspect.clone(),
            unlock: def.messages.unlock.clone(),
        },
    }
}

fn direction_named(name: &str) -> Option<Direction> {
    Direction::ALL.into_iter().find(|dir| dir.as_str() == name)
}

fn player_from_def(def: &PlayerDef) -> Player {
    Player {
        position: Position {
            location: def.position.location.clone(),
            last_room: def.position.last_room.clone(),
        },
        inventory: def.inventory.clone(),
        stats: Stats {
            health: def.stats.health,
            attack: def.stats.attack,
            score: def.stats.score,
        },
    }
}

/// Snapshot a runtime world as a definition, stamped with `version`.
pub fn def_from_state(world: &GameState, version: &str) -> GameDef {
    let rooms: BTreeMap<_, _> = world
        .rooms
        .values()
        .map(|room| (room.id.clone(), room_to_def(room)))
        .collect();
    let items = world
        .items
        .values()
        .map(|item| {
            (
                item.id.clone(),
                ItemDef {
                    description: item.description.clone(),
                    damage: item.damage,
                },
            )
        })
        .collect();
    let npcs = world
        .npcs
        .values()
        .map(|npc| {
            (
                npc.id.clone(),
                NpcDef {
                    health: npc.health,
                    attack: npc.attack,
                    points: npc.points,
                },
            )
        })
        .collect();
    let player = &world.player;
    GameDef {
        version: version.to_string(),
        rooms,
        items,
        npcs,
        player: PlayerDef {
            position: PositionDef {
                location: player.position.location.clone(),
                last_room: player.position.last_room.clone(),
            },
            inventory: player.inventory.clone(),
            stats: StatsDef {
                health: player.stats.health,
                attack: player.stats.attack,
                score: player.stats.score,
            },
        },
    }
}

fn room_to_def(room: &Room) -> RoomDef {
    let edge = |dir| room.path(dir).cloned();
    RoomDef {
        paths: PathsDef {
            up: edge(Direction::Up),
            down: edge(Direction::Down),
            left: edge(Direction::Left),
            right: edge(Direction::Right),
        },
        door: DoorDef {
            locked: room.door.locked,
            unlock: room.door.unlock.clone(),
            items: room.door.items.clone(),
        },
        fight: FightDef {
            active: room.fight.active,
            enemy: room.fight.enemy.clone(),
        },
        messages: MessagesDef {
            description: room.messages.description.clone(),
            inspect: room.messages.inspect.clone(),
            unlock: room.messages.unlock.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_def() -> GameDef {
        let mut def = GameDef::default();
        def.rooms.insert(
            "start".into(),
            RoomDef {
                paths: PathsDef {
                    left: Some("end".into()),
                    ..PathsDef::default()
                },
                door: DoorDef {
                    items: vec!["coin".into()],
                    ..DoorDef::default()
                },
                ..RoomDef::default()
            },
        );
        def.rooms.insert(
            "end".into(),
            RoomDef {
                door: DoorDef {
                    locked: true,
                    unlock: Some("coin".into()),
                    items: Vec::new(),
                },
                ..RoomDef::default()
            },
        );
        def.items.insert(
            "coin".into(),
            ItemDef {
                description: "Shiny.".into(),
                damage: 1,
            },
        );
        def.player.position = PositionDef {
            location: "start".into(),
            last_room: "end".into(),
        };
        def.player.stats.health = 10;
        def
    }

    #[test]
    fn paths_become_directions() {
        let world = state_from_def(&sample_def());
        let start = &world.rooms["start"];
        assert_eq!(start.path(Direction::Left), Some(&"end".to_string()));
        assert_eq!(start.path(Direction::Up), None);
        assert!(world.rooms["end"].door.locked);
    }

    #[test]
    fn def_survives_state_conversion() {
        let def = sample_def();
        let back = def_from_state(&state_from_def(&def), "");
        assert_eq!(back, def);
    }

    #[test]
    fn snapshot_is_stamped_with_version() {
        let world = state_from_def(&sample_def());
        assert_eq!(def_from_state(&world, "9.9.9").version, "9.9.9");
    }
}
