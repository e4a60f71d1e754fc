use std::collections::BTreeMap;
use std::fmt;

use crate::*;

/// Validation error for malformed or missing references in a `GameDef`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    MissingReference { kind: &'static str, id: String, context: String },
    InvalidValue { context: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingReference { kind, id, context } => {
                write!(f, "missing {kind} '{id}' ({context})")
            },
            ValidationError::InvalidValue { context } => {
                write!(f, "invalid value ({context})")
            },
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate cross-references in a `GameDef`.
///
/// Every room, item, and NPC id that something points at must exist. All
/// problems are collected so an author can fix a maze in one pass.
///
/// ```
/// use dork_data::{GameDef, MessagesDef, PlayerDef, PositionDef, RoomDef, StatsDef, validate_game};
///
/// let mut game = GameDef::default();
/// game.rooms.insert(
///     "cell".into(),
///     RoomDef {
///         messages: MessagesDef {
///             description: "A damp cell.".into(),
///             ..MessagesDef::default()
///         },
///         ..RoomDef::default()
///     },
/// );
/// game.player = PlayerDef {
///     position: PositionDef {
///         location: "cell".into(),
///         last_room: "cell".into(),
///     },
///     inventory: Vec::new(),
///     stats: StatsDef { health: 10, attack: 2, score: 0 },
/// };
/// assert!(validate_game(&game).is_empty());
/// ```
pub fn validate_game(game: &GameDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (room_id, room) in &game.rooms {
        for (dir, to) in room.paths.edges() {
            check_ref("room", to, &game.rooms, format!("path {dir} from room '{room_id}'"), &mut errors);
        }
        if let Some(key) = &room.door.unlock {
            check_ref("item", key, &game.items, format!("unlock item for room '{room_id}'"), &mut errors);
        }
        for item in &room.door.items {
            check_ref("item", item, &game.items, format!("item lying in room '{room_id}'"), &mut errors);
        }
        match &room.fight.enemy {
            Some(enemy) => {
                check_ref("npc", enemy, &game.npcs, format!("enemy in room '{room_id}'"), &mut errors);
            },
            None if room.fight.active => errors.push(ValidationError::InvalidValue {
                context: format!("room '{room_id}' has an active fight but no enemy"),
            }),
            None => {},
        }
    }

    let position = &game.player.position;
    check_ref("room", &position.location, &game.rooms, "player location".to_string(), &mut errors);
    check_ref("room", &position.last_room, &game.rooms, "player last room".to_string(), &mut errors);
    for item in &game.player.inventory {
        check_ref("item", item, &game.items, "player inventory".to_string(), &mut errors);
    }

    errors
}

fn check_ref<T>(
    kind: &'static str,
    id: &str,
    known: &BTreeMap<Id, T>,
    context: String,
    errors: &mut Vec<ValidationError>,
) {
    if !known.contains_key(id) {
        errors.push(ValidationError::MissingReference {
            kind,
            id: id.to_string(),
            context,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(description: &str) -> RoomDef {
        RoomDef {
            messages: MessagesDef {
                description: description.into(),
                ..MessagesDef::default()
            },
            ..RoomDef::default()
        }
    }

    fn game_with_player_in(location: &str) -> GameDef {
        GameDef {
            player: PlayerDef {
                position: PositionDef {
                    location: location.into(),
                    last_room: location.into(),
                },
                inventory: Vec::new(),
                stats: StatsDef {
                    health: 10,
                    attack: 1,
                    score: 0,
                },
            },
            ..GameDef::default()
        }
    }

    #[test]
    fn reports_every_dangling_reference() {
        let mut game = game_with_player_in("start");
        let mut start = room("start");
        start.paths.up = Some("nowhere".into());
        start.door.unlock = Some("ghost_key".into());
        start.door.items.push("lamp".into());
        start.fight = FightDef {
            active: true,
            enemy: Some("troll".into()),
        };
        game.rooms.insert("start".into(), start);
        game.player.inventory.push("sword".into());

        let errors = validate_game(&game);
        assert_eq!(errors.len(), 5);
        assert!(errors.contains(&ValidationError::MissingReference {
            kind: "room",
            id: "nowhere".into(),
            context: "path up from room 'start'".into(),
        }));
        assert!(errors.iter().any(|e| matches!(e, ValidationError::MissingReference { kind: "npc", .. })));
    }

    #[test]
    fn active_fight_requires_enemy() {
        let mut game = game_with_player_in("arena");
        let mut arena = room("arena");
        arena.fight.active = true;
        game.rooms.insert("arena".into(), arena);

        let errors = validate_game(&game);
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], ValidationError::InvalidValue { .. }));
    }

    #[test]
    fn missing_player_rooms_are_reported() {
        let game = game_with_player_in("void");
        let errors = validate_game(&game);
        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors[0].to_string(),
            "missing room 'void' (player location)"
        );
    }
}
