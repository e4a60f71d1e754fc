//! `repl::movement` module
//!
//! Contains repl loop handlers for commands that change player location

use crate::{
    GameState, Id, View, ViewItem,
    command::find_direction,
    room::Direction,
};

use anyhow::Result;
use log::info;

/// Result of trying to walk in one direction.
#[derive(Debug, Clone, PartialEq, Eq, variantly::Variantly)]
pub enum MoveOutcome {
    /// No path that way.
    Wall,
    /// There is a room that way but its door is locked.
    Locked { room: Id },
    /// The player is now in `room`.
    Moved { room: Id },
}

/// A move that has been planned but not committed.
///
/// Lives only for the duration of one [`attempt_move`] call and is never
/// stored on the player.
struct PendingMove {
    direction: Direction,
    to: Id,
}

/// Try to move the player one room in `direction`.
///
/// A wall or a locked door leaves the state untouched.
///
/// # Errors
/// - if the player's room or the target room is missing from the graph
pub fn attempt_move(world: &mut GameState, direction: Direction) -> Result<MoveOutcome> {
    let Some(to) = world.player_room_ref()?.path(direction).cloned() else {
        return Ok(MoveOutcome::Wall);
    };
    let pending = PendingMove { direction, to };

    if world.room_ref(&pending.to)?.door.locked {
        info!(
            "player blocked by locked door going {} to {}",
            pending.direction, pending.to
        );
        return Ok(MoveOutcome::Locked { room: pending.to });
    }

    info!(
        "player moved {} from {} to {}",
        pending.direction, world.player.position.location, pending.to
    );
    world.player.position.location.clone_from(&pending.to);
    Ok(MoveOutcome::Moved { room: pending.to })
}

/// Move the player in the first direction named in `tokens`.
///
/// # Errors
/// - if the player's room or the destination is missing from the graph
pub fn move_to_handler(world: &mut GameState, view: &mut View, tokens: &[String]) -> Result<()> {
    let Some(direction) = find_direction(tokens) else {
        view.push(ViewItem::Error("Invalid direction".into()));
        return Ok(());
    };

    match attempt_move(world, direction)? {
        MoveOutcome::Wall => view.push(ViewItem::Blocked("That is a wall".into())),
        MoveOutcome::Locked { .. } => view.push(ViewItem::Blocked(
            "You might be able to use an item if you want to go that way.".into(),
        )),
        MoveOutcome::Moved { room } => {
            let description = world.room_ref(&room)?.messages.description.clone();
            view.push(ViewItem::MovedTo(room));
            view.push(ViewItem::RoomDescription(description));
        },
    }
    Ok(())
}
