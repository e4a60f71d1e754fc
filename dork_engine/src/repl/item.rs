//! `repl::item` module
//!
//! Handler for the `use` command: trying a held item on a neighboring door.

use crate::{
    GameState, Id, ItemHolder, View, ViewItem,
    command::{lookup_verb, resolve_direction},
    repl::input::{PromptPolicy, Prompter, prompt_with_policy},
    room::Direction,
};

use anyhow::{Context, Result};
use log::info;

/// Result of trying items on the door in one direction.
#[derive(Debug, Clone, PartialEq, Eq, variantly::Variantly)]
pub enum UnlockOutcome {
    /// No room that way, or its door takes no key.
    NothingHappens,
    /// The room has a key, but none of the named items is it (or it isn't held).
    WrongKey,
    /// The door is open and one `key` was used up.
    Unlocked { room: Id, key: Id, message: String },
}

/// Try the items named in `tokens` on the door of the room in `direction`.
///
/// Either the door unlocks and exactly one key leaves the inventory, or
/// nothing changes at all. The player does not move.
///
/// # Errors
/// - if the player's room or the neighbor is missing from the graph
pub fn attempt_unlock(world: &mut GameState, tokens: &[String], direction: Direction) -> Result<UnlockOutcome> {
    let Some(target) = world.player_room_ref()?.path(direction).cloned() else {
        return Ok(UnlockOutcome::NothingHappens);
    };

    let room = world.room_ref(&target)?;
    if room.door.unlock.is_none() {
        return Ok(UnlockOutcome::NothingHappens);
    }
    if !room.key_matches(tokens) {
        return Ok(UnlockOutcome::WrongKey);
    }
    let key = room
        .door
        .unlock
        .clone()
        .with_context(|| format!("room '{target}' matched a key it does not have"))?;
    if !world.player.contains_item(&key) {
        return Ok(UnlockOutcome::WrongKey);
    }

    let room = world.room_mut(&target)?;
    room.door.locked = false;
    let message = room.messages.unlock.clone();
    world.player.remove_item(&key);
    info!("player unlocked {target} ({direction}) using {key}");
    Ok(UnlockOutcome::Unlocked {
        room: target,
        key,
        message,
    })
}

/// True if a non-verb token appears anywhere in the inventory listing.
fn mentions_held_item(world: &GameState, tokens: &[String]) -> bool {
    let listing = world.player.inventory.join(" ");
    tokens
        .iter()
        .filter(|token| lookup_verb(token).is_none())
        .any(|token| listing.contains(token.as_str()))
}

/// Use an item on a door. Asks which direction to try until given a real one.
///
/// # Errors
/// - if input closes at the direction prompt, or the room graph is inconsistent
pub fn use_item_handler(
    world: &mut GameState,
    view: &mut View,
    prompter: &mut dyn Prompter,
    tokens: &[String],
) -> Result<()> {
    if !mentions_held_item(world, tokens) {
        view.push(ViewItem::Error("You do not have that item.".into()));
        return Ok(());
    }

    let direction = prompt_with_policy(
        view,
        prompter,
        PromptPolicy::RetryUntilValid,
        "Which direction would you like to try? ",
        |_| "Please input cardinal direction. ".to_string(),
        resolve_direction,
    )?
    .context("retrying prompt returned no direction")?;

    match attempt_unlock(world, tokens, direction)? {
        UnlockOutcome::NothingHappens => view.push(ViewItem::Blocked("You dont think that will work.".into())),
        UnlockOutcome::WrongKey => view.push(ViewItem::Blocked("You do not have the key for this room.".into())),
        UnlockOutcome::Unlocked { message, .. } => view.push(ViewItem::DoorUnlocked(message)),
    }
    Ok(())
}
