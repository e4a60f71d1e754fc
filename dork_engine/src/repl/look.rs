//! `repl::look` module
//!
//! Handler for `examine` / `inspect`.

use crate::{GameState, View, ViewItem};

use anyhow::Result;

/// Examine the room, or an item the player is carrying.
///
/// # Errors
/// - if the player's room is missing, or a held item has no catalog entry
pub fn examine_handler(world: &GameState, view: &mut View, tokens: &[String]) -> Result<()> {
    if tokens.iter().any(|t| t == "room") {
        let room = world.player_room_ref()?;
        if room.door.items.is_empty() {
            view.push(ViewItem::NothingUseful);
        } else {
            view.push(ViewItem::RoomInspection {
                inspect: room.messages.inspect.clone(),
                items: room.door.items.clone(),
            });
        }
    } else if let Some(item_id) = world.player.held_item_in(tokens) {
        let item = world.item_ref(item_id)?;
        view.push(ViewItem::ItemDescription {
            item: item.id.clone(),
            description: item.description.clone(),
        });
    } else {
        view.push(ViewItem::Error("You are trying to examine an unknown thing.".into()));
    }
    Ok(())
}
