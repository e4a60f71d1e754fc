//! `repl::inventory` module
//!
//! Handlers that move items between the player and the current room, plus the
//! `user` menu for checking inventory and score.

use crate::{
    GameState, ItemHolder, View, ViewItem,
    repl::input::{PromptPolicy, Prompter, prompt_with_policy},
};

use anyhow::Result;
use log::info;

/// Pick up the first item named in `tokens` that is lying in the current room.
///
/// # Errors
/// - if the player's room is missing from the graph
pub fn take_handler(world: &mut GameState, view: &mut View, tokens: &[String]) -> Result<()> {
    let room = world.player_room_mut()?;
    let Some(item_id) = room.item_in(tokens).cloned() else {
        view.push(ViewItem::Error("There is no such item".into()));
        return Ok(());
    };
    room.remove_item(&item_id);
    info!("player took {item_id} from {}", room.id);
    world.player.add_item(item_id.clone());
    view.push(ViewItem::TookItem(item_id));
    Ok(())
}

/// Drop one held item into the current room.
///
/// The player gets a single chance to name something they carry.
///
/// # Errors
/// - if input closes at the prompt, or the player's room is missing
pub fn drop_handler(world: &mut GameState, view: &mut View, prompter: &mut dyn Prompter) -> Result<()> {
    if world.player.inventory.is_empty() {
        view.push(ViewItem::Error("You have no items to drop.".into()));
        return Ok(());
    }
    view.push(ViewItem::Inventory(world.player.inventory.clone()));

    let player = &world.player;
    let chosen = prompt_with_policy(
        view,
        prompter,
        PromptPolicy::FailFast,
        "What would you like to drop? ",
        |_| String::new(),
        |answer| player.contains_item(answer).then(|| answer.to_string()),
    )?;
    let Some(item_id) = chosen else {
        view.push(ViewItem::Error("That isn't an item you have.".into()));
        return Ok(());
    };

    let room = world.player_room_mut()?;
    room.add_item(item_id.clone());
    info!("player dropped {item_id} in {}", room.id);
    world.player.remove_item(&item_id);
    view.push(ViewItem::DroppedItem(item_id));
    Ok(())
}

/// Show inventory or score, whichever the player asked for.
pub fn user_menu_handler(world: &GameState, view: &mut View, tokens: &[String]) {
    if tokens.iter().any(|t| t == "inventory") {
        view.push(ViewItem::Inventory(world.player.inventory.clone()));
    } else if tokens.iter().any(|t| t == "score") {
        view.push(ViewItem::Score(world.player.stats.score));
    } else {
        view.push(ViewItem::Error("No menu option found".into()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::tokenize;
    use crate::repl::input::ScriptedInput;
    use crate::room::Room;

    fn world() -> GameState {
        let mut world = GameState::new_empty();
        let mut room = Room {
            id: "shed".into(),
            ..Room::default()
        };
        room.door.items = vec!["rake".into(), "hoe".into()];
        world.rooms.insert("shed".into(), room);
        world.player.position.location = "shed".into();
        world.player.stats.score = 12;
        world
    }

    #[test]
    fn take_then_drop_restores_everything() {
        let mut world = world();
        let before = world.clone();
        let mut view = View::new();
        take_handler(&mut world, &mut view, &tokenize("pick up the hoe")).unwrap();
        assert_eq!(world.player.inventory, vec!["hoe".to_string()]);
        assert_eq!(world.rooms["shed"].door.items, vec!["rake".to_string()]);

        let mut input = ScriptedInput::new(["hoe"]);
        drop_handler(&mut world, &mut view, &mut input).unwrap();
        assert!(world.player.inventory.is_empty());
        assert_eq!(world.rooms["shed"].door.items, before.rooms["shed"].door.items);
        assert_eq!(world.player, before.player);
    }

    #[test]
    fn dropped_items_go_to_the_end_of_the_floor() {
        let mut world = world();
        let mut view = View::new();
        take_handler(&mut world, &mut view, &tokenize("take rake")).unwrap();
        let mut input = ScriptedInput::new(["rake"]);
        drop_handler(&mut world, &mut view, &mut input).unwrap();
        assert_eq!(world.rooms["shed"].door.items, vec!["hoe".to_string(), "rake".to_string()]);
        assert!(world.player.inventory.is_empty());
    }

    #[test]
    fn take_unknown_item_reports_error() {
        let mut world = world();
        let before = world.clone();
        let mut view = View::new();
        take_handler(&mut world, &mut view, &tokenize("take shovel")).unwrap();
        assert_eq!(view.items, vec![ViewItem::Error("There is no such item".into())]);
        assert_eq!(world, before);
    }

    #[test]
    fn drop_with_nothing_held_never_prompts() {
        let mut world = world();
        let mut view = View::new();
        let mut input = ScriptedInput::default();
        drop_handler(&mut world, &mut view, &mut input).unwrap();
        assert!(input.asked.is_empty());
        assert_eq!(view.items, vec![ViewItem::Error("You have no items to drop.".into())]);
    }

    #[test]
    fn drop_bad_name_consumes_one_answer() {
        let mut world = world();
        world.player.inventory.push("lamp".into());
        let before = world.clone();
        let mut view = View::new();
        let mut input = ScriptedInput::new(["rake", "lamp"]);
        drop_handler(&mut world, &mut view, &mut input).unwrap();
        assert_eq!(input.remaining(), 1);
        assert_eq!(world, before);
        assert_eq!(view.items, vec![ViewItem::Error("That isn't an item you have.".into())]);
    }

    #[test]
    fn user_menu_options() {
        let mut world = world();
        world.player.inventory.push("lamp".into());
        let mut view = View::new();
        user_menu_handler(&world, &mut view, &tokenize("user score"));
        user_menu_handler(&world, &mut view, &tokenize("user inventory"));
        user_menu_handler(&world, &mut view, &tokenize("user settings"));
        assert_eq!(
            view.items,
            vec![
                ViewItem::Score(12),
                ViewItem::Inventory(vec!["lamp".into()]),
                ViewItem::Error("No menu option found".into()),
            ]
        );
    }
}
