//! REPL and command handling utilities.
//!
//! The game runs in a read-eval-print loop. This module and its submodules
//! implement the command handlers that manipulate the [`GameState`].

pub mod input;
pub mod inventory;
pub mod item;
pub mod look;
pub mod movement;
pub mod system;

pub use inventory::*;
pub use item::*;
pub use look::*;
pub use movement::*;
pub use system::*;

use std::path::Path;

use crate::combat::{CombatOutcome, fight_check};
use crate::command::{Command, parse_command};
use crate::style::GameStyle;
use crate::world::GameState;
use crate::{DORK_VERSION, View, ViewItem};

use anyhow::Result;
use log::{info, warn};
use variantly::Variantly;

use input::{InputManager, Prompter};

/// Control flow signal used by handlers to exit the REPL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplControl {
    Continue,
    Quit,
}

/// How a game ended, if it didn't end by quitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Variantly)]
pub enum Ending {
    Died,
    Escaped,
}

/// Run the main read-eval-print loop on the terminal until the game ends.
///
/// # Errors
/// - Propagates failures from handlers, such as a missing room for the player.
pub fn run_repl(world: &mut GameState, save_dir: &Path) -> Result<Option<Ending>> {
    let mut input_manager = InputManager::new();
    run_session(world, &mut input_manager, save_dir)
}

/// Play `world` with commands and answers taken from `prompter`.
///
/// Returns the ending reached, or `None` if the player quit or input ran out.
///
/// # Errors
/// - Propagates failures from handlers and closed input inside a sub-prompt.
pub fn run_session(world: &mut GameState, prompter: &mut dyn Prompter, save_dir: &Path) -> Result<Option<Ending>> {
    let mut view = View::new();
    if !world.version.is_empty() && world.version != DORK_VERSION {
        view.push(ViewItem::EngineMessage(format!(
            "This game was saved by dork {}; you are running {DORK_VERSION}.",
            world.version
        )));
    }
    let start = world.player_room_ref()?;
    view.push(ViewItem::MovedTo(start.id.clone()));
    view.push(ViewItem::RoomDescription(start.messages.description.clone()));

    // a fight or the exit may be waiting in the starting room
    if let Some(ending) = after_action(world, &mut view, prompter)? {
        view.flush();
        return Ok(Some(ending));
    }

    let prompt = "\nWhat would you like to do? ".prompt_style().to_string();
    loop {
        view.flush();
        let line = match prompter.ask(&prompt) {
            Ok(line) => line,
            Err(err) => {
                info!("command input closed ({err}), ending session");
                return Ok(None);
            },
        };

        let command = parse_command(&line);
        info!("command: \"{}\" -> {command:?}", line.trim());
        if let ReplControl::Quit = dispatch(world, &mut view, prompter, save_dir, command)? {
            view.flush();
            return Ok(None);
        }

        if let Some(ending) = after_action(world, &mut view, prompter)? {
            view.flush();
            return Ok(Some(ending));
        }
    }
}

/// Run the handler for one parsed command.
///
/// # Errors
/// - Propagates handler failures (inconsistent world, closed input at a sub-prompt).
pub fn dispatch(
    world: &mut GameState,
    view: &mut View,
    prompter: &mut dyn Prompter,
    save_dir: &Path,
    command: Command,
) -> Result<ReplControl> {
    #[allow(clippy::enum_glob_use)]
    use Command::*;
    match command {
        Drop => drop_handler(world, view, prompter)?,
        Examine(tokens) => examine_handler(world, view, &tokens)?,
        Help => help_handler(view),
        MoveTo(tokens) => move_to_handler(world, view, &tokens)?,
        Quit => return Ok(quit_handler(world, view)),
        Save(tokens) => save_handler(world, view, prompter, save_dir, &tokens)?,
        Take(tokens) => take_handler(world, view, &tokens)?,
        UseItem(tokens) => use_item_handler(world, view, prompter, &tokens)?,
        UserMenu(tokens) => user_menu_handler(world, view, &tokens),
        Unknown => view.push(ViewItem::Error("Enter a valid command.".into())),
    }
    Ok(ReplControl::Continue)
}

/// End-of-turn checks: fight whatever is in the room, then see if the player escaped.
///
/// # Errors
/// - if the player's room is missing or input closes during a fight
pub fn after_action(world: &mut GameState, view: &mut View, prompter: &mut dyn Prompter) -> Result<Option<Ending>> {
    if let Some(CombatOutcome::Death { rounds }) = fight_check(world, view, prompter)? {
        warn!("game over: player died after {rounds} rounds");
        return Ok(Some(Ending::Died));
    }
    if world.player.at_last_room() {
        info!("player reached the last room with a score of {}", world.player.stats.score);
        view.push(ViewItem::ReachedEnd);
        view.push(ViewItem::Score(world.player.stats.score));
        return Ok(Some(Ending::Escaped));
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::default_game;
    use input::ScriptedInput;

    #[test]
    fn unknown_command_continues() {
        let dir = tempfile::tempdir().unwrap();
        let mut world = default_game().unwrap();
        let mut view = View::new();
        let mut input = ScriptedInput::default();
        let control = dispatch(&mut world, &mut view, &mut input, dir.path(), Command::Unknown).unwrap();
        assert_eq!(control, ReplControl::Continue);
        assert_eq!(view.items, vec![ViewItem::Error("Enter a valid command.".into())]);
    }

    #[test]
    fn quit_stops_the_session() {
        let dir = tempfile::tempdir().unwrap();
        let mut world = default_game().unwrap();
        let mut input = ScriptedInput::new(["dance", "quit", "go north"]);
        let ending = run_session(&mut world, &mut input, dir.path()).unwrap();
        assert_eq!(ending, None);
        assert_eq!(input.remaining(), 1);
        assert_eq!(world.player.position.location, "entrance");
    }

    #[test]
    fn standing_in_last_room_escapes() {
        let mut world = default_game().unwrap();
        world.player.position.location = "exit".into();
        let mut view = View::new();
        let mut input = ScriptedInput::default();
        let ending = after_action(&mut world, &mut view, &mut input).unwrap();
        assert_eq!(ending, Some(Ending::Escaped));
        assert!(view.items.contains(&ViewItem::ReachedEnd));
    }

    #[test]
    fn quiet_room_has_no_ending() {
        let mut world = default_game().unwrap();
        let mut view = View::new();
        let mut input = ScriptedInput::default();
        assert_eq!(after_action(&mut world, &mut view, &mut input).unwrap(), None);
    }
}
