//! `repl::system` module
//!
//! Contains repl loop handlers for commands that are for system utilities.

use std::path::Path;

use crate::save_files::{save_game, validate_filename};
use crate::{
    GameState, View, ViewItem,
    repl::ReplControl,
    repl::input::{PromptPolicy, Prompter, prompt_with_policy},
};

use anyhow::{Context, Result};
use log::{info, warn};

/// Show the help text.
pub fn help_handler(view: &mut View) {
    view.push(ViewItem::Help);
}

/// Quit the game.
pub fn quit_handler(world: &GameState, view: &mut View) -> ReplControl {
    info!("player quit with a score of {}", world.player.stats.score);
    info!("ending inventory:");
    world.player.inventory.iter().for_each(|id| info!("- {id}"));
    view.push(ViewItem::Score(world.player.stats.score));
    view.push(ViewItem::Farewell);
    ReplControl::Quit
}

/// Save the game under the name following `save`, or ask for one.
///
/// A failed write is reported to the player and play continues.
///
/// # Errors
/// - if input closes while asking for a name
pub fn save_handler(
    world: &GameState,
    view: &mut View,
    prompter: &mut dyn Prompter,
    save_dir: &Path,
    tokens: &[String],
) -> Result<()> {
    let given = tokens
        .iter()
        .position(|t| t == "save")
        .and_then(|idx| tokens.get(idx + 1))
        .filter(|name| validate_filename(name).is_ok())
        .cloned();

    let name = match given {
        Some(name) => name,
        None => prompt_with_policy(
            view,
            prompter,
            PromptPolicy::RetryUntilValid,
            "What would you like to name your save? ",
            |bad| match validate_filename(bad) {
                Err(err) => format!("That name won't work: {err}. Try another: "),
                Ok(()) => "Try another name: ".to_string(),
            },
            |answer| validate_filename(answer).is_ok().then(|| answer.to_string()),
        )?
        .context("retrying prompt returned no save name")?,
    };

    match save_game(world, save_dir, &name) {
        Ok(path) => view.push(ViewItem::GameSaved { name, path }),
        Err(err) => {
            warn!("save as '{name}' failed: {err}");
            view.push(ViewItem::Error(format!("Could not save the game: {err}")));
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::tokenize;
    use crate::loader::{default_game, load_game};
    use crate::repl::input::ScriptedInput;

    #[test]
    fn save_uses_name_after_verb() {
        let dir = tempfile::tempdir().unwrap();
        let world = default_game().unwrap();
        let mut view = View::new();
        let mut input = ScriptedInput::default();
        save_handler(&world, &mut view, &mut input, dir.path(), &tokenize("save slot1")).unwrap();
        assert!(input.asked.is_empty());
        assert!(view.items[0].is_game_saved());
        assert_eq!(load_game(dir.path(), "slot1").unwrap().player, world.player);
    }

    #[test]
    fn save_prompts_until_name_is_portable() {
        let dir = tempfile::tempdir().unwrap();
        let world = default_game().unwrap();
        let mut view = View::new();
        let mut input = ScriptedInput::new(["con", "a|b", "keeper"]);
        save_handler(&world, &mut view, &mut input, dir.path(), &tokenize("save")).unwrap();
        assert_eq!(input.asked.len(), 3);
        assert!(load_game(dir.path(), "keeper").is_ok());
    }

    #[test]
    fn quit_says_goodbye() {
        let world = default_game().unwrap();
        let mut view = View::new();
        assert!(matches!(quit_handler(&world, &mut view), ReplControl::Quit));
        assert_eq!(view.items.last(), Some(&ViewItem::Farewell));
    }
}
