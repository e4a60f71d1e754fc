//! Loader utilities for building a `GameState` from serialized data.
//!
//! Mazes and saved games share the `GameDef` RON format. Every document is
//! validated once here, so the rest of the engine can trust its ids.

pub mod gamedef;

use std::fs;
use std::path::{Path, PathBuf};

use dork_data::GameDef;
use log::{info, warn};

use crate::save_files::validate_filename;
use crate::{DORK_VERSION, GameState, PersistError};
use gamedef::state_from_def;

/// Extension used for mazes and saved games.
pub const GAME_EXTENSION: &str = "ron";

/// The maze that ships with the engine.
pub const DEFAULT_MAZE_RON: &str = include_str!("../data/default.ron");

/// Path of the game file called `name` inside `dir`.
pub fn game_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{name}.{GAME_EXTENSION}"))
}

/// Load the game named `name` from `dir`.
///
/// # Errors
/// - `InvalidName` if `name` fails [`validate_filename`]
/// - `NotFound` if there is no such file
/// - `Parse` / `Invalid` if it isn't a usable game document
pub fn load_game(dir: &Path, name: &str) -> Result<GameState, PersistError> {
    if let Err(err) = validate_filename(name) {
        warn!("refusing to load invalid name: {err}");
        return Err(err.into());
    }
    let path = game_path(dir, name);
    if !path.is_file() {
        return Err(PersistError::NotFound { name: name.to_string() });
    }
    let raw = fs::read_to_string(&path)?;
    let world = parse_game(&raw, &path)?;
    info!("loaded '{name}' from {}", path.display());
    Ok(world)
}

/// Parse and validate a game document. `path` is only used for error reports.
///
/// # Errors
/// - `Parse` if `raw` is not a `GameDef`
/// - `Invalid` listing every dangling reference
pub fn parse_game(raw: &str, path: &Path) -> Result<GameState, PersistError> {
    let def: GameDef = ron::from_str(raw).map_err(|source| PersistError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    let errors = dork_data::validate_game(&def);
    if !errors.is_empty() {
        return Err(PersistError::Invalid(errors));
    }
    if !def.version.is_empty() && def.version != DORK_VERSION {
        warn!(
            "{} was written by dork {}, this is {DORK_VERSION}",
            path.display(),
            def.version
        );
    }

    let world = state_from_def(&def);
    info!("{} rooms added to GameState", world.rooms.len());
    info!("{} items added to GameState", world.items.len());
    info!("{} NPCs added to GameState", world.npcs.len());
    Ok(world)
}

/// The built-in maze.
///
/// # Errors
/// Only if the embedded maze is broken.
pub fn default_game() -> Result<GameState, PersistError> {
    parse_game(DEFAULT_MAZE_RON, Path::new("<built-in default maze>"))
}
