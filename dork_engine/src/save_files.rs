//! Save-game and maze file helpers.
//!
//! Name validation, listing, and writing of `.ron` game files. Reading lives
//! in [`crate::loader`].

use std::fs;
use std::path::{Path, PathBuf};

use lazy_static::lazy_static;
use log::{info, warn};
use regex::Regex;
use thiserror::Error;

use crate::loader::gamedef::def_from_state;
use crate::loader::{DEFAULT_MAZE_RON, GAME_EXTENSION, game_path};
use crate::{DORK_VERSION, GameState, PersistError};

pub const SAVE_DIR: &str = "saved_games";
pub const MAZE_DIR: &str = "mazes";

const FORBIDDEN_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*', '\0'];

lazy_static! {
    static ref RESERVED_NAME: Regex = Regex::new(r"(?i)^(CON|PRN|AUX|NUL|COM\d|LPT\d)(\.[^.]*)?$")
        .expect("reserved device name pattern is valid");
}

/// Why a name can't be used as a save or maze file name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilenameError {
    #[error("name is empty")]
    Empty,
    #[error("'{0}' contains the forbidden character {1:?}")]
    ForbiddenChar(String, char),
    #[error("'{0}' is a reserved device name")]
    Reserved(String),
    #[error("'{0}' ends with a space or period")]
    BadEnding(String),
}

/// Check that `name` is a file name every common filesystem accepts.
///
/// # Errors
/// Returns the first rule `name` breaks.
pub fn validate_filename(name: &str) -> Result<(), FilenameError> {
    if name.is_empty() {
        return Err(FilenameError::Empty);
    }
    if let Some(bad) = name.chars().find(|c| FORBIDDEN_CHARS.contains(c)) {
        return Err(FilenameError::ForbiddenChar(name.to_string(), bad));
    }
    if RESERVED_NAME.is_match(name) {
        return Err(FilenameError::Reserved(name.to_string()));
    }
    if name.ends_with([' ', '.']) {
        return Err(FilenameError::BadEnding(name.to_string()));
    }
    Ok(())
}

/// Write `world` to `dir/<name>.ron`, replacing any existing file.
///
/// # Errors
/// - `InvalidName` if `name` fails [`validate_filename`]
/// - `Io` / `Serialize` if writing fails
pub fn save_game(world: &GameState, dir: &Path, name: &str) -> Result<PathBuf, PersistError> {
    if let Err(err) = validate_filename(name) {
        warn!("refusing to save under invalid name: {err}");
        return Err(err.into());
    }
    fs::create_dir_all(dir)?;

    let def = def_from_state(world, DORK_VERSION);
    let ron_string = ron::ser::to_string_pretty(&def, ron::ser::PrettyConfig::default())?;
    let path = game_path(dir, name);
    fs::write(&path, ron_string)?;
    info!("game saved to {}", path.display());
    Ok(path)
}

/// Copy the built-in maze to `dir/<name>.ron` so it can be edited by hand.
///
/// # Errors
/// - `InvalidName` if `name` fails [`validate_filename`]
/// - `Io` if the file can't be written
pub fn write_template(dir: &Path, name: &str) -> Result<PathBuf, PersistError> {
    validate_filename(name)?;
    fs::create_dir_all(dir)?;
    let path = game_path(dir, name);
    fs::write(&path, DEFAULT_MAZE_RON)?;
    info!("maze template written to {}", path.display());
    Ok(path)
}

/// Names (without extension) of every game file in `dir`, sorted.
///
/// A missing directory has no games in it.
///
/// # Errors
/// Returns an error if the directory exists but can't be read.
pub fn collect_game_names(dir: &Path) -> Result<Vec<String>, PersistError> {
    if !dir.exists() {
        return Ok(Vec::new());
    }
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext == GAME_EXTENSION)
            && let Some(stem) = path.file_stem().and_then(|s| s.to_str())
        {
            names.push(stem.to_string());
        }
    }
    names.sort();
    Ok(names)
}
