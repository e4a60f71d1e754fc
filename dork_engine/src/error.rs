use std::path::PathBuf;

use dork_data::ValidationError;
use thiserror::Error;

use crate::save_files::FilenameError;

/// Errors raised at the persistence boundary: loading and saving game files.
#[derive(Debug, Error)]
pub enum PersistError {
    /// The requested name cannot be used as a portable file name.
    #[error("invalid file name: {0}")]
    InvalidName(#[from] FilenameError),

    /// No maze or saved game with this name exists.
    #[error("no saved game or maze named '{name}'")]
    NotFound { name: String },

    /// Wrapper around IO errors (directory creation, reads, writes).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The file exists but is not a valid game document.
    #[error("could not parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },

    /// Converting a game state to RON failed.
    #[error("serialization error: {0}")]
    Serialize(#[from] ron::Error),

    /// The document parsed but refers to rooms, items or NPCs that do not exist.
    #[error("game data failed validation:\n{}", list_errors(.0))]
    Invalid(Vec<ValidationError>),
}

fn list_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|err| format!("- {err}"))
        .collect::<Vec<_>>()
        .join("\n")
}
