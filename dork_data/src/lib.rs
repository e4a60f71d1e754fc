//! Shared data model for Dork mazes and save games.

pub mod defs;
pub mod validate;

pub use defs::*;
pub use validate::{ValidationError, validate_game};
