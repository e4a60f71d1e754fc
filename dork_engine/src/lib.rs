#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const DORK_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod combat;
pub mod command;
pub mod config;
pub mod data_paths;
pub mod error;
pub mod health;
pub mod item;
pub mod loader;
pub mod npc;
pub mod player;
pub mod repl;
pub mod room;
pub mod save_files;
pub mod style;
pub mod view;
pub mod world;

// Re-exports for convenience
pub use dork_data::Id;
pub use error::PersistError;
pub use item::{Item, ItemHolder};
pub use loader::{default_game, load_game};
pub use npc::Npc;
pub use player::Player;
pub use repl::run_repl;
pub use room::{Direction, Room};
pub use view::{View, ViewItem};
pub use world::GameState;
