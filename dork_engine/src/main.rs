#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Dork **
//! Maze adventure launcher and title screen

use dork_engine::config::DorkConfig;
use dork_engine::loader::game_path;
use dork_engine::repl::Ending;
use dork_engine::repl::input::{InputEvent, InputManager};
use dork_engine::save_files::{collect_game_names, validate_filename, write_template};
use dork_engine::style::GameStyle;
use dork_engine::view::HELP_TEXT;
use dork_engine::{DORK_VERSION, GameState, PersistError, default_game, load_game, run_repl};

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use log::{info, warn};

#[derive(Parser)]
#[command(about = "Explore a maze of rooms, find keys, and fight your way out.", disable_version_flag = true)]
struct Cli {
    /// List the mazes available to play.
    #[arg(short, long)]
    list: bool,
    /// Start straight into the named maze.
    #[arg(short, long, value_name = "MAZE")]
    init: Option<String>,
    /// Write the built-in maze to a new maze file for editing.
    #[arg(short, long, value_name = "MAZE")]
    out: Option<String>,
    /// Print the version and exit.
    #[arg(short, long)]
    version: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = DorkConfig::load().context("while loading configuration")?;
    info!("using config {config:?}");

    if cli.version {
        println!("dork {DORK_VERSION}");
        return Ok(());
    }
    if cli.list {
        return list_mazes(&config);
    }
    if let Some(name) = cli.out {
        let path = write_template(&config.maze_dir(), &name).with_context(|| format!("while creating maze '{name}'"))?;
        println!("New maze written to {}", path.display());
        return Ok(());
    }
    if let Some(name) = cli.init {
        let mut world = load_game(&config.maze_dir(), &name).with_context(|| format!("while loading maze '{name}'"))?;
        return play(&mut world, &config);
    }

    title_screen(&config)
}

fn list_mazes(config: &DorkConfig) -> Result<()> {
    let dir = config.maze_dir();
    let names = collect_game_names(&dir).with_context(|| format!("while listing {}", dir.display()))?;
    if names.is_empty() {
        println!("No mazes found in {}", dir.display());
    } else {
        println!("{}", "Mazes:".subheading_style());
        names.iter().for_each(|name| println!("\t{}", name.room_style()));
    }
    Ok(())
}

fn title_screen(config: &DorkConfig) -> Result<()> {
    // clear the screen
    print!("\x1B[2J\x1B[H");
    println!("{:^60}", "DORK".bright_yellow().underline());
    println!("{:^60}\n", format!("v{DORK_VERSION}").dimmed());

    let mut input = InputManager::new();
    loop {
        let line = match input.read_line(&"play | load | help | quit > ".prompt_style().to_string())? {
            InputEvent::Line(line) => line.trim().to_lowercase(),
            InputEvent::Eof => return Ok(()),
            InputEvent::Interrupted => continue,
        };
        match line.as_str() {
            "play" => {
                let mut world = starting_maze(config)?;
                return play(&mut world, config);
            },
            "load" => {
                let Some(name) = ask_load_name(&mut input)? else {
                    continue;
                };
                match load_named(config, &name) {
                    Ok(mut world) => return play(&mut world, config),
                    Err(err @ PersistError::NotFound { .. }) => println!("{}", err.to_string().error_style()),
                    Err(err) => {
                        warn!("failed to load '{name}': {err}");
                        println!("{}", format!("Could not load '{name}': {err}").error_style());
                    },
                }
            },
            "help" => println!("{HELP_TEXT}\n"),
            "quit" => return Ok(()),
            _ => println!("{}", "Choose play, load, help or quit.".error_style()),
        }
    }
}

/// Ask for a game name until it is one the filename rules allow.
///
/// `None` if input closes or the player cancels.
fn ask_load_name(input: &mut InputManager) -> Result<Option<String>> {
    let mut question = "Name of the saved game: ".to_string();
    loop {
        let name = match input.read_line(&question)? {
            InputEvent::Line(name) => name.trim().to_string(),
            InputEvent::Eof | InputEvent::Interrupted => return Ok(None),
        };
        match validate_filename(&name) {
            Ok(()) => return Ok(Some(name)),
            Err(err) => question = format!("That name won't work: {err}. Try another: "),
        }
    }
}

/// The configured default maze, or the built-in one if there is no such file.
fn starting_maze(config: &DorkConfig) -> Result<GameState> {
    let dir = config.maze_dir();
    if game_path(&dir, &config.default_maze).is_file() {
        load_game(&dir, &config.default_maze).with_context(|| format!("while loading maze '{}'", config.default_maze))
    } else {
        info!("no '{}' maze in {}, using the built-in maze", config.default_maze, dir.display());
        default_game().context("while loading the built-in maze")
    }
}

/// Look for `name` among saved games first, then mazes.
fn load_named(config: &DorkConfig, name: &str) -> Result<GameState, PersistError> {
    match load_game(&config.save_dir(), name) {
        Err(PersistError::NotFound { .. }) => load_game(&config.maze_dir(), name),
        other => other,
    }
}

fn play(world: &mut GameState, config: &DorkConfig) -> Result<()> {
    let save_dir = config.save_dir();
    info!("starting game, saves go to {}", save_dir.display());
    match run_repl(world, &save_dir)? {
        Some(Ending::Died) => println!("\n{}", "GAME OVER".bold().red()),
        Some(Ending::Escaped) => println!("\n{}", "YOU ESCAPED".bold().green()),
        None => {},
    }
    Ok(())
}
