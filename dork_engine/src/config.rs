//! Launcher configuration.
//!
//! Read from `./dork.toml`, falling back to `<config dir>/dork/dork.toml`.
//! Every key is optional; a missing file means all defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};

use crate::data_paths::resolve_dir;
use crate::save_files::{MAZE_DIR, SAVE_DIR};

pub const CONFIG_FILE: &str = "dork.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DorkConfig {
    /// Where maze files are listed from and written to.
    pub maze_dir: PathBuf,
    pub save_dir: PathBuf,
    /// Maze started by `play`; the built-in maze is used if no such file exists.
    pub default_maze: String,
}
impl Default for DorkConfig {
    fn default() -> Self {
        Self {
            maze_dir: PathBuf::from(MAZE_DIR),
            save_dir: PathBuf::from(SAVE_DIR),
            default_maze: "default".to_string(),
        }
    }
}
impl DorkConfig {
    /// Load the first config file found, or the defaults.
    ///
    /// # Errors
    /// Returns an error if a config file exists but can't be read or parsed.
    pub fn load() -> Result<Self> {
        for path in Self::search_paths() {
            if path.is_file() {
                return Self::load_from_file(&path);
            }
        }
        info!("no {CONFIG_FILE} found, using default configuration");
        Ok(Self::default())
    }

    /// Load configuration from a specific TOML file.
    ///
    /// # Errors
    /// Returns an error if the file can't be read or isn't valid TOML.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents =
            fs::read_to_string(path).with_context(|| format!("failed to read config file at {}", path.display()))?;
        let config: DorkConfig =
            toml::from_str(&contents).with_context(|| format!("failed to parse config file at {}", path.display()))?;
        info!("configuration loaded from {}", path.display());
        Ok(config)
    }

    fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(CONFIG_FILE)];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("dork").join(CONFIG_FILE));
        }
        paths
    }

    /// Maze directory, resolved against the data root.
    pub fn maze_dir(&self) -> PathBuf {
        resolve_dir(&self.maze_dir)
    }

    /// Save directory, resolved against the data root.
    pub fn save_dir(&self) -> PathBuf {
        resolve_dir(&self.save_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "default_maze = \"castle\"\n").unwrap();
        let config = DorkConfig::load_from_file(&path).unwrap();
        assert_eq!(config.default_maze, "castle");
        assert_eq!(config.maze_dir, PathBuf::from(MAZE_DIR));
        assert_eq!(config.save_dir, PathBuf::from(SAVE_DIR));
    }

    #[test]
    fn absolute_dirs_are_not_rebased() {
        let dir = tempfile::tempdir().unwrap();
        let config = DorkConfig {
            save_dir: dir.path().to_path_buf(),
            ..DorkConfig::default()
        };
        assert_eq!(config.save_dir(), dir.path());
    }

    #[test]
    fn bad_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "maze_dir = [").unwrap();
        assert!(DorkConfig::load_from_file(&path).is_err());
    }
}
