//! Configuration management for vtrec

mod io;
mod types;

pub use types::*;

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::player::Player;

impl Config {
    /// Get the config file path (~/.config/vtrec/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        io::config_path()
    }

    /// Get the config directory path (~/.config/vtrec)
    pub fn config_dir() -> Result<PathBuf> {
        io::config_dir()
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Result<Self> {
        io::load_from(&io::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        io::load_from(path)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        io::save_to(self, &io::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        io::save_to(self, path)
    }

    /// An empty player sized and hooked per this configuration.
    pub fn player(&self) -> Player {
        Player::new(self.terminal_options()).with_hooks(self.player.hooks.iter().cloned())
    }
}
