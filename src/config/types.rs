//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::terminal::{TerminalOptions, DEFAULT_HISTORY_LIMIT};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub terminal: TerminalConfig,
    #[serde(default)]
    pub player: PlayerConfig,
}

/// Size and scrollback of every terminal the crate creates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminalConfig {
    #[serde(default = "default_cols")]
    pub cols: usize,
    #[serde(default = "default_rows")]
    pub rows: usize,
    /// Keep lines scrolled off the primary screen
    #[serde(default = "default_history")]
    pub history: bool,
    /// Physical rows of scrollback retained
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

pub fn default_cols() -> usize {
    80
}

pub fn default_rows() -> usize {
    24
}

pub fn default_history() -> bool {
    true
}

pub fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            cols: default_cols(),
            rows: default_rows(),
            history: default_history(),
            history_limit: default_history_limit(),
        }
    }
}

impl TerminalConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cols == 0 || self.rows == 0 {
            return Err(ConfigError::InvalidSize {
                cols: self.cols,
                rows: self.rows,
            });
        }
        Ok(())
    }

    pub fn options(&self) -> TerminalOptions {
        let options = TerminalOptions::new(self.cols, self.rows);
        if self.history {
            options.history_limit(self.history_limit)
        } else {
            options.without_history()
        }
    }
}

/// Player behaviour
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Hook names registered on every terminal the player builds
    #[serde(default = "default_hooks")]
    pub hooks: Vec<String>,
}

pub fn default_hooks() -> Vec<String> {
    vec!["cy".to_string()]
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            hooks: default_hooks(),
        }
    }
}

impl PlayerConfig {
    /// Hook names end up as the final byte and data of a DCS sequence, so
    /// they must start with a letter and stay within printable ASCII.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for name in &self.hooks {
            let mut chars = name.chars();
            match chars.next() {
                None => return Err(ConfigError::EmptyHookName),
                Some(first) if !first.is_ascii_alphabetic() => {
                    return Err(ConfigError::InvalidHookName(name.clone()));
                }
                Some(_) => {}
            }
            if !chars.all(|c| c.is_ascii_graphic()) {
                return Err(ConfigError::InvalidHookName(name.clone()));
            }
        }
        Ok(())
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.terminal.validate()?;
        self.player.validate()
    }

    pub fn terminal_options(&self) -> TerminalOptions {
        self.terminal.options()
    }
}
