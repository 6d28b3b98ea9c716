//! Virtual terminal recorder library
//!
//! A VT-style terminal emulator with scrollback and reflow on resize, a
//! time-stamped event log of output and resizes, and a player that can
//! seek the emulator to any byte of that log.

pub mod config;
pub mod error;
pub mod player;
pub mod session;
pub mod terminal;

pub use config::Config;
pub use error::{ConfigError, LogError};
pub use player::{Location, Player};
pub use session::{Event, EventHandler, Message, Recorder, Simulator};
pub use terminal::{Terminal, TerminalOptions, TerminalView};
