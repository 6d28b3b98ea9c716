//! Virtual terminal emulator module.
//!
//! A VTE-based terminal with a primary and an alternate screen, capped
//! scrollback history, width-aware reflow on resize and an out-of-band
//! hook channel.
//!
//! - [`Terminal`]: the owner handle; the only way to mutate state
//! - [`TerminalView`]: read-only observers, handed to everything else
//! - [`wrap`] / [`cursor`]: the pure reflow and cursor translation functions

pub mod cursor;
mod handlers;
pub mod history;
pub mod hooks;
mod performer;
mod resize;
mod state;
pub mod types;
pub mod wrap;

#[cfg(test)]
mod tests;

pub use history::History;
pub use hooks::{hook_sequence, HookRegistry};
pub use types::{Attrs, Color, Cursor, CursorState, Glyph, Line, Modes, Root};

use std::fmt;
use std::io;

use vte::Parser;

use performer::TerminalPerformer;
use state::TermState;

/// LNM: line feed also returns the carriage.
pub const LINE_FEED_MODE: &str = "\x1b[20h";
/// Switch to the alternate screen, saving the cursor.
pub const ENTER_ALT_SCREEN: &str = "\x1b[?1049h";
/// Leave the alternate screen, restoring the cursor.
pub const EXIT_ALT_SCREEN: &str = "\x1b[?1049l";

/// Default number of physical history rows retained.
pub const DEFAULT_HISTORY_LIMIT: usize = 10_000;

/// Construction options for a [`Terminal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalOptions {
    pub cols: usize,
    pub rows: usize,
    /// Physical rows of scrollback kept; 0 disables history.
    pub history_limit: usize,
}

impl TerminalOptions {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            ..Self::default()
        }
    }

    pub fn without_history(mut self) -> Self {
        self.history_limit = 0;
        self
    }

    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }
}

impl Default for TerminalOptions {
    fn default() -> Self {
        Self {
            cols: 80,
            rows: 24,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

/// Read-only access to terminal state.
///
/// None of these methods have side effects.
pub trait TerminalView {
    /// `(cols, rows)`
    fn size(&self) -> (usize, usize);

    /// The glyph at column `x`, row `y` of the active screen. Out of range
    /// positions read as a blank glyph.
    fn cell(&self, x: usize, y: usize) -> Glyph;

    fn cursor(&self) -> Cursor;

    /// The active screen, top row first.
    fn screen(&self) -> &[Line];

    /// Scrollback as logical lines, oldest first.
    fn history(&self) -> Vec<Line>;

    /// Scrollback as stored physical rows, oldest first.
    fn history_rows(&self) -> Vec<Line>;

    /// Where the first screen row sits in the logical line space of
    /// history followed by the screen.
    fn root(&self) -> Root;

    fn modes(&self) -> Modes;

    fn is_alt_mode(&self) -> bool {
        self.modes().contains(Modes::ALT_SCREEN)
    }

    /// The visible screen as text, without colors.
    ///
    /// Each row has trailing whitespace trimmed and empty trailing rows
    /// are removed.
    fn text(&self) -> String {
        let mut lines: Vec<String> = self
            .screen()
            .iter()
            .map(|row| row.to_string().trim_end().to_string())
            .collect();

        // Remove empty trailing lines
        while lines.last().map(|s| s.is_empty()).unwrap_or(false) {
            lines.pop();
        }

        lines.join("\n")
    }
}

/// A virtual terminal that processes ANSI escape sequences.
pub struct Terminal {
    parser: Parser,
    state: TermState,
    options: TerminalOptions,
}

impl Terminal {
    /// An 80x24 terminal with default history.
    pub fn new() -> Self {
        Self::with_options(TerminalOptions::default())
    }

    pub fn with_options(options: TerminalOptions) -> Self {
        Self {
            parser: Parser::new(),
            state: TermState::new(&options),
            options,
        }
    }

    pub fn options(&self) -> TerminalOptions {
        self.options
    }

    /// Feed output bytes through the emulator. Never fails: unrecognized
    /// sequences are skipped. Returns the number of bytes consumed.
    pub fn write(&mut self, bytes: &[u8]) -> usize {
        let mut performer = TerminalPerformer::new(&mut self.state);
        self.parser.advance(&mut performer, bytes);
        bytes.len()
    }

    /// Resize both screens, reflowing the primary screen and its history.
    /// Zero dimensions are treated as 1.
    pub fn resize(&mut self, cols: usize, rows: usize) {
        self.state.resize(cols, rows);
    }

    /// The hook registry.
    pub fn changes(&mut self) -> &mut HookRegistry {
        &mut self.state.hooks
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalView for Terminal {
    fn size(&self) -> (usize, usize) {
        (self.state.cols, self.state.rows)
    }

    fn cell(&self, x: usize, y: usize) -> Glyph {
        self.state
            .active()
            .get(y)
            .and_then(|line| line.get(x))
            .copied()
            .unwrap_or_default()
    }

    fn cursor(&self) -> Cursor {
        self.state.cursor
    }

    fn screen(&self) -> &[Line] {
        self.state.active()
    }

    fn history(&self) -> Vec<Line> {
        self.state.history.logical()
    }

    fn history_rows(&self) -> Vec<Line> {
        self.state.history.rows().cloned().collect()
    }

    fn root(&self) -> Root {
        if self.state.is_alt() {
            return Root::default();
        }
        let history = &self.state.history;
        let starts = history.logical_starts();
        if history.ends_wrapped() {
            Root {
                row: starts - 1,
                col: history.open_tail_len(),
            }
        } else {
            Root { row: starts, col: 0 }
        }
    }

    fn modes(&self) -> Modes {
        self.state.modes
    }
}

impl io::Write for Terminal {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(Terminal::write(self, buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl fmt::Display for Terminal {
    /// Display the current screen content as a string. See
    /// [`TerminalView::text`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}
