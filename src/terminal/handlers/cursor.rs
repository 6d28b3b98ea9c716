//! Cursor movement and positioning handlers.
//!
//! Handles C0 controls and CSI sequences for cursor control:
//! - LF/VT/FF, BS, HT
//! - A: Cursor Up
//! - B: Cursor Down
//! - C: Cursor Forward
//! - D: Cursor Back
//! - E: Cursor Next Line
//! - F: Cursor Previous Line
//! - H/f: Cursor Position
//! - G: Cursor Horizontal Absolute
//! - d: Cursor Vertical Absolute
//!
//! Every explicit movement cancels a pending wrap.

use super::super::performer::TerminalPerformer;
use super::super::types::Modes;

/// Tab stops sit every 8 columns.
const TAB_WIDTH: usize = 8;

impl TerminalPerformer<'_> {
    /// Line feed, with a carriage return when LNM is set.
    pub fn handle_line_feed(&mut self) {
        self.line_feed();
        if self.modes.contains(Modes::LINE_FEED) {
            self.carriage_return();
        }
    }

    /// Move cursor back one position.
    pub fn handle_backspace(&mut self) {
        self.clear_wrap_next();
        self.cursor.x = self.cursor.x.saturating_sub(1);
    }

    /// Move to next tab stop, stopping at the last column.
    pub fn handle_tab(&mut self) {
        self.clear_wrap_next();
        let next_tab = (self.cursor.x / TAB_WIDTH + 1) * TAB_WIDTH;
        self.cursor.x = next_tab.min(self.cols - 1);
    }

    /// Move cursor up by n rows (CSI A).
    pub fn handle_cursor_up(&mut self, n: usize) {
        self.clear_wrap_next();
        self.cursor.y = self.cursor.y.saturating_sub(n);
    }

    /// Move cursor down by n rows (CSI B).
    pub fn handle_cursor_down(&mut self, n: usize) {
        self.clear_wrap_next();
        self.cursor.y = (self.cursor.y + n).min(self.rows - 1);
    }

    /// Move cursor forward by n columns (CSI C).
    pub fn handle_cursor_forward(&mut self, n: usize) {
        self.clear_wrap_next();
        self.cursor.x = (self.cursor.x + n).min(self.cols - 1);
    }

    /// Move cursor back by n columns (CSI D).
    pub fn handle_cursor_back(&mut self, n: usize) {
        self.clear_wrap_next();
        self.cursor.x = self.cursor.x.saturating_sub(n);
    }

    /// Down n rows, to column 0 (CSI E).
    pub fn handle_cursor_next_line(&mut self, n: usize) {
        self.handle_cursor_down(n);
        self.cursor.x = 0;
    }

    /// Up n rows, to column 0 (CSI F).
    pub fn handle_cursor_previous_line(&mut self, n: usize) {
        self.handle_cursor_up(n);
        self.cursor.x = 0;
    }

    /// Set cursor position to row, col (CSI H / CSI f).
    /// Parameters are 1-indexed, converted to 0-indexed internally.
    /// With DECOM set, rows count from the top margin and stay inside the
    /// scroll region.
    pub fn handle_cursor_position(&mut self, row: usize, col: usize) {
        self.handle_cursor_vertical_absolute(row);
        self.handle_cursor_horizontal_absolute(col);
    }

    /// Set cursor column (CSI G).
    /// Parameter is 1-indexed, converted to 0-indexed internally.
    pub fn handle_cursor_horizontal_absolute(&mut self, col: usize) {
        self.clear_wrap_next();
        self.cursor.x = col.saturating_sub(1).min(self.cols - 1);
    }

    /// Set cursor row (CSI d).
    /// Parameter is 1-indexed, converted to 0-indexed internally.
    pub fn handle_cursor_vertical_absolute(&mut self, row: usize) {
        self.clear_wrap_next();
        let row = row.saturating_sub(1);
        self.cursor.y = if self.modes.contains(Modes::ORIGIN) {
            (self.scroll_top + row).min(self.scroll_bottom)
        } else {
            row.min(self.rows - 1)
        };
    }

    /// Move the cursor to the home position, honoring DECOM.
    pub fn home_cursor(&mut self) {
        self.handle_cursor_position(1, 1);
    }
}
