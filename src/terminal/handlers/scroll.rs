//! Scroll region handlers.
//!
//! Handles sequences that move content or the cursor vertically through
//! the scroll region:
//! - r: DECSTBM - Set Top and Bottom Margins
//! - S: Scroll Up (pan down)
//! - T: Scroll Down (pan up)
//! - ESC D: Index
//! - ESC E: Next Line
//! - ESC M: Reverse Index

use super::super::performer::TerminalPerformer;

impl TerminalPerformer<'_> {
    /// Handle DECSTBM - Set Top and Bottom Margins (CSI r).
    /// Parameters are 1-indexed, converted to 0-indexed internally.
    /// Default is full screen.
    pub fn handle_set_scroll_region(&mut self, top: usize, bottom: usize) {
        // Convert from 1-indexed to 0-indexed
        let new_top = top.saturating_sub(1);
        let new_bottom = bottom.saturating_sub(1).min(self.rows - 1);

        // Validate: top must be less than bottom
        if new_top < new_bottom {
            self.scroll_top = new_top;
            self.scroll_bottom = new_bottom;
            // Move cursor to home position after setting scroll region
            self.home_cursor();
        }
    }

    /// Handle Scroll Up (CSI S) - pan down.
    /// Scrolls the scroll region up by n lines.
    pub fn handle_scroll_up(&mut self, n: usize) {
        self.scroll_up(n);
    }

    /// Handle Scroll Down (CSI T) - pan up.
    /// Scrolls the scroll region down by n lines.
    pub fn handle_scroll_down(&mut self, n: usize) {
        self.scroll_down(n);
    }

    /// Handle Index (ESC D): line feed without carriage return, regardless
    /// of LNM.
    pub fn handle_index(&mut self) {
        self.line_feed();
    }

    /// Handle Next Line (ESC E).
    pub fn handle_next_line(&mut self) {
        self.line_feed();
        self.carriage_return();
    }

    /// Handle Reverse Index (ESC M).
    /// Moves cursor up, scrolling the scroll region down if at top.
    pub fn handle_reverse_index(&mut self) {
        self.reverse_index();
    }
}
