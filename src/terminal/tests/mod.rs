//! Terminal emulator tests.
//!
//! Organized by behavior:
//! - vt_tests: printing, cursor movement, editing and SGR
//! - scroll_tests: Scroll region behavior and history feeding
//! - resize_tests: Reflow of screen and history across resizes
//! - screen_tests: Alternate screen, hooks and root tracking


use super::{Terminal, TerminalOptions, TerminalView, LINE_FEED_MODE};

/// A `cols` x `rows` terminal with LNM set.
fn term(cols: usize, rows: usize) -> Terminal {
    let mut term = Terminal::with_options(TerminalOptions::new(cols, rows));
    term.write(LINE_FEED_MODE.as_bytes());
    term
}

/// Characters of row `y` from column `x0` to `x1` inclusive.
fn extract(term: &Terminal, x0: usize, x1: usize, y: usize) -> String {
    (x0..=x1).map(|x| term.cell(x, y).ch).collect()
}

fn cursor_xy(term: &Terminal) -> (usize, usize) {
    let cursor = term.cursor();
    (cursor.x, cursor.y)
}
