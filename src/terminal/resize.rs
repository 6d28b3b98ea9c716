//! Screen resizing.
//!
//! The primary screen is reflowed: history and screen rows are joined
//! into logical lines, wrapped at the new width and split again between
//! history and screen, with the cursor following its logical position.
//! The alternate screen is only truncated or extended.

use tracing::debug;

use super::cursor::{to_logical, to_physical, LogicalPos};
use super::state::TermState;
use super::types::{Attrs, Cursor, CursorState, Glyph, Line};
use super::wrap::{join_lines, wrap_logical};

impl TermState {
    /// Resize to `cols` x `rows`. Zero dimensions are clamped to 1.
    pub fn resize(&mut self, cols: usize, rows: usize) {
        let cols = cols.max(1);
        let rows = rows.max(1);
        if cols == self.cols && rows == self.rows {
            return;
        }
        debug!(
            from_cols = self.cols,
            from_rows = self.rows,
            cols,
            rows,
            alt = self.is_alt(),
            "Resizing terminal"
        );

        if self.is_alt() {
            self.cursor = resize_grid(&mut self.alternate, cols, rows, self.cursor);
            let parked = self.primary_cursor.unwrap_or_default();
            self.primary_cursor = Some(self.reflow_primary(cols, rows, parked));
        } else {
            self.cursor = self.reflow_primary(cols, rows, self.cursor);
        }

        self.cols = cols;
        self.rows = rows;
        self.scroll_top = 0;
        self.scroll_bottom = rows - 1;
        if let Some(saved) = self.saved.as_mut() {
            saved.cursor.x = saved.cursor.x.min(cols - 1);
            saved.cursor.y = saved.cursor.y.min(rows - 1);
        }
        self.clamp_cursor();
    }

    /// Reflow history and the primary screen to the new size and return
    /// where `cursor` ends up.
    fn reflow_primary(&mut self, cols: usize, rows: usize, cursor: Cursor) -> Cursor {
        let history_starts = self.history.logical_starts();
        let mut old = self.history.take();
        let history_len = old.len();

        // Screen rows below both the content and the cursor carry nothing.
        let cursor_row = cursor.y.min(self.primary.len().saturating_sub(1));
        let keep = self
            .primary
            .iter()
            .rposition(|line| !line.is_blank())
            .map_or(cursor_row, |last| last.max(cursor_row))
            + 1;
        old.extend(self.primary.drain(..).take(keep));

        let old_cursor = Cursor {
            y: cursor_row + history_len,
            ..cursor
        };
        let logical = join_lines(&old);
        let pos = to_logical(&old, &old_cursor).unwrap_or(LogicalPos {
            line: logical.len().saturating_sub(1),
            offset: 0,
        });

        // Lines that started in history stay there, unless the cursor is on
        // them.
        let owned = history_starts.min(pos.line);
        let mut history = Vec::new();
        let mut screen = Vec::new();
        for (i, line) in logical.iter().enumerate() {
            let min_len = if i == pos.line { pos.offset } else { 0 };
            let rows = wrap_logical(line, cols, min_len);
            if i < owned {
                history.extend(rows);
            } else {
                screen.extend(rows);
            }
        }

        let screen_pos = LogicalPos {
            line: pos.line - owned,
            offset: pos.offset,
        };
        let mut placed = to_physical(&screen, screen_pos, cols).unwrap_or_default();
        placed.state |= cursor.state & CursorState::HIDDEN;

        if screen.len() > rows {
            let overflow = screen.len() - rows;
            history.extend(screen.drain(..overflow));
            placed.y = placed.y.saturating_sub(overflow);
        }
        screen.resize(rows, Line::blank(cols));

        self.history.replace(history);
        self.primary = screen;
        placed
    }
}

/// Truncate or extend every line of `lines` to `cols` and the grid to
/// `rows`, returning the clamped cursor. Rows are dropped from the top when
/// the cursor would otherwise fall off the bottom.
fn resize_grid(lines: &mut Vec<Line>, cols: usize, rows: usize, mut cursor: Cursor) -> Cursor {
    if cursor.y >= rows {
        let excess = cursor.y + 1 - rows;
        lines.drain(..excess.min(lines.len()));
        cursor.y -= excess;
    }
    lines.truncate(rows);

    for line in lines.iter_mut() {
        let wrapped = line.is_wrapped();
        for glyph in line.iter_mut() {
            glyph.attrs.remove(Attrs::WRAP);
        }
        line.resize(cols, Glyph::default());
        if let Some(last) = line.last_mut() {
            if last.attrs.contains(Attrs::WIDE) {
                // The spacer half was cut off.
                *last = Glyph::default();
            }
            if wrapped {
                last.attrs.insert(Attrs::WRAP);
            }
        }
    }
    lines.resize(rows, Line::blank(cols));

    cursor.x = cursor.x.min(cols - 1);
    cursor.state.remove(CursorState::WRAP_NEXT);
    cursor
}
