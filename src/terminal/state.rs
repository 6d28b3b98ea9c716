//! Mutable terminal state and the primitive operations escape sequence
//! handlers are built from.

use unicode_width::UnicodeWidthChar;

use super::history::History;
use super::hooks::HookRegistry;
use super::types::{Attrs, Color, Cursor, CursorState, Glyph, Line, Modes};
use super::TerminalOptions;

/// Current drawing style applied to printed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct Pen {
    pub fg: Color,
    pub bg: Color,
    pub attrs: Attrs,
}

/// Cursor and pen captured by DECSC.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SavedCursor {
    pub cursor: Cursor,
    pub pen: Pen,
    pub origin: bool,
}

pub(crate) struct TermState {
    pub cols: usize,
    pub rows: usize,
    pub primary: Vec<Line>,
    pub alternate: Vec<Line>,
    pub history: History,
    pub cursor: Cursor,
    /// Primary screen cursor, parked while the alternate screen is active.
    pub primary_cursor: Option<Cursor>,
    pub saved: Option<SavedCursor>,
    pub pen: Pen,
    pub modes: Modes,
    /// Top margin of scroll region (0-indexed, inclusive)
    pub scroll_top: usize,
    /// Bottom margin of scroll region (0-indexed, inclusive)
    pub scroll_bottom: usize,
    pub hooks: HookRegistry,
    /// Name being collected from an in-progress DCS sequence.
    pub dcs: Option<String>,
}

/// Upper bound on a hook name collected from a DCS sequence.
const MAX_HOOK_NAME: usize = 256;

impl TermState {
    pub fn new(options: &TerminalOptions) -> Self {
        let cols = options.cols.max(1);
        let rows = options.rows.max(1);
        Self {
            cols,
            rows,
            primary: blank_screen(cols, rows),
            alternate: blank_screen(cols, rows),
            history: History::new(options.history_limit),
            cursor: Cursor::default(),
            primary_cursor: None,
            saved: None,
            pen: Pen::default(),
            modes: Modes::default(),
            scroll_top: 0,
            scroll_bottom: rows - 1,
            hooks: HookRegistry::new(),
            dcs: None,
        }
    }

    pub fn is_alt(&self) -> bool {
        self.modes.contains(Modes::ALT_SCREEN)
    }

    pub fn active(&self) -> &[Line] {
        if self.is_alt() {
            &self.alternate
        } else {
            &self.primary
        }
    }

    pub fn active_mut(&mut self) -> &mut Vec<Line> {
        if self.is_alt() {
            &mut self.alternate
        } else {
            &mut self.primary
        }
    }

    fn blank(&self) -> Glyph {
        Glyph::blank(self.pen.bg)
    }

    fn blank_line(&self) -> Line {
        Line::from(vec![self.blank(); self.cols])
    }

    pub fn clear_wrap_next(&mut self) {
        self.cursor.state.remove(CursorState::WRAP_NEXT);
    }

    /// Move cursor down one line, scrolling if necessary.
    /// Respects the scroll region (DECSTBM).
    /// Note: This does NOT move to column 0 (that's carriage return).
    pub fn line_feed(&mut self) {
        self.clear_wrap_next();
        if self.cursor.y == self.scroll_bottom {
            self.scroll_up(1);
        } else if self.cursor.y + 1 < self.rows {
            self.cursor.y += 1;
        }
    }

    /// Move cursor up one line, scrolling the region down at its top.
    pub fn reverse_index(&mut self) {
        self.clear_wrap_next();
        if self.cursor.y == self.scroll_top {
            self.scroll_down(1);
        } else if self.cursor.y > 0 {
            self.cursor.y -= 1;
        }
    }

    /// Move cursor to start of current line.
    pub fn carriage_return(&mut self) {
        self.clear_wrap_next();
        self.cursor.x = 0;
    }

    /// Scroll the scroll region up by n lines.
    ///
    /// Lines leaving the top of a full-height region on the primary screen
    /// are appended to history.
    pub fn scroll_up(&mut self, n: usize) {
        let (top, bottom) = (self.scroll_top, self.scroll_bottom);
        let feeds_history = top == 0 && !self.is_alt();
        for _ in 0..n.min(bottom - top + 1) {
            let blank = self.blank_line();
            let lines = self.active_mut();
            let line = lines.remove(top);
            lines.insert(bottom, blank);
            if feeds_history {
                self.history.push(line);
            }
        }
    }

    /// Scroll the scroll region down by n lines.
    pub fn scroll_down(&mut self, n: usize) {
        let (top, bottom) = (self.scroll_top, self.scroll_bottom);
        for _ in 0..n.min(bottom - top + 1) {
            let blank = self.blank_line();
            let lines = self.active_mut();
            lines.remove(bottom);
            lines.insert(top, blank);
        }
    }

    /// Write a character at the cursor with the current pen, handling
    /// deferred autowrap and double-width characters.
    pub fn put_char(&mut self, c: char) {
        let width = c.width().unwrap_or(1);
        if width == 0 {
            return;
        }
        let autowrap = self.modes.contains(Modes::AUTOWRAP);
        let wide = width > 1 && self.cols >= 2;

        if self.cursor.wrap_next() {
            self.clear_wrap_next();
            if autowrap {
                self.soft_wrap(self.cols);
            }
        }

        if wide && self.cursor.x + 2 > self.cols {
            if autowrap {
                self.soft_wrap(self.cursor.x);
            } else {
                self.cursor.x = self.cols - 2;
            }
        }

        let mut attrs = (self.pen.attrs & Attrs::STYLE) | Attrs::TOUCHED;
        if wide {
            attrs |= Attrs::WIDE;
        }
        let glyph = Glyph {
            ch: c,
            fg: self.pen.fg,
            bg: self.pen.bg,
            attrs,
        };
        let (x, y) = (self.cursor.x, self.cursor.y);
        self.clear_wide_partner(x, y);
        self.active_mut()[y][x] = glyph;

        let advance = if wide {
            self.clear_wide_partner(x + 1, y);
            self.active_mut()[y][x + 1] = Glyph {
                ch: ' ',
                attrs: Attrs::TOUCHED | Attrs::WIDE_SPACER,
                ..glyph
            };
            2
        } else {
            1
        };

        if x + advance >= self.cols {
            self.cursor.x = self.cols - 1;
            if autowrap {
                self.cursor.state.insert(CursorState::WRAP_NEXT);
            }
        } else {
            self.cursor.x = x + advance;
        }
    }

    /// End the current row at column `from` (padding the rest), mark it as
    /// soft-wrapped and continue on the next line.
    fn soft_wrap(&mut self, from: usize) {
        let (cols, y) = (self.cols, self.cursor.y);
        let row = &mut self.active_mut()[y];
        for cell in row.iter_mut().take(cols).skip(from) {
            *cell = Glyph::pad();
        }
        if let Some(last) = row.last_mut() {
            last.attrs.insert(Attrs::WRAP);
        }
        self.line_feed();
        self.cursor.x = 0;
    }

    /// Overwriting half of a wide character blanks the other half.
    fn clear_wide_partner(&mut self, x: usize, y: usize) {
        let cols = self.cols;
        let blank = self.blank();
        let row = &mut self.active_mut()[y];
        let attrs = row[x].attrs;
        if attrs.contains(Attrs::WIDE) && x + 1 < cols {
            row[x + 1] = blank;
        } else if attrs.contains(Attrs::WIDE_SPACER) && x > 0 {
            row[x - 1] = blank;
        }
    }

    /// Blank the cells `[from, to)` of row `y`.
    pub fn erase_cells(&mut self, y: usize, from: usize, to: usize) {
        let to = to.min(self.cols);
        if from >= to {
            return;
        }
        let blank = self.blank();
        let row = &mut self.active_mut()[y];
        for cell in &mut row[from..to] {
            *cell = blank;
        }
    }

    /// Erase from cursor to end of line.
    pub fn erase_to_eol(&mut self) {
        self.erase_cells(self.cursor.y, self.cursor.x, self.cols);
    }

    /// Erase from start of line to cursor (inclusive).
    pub fn erase_from_sol(&mut self) {
        self.erase_cells(self.cursor.y, 0, self.cursor.x + 1);
    }

    /// Erase entire line.
    pub fn erase_entire_line(&mut self) {
        self.erase_cells(self.cursor.y, 0, self.cols);
    }

    /// Erase from cursor to end of screen.
    pub fn erase_to_eos(&mut self) {
        self.erase_to_eol();
        for row in (self.cursor.y + 1)..self.rows {
            self.erase_cells(row, 0, self.cols);
        }
    }

    /// Erase from start of screen to cursor.
    pub fn erase_from_sos(&mut self) {
        for row in 0..self.cursor.y {
            self.erase_cells(row, 0, self.cols);
        }
        self.erase_from_sol();
    }

    /// Clear entire screen. The cursor does not move.
    pub fn clear_screen(&mut self) {
        for row in 0..self.rows {
            self.erase_cells(row, 0, self.cols);
        }
    }

    /// Delete n characters at cursor, shifting remaining left.
    pub fn delete_chars(&mut self, n: usize) {
        let (x, y, cols) = (self.cursor.x, self.cursor.y, self.cols);
        let n = n.min(cols - x);
        let blank = self.blank();
        let row = &mut self.active_mut()[y];
        row[x..cols].rotate_left(n);
        for cell in &mut row[cols - n..cols] {
            *cell = blank;
        }
    }

    /// Insert n blank characters at cursor, shifting existing right.
    pub fn insert_chars(&mut self, n: usize) {
        let (x, y, cols) = (self.cursor.x, self.cursor.y, self.cols);
        let n = n.min(cols - x);
        let blank = self.blank();
        let row = &mut self.active_mut()[y];
        row[x..cols].rotate_right(n);
        for cell in &mut row[x..x + n] {
            *cell = blank;
        }
    }

    /// Delete n lines at cursor, scrolling up within scroll region.
    pub fn delete_lines(&mut self, n: usize) {
        let y = self.cursor.y;
        if y < self.scroll_top || y > self.scroll_bottom {
            return;
        }
        let bottom = self.scroll_bottom;
        for _ in 0..n.min(bottom - y + 1) {
            let blank = self.blank_line();
            let lines = self.active_mut();
            lines.remove(y);
            lines.insert(bottom, blank);
        }
        self.cursor.x = 0;
    }

    /// Insert n blank lines at cursor, scrolling down within scroll region.
    pub fn insert_lines(&mut self, n: usize) {
        let y = self.cursor.y;
        if y < self.scroll_top || y > self.scroll_bottom {
            return;
        }
        let bottom = self.scroll_bottom;
        for _ in 0..n.min(bottom - y + 1) {
            let blank = self.blank_line();
            let lines = self.active_mut();
            lines.remove(bottom);
            lines.insert(y, blank);
        }
        self.cursor.x = 0;
    }

    /// Switch to the alternate screen, which starts out blank.
    pub fn enter_alt_screen(&mut self) {
        if self.is_alt() {
            return;
        }
        self.primary_cursor = Some(self.cursor);
        self.alternate = blank_screen(self.cols, self.rows);
        self.modes.insert(Modes::ALT_SCREEN);
    }

    /// Return to the primary screen. With `restore_cursor` the primary
    /// cursor parked on entry (and kept current across resizes) comes back.
    pub fn exit_alt_screen(&mut self, restore_cursor: bool) {
        if !self.is_alt() {
            return;
        }
        self.modes.remove(Modes::ALT_SCREEN);
        let parked = self.primary_cursor.take();
        if restore_cursor {
            if let Some(cursor) = parked {
                self.cursor = cursor;
            }
        }
        self.clamp_cursor();
    }

    pub fn save_cursor(&mut self) {
        self.saved = Some(SavedCursor {
            cursor: self.cursor,
            pen: self.pen,
            origin: self.modes.contains(Modes::ORIGIN),
        });
    }

    pub fn restore_cursor(&mut self) {
        if let Some(saved) = self.saved {
            self.cursor.x = saved.cursor.x;
            self.cursor.y = saved.cursor.y;
            self.clear_wrap_next();
            self.pen = saved.pen;
            self.modes.set(Modes::ORIGIN, saved.origin);
            self.clamp_cursor();
        }
    }

    pub fn clamp_cursor(&mut self) {
        self.cursor.x = self.cursor.x.min(self.cols - 1);
        self.cursor.y = self.cursor.y.min(self.rows - 1);
    }

    /// RIS: back to power-on state. History and hook registrations stay.
    pub fn reset(&mut self) {
        self.primary = blank_screen(self.cols, self.rows);
        self.alternate = blank_screen(self.cols, self.rows);
        self.cursor = Cursor::default();
        self.primary_cursor = None;
        self.saved = None;
        self.pen = Pen::default();
        self.modes = Modes::default();
        self.scroll_top = 0;
        self.scroll_bottom = self.rows - 1;
        self.dcs = None;
    }

    /// Start collecting a DCS payload.
    pub fn begin_dcs(&mut self, intermediates: &[u8], action: char) {
        let mut name: String = intermediates.iter().map(|&b| char::from(b)).collect();
        name.push(action);
        self.dcs = Some(name);
    }

    pub fn put_dcs(&mut self, byte: u8) {
        if let Some(name) = self.dcs.as_mut() {
            if name.len() < MAX_HOOK_NAME && (0x20..0x7f).contains(&byte) {
                name.push(char::from(byte));
            }
        }
    }

    /// Finish a DCS sequence and fire the hook it names.
    pub fn end_dcs(&mut self) {
        if let Some(name) = self.dcs.take() {
            self.hooks.fire(&name);
        }
    }
}

pub(crate) fn blank_screen(cols: usize, rows: usize) -> Vec<Line> {
    vec![Line::blank(cols); rows]
}
