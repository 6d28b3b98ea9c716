//! Terminal data types.
//!
//! Contains the core data structures for representing terminal state:
//! - Color: ANSI color codes (16 colors, 256-color palette, RGB)
//! - Attrs: per-glyph attribute bits, including the soft-wrap marker
//! - Glyph: a single character cell with its colors and attributes
//! - Line: one physical (or, after joining, logical) row of glyphs
//! - Cursor / CursorState: cursor position and its state bits
//! - Modes: terminal mode register

use std::fmt;
use std::ops::{Deref, DerefMut};

use bitflags::bitflags;

/// ANSI color codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
    /// 256-color palette index
    Indexed(u8),
    /// RGB color
    Rgb(u8, u8, u8),
}

bitflags! {
    /// Attribute bits carried by every glyph.
    ///
    /// The low bits are SGR styling copied from the pen. The high bits
    /// describe the cell itself and are never set by SGR.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct Attrs: u16 {
        const BOLD        = 1 << 0;
        const DIM         = 1 << 1;
        const ITALIC      = 1 << 2;
        const UNDERLINE   = 1 << 3;
        const BLINK       = 1 << 4;
        const REVERSE     = 1 << 5;
        const HIDDEN      = 1 << 6;
        const STRIKE      = 1 << 7;

        /// Last cell of a physical line that continues on the next one.
        const WRAP        = 1 << 8;
        /// The cell was explicitly written by a print.
        const TOUCHED     = 1 << 9;
        /// First half of a double-width character.
        const WIDE        = 1 << 10;
        /// Second half of a double-width character.
        const WIDE_SPACER = 1 << 11;
        /// Filler left in the last column when a wide character wrapped early.
        const PAD         = 1 << 12;
    }
}

impl Attrs {
    /// Bits that SGR controls.
    pub const STYLE: Attrs = Attrs::BOLD
        .union(Attrs::DIM)
        .union(Attrs::ITALIC)
        .union(Attrs::UNDERLINE)
        .union(Attrs::BLINK)
        .union(Attrs::REVERSE)
        .union(Attrs::HIDDEN)
        .union(Attrs::STRIKE);
}

/// A single cell in the terminal grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
    pub attrs: Attrs,
}

impl Default for Glyph {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::Default,
            bg: Color::Default,
            attrs: Attrs::empty(),
        }
    }
}

impl Glyph {
    /// A blank, never-written cell carrying only a background color
    /// (used by erase operations).
    pub fn blank(bg: Color) -> Self {
        Self {
            bg,
            ..Self::default()
        }
    }

    /// Filler cell used when a wide character cannot fit in the last column.
    pub(crate) fn pad() -> Self {
        Self {
            attrs: Attrs::PAD,
            ..Self::default()
        }
    }

    /// Whether this cell holds content that must survive trimming.
    ///
    /// Untouched cells with the default background are considered empty
    /// even if an SGR reset explicitly selected the default colors.
    pub fn is_occupied(&self) -> bool {
        self.attrs.contains(Attrs::TOUCHED) || self.bg != Color::Default
    }

    pub fn is_wrapped(&self) -> bool {
        self.attrs.contains(Attrs::WRAP)
    }
}

/// An ordered run of glyphs.
///
/// On screen a line is exactly as wide as the terminal. History and
/// reflow may produce lines of any length.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line(Vec<Glyph>);

impl Line {
    /// A line of `cols` untouched cells.
    pub fn blank(cols: usize) -> Self {
        Line(vec![Glyph::default(); cols])
    }

    pub fn into_inner(self) -> Vec<Glyph> {
        self.0
    }

    /// Whether the last cell carries the soft-wrap marker.
    pub fn is_wrapped(&self) -> bool {
        self.0.last().map(Glyph::is_wrapped).unwrap_or(false)
    }

    /// Length of the line once trailing unoccupied cells are dropped.
    pub fn occupied_len(&self) -> usize {
        self.0
            .iter()
            .rposition(Glyph::is_occupied)
            .map(|i| i + 1)
            .unwrap_or(0)
    }

    pub fn is_blank(&self) -> bool {
        self.occupied_len() == 0
    }
}

impl From<Vec<Glyph>> for Line {
    fn from(cells: Vec<Glyph>) -> Self {
        Line(cells)
    }
}

impl FromIterator<Glyph> for Line {
    fn from_iter<I: IntoIterator<Item = Glyph>>(iter: I) -> Self {
        Line(iter.into_iter().collect())
    }
}

impl Deref for Line {
    type Target = Vec<Glyph>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Line {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl fmt::Display for Line {
    /// Every cell's character, with the spacer half of wide characters skipped.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for glyph in self.0.iter() {
            if glyph.attrs.contains(Attrs::WIDE_SPACER) {
                continue;
            }
            write!(f, "{}", glyph.ch)?;
        }
        Ok(())
    }
}

bitflags! {
    /// Cursor state bits.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct CursorState: u8 {
        /// The next printed character starts a new physical line.
        const WRAP_NEXT = 1 << 0;
        /// Cursor is hidden (DECTCEM reset).
        const HIDDEN    = 1 << 1;
    }
}

/// Cursor position relative to the active screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub x: usize,
    pub y: usize,
    pub state: CursorState,
}

impl Cursor {
    pub fn new(x: usize, y: usize) -> Self {
        Self {
            x,
            y,
            state: CursorState::empty(),
        }
    }

    pub fn wrap_next(&self) -> bool {
        self.state.contains(CursorState::WRAP_NEXT)
    }

    pub fn is_visible(&self) -> bool {
        !self.state.contains(CursorState::HIDDEN)
    }
}

bitflags! {
    /// Terminal mode register.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Modes: u16 {
        /// LNM: line feed also performs a carriage return.
        const LINE_FEED  = 1 << 0;
        /// The alternate screen is active.
        const ALT_SCREEN = 1 << 1;
        /// DECOM: cursor addressing is relative to the scroll region.
        const ORIGIN     = 1 << 2;
        /// DECAWM: printing past the last column wraps.
        const AUTOWRAP   = 1 << 3;
    }
}

impl Default for Modes {
    fn default() -> Self {
        Modes::AUTOWRAP
    }
}

/// Position of the first on-screen row within the logical line space
/// formed by history followed by the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Root {
    /// Logical line index (counting retained history lines).
    pub row: usize,
    /// Column offset of the first screen row within that logical line.
    pub col: usize,
}
