//! SGR (Select Graphic Rendition) handler.
//!
//! Handles CSI m sequences for text styling:
//! - Colors (foreground and background)
//! - Attributes (bold, dim, italic, underline, blink, reverse, hidden, strike)
//! - 256-color and RGB color support

use super::super::performer::TerminalPerformer;
use super::super::state::Pen;
use super::super::types::{Attrs, Color};

/// The 16 base colors in SGR order (30-37, then 90-97).
const BASE_COLORS: [Color; 16] = [
    Color::Black,
    Color::Red,
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
    Color::White,
    Color::BrightBlack,
    Color::BrightRed,
    Color::BrightGreen,
    Color::BrightYellow,
    Color::BrightBlue,
    Color::BrightMagenta,
    Color::BrightCyan,
    Color::BrightWhite,
];

impl TerminalPerformer<'_> {
    /// Handle SGR (Select Graphic Rendition) - CSI m.
    /// Parses parameters and updates the pen. No parameters means reset.
    pub fn handle_sgr(&mut self, params: &[u16]) {
        if params.is_empty() {
            self.pen = Pen::default();
            return;
        }

        let mut iter = params.iter().peekable();

        while let Some(&param) = iter.next() {
            match param {
                0 => self.pen = Pen::default(), // Reset
                1 => self.pen.attrs.insert(Attrs::BOLD),
                2 => self.pen.attrs.insert(Attrs::DIM),
                3 => self.pen.attrs.insert(Attrs::ITALIC),
                4 => self.pen.attrs.insert(Attrs::UNDERLINE),
                5 | 6 => self.pen.attrs.insert(Attrs::BLINK),
                7 => self.pen.attrs.insert(Attrs::REVERSE),
                8 => self.pen.attrs.insert(Attrs::HIDDEN),
                9 => self.pen.attrs.insert(Attrs::STRIKE),
                22 => self.pen.attrs.remove(Attrs::BOLD | Attrs::DIM),
                23 => self.pen.attrs.remove(Attrs::ITALIC),
                24 => self.pen.attrs.remove(Attrs::UNDERLINE),
                25 => self.pen.attrs.remove(Attrs::BLINK),
                27 => self.pen.attrs.remove(Attrs::REVERSE),
                28 => self.pen.attrs.remove(Attrs::HIDDEN),
                29 => self.pen.attrs.remove(Attrs::STRIKE),
                // Standard foreground colors (30-37)
                30..=37 => self.pen.fg = BASE_COLORS[(param - 30) as usize],
                38 => {
                    // Extended foreground color
                    if let Some(color) = parse_extended_color(&mut iter) {
                        self.pen.fg = color;
                    }
                }
                39 => self.pen.fg = Color::Default,
                // Standard background colors (40-47)
                40..=47 => self.pen.bg = BASE_COLORS[(param - 40) as usize],
                48 => {
                    // Extended background color
                    if let Some(color) = parse_extended_color(&mut iter) {
                        self.pen.bg = color;
                    }
                }
                49 => self.pen.bg = Color::Default,
                // Bright foreground colors (90-97)
                90..=97 => self.pen.fg = BASE_COLORS[(param - 90 + 8) as usize],
                // Bright background colors (100-107)
                100..=107 => self.pen.bg = BASE_COLORS[(param - 100 + 8) as usize],
                _ => {}
            }
        }
    }
}

/// Parse extended color (256-color or RGB) from SGR parameters.
fn parse_extended_color(iter: &mut std::iter::Peekable<std::slice::Iter<'_, u16>>) -> Option<Color> {
    let &mode = iter.next()?;
    match mode {
        // 256-color mode
        5 => iter.next().map(|&idx| Color::Indexed(idx as u8)),
        2 => {
            // RGB mode
            let r = iter.next().copied().unwrap_or(0) as u8;
            let g = iter.next().copied().unwrap_or(0) as u8;
            let b = iter.next().copied().unwrap_or(0) as u8;
            Some(Color::Rgb(r, g, b))
        }
        _ => None,
    }
}
