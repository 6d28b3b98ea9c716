//! VTE performer implementation.
//!
//! Contains the `TerminalPerformer` struct that implements the vte::Perform trait.
//! Handles escape sequence dispatch to handler modules.

use std::ops::{Deref, DerefMut};

use tracing::trace;
use vte::Perform;

use super::handlers::{log_unhandled_csi, log_unhandled_esc};
use super::state::TermState;

/// Performer that handles VTE callbacks and updates the terminal state.
pub(crate) struct TerminalPerformer<'a> {
    term: &'a mut TermState,
}

impl<'a> TerminalPerformer<'a> {
    pub fn new(term: &'a mut TermState) -> Self {
        Self { term }
    }
}

impl Deref for TerminalPerformer<'_> {
    type Target = TermState;

    fn deref(&self) -> &TermState {
        self.term
    }
}

impl DerefMut for TerminalPerformer<'_> {
    fn deref_mut(&mut self) -> &mut TermState {
        self.term
    }
}

/// First parameter, with 0 treated as absent (count-style parameters).
fn count(params: &[u16]) -> usize {
    params.first().copied().filter(|&x| x != 0).unwrap_or(1) as usize
}

/// Parameter `i` as a raw value, 0 when absent.
fn arg(params: &[u16], i: usize) -> u16 {
    params.get(i).copied().unwrap_or(0)
}

impl Perform for TerminalPerformer<'_> {
    fn print(&mut self, c: char) {
        self.put_char(c);
    }

    fn execute(&mut self, byte: u8) {
        match byte {
            b'\n' | b'\x0b' | b'\x0c' => self.handle_line_feed(),
            b'\r' => self.carriage_return(),
            b'\x08' => self.handle_backspace(), // Backspace
            b'\t' => self.handle_tab(),
            _ => {}
        }
    }

    fn hook(&mut self, _params: &vte::Params, intermediates: &[u8], ignore: bool, action: char) {
        if ignore {
            return;
        }
        self.begin_dcs(intermediates, action);
    }

    fn put(&mut self, byte: u8) {
        self.put_dcs(byte);
    }

    fn unhook(&mut self) {
        self.end_dcs();
    }

    fn osc_dispatch(&mut self, params: &[&[u8]], _bell_terminated: bool) {
        trace!(
            command = ?params.first().map(|p| String::from_utf8_lossy(p)),
            "Ignoring OSC sequence"
        );
    }

    fn csi_dispatch(
        &mut self,
        params: &vte::Params,
        intermediates: &[u8],
        _ignore: bool,
        action: char,
    ) {
        let params: Vec<u16> = params
            .iter()
            .map(|p| p.first().copied().unwrap_or(0))
            .collect();

        // DEC private modes (ESC[?...h/l). Other private sequences such as
        // mouse tracking (ESC[<...) do not affect the grid.
        if intermediates.first() == Some(&b'?') {
            match action {
                'h' => self.handle_dec_modes(&params, true),
                'l' => self.handle_dec_modes(&params, false),
                _ => log_unhandled_csi(action, &params, intermediates),
            }
            return;
        }
        if !intermediates.is_empty() {
            log_unhandled_csi(action, &params, intermediates);
            return;
        }

        match action {
            // Cursor movement (handlers/cursor.rs)
            'A' => self.handle_cursor_up(count(&params)),
            'B' | 'e' => self.handle_cursor_down(count(&params)),
            'C' | 'a' => self.handle_cursor_forward(count(&params)),
            'D' => self.handle_cursor_back(count(&params)),
            'E' => self.handle_cursor_next_line(count(&params)),
            'F' => self.handle_cursor_previous_line(count(&params)),
            'H' | 'f' => {
                let row = arg(&params, 0).max(1) as usize;
                let col = arg(&params, 1).max(1) as usize;
                self.handle_cursor_position(row, col);
            }
            'G' | '`' => self.handle_cursor_horizontal_absolute(count(&params)),
            'd' => self.handle_cursor_vertical_absolute(count(&params)),
            's' => self.save_cursor(),
            'u' => self.restore_cursor(),

            // Editing (handlers/editing.rs)
            'J' => self.handle_erase_display(arg(&params, 0)),
            'K' => self.handle_erase_line(arg(&params, 0)),
            'L' => self.handle_insert_lines(count(&params)),
            'M' => self.handle_delete_lines(count(&params)),
            'P' => self.handle_delete_chars(count(&params)),
            '@' => self.handle_insert_chars(count(&params)),
            'X' => self.handle_erase_chars(count(&params)),

            // Style (handlers/style.rs)
            'm' => self.handle_sgr(&params),

            // Modes (handlers/modes.rs)
            'h' => self.handle_ansi_modes(&params, true),
            'l' => self.handle_ansi_modes(&params, false),

            // Scroll region (handlers/scroll.rs)
            'r' => {
                let top = arg(&params, 0).max(1) as usize;
                let bottom = match arg(&params, 1) {
                    0 => self.rows,
                    b => b as usize,
                };
                self.handle_set_scroll_region(top, bottom);
            }
            'S' => self.handle_scroll_up(count(&params)),
            'T' => self.handle_scroll_down(count(&params)),

            _ => log_unhandled_csi(action, &params, intermediates),
        }
    }

    fn esc_dispatch(&mut self, intermediates: &[u8], _ignore: bool, byte: u8) {
        if !intermediates.is_empty() {
            // Charset designations (ESC ( B and friends) do not change the grid.
            log_unhandled_esc(byte, intermediates);
            return;
        }
        match byte {
            b'7' => self.save_cursor(),
            b'8' => self.restore_cursor(),
            b'D' => self.handle_index(),
            b'E' => self.handle_next_line(),
            b'M' => self.handle_reverse_index(),
            b'c' => self.handle_full_reset(),
            _ => log_unhandled_esc(byte, intermediates),
        }
    }
}
