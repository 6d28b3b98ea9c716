//! Mode handlers.
//!
//! Handles set/reset mode sequences:
//! - CSI h / CSI l: ANSI modes (20: LNM)
//! - CSI ? h / CSI ? l: DEC private modes
//!   (6: DECOM, 7: DECAWM, 25: DECTCEM, 47/1047/1049: alternate screen)
//! - ESC c: RIS - full reset

use tracing::{debug, trace};

use super::super::performer::TerminalPerformer;
use super::super::types::{CursorState, Modes};

impl TerminalPerformer<'_> {
    /// Handle SM / RM (CSI h / CSI l).
    pub fn handle_ansi_modes(&mut self, params: &[u16], enable: bool) {
        for &mode in params {
            match mode {
                20 => self.modes.set(Modes::LINE_FEED, enable),
                _ => trace!(mode, enable, "Unhandled ANSI mode"),
            }
        }
    }

    /// Handle DECSET / DECRST (CSI ? h / CSI ? l).
    pub fn handle_dec_modes(&mut self, params: &[u16], enable: bool) {
        for &mode in params {
            match mode {
                6 => {
                    self.modes.set(Modes::ORIGIN, enable);
                    self.home_cursor();
                }
                7 => self.modes.set(Modes::AUTOWRAP, enable),
                25 => self.cursor.state.set(CursorState::HIDDEN, !enable),
                47 | 1047 => self.switch_screen(enable, false),
                1049 => self.switch_screen(enable, true),
                _ => trace!(mode, enable, "Unhandled DEC private mode"),
            }
        }
    }

    fn switch_screen(&mut self, alternate: bool, restore_cursor: bool) {
        debug!(alternate, "Switching screen");
        if alternate {
            self.enter_alt_screen();
        } else {
            self.exit_alt_screen(restore_cursor);
        }
    }

    /// Handle RIS (ESC c).
    pub fn handle_full_reset(&mut self) {
        debug!("Full terminal reset");
        self.reset();
    }
}
