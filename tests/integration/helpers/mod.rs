//! Shared helpers for integration tests

use vtrec::{Simulator, TerminalView};

/// Visible screen rows, right-trimmed, trailing empty rows dropped.
pub fn screen_text(term: &dyn TerminalView) -> String {
    term.text()
}

/// Everything observable about a terminal, for exact comparisons.
pub fn full_state(term: &dyn TerminalView) -> (Vec<String>, Vec<String>, String, bool) {
    (
        term.history().iter().map(|l| l.to_string()).collect(),
        term.screen().iter().map(|l| l.to_string()).collect(),
        format!("{:?}", term.cursor()),
        term.is_alt_mode(),
    )
}

/// A shell-like session: prompts, a wrapped line, wide characters, a
/// full-screen program on the alternate screen and a couple of resizes.
pub fn shell_session() -> Simulator {
    Simulator::new()
        .add((20, 5))
        .add("$ ls\r\n")
        .add("alpha  beta  gamma  delta  epsilon\r\n")
        .add("$ echo 日本語\r\n日本語\r\n")
        .add((12, 5))
        .add("$ vim\r\n")
        .add("\x1b[?1049h\x1b[H~\r\n~\r\n~")
        .add((15, 4))
        .add("\x1b[?1049l")
        .add("$ ")
        .add(&b""[..])
        .add("exit\r\n")
}
