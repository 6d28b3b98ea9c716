//! Snapshot tests for terminal screen dumps
//!
//! Tests escape sequence handling, scrollback and reflow as rendered text.

use vtrec::{Terminal, TerminalOptions, TerminalView};

use crate::helpers::{screen_text, shell_session};

/// Helper to create a terminal and process input
fn process(input: &str) -> String {
    process_sized(input, 40, 10)
}

/// Helper with custom dimensions
fn process_sized(input: &str, cols: usize, rows: usize) -> String {
    let mut term = Terminal::with_options(TerminalOptions::new(cols, rows));
    term.write(input.as_bytes());
    term.to_string()
}

/// History followed by the screen, separated by a rule.
fn dump(term: &Terminal) -> String {
    let history: Vec<String> = term
        .history()
        .iter()
        .map(|l| l.to_string().trim_end().to_string())
        .collect();
    format!("{}\n-----\n{}", history.join("\n"), screen_text(term))
}

// ============================================================================
// Basic text output
// ============================================================================

#[test]
fn terminal_simple_text() {
    insta::assert_snapshot!(process("Hello, World!"), @"Hello, World!");
}

#[test]
fn terminal_multiline_text() {
    insta::assert_snapshot!(process("Line 1\r\nLine 2\r\nLine 3"), @r"
    Line 1
    Line 2
    Line 3
    ");
}

#[test]
fn terminal_text_with_carriage_return() {
    insta::assert_snapshot!(process("XXXX\rHello"), @"Hello");
}

#[test]
fn terminal_text_wrap_at_boundary() {
    insta::assert_snapshot!(
        process_sized("This is a line that is longer than twenty", 20, 5),
        @r"
    This is a line that
    is longer than twent
    y
    "
    );
}

// ============================================================================
// Cursor movement and editing
// ============================================================================

#[test]
fn terminal_cursor_up() {
    insta::assert_snapshot!(process("Line1\r\nLine2\r\nLine3\x1b[2AX"), @r"
    Line1X
    Line2
    Line3
    ");
}

#[test]
fn terminal_erase_to_end_of_line() {
    insta::assert_snapshot!(process("Hello World\x1b[6D\x1b[K"), @"Hello");
}

#[test]
fn terminal_absolute_positioning() {
    assert_eq!(process("\x1b[3;5Hx\x1b[1;1Hy"), "y\n\n    x");
}

// ============================================================================
// Alternate screen
// ============================================================================

#[test]
fn terminal_alt_screen_keeps_primary() {
    let mut term = Terminal::with_options(TerminalOptions::new(20, 3));
    term.write(b"primary\x1b[?1049h\x1b[Halt");
    insta::assert_snapshot!(term.to_string(), @"alt");

    term.write(b"\x1b[?1049l");
    insta::assert_snapshot!(term.to_string(), @"primary");
}

// ============================================================================
// Scrollback and reflow
// ============================================================================

#[test]
fn terminal_scrollback() {
    let mut term = Terminal::with_options(TerminalOptions::new(10, 3));
    term.write(b"1\r\n2\r\n3\r\n4\r\n5");
    insta::assert_snapshot!(dump(&term), @r"
    1
    2
    -----
    3
    4
    5
    ");
}

#[test]
fn terminal_reflow_narrower_then_wider() {
    let mut term = Terminal::with_options(TerminalOptions::new(10, 3));
    term.write(b"abcdefghij");

    term.resize(5, 3);
    insta::assert_snapshot!(term.to_string(), @r"
    abcde
    fghij
    ");

    term.resize(10, 3);
    insta::assert_snapshot!(term.to_string(), @"abcdefghij");
}

#[test]
fn terminal_reflow_pushes_into_history() {
    let mut term = Terminal::with_options(TerminalOptions::new(10, 2));
    term.write(b"0123456789\r\nxy");

    term.resize(5, 2);
    insta::assert_snapshot!(dump(&term), @r"
    01234
    -----
    56789
    xy
    ");
}

#[test]
fn shell_session_final_screen() {
    let player = vtrec::Player::from_events(shell_session().into_events());
    insta::assert_snapshot!(player.view(screen_text), @r"
    日本語
    $ vim
    $ exit
    ");
}
