//! Recording live output into a persisted log and a following player

use std::fs::File;
use std::io::Read;
use std::sync::Arc;

use tempfile::TempDir;
use vtrec::session::read_file;
use vtrec::{Player, Recorder, TerminalOptions};

use crate::helpers::{full_state, screen_text};

#[test]
fn recorder_feeds_file_and_player() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("live.ndjson");

    let player = Arc::new(Player::new(TerminalOptions::new(20, 4)));
    let recorder = Recorder::with_sink(File::create(&path).unwrap()).with_handler(player.clone());

    recorder.resize(20, 4).unwrap();
    recorder.output("$ make\r\n").unwrap();
    recorder.output("building...").unwrap();
    recorder.flush().unwrap();

    assert_eq!(player.len(), 3);
    player.goto(-1, -1);
    assert_eq!(player.view(screen_text), "$ make\nbuilding...");

    let persisted = read_file(&path).unwrap();
    assert_eq!(persisted, recorder.events());

    let replayed = Player::from_events(persisted);
    assert_eq!(replayed.view(full_state), player.view(full_state));
}

#[test]
fn recording_reader_captures_chunks() {
    let recorder = Recorder::new();
    let source: &[u8] = b"line one\r\nline two\r\n";

    let mut captured = Vec::new();
    recorder.reader(source).read_to_end(&mut captured).unwrap();

    assert_eq!(captured, source);
    let recorded: Vec<u8> = recorder
        .events()
        .iter()
        .filter_map(|e| e.message.data())
        .flatten()
        .copied()
        .collect();
    assert_eq!(recorded, source);
}

#[test]
fn player_catches_up_after_a_held_seek() {
    let player = Arc::new(Player::new(TerminalOptions::new(20, 4)));
    let recorder = Recorder::new().with_handler(player.clone());

    recorder.output("first\r\n").unwrap();
    player.acquire();
    player.goto(0, 0);
    recorder.output("second\r\n").unwrap();
    assert_eq!(player.view(screen_text), "f");
    assert_eq!(player.len(), 1);

    player.release();
    assert_eq!(player.view(screen_text), "first");
    assert_eq!(player.len(), recorder.len());

    player.goto(-1, -1);
    assert_eq!(player.view(screen_text), "first\nsecond");
}
