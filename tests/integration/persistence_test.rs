//! Persisted event logs on disk

use std::fs;
use std::io::Write;

use tempfile::TempDir;
use vtrec::session::{read_file, write_file};
use vtrec::{LogError, Message, Player};

use crate::helpers::{full_state, shell_session};

#[test]
fn session_survives_a_trip_through_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.ndjson");
    let events = shell_session().into_events();

    write_file(&path, &events).unwrap();
    let loaded = read_file(&path).unwrap();
    assert_eq!(loaded, events);

    let from_disk = Player::from_events(loaded);
    let in_memory = Player::from_events(events);
    assert_eq!(from_disk.view(full_state), in_memory.view(full_state));
}

#[test]
fn one_event_per_line() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.ndjson");
    let events = shell_session().into_events();
    write_file(&path, &events).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents.lines().count(), events.len());
    assert!(contents
        .lines()
        .next()
        .unwrap()
        .contains(r#""type":"resize""#));
}

#[test]
fn binary_output_is_preserved() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("binary.ndjson");
    let events = vtrec::Simulator::new()
        .add(&[0xff, 0xfe, b'a'][..])
        .add("ok")
        .into_events();

    write_file(&path, &events).unwrap();
    let loaded = read_file(&path).unwrap();
    assert_eq!(loaded[0].message, Message::output(vec![0xff, 0xfe, b'a']));
    assert_eq!(loaded[1].message, Message::output("ok"));
}

#[test]
fn truncated_tail_is_dropped() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("growing.ndjson");
    let events = shell_session().into_events();
    write_file(&path, &events).unwrap();

    let mut file = fs::OpenOptions::new().append(true).open(&path).unwrap();
    write!(file, r#"{{"stamp":"2024-01-01T00:00:00Z","message":{{"type":"out"#).unwrap();
    drop(file);

    assert_eq!(read_file(&path).unwrap(), events);
}

#[test]
fn malformed_middle_line_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.ndjson");
    let events = shell_session().into_events();
    let mut contents = String::new();
    for (i, event) in events.iter().enumerate() {
        if i == 2 {
            contents.push_str("not json\n");
        }
        contents.push_str(&event.to_json().unwrap());
        contents.push('\n');
    }
    fs::write(&path, contents).unwrap();

    match read_file(&path) {
        Err(LogError::Malformed { line, .. }) => assert_eq!(line, 3),
        other => panic!("expected malformed line, got {:?}", other.map(|e| e.len())),
    }
}

#[test]
fn missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    assert!(matches!(
        read_file(dir.path().join("nope.ndjson")),
        Err(LogError::Io(_))
    ));
}
