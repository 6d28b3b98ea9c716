//! CLI behaviour tests
//!
//! Runs the vtrec binary against logs written to a temp directory.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use vtrec::session::write_file;
use vtrec::Simulator;

/// Write a small two-line session and return its path.
fn write_log(dir: &Path) -> PathBuf {
    let path = dir.join("session.ndjson");
    let events = Simulator::new()
        .add((20, 3))
        .add("hello\r\n")
        .add("world")
        .into_events();
    write_file(&path, &events).unwrap();
    path
}

/// Helper to run vtrec isolated from any user config
fn vtrec(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("vtrec").unwrap();
    cmd.arg("--config").arg(dir.join("config.toml"));
    cmd
}

#[test]
fn show_prints_final_screen() {
    let dir = TempDir::new().unwrap();
    let log = write_log(dir.path());

    vtrec(dir.path())
        .arg("show")
        .arg(&log)
        .assert()
        .success()
        .stdout("hello\nworld\ncursor 5,1 at event 2 byte 4\n");
}

#[test]
fn show_seeks_to_a_byte() {
    let dir = TempDir::new().unwrap();
    let log = write_log(dir.path());

    vtrec(dir.path())
        .args(["show", "--index", "1", "--offset", "2"])
        .arg(&log)
        .assert()
        .success()
        .stdout("hel\ncursor 3,0 at event 1 byte 2\n");
}

#[test]
fn show_accepts_negative_locations() {
    let dir = TempDir::new().unwrap();
    let log = write_log(dir.path());

    vtrec(dir.path())
        .args(["show", "--index", "-2", "--offset", "-1"])
        .arg(&log)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("hello\ncursor 0,1"));
}

#[test]
fn show_history_prints_scrollback() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("scroll.ndjson");
    let events = Simulator::new()
        .add((10, 2))
        .add("one\r\ntwo\r\nthree")
        .into_events();
    write_file(&path, &events).unwrap();

    vtrec(dir.path())
        .args(["show", "--history"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("one\n----------\ntwo\nthree\n"));
}

#[test]
fn info_summarizes_log() {
    let dir = TempDir::new().unwrap();
    let log = write_log(dir.path());

    vtrec(dir.path())
        .arg("info")
        .arg(&log)
        .assert()
        .success()
        .stdout(predicate::str::contains("Events:   3"))
        .stdout(predicate::str::contains("Output:   2 (12 bytes)"))
        .stdout(predicate::str::contains("Duration: 0.002s"))
        .stdout(predicate::str::contains("Size:     20x3"));
}

#[test]
fn events_lists_each_event() {
    let dir = TempDir::new().unwrap();
    let log = write_log(dir.path());

    vtrec(dir.path())
        .arg("events")
        .arg(&log)
        .assert()
        .success()
        .stdout(predicate::str::contains("resize 20x3"))
        .stdout(predicate::str::contains(r#"output "hello\r\n""#))
        .stdout(predicate::str::contains(r#"output "world""#));
}

#[test]
fn missing_log_fails() {
    let dir = TempDir::new().unwrap();

    vtrec(dir.path())
        .arg("show")
        .arg(dir.path().join("missing.ndjson"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read event log"));
}

#[test]
fn invalid_config_fails() {
    let dir = TempDir::new().unwrap();
    let log = write_log(dir.path());
    std::fs::write(dir.path().join("config.toml"), "[terminal]\nrows = 0\n").unwrap();

    vtrec(dir.path())
        .arg("info")
        .arg(&log)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config"));
}
