//! Persisted event stream writer.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::types::Event;
use crate::error::LogError;

/// Appends events to a sink, one JSON object per line.
pub struct EventWriter<W: Write> {
    inner: W,
    written: usize,
}

impl<W: Write> EventWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, written: 0 }
    }

    pub fn write_event(&mut self, event: &Event) -> Result<(), LogError> {
        let json = event.to_json().map_err(LogError::Encode)?;
        writeln!(self.inner, "{}", json)?;
        self.written += 1;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), LogError> {
        self.inner.flush()?;
        Ok(())
    }

    /// Number of events written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

/// Write `events` to `writer`.
pub fn write_events<W: Write>(writer: W, events: &[Event]) -> Result<(), LogError> {
    let mut writer = EventWriter::new(writer);
    for event in events {
        writer.write_event(event)?;
    }
    writer.flush()
}

/// Create (or truncate) the file at `path` and write `events` to it.
pub fn write_file<P: AsRef<Path>>(path: P, events: &[Event]) -> Result<(), LogError> {
    let file = fs::File::create(path.as_ref())?;
    write_events(BufWriter::new(file), events)
}
