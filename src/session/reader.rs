//! Persisted event stream reader.
//!
//! Streams are NDJSON: one [`Event`] per line. A stream that was cut off
//! while being written (the recorder crashed, the file is still growing)
//! ends cleanly at the last complete event.
//!
//! # Error Handling
//!
//! - End of stream and a truncated final record both end iteration.
//! - A complete line that does not parse is [`LogError::Malformed`].
//! - Any other I/O error is [`LogError::Io`].

use std::fs;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::warn;

use super::types::Event;
use crate::error::LogError;

/// Iterator over the events of a persisted stream.
pub struct EventReader<R> {
    reader: R,
    buf: Vec<u8>,
    line: usize,
    done: bool,
}

impl<R: BufRead> EventReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            line: 0,
            done: false,
        }
    }

    /// Stop iterating, optionally yielding a final error.
    fn finish(&mut self, error: Option<LogError>) -> Option<Result<Event, LogError>> {
        self.done = true;
        error.map(Err)
    }
}

impl<R: BufRead> Iterator for EventReader<R> {
    type Item = Result<Event, LogError>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            self.buf.clear();
            match self.reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => return self.finish(None),
                Ok(_) => {}
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                    warn!(line = self.line + 1, "Event stream ended unexpectedly");
                    return self.finish(None);
                }
                Err(e) => return self.finish(Some(e.into())),
            }
            self.line += 1;

            // Lines are raw bytes: a cut can land inside a UTF-8 sequence.
            let complete = self.buf.ends_with(b"\n");
            if self.buf.iter().all(u8::is_ascii_whitespace) {
                continue;
            }

            match serde_json::from_slice::<Event>(&self.buf) {
                Ok(event) => return Some(Ok(event)),
                Err(_) if !complete => {
                    warn!(line = self.line, "Ignoring truncated trailing event");
                    return self.finish(None);
                }
                Err(source) => {
                    let line = self.line;
                    return self.finish(Some(LogError::Malformed { line, source }));
                }
            }
        }
        None
    }
}

/// Read every event from `reader`.
pub fn read_events<R: BufRead>(reader: R) -> Result<Vec<Event>, LogError> {
    EventReader::new(reader).collect()
}

/// Read every event from the file at `path`.
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Vec<Event>, LogError> {
    let file = fs::File::open(path.as_ref())?;
    read_events(BufReader::new(file))
}
