//! Live event recording.
//!
//! A [`Recorder`] stamps every message it is given, keeps it in memory,
//! appends it to an optional persisted stream and hands it to an optional
//! downstream [`EventHandler`] (typically a player following along).

use std::io::{self, Read, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;

use super::types::{Event, Message};
use super::writer::EventWriter;
use super::EventHandler;
use crate::error::LogError;

type Sink = EventWriter<Box<dyn Write + Send>>;

#[derive(Default)]
struct RecorderState {
    events: Vec<Event>,
    sink: Option<Sink>,
}

/// Records output and resize messages as events.
#[derive(Default)]
pub struct Recorder {
    state: Mutex<RecorderState>,
    handler: Option<Arc<dyn EventHandler>>,
}

impl Recorder {
    /// A recorder that only keeps events in memory.
    pub fn new() -> Self {
        Self::default()
    }

    /// A recorder that also persists every event to `sink`.
    pub fn with_sink<W: Write + Send + 'static>(sink: W) -> Self {
        let sink: Box<dyn Write + Send> = Box::new(sink);
        Self {
            state: Mutex::new(RecorderState {
                events: Vec::new(),
                sink: Some(EventWriter::new(sink)),
            }),
            handler: None,
        }
    }

    /// Forward every recorded event to `handler`.
    pub fn with_handler(mut self, handler: Arc<dyn EventHandler>) -> Self {
        self.handler = Some(handler);
        self
    }

    fn lock(&self) -> MutexGuard<'_, RecorderState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Stamp `message` with the current time and record it.
    pub fn record(&self, message: Message) -> Result<Event, LogError> {
        let event = Event::now(message);
        self.process(event.clone())?;
        Ok(event)
    }

    pub fn output(&self, data: impl Into<Vec<u8>>) -> Result<Event, LogError> {
        self.record(Message::output(data))
    }

    pub fn resize(&self, columns: usize, rows: usize) -> Result<Event, LogError> {
        self.record(Message::resize(columns, rows))
    }

    /// A snapshot of everything recorded so far.
    pub fn events(&self) -> Vec<Event> {
        self.lock().events.clone()
    }

    pub fn len(&self) -> usize {
        self.lock().events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn flush(&self) -> Result<(), LogError> {
        match self.lock().sink.as_mut() {
            Some(sink) => sink.flush(),
            None => Ok(()),
        }
    }

    /// Wrap `inner` so every chunk read from it is recorded as output.
    pub fn reader<R: Read>(&self, inner: R) -> Recording<'_, R> {
        Recording {
            recorder: self,
            inner,
        }
    }
}

impl EventHandler for Recorder {
    fn process(&self, event: Event) -> Result<(), LogError> {
        {
            let mut state = self.lock();
            if let Some(sink) = state.sink.as_mut() {
                sink.write_event(&event)?;
            }
            state.events.push(event.clone());
        }

        if let Some(handler) = &self.handler {
            handler.process(event)?;
        }
        Ok(())
    }
}

/// A reader that records what passes through it. See [`Recorder::reader`].
pub struct Recording<'a, R> {
    recorder: &'a Recorder,
    inner: R,
}

impl<R: Read> Read for Recording<'_, R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        if n > 0 {
            debug!(bytes = n, "Recording output");
            self.recorder
                .output(&buf[..n])
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        }
        Ok(n)
    }
}
