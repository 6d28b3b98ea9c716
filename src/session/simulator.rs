//! Deterministic event sequences.
//!
//! Builds an event log from a list of steps without a live application,
//! stamping events one millisecond apart.
//!
//! ```
//! use vtrec::session::Simulator;
//!
//! let events = Simulator::new()
//!     .add((80, 24))
//!     .add("hello\r\n")
//!     .events();
//! assert_eq!(events.len(), 2);
//! ```

use chrono::{DateTime, Duration, Utc};

use super::types::{Event, Message};

/// One simulated write: output bytes or a resize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Output(Vec<u8>),
    Resize(usize, usize),
}

impl From<&str> for Step {
    fn from(text: &str) -> Self {
        Step::Output(text.as_bytes().to_vec())
    }
}

impl From<String> for Step {
    fn from(text: String) -> Self {
        Step::Output(text.into_bytes())
    }
}

impl From<&[u8]> for Step {
    fn from(bytes: &[u8]) -> Self {
        Step::Output(bytes.to_vec())
    }
}

impl From<Vec<u8>> for Step {
    fn from(bytes: Vec<u8>) -> Self {
        Step::Output(bytes)
    }
}

/// `(columns, rows)`
impl From<(usize, usize)> for Step {
    fn from((columns, rows): (usize, usize)) -> Self {
        Step::Resize(columns, rows)
    }
}

impl From<Step> for Message {
    fn from(step: Step) -> Self {
        match step {
            Step::Output(data) => Message::output(data),
            Step::Resize(columns, rows) => Message::resize(columns, rows),
        }
    }
}

/// Builder for event sequences.
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    start: DateTime<Utc>,
    events: Vec<Event>,
}

impl Simulator {
    /// Events start at the Unix epoch.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(start: DateTime<Utc>) -> Self {
        Self {
            start,
            events: Vec::new(),
        }
    }

    /// Append one step.
    pub fn add(mut self, step: impl Into<Step>) -> Self {
        let stamp = self.start + Duration::milliseconds(self.events.len() as i64);
        self.events.push(Event::new(stamp, Message::from(step.into())));
        self
    }

    /// Append several steps of the same kind.
    pub fn add_all<I, S>(self, steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Step>,
    {
        steps.into_iter().fold(self, |sim, step| sim.add(step))
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.clone()
    }

    pub fn into_events(self) -> Vec<Event> {
        self.events
    }
}
