//! Time-stamped event log.
//!
//! - `types`: [`Event`] and the closed [`Message`] sum type
//! - `reader` / `writer`: the persisted NDJSON form
//! - `recorder`: stamps live output and resizes, persists and forwards them
//! - `simulator`: deterministic event sequences for tests and demos

mod reader;
mod recorder;
mod simulator;
mod types;
mod writer;

pub use reader::{read_events, read_file, EventReader};
pub use recorder::{Recorder, Recording};
pub use simulator::{Simulator, Step};
pub use types::{Event, Message};
pub use writer::{write_events, write_file, EventWriter};

use crate::error::LogError;

/// A consumer of events, such as a player or a recorder.
pub trait EventHandler: Send + Sync {
    fn process(&self, event: Event) -> Result<(), LogError>;
}
