//! Event log types.
//!
//! An [`Event`] is a wall-clock stamp plus a [`Message`]. Messages are a
//! closed set of variants tagged by `type` in their persisted form:
//!
//! ```text
//! {"stamp":"2024-01-01T00:00:00Z","message":{"type":"output","data":"hello\r\n"}}
//! {"stamp":"2024-01-01T00:00:01Z","message":{"type":"resize","columns":80,"rows":24}}
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A message recorded in the event log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Message {
    /// Raw bytes written by the application.
    Output {
        #[serde(with = "payload")]
        data: Vec<u8>,
    },
    /// The terminal changed size.
    Resize { columns: usize, rows: usize },
}

impl Message {
    pub fn output(data: impl Into<Vec<u8>>) -> Self {
        Message::Output { data: data.into() }
    }

    pub fn resize(columns: usize, rows: usize) -> Self {
        Message::Resize { columns, rows }
    }

    /// Output payload, if this is an output message.
    pub fn data(&self) -> Option<&[u8]> {
        match self {
            Message::Output { data } => Some(data),
            Message::Resize { .. } => None,
        }
    }
}

/// A time-stamped message. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub stamp: DateTime<Utc>,
    pub message: Message,
}

impl Event {
    pub fn new(stamp: DateTime<Utc>, message: Message) -> Self {
        Self { stamp, message }
    }

    /// Stamp `message` with the current time.
    pub fn now(message: Message) -> Self {
        Self::new(Utc::now(), message)
    }

    /// Parse an event from one line of a persisted stream.
    pub fn from_json(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }

    /// Encode as a single JSON line (without the trailing newline).
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Output payloads are stored as a JSON string when they are valid UTF-8,
/// which keeps logs readable, and as an array of bytes otherwise.
mod payload {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(data: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        match std::str::from_utf8(data) {
            Ok(text) => serializer.serialize_str(text),
            Err(_) => serializer.collect_seq(data),
        }
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Payload {
        Text(String),
        Bytes(Vec<u8>),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        Ok(match Payload::deserialize(deserializer)? {
            Payload::Text(text) => text.into_bytes(),
            Payload::Bytes(bytes) => bytes,
        })
    }
}
