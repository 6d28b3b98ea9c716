//! Seekable replay of an event log.
//!
//! A [`Player`] owns a [`Terminal`] and the events it has been given, and
//! can move that terminal to the state after any byte of any event:
//!
//! - forward moves replay only the bytes between the two locations
//! - backward moves rebuild the terminal and replay from the start
//!
//! While a consumer holds the player ([`Player::acquire`]), new events are
//! parked in a side buffer so the sequence being seeked over stays fixed.
//! [`Player::release`] catches the terminal up and drains the buffer.
//! Processing an event never moves the terminal; only seeks do.
//!
//! - `seeking`: time to event index lookup

pub mod seeking;

use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::error::LogError;
use crate::session::{Event, EventHandler, Message};
use crate::terminal::{Terminal, TerminalOptions, TerminalView};

/// A seek position: an event index and the last applied byte of that
/// event's payload.
///
/// An offset of -1 means no byte of the event has been applied yet (or the
/// event has no payload). Resize events always sit at offset 0 once applied.
/// Locations order by index, then offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Location {
    pub index: usize,
    pub offset: isize,
}

impl Location {
    /// Nothing replayed yet.
    pub const START: Location = Location {
        index: 0,
        offset: -1,
    };
}

impl Default for Location {
    fn default() -> Self {
        Location::START
    }
}

struct PlayerState {
    terminal: Terminal,
    events: Vec<Event>,
    location: Location,
    in_use: bool,
    /// Events received while in use.
    buffer: Vec<Event>,
}

/// Replays an event log into a terminal on demand.
pub struct Player {
    state: Mutex<PlayerState>,
    options: TerminalOptions,
    hooks: Vec<String>,
}

impl Player {
    pub fn new(options: TerminalOptions) -> Self {
        Self {
            state: Mutex::new(PlayerState {
                terminal: Terminal::with_options(options),
                events: Vec::new(),
                location: Location::START,
                in_use: false,
                buffer: Vec::new(),
            }),
            options,
            hooks: Vec::new(),
        }
    }

    /// Register `names` as hooks on the terminal, including every terminal
    /// rebuilt by a backward seek.
    pub fn with_hooks<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hooks = names.into_iter().map(Into::into).collect();
        let hooks = self.hooks.clone();
        self.lock().terminal.changes().set_hooks(hooks);
        self
    }

    /// A default-sized player holding `events`, seeked to the end.
    pub fn from_events(events: impl IntoIterator<Item = Event>) -> Self {
        let player = Self::new(TerminalOptions::default());
        {
            let mut state = player.lock();
            for event in events {
                state.store(event);
            }
            state.goto(&player, -1, -1);
        }
        player
    }

    fn lock(&self) -> MutexGuard<'_, PlayerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn fresh_terminal(&self) -> Terminal {
        let mut terminal = Terminal::with_options(self.options);
        terminal.changes().set_hooks(self.hooks.iter().cloned());
        terminal
    }

    /// Take exclusive use of the player. Events processed from now until
    /// [`release`](Self::release) are buffered instead of applied.
    pub fn acquire(&self) {
        self.lock().in_use = true;
    }

    /// Catch the terminal up to the end of the log as it stood while in
    /// use, then append every event that arrived meanwhile. The appended
    /// events are not replayed until the next seek.
    pub fn release(&self) {
        let mut state = self.lock();
        state.goto(self, -1, -1);
        let buffered = std::mem::take(&mut state.buffer);
        if !buffered.is_empty() {
            debug!(events = buffered.len(), "Draining buffered events");
        }
        state.events.extend(buffered);
        state.in_use = false;
    }

    pub fn is_in_use(&self) -> bool {
        self.lock().in_use
    }

    /// Move the terminal to the state just after byte `offset` of event
    /// `index`. Negative values count from the end; out of range values are
    /// clamped. For resize events the offset is ignored.
    pub fn goto(&self, index: isize, offset: isize) {
        self.lock().goto(self, index, offset);
    }

    /// Move to the end of the last event stamped at or before `stamp`.
    pub fn goto_time(&self, stamp: DateTime<Utc>) {
        let mut state = self.lock();
        if let Some(index) = seeking::index_at_time(&state.events, stamp) {
            state.goto(self, index as isize, -1);
        }
    }

    pub fn location(&self) -> Location {
        self.lock().location
    }

    /// A snapshot of the events seeks operate over. Buffered events are
    /// not included until release.
    pub fn events(&self) -> Vec<Event> {
        self.lock().events.clone()
    }

    pub fn len(&self) -> usize {
        self.lock().events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_alt_mode(&self) -> bool {
        self.lock().terminal.is_alt_mode()
    }

    /// Run `f` with read-only access to the terminal.
    ///
    /// The player stays locked while `f` runs, so `f` must not call back
    /// into this player; doing so deadlocks.
    pub fn view<T>(&self, f: impl FnOnce(&dyn TerminalView) -> T) -> T {
        let state = self.lock();
        f(&state.terminal)
    }

    /// Drain hook `name` on the current terminal.
    pub fn hook(&self, name: &str) -> Option<bool> {
        self.lock().terminal.changes().hook(name)
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new(TerminalOptions::default())
    }
}

impl EventHandler for Player {
    fn process(&self, event: Event) -> Result<(), LogError> {
        self.lock().store(event);
        Ok(())
    }
}

impl PlayerState {
    /// Append `event`, or park it while in use.
    fn store(&mut self, event: Event) {
        if self.in_use {
            self.buffer.push(event);
        } else {
            self.events.push(event);
        }
    }

    fn goto(&mut self, player: &Player, index: isize, offset: isize) {
        let Some(target) = self.resolve(index, offset) else {
            return;
        };

        let mut from = self.location;
        if target < from {
            debug!(?from, ?target, "Seeking backward; replaying from start");
            self.terminal = player.fresh_terminal();
            from = Location::START;
        } else {
            debug!(?from, ?target, "Seeking forward");
        }

        for i in from.index..=target.index {
            match &self.events[i].message {
                Message::Output { data } => {
                    let start = if i == from.index {
                        (from.offset + 1) as usize
                    } else {
                        0
                    };
                    let end = if i == target.index {
                        (target.offset + 1) as usize
                    } else {
                        data.len()
                    };
                    if start < end {
                        self.terminal.write(&data[start..end]);
                    }
                }
                Message::Resize { columns, rows } => {
                    if i == from.index && from.offset >= 0 {
                        continue;
                    }
                    self.terminal.resize(*columns, *rows);
                }
            }
        }

        self.location = target;
    }

    /// Clamp a requested location onto the event log.
    fn resolve(&self, index: isize, offset: isize) -> Option<Location> {
        let len = self.events.len() as isize;
        if len == 0 {
            return None;
        }
        let index = (if index < 0 { len + index } else { index }).clamp(0, len - 1) as usize;

        let offset = match &self.events[index].message {
            Message::Output { data } if data.is_empty() => -1,
            Message::Output { data } => {
                let len = data.len() as isize;
                (if offset < 0 { len + offset } else { offset }).clamp(0, len - 1)
            }
            Message::Resize { .. } => 0,
        };

        Some(Location { index, offset })
    }
}
