//! Scrollback history.
//!
//! Physical rows evicted off the top of the primary screen, oldest first.
//! Rows keep their soft-wrap markers so that reflow can rejoin a logical
//! line that continues from history onto the screen.

use std::collections::VecDeque;

use super::types::{Attrs, Line};
use super::wrap::join_lines;

/// Bounded store of evicted rows.
///
/// A limit of zero disables history entirely: pushed rows are dropped.
#[derive(Debug, Clone)]
pub struct History {
    rows: VecDeque<Line>,
    limit: usize,
}

impl History {
    pub fn new(limit: usize) -> Self {
        Self {
            rows: VecDeque::new(),
            limit,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.limit > 0
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append a row, evicting the oldest rows past the limit.
    pub fn push(&mut self, line: Line) {
        if !self.is_enabled() {
            return;
        }
        self.rows.push_back(line);
        self.enforce_limit();
    }

    /// Whether the newest row continues onto whatever follows it.
    pub fn ends_wrapped(&self) -> bool {
        self.rows.back().map(Line::is_wrapped).unwrap_or(false)
    }

    /// Remove and return every row, oldest first.
    pub(crate) fn take(&mut self) -> Vec<Line> {
        self.rows.drain(..).collect()
    }

    /// Replace the contents, applying the limit.
    pub(crate) fn replace(&mut self, rows: Vec<Line>) {
        if !self.is_enabled() {
            self.rows.clear();
            return;
        }
        self.rows = rows.into();
        self.enforce_limit();
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Physical rows, oldest first.
    pub fn rows(&self) -> impl Iterator<Item = &Line> {
        self.rows.iter()
    }

    /// Rows joined into logical lines, with the unoccupied tail of each
    /// line trimmed.
    pub fn logical(&self) -> Vec<Line> {
        let rows: Vec<Line> = self.rows.iter().cloned().collect();
        join_lines(&rows)
            .into_iter()
            .map(|mut line| {
                if !line.is_wrapped() {
                    let len = line.occupied_len();
                    line.truncate(len);
                }
                line
            })
            .collect()
    }

    /// Number of logical lines that start in history.
    pub(crate) fn logical_starts(&self) -> usize {
        let mut count = 0;
        let mut continues = false;
        for row in self.rows.iter() {
            if !continues {
                count += 1;
            }
            continues = row.is_wrapped();
        }
        count
    }

    /// Cells of the trailing, still-open logical line held in history.
    pub(crate) fn open_tail_len(&self) -> usize {
        self.rows
            .iter()
            .rev()
            .take_while(|row| row.is_wrapped())
            .map(|row| {
                let pads = row
                    .iter()
                    .rev()
                    .take_while(|g| g.attrs.contains(Attrs::PAD))
                    .count();
                row.len() - pads
            })
            .sum()
    }

    fn enforce_limit(&mut self) {
        while self.rows.len() > self.limit {
            self.rows.pop_front();
        }
    }
}
