//! Time-based lookup over an event log.
//!
//! Event stamps are assumed to be non-decreasing, which holds for anything
//! produced by a recorder or simulator.

use chrono::{DateTime, Duration, Utc};

use crate::session::Event;

/// Index of the last event stamped at or before `stamp`.
///
/// A `stamp` before the first event maps to index 0. Returns `None` only
/// for an empty log.
pub fn index_at_time(events: &[Event], stamp: DateTime<Utc>) -> Option<usize> {
    if events.is_empty() {
        return None;
    }
    let after = events.partition_point(|event| event.stamp <= stamp);
    Some(after.saturating_sub(1))
}

/// First and last stamps of the log.
pub fn time_span(events: &[Event]) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    Some((events.first()?.stamp, events.last()?.stamp))
}

/// Time between the first and last event.
pub fn duration(events: &[Event]) -> Duration {
    time_span(events)
        .map(|(first, last)| last - first)
        .unwrap_or_else(Duration::zero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Simulator;

    fn at(ms: i64) -> DateTime<Utc> {
        DateTime::<Utc>::default() + Duration::milliseconds(ms)
    }

    #[test]
    fn finds_last_event_at_or_before() {
        let events = Simulator::new().add("a").add("b").add("c").events();
        assert_eq!(index_at_time(&events, at(0)), Some(0));
        assert_eq!(index_at_time(&events, at(1)), Some(1));
        assert_eq!(index_at_time(&events, at(100)), Some(2));
    }

    #[test]
    fn before_first_event_is_index_zero() {
        let events = Simulator::starting_at(at(10)).add("a").events();
        assert_eq!(index_at_time(&events, at(0)), Some(0));
    }

    #[test]
    fn empty_log() {
        assert_eq!(index_at_time(&[], at(0)), None);
        assert_eq!(time_span(&[]), None);
        assert_eq!(duration(&[]), Duration::zero());
    }

    #[test]
    fn span_and_duration() {
        let events = Simulator::new().add("a").add((4, 4)).add("b").events();
        assert_eq!(time_span(&events), Some((at(0), at(2))));
        assert_eq!(duration(&events), Duration::milliseconds(2));
    }
}
