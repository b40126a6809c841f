//! Calendar-day sequence production.

use chrono::{DateTime, Duration, NaiveTime, Utc};
use tracing::debug;

use crate::error::SequenceError;

/// A lazy, forward-only sequence of calendar-day instants.
///
/// Starting from `start`, each pull yields the current instant and
/// advances the internal cursor by exactly 24 hours. With a bound, the
/// sequence is exhausted once the cursor passes it; without one, it
/// never ends and the consumer imposes its own limit (e.g. via
/// [`Iterator::take`]).
///
/// The first yielded instant always equals `start`. The last yielded
/// instant is always `<= end`; when `end` falls exactly `n * 24h` after
/// `start`, the last instant equals `end`.
///
/// A sequence is single-pass: it is consumed by iteration and cannot be
/// restarted. Clone it up front if the same span is needed twice.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use daystream_sequence::DaySequence;
///
/// let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
/// let end = Utc.with_ymd_and_hms(2024, 1, 3, 0, 0, 0).unwrap();
///
/// let days: Vec<_> = DaySequence::bounded(start, end).unwrap().collect();
/// assert_eq!(days.len(), 3);
/// assert_eq!(days[0], start);
/// assert_eq!(days[2], end);
/// ```
#[derive(Debug, Clone)]
pub struct DaySequence {
    cursor: DateTime<Utc>,
    end: Option<DateTime<Utc>>,
}

impl DaySequence {
    /// Creates a sequence from `start` with an optional bound.
    ///
    /// Validation is eager: a reversed span is rejected here, never at
    /// first pull.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::EndBeforeStart`] if `end` is present and
    /// precedes `start`.
    pub fn new(
        start: DateTime<Utc>,
        end: Option<DateTime<Utc>>,
    ) -> Result<Self, SequenceError> {
        if let Some(end) = end {
            if end < start {
                return Err(SequenceError::EndBeforeStart { start, end });
            }
        }
        debug!(%start, ?end, "creating day sequence");
        Ok(Self { cursor: start, end })
    }

    /// Creates a finite sequence from `start` through `end` inclusive.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::EndBeforeStart`] if `end` precedes `start`.
    pub fn bounded(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, SequenceError> {
        Self::new(start, Some(end))
    }

    /// Creates an infinite sequence from `start`.
    pub fn unbounded(start: DateTime<Utc>) -> Self {
        debug!(%start, "creating unbounded day sequence");
        Self {
            cursor: start,
            end: None,
        }
    }

    /// Creates an infinite sequence starting at the current UTC day's
    /// midnight.
    pub fn from_today() -> Self {
        Self::unbounded(today_utc())
    }

    /// Creates a finite sequence from the current UTC day's midnight
    /// through `end` inclusive.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::EndBeforeStart`] if `end` precedes the
    /// current UTC day's midnight.
    pub fn from_today_until(end: DateTime<Utc>) -> Result<Self, SequenceError> {
        Self::bounded(today_utc(), end)
    }

    /// Returns the bound, if any.
    pub fn end(&self) -> Option<DateTime<Utc>> {
        self.end
    }
}

impl Iterator for DaySequence {
    type Item = DateTime<Utc>;

    fn next(&mut self) -> Option<DateTime<Utc>> {
        if let Some(end) = self.end {
            if self.cursor > end {
                return None;
            }
        }
        let current = self.cursor;
        self.cursor = current + Duration::hours(24);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.end {
            Some(end) if self.cursor > end => (0, Some(0)),
            Some(end) => {
                let remaining = ((end - self.cursor).num_hours() / 24) as usize + 1;
                (remaining, Some(remaining))
            }
            None => (usize::MAX, None),
        }
    }
}

// The cursor only ever advances, so an exhausted sequence stays exhausted.
impl std::iter::FusedIterator for DaySequence {}

/// Current UTC day truncated to midnight.
fn today_utc() -> DateTime<Utc> {
    Utc::now().date_naive().and_time(NaiveTime::MIN).and_utc()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn new_valid() {
        let seq = DaySequence::new(utc(2024, 1, 1, 0, 0, 0), Some(utc(2024, 1, 3, 0, 0, 0)));
        assert!(seq.is_ok());
    }

    #[test]
    fn new_end_before_start() {
        let start = utc(2024, 1, 2, 0, 0, 0);
        let end = utc(2024, 1, 1, 0, 0, 0);
        assert_eq!(
            DaySequence::new(start, Some(end)).unwrap_err(),
            SequenceError::EndBeforeStart { start, end }
        );
    }

    #[test]
    fn new_without_end_never_fails() {
        assert!(DaySequence::new(utc(2024, 1, 1, 0, 0, 0), None).is_ok());
    }

    #[test]
    fn bounded_three_days() {
        let days: Vec<_> = DaySequence::bounded(utc(2024, 1, 1, 0, 0, 0), utc(2024, 1, 3, 0, 0, 0))
            .unwrap()
            .collect();
        assert_eq!(
            days,
            vec![
                utc(2024, 1, 1, 0, 0, 0),
                utc(2024, 1, 2, 0, 0, 0),
                utc(2024, 1, 3, 0, 0, 0),
            ]
        );
    }

    #[test]
    fn start_equals_end_single_value() {
        let at = utc(2024, 6, 15, 0, 0, 0);
        let days: Vec<_> = DaySequence::bounded(at, at).unwrap().collect();
        assert_eq!(days, vec![at]);
    }

    #[test]
    fn sub_day_bound_single_value() {
        let days: Vec<_> =
            DaySequence::bounded(utc(2024, 1, 1, 0, 0, 0), utc(2024, 1, 1, 12, 0, 0))
                .unwrap()
                .collect();
        assert_eq!(days, vec![utc(2024, 1, 1, 0, 0, 0)]);
    }

    #[test]
    fn unbounded_keeps_producing() {
        let mut seq = DaySequence::unbounded(utc(2024, 1, 1, 0, 0, 0));
        assert_eq!(seq.next(), Some(utc(2024, 1, 1, 0, 0, 0)));
        assert_eq!(seq.next(), Some(utc(2024, 1, 2, 0, 0, 0)));
        assert_eq!(seq.next(), Some(utc(2024, 1, 3, 0, 0, 0)));
        // Still open after three pulls.
        assert_eq!(seq.next(), Some(utc(2024, 1, 4, 0, 0, 0)));
    }

    #[test]
    fn fused_after_exhaustion() {
        let mut seq = DaySequence::bounded(utc(2024, 1, 1, 0, 0, 0), utc(2024, 1, 1, 0, 0, 0))
            .unwrap();
        assert!(seq.next().is_some());
        assert_eq!(seq.next(), None);
        assert_eq!(seq.next(), None);
    }

    #[test]
    fn size_hint_bounded() {
        let seq = DaySequence::bounded(utc(2024, 1, 1, 0, 0, 0), utc(2024, 1, 3, 0, 0, 0))
            .unwrap();
        assert_eq!(seq.size_hint(), (3, Some(3)));
    }

    #[test]
    fn size_hint_shrinks_as_consumed() {
        let mut seq = DaySequence::bounded(utc(2024, 1, 1, 0, 0, 0), utc(2024, 1, 3, 0, 0, 0))
            .unwrap();
        seq.next();
        assert_eq!(seq.size_hint(), (2, Some(2)));
        seq.next();
        seq.next();
        assert_eq!(seq.size_hint(), (0, Some(0)));
    }

    #[test]
    fn size_hint_sub_day_bound() {
        let seq = DaySequence::bounded(utc(2024, 1, 1, 0, 0, 0), utc(2024, 1, 1, 12, 0, 0))
            .unwrap();
        assert_eq!(seq.size_hint(), (1, Some(1)));
    }

    #[test]
    fn size_hint_unbounded() {
        let seq = DaySequence::unbounded(utc(2024, 1, 1, 0, 0, 0));
        assert_eq!(seq.size_hint(), (usize::MAX, None));
    }

    #[test]
    fn start_offset_is_preserved() {
        let days: Vec<_> =
            DaySequence::bounded(utc(2024, 1, 1, 12, 34, 56), utc(2024, 1, 4, 0, 0, 0))
                .unwrap()
                .collect();
        assert_eq!(
            days,
            vec![
                utc(2024, 1, 1, 12, 34, 56),
                utc(2024, 1, 2, 12, 34, 56),
                utc(2024, 1, 3, 12, 34, 56),
            ]
        );
    }

    #[test]
    fn from_today_starts_at_midnight() {
        let mut seq = DaySequence::from_today();
        let first = seq.next().unwrap();
        assert_eq!(first.hour(), 0);
        assert_eq!(first.minute(), 0);
        assert_eq!(first.second(), 0);
        assert_eq!(first.nanosecond(), 0);
        let now = Utc::now();
        assert!(first <= now);
        assert!(now - first < Duration::hours(24));
    }

    #[test]
    fn from_today_until_rejects_past_end() {
        let end = utc(1999, 1, 1, 0, 0, 0);
        assert!(matches!(
            DaySequence::from_today_until(end),
            Err(SequenceError::EndBeforeStart { .. })
        ));
    }

    #[test]
    fn clone_is_independent() {
        let mut a = DaySequence::unbounded(utc(2024, 1, 1, 0, 0, 0));
        let mut b = a.clone();
        a.next();
        a.next();
        // Advancing one cursor never touches the other.
        assert_eq!(b.next(), Some(utc(2024, 1, 1, 0, 0, 0)));
    }

    #[test]
    fn end_accessor() {
        let end = utc(2024, 1, 3, 0, 0, 0);
        let seq = DaySequence::bounded(utc(2024, 1, 1, 0, 0, 0), end).unwrap();
        assert_eq!(seq.end(), Some(end));
        assert_eq!(DaySequence::unbounded(end).end(), None);
    }

    #[test]
    fn send_trait() {
        fn assert_send<T: Send>() {}
        assert_send::<DaySequence>();
    }
}
