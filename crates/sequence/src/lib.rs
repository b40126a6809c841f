//! # daystream-sequence
//!
//! Lazy calendar-day sequence production.
//!
//! A [`DaySequence`] yields UTC instants separated by exactly 24 hours,
//! starting from `start` and stopping after the last instant `<= end`
//! (or never, when no bound is given). Production is pull-based: nothing
//! is computed until the consumer asks for the next value, so day spans
//! of any length cost nothing up front.
//!
//! ## Quick start
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use daystream_sequence::DaySequence;
//!
//! let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
//! let end = Utc.with_ymd_and_hms(2024, 1, 3, 0, 0, 0).unwrap();
//!
//! // Bounded: three days, inclusive on both ends.
//! let days: Vec<_> = DaySequence::bounded(start, end).unwrap().collect();
//! assert_eq!(days.len(), 3);
//!
//! // Unbounded: the consumer imposes its own limit.
//! let first_week: Vec<_> = DaySequence::unbounded(start).take(7).collect();
//! assert_eq!(first_week.len(), 7);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `sequence` | The day-sequence producer and its iterator protocol |
//! | `error` | Error types |

mod error;
mod sequence;

pub use error::SequenceError;
pub use sequence::DaySequence;
