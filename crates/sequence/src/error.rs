//! Error types for the daystream-sequence crate.

use chrono::{DateTime, Utc};

/// Error type for all fallible operations in the daystream-sequence crate.
///
/// Construction is the only fallible step: once a sequence exists,
/// production either emits a value or signals exhaustion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SequenceError {
    /// Returned when the requested bound precedes the first instant.
    #[error("end {end} is before start {start}")]
    EndBeforeStart {
        /// The requested first instant of the sequence.
        start: DateTime<Utc>,
        /// The invalid bound that was provided.
        end: DateTime<Utc>,
    },
}
