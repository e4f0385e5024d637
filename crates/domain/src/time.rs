//! Time and timestamp helpers.
//!
//! Timestamps travel as RFC 3339 strings in the JSON wire form
//! (`lastUpdated`, energy reading `timestamp`).

use chrono::{DateTime, Utc};

/// UTC timestamp used for `last_updated` and energy reading times.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Stamp for a record last touched at `previous` and touched again at `at`.
///
/// Never earlier than `previous`, so per-record stamps are non-decreasing
/// even if the wall clock steps back.
#[must_use]
pub fn advance(previous: Timestamp, at: Timestamp) -> Timestamp {
    previous.max(at)
}
