//! # Timestamp Value Object
//!
//! Millisecond-precision UTC timestamp used across the domain.
//!
//! Stored as milliseconds since the Unix epoch so it serializes to a plain
//! integer and orders correctly without timezone concerns.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Millisecond-precision UTC timestamp.
///
/// # Examples
///
/// ```
/// use cadok_trades::domain::value_objects::timestamp::Timestamp;
///
/// let created = Timestamp::now();
/// let later = created.add_secs(60);
/// assert!(later > created);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Returns the current time.
    #[must_use]
    pub fn now() -> Self {
        Self(Utc::now().timestamp_millis())
    }

    /// Creates a timestamp from milliseconds since the Unix epoch.
    ///
    /// Returns `None` if the value falls outside the representable
    /// date range.
    #[must_use]
    pub fn from_millis(millis: i64) -> Option<Self> {
        DateTime::from_timestamp_millis(millis).map(|_| Self(millis))
    }

    /// Returns milliseconds since the Unix epoch.
    #[inline]
    #[must_use]
    pub const fn as_millis(self) -> i64 {
        self.0
    }

    /// Returns a timestamp offset by the given number of seconds.
    #[must_use]
    pub const fn add_secs(self, secs: i64) -> Self {
        Self(self.0 + secs * 1000)
    }

    /// Returns a timestamp offset by the given number of milliseconds.
    #[must_use]
    pub const fn add_millis(self, millis: i64) -> Self {
        Self(self.0 + millis)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match DateTime::from_timestamp_millis(self.0) {
            Some(dt) => write!(f, "{}", dt.to_rfc3339()),
            None => write!(f, "{}ms", self.0),
        }
    }
}
