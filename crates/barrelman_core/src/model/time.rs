//! Tick-based date/time and duration values.
//!
//! # Responsibility
//! - Represent instants and durations with 100 ns resolution.
//! - Reconstruct both from the 64-bit integer columns used by the schema.
//!
//! # Invariants
//! - `DateTime` ticks count from 0001-01-01T00:00:00 UTC.
//! - `TimeSpan` ticks are signed.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

pub const TICKS_PER_SECOND: i64 = 10_000_000;

/// Point in time, stored as ticks since 0001-01-01T00:00:00 UTC.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateTime {
    ticks: i64,
}

impl DateTime {
    pub const ZERO: DateTime = DateTime { ticks: 0 };

    pub const fn from_ticks(ticks: i64) -> Self {
        Self { ticks }
    }

    pub const fn ticks(self) -> i64 {
        self.ticks
    }

    pub const fn is_zero(self) -> bool {
        self.ticks == 0
    }
}

impl Display for DateTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}t", self.ticks)
    }
}

/// Signed duration in ticks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeSpan {
    ticks: i64,
}

impl TimeSpan {
    pub const ZERO: TimeSpan = TimeSpan { ticks: 0 };

    pub const fn from_ticks(ticks: i64) -> Self {
        Self { ticks }
    }

    pub const fn from_seconds(seconds: i64) -> Self {
        Self {
            ticks: seconds * TICKS_PER_SECOND,
        }
    }

    pub const fn ticks(self) -> i64 {
        self.ticks
    }

    pub const fn is_zero(self) -> bool {
        self.ticks == 0
    }
}

impl Display for TimeSpan {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}t", self.ticks)
    }
}

#[cfg(test)]
mod tests {
    use super::{DateTime, TimeSpan, TICKS_PER_SECOND};

    #[test]
    fn zero_values_report_zero() {
        assert!(DateTime::ZERO.is_zero());
        assert!(TimeSpan::ZERO.is_zero());
        assert!(!DateTime::from_ticks(1).is_zero());
    }

    #[test]
    fn seconds_scale_to_ticks() {
        assert_eq!(TimeSpan::from_seconds(-3).ticks(), -3 * TICKS_PER_SECOND);
    }

    #[test]
    fn serializes_as_raw_ticks() {
        let json = serde_json::to_string(&TimeSpan::from_seconds(2)).unwrap();
        assert_eq!(json, "20000000");
        let json = serde_json::to_string(&DateTime::from_ticks(42)).unwrap();
        assert_eq!(json, "42");
    }
}
