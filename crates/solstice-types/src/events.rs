//! Change notifications raised by the clock.
//!
//! Each variant carries only the new value: no previous value, no
//! timestamp. Consumers that need the rest of the calendar state read a
//! [`ClockSnapshot`] when the notification arrives.
//!
//! Delivery is synchronous and in registration order on the caller's
//! stack. On an hour that crosses the day boundary the order is:
//! `TimeOfDayChanged`, `MinuteChanged`, `HourChanged`, `DayChanged`,
//! then (when the season wraps) `YearChanged` before `SeasonChanged`,
//! then `SegmentChanged`. `HourChanged` observers see the pre-rollover
//! day; `DayChanged` and later observers see post-rollover state.
//!
//! [`ClockSnapshot`]: crate::structs::ClockSnapshot

use serde::{Deserialize, Serialize};

use crate::enums::{Season, TimeSegment};

/// A change notification emitted by the clock's update pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ClockEvent {
    /// Raised on every update, even when no discrete field changed.
    ///
    /// This is the high-frequency signal for continuous interpolation
    /// (sun rotation, color grading). It carries no payload; consumers
    /// poll the clock's normalized time of day.
    TimeOfDayChanged,

    /// The minute value crossed a boundary (or a forced update ran).
    MinuteChanged {
        /// The new minute, 0-59.
        minute: u8,
    },

    /// The hour value crossed a boundary (or a forced update ran).
    HourChanged {
        /// The new hour, 0-23.
        hour: u8,
    },

    /// The day counter advanced past the configured day-start hour.
    DayChanged {
        /// The new day within the current season, 1-based.
        day: u32,
    },

    /// The season changed, by rollover or by manual override.
    SeasonChanged {
        /// The new season.
        season: Season,
    },

    /// The annual cycle completed (Winter wrapped to Spring).
    YearChanged {
        /// The new year, 1-based.
        year: u32,
    },

    /// The time segment classification of the current hour changed.
    SegmentChanged {
        /// The new segment.
        segment: TimeSegment,
    },
}
