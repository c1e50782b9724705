//! Core structs shared between the clock and its consumers.

use serde::{Deserialize, Serialize};

use crate::enums::{Season, TimeSegment};

/// An immutable copy of the clock's derived public fields.
///
/// Snapshots are for consumers that poll rather than subscribe. They
/// carry no behavior and never feed back into the clock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClockSnapshot {
    /// Normalized time of day in `[0, 1)`.
    pub time_of_day01: f64,
    /// Hour of the day, 0-23.
    pub hour: u8,
    /// Minute of the hour, 0-59.
    pub minute: u8,
    /// Day within the current season, 1-based.
    pub day: u32,
    /// Current season.
    pub season: Season,
    /// Current year, 1-based.
    pub year: u32,
    /// Segment classification of the current hour.
    pub segment: TimeSegment,
}
