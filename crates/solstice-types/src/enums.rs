//! Enumeration types for the Solstice calendar simulation.
//!
//! The season cycle and the time-segment classifier both live here so
//! that consumers can reason about calendar state without depending on
//! the clock crate itself.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A season in the annual cycle.
///
/// Seasons are cyclic and strictly ordered: Spring, Summer, Autumn,
/// Winter, then back to Spring. The clock's automatic rollover follows
/// this order; a year completes when Winter wraps to Spring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Season {
    /// First season of the year.
    Spring,
    /// Second season of the year.
    Summer,
    /// Third season of the year.
    Autumn,
    /// Final season of the year; wrapping past it increments the year.
    Winter,
}

impl Season {
    /// Return the season that follows this one in cycle order.
    ///
    /// Winter wraps back to Spring. The caller is responsible for the
    /// year increment that accompanies that wrap.
    pub const fn next(self) -> Self {
        match self {
            Self::Spring => Self::Summer,
            Self::Summer => Self::Autumn,
            Self::Autumn => Self::Winter,
            Self::Winter => Self::Spring,
        }
    }

    /// Whether advancing past this season completes the annual cycle.
    pub const fn is_last(self) -> bool {
        matches!(self, Self::Winter)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Spring => "Spring",
            Self::Summer => "Summer",
            Self::Autumn => "Autumn",
            Self::Winter => "Winter",
        };
        f.write_str(name)
    }
}

/// A named sub-range of the 24-hour cycle.
///
/// Segments drive qualitative behavior in consumers (sky color, ambient
/// audio, NPC schedules). They are a pure function of the hour; see
/// [`TimeSegment::from_hour`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TimeSegment {
    /// Hours 22-23 and 0-3.
    Night,
    /// Hours 4-5.
    Dawn,
    /// Hours 6-10.
    Morning,
    /// Hours 11-12.
    Noon,
    /// Hours 13-16.
    Afternoon,
    /// Hours 17-18.
    Dusk,
    /// Hours 19-21.
    Evening,
}

impl TimeSegment {
    /// Classify an hour of the day into its segment.
    ///
    /// The mapping uses half-open ranges with inclusive lower bounds:
    /// `[4,6)` Dawn, `[6,11)` Morning, `[11,13)` Noon, `[13,17)`
    /// Afternoon, `[17,19)` Dusk, `[19,22)` Evening, and everything
    /// else Night. The function is total over `u8`; out-of-range hours
    /// fall through to Night like the late-night band does.
    pub const fn from_hour(hour: u8) -> Self {
        match hour {
            4..=5 => Self::Dawn,
            6..=10 => Self::Morning,
            11..=12 => Self::Noon,
            13..=16 => Self::Afternoon,
            17..=18 => Self::Dusk,
            19..=21 => Self::Evening,
            _ => Self::Night,
        }
    }
}

impl fmt::Display for TimeSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Night => "Night",
            Self::Dawn => "Dawn",
            Self::Morning => "Morning",
            Self::Noon => "Noon",
            Self::Afternoon => "Afternoon",
            Self::Dusk => "Dusk",
            Self::Evening => "Evening",
        };
        f.write_str(name)
    }
}
