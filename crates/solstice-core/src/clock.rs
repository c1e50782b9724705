//! The calendar clock for the Solstice simulation.
//!
//! The clock is the single source of truth for all temporal state. It
//! accumulates real-time seconds into a wrapping day cycle, derives the
//! hour, minute, day, season, and year, classifies the current hour into
//! a named time segment, and notifies observers once per boundary
//! crossing.
//!
//! # Design Principles
//!
//! - The elapsed-seconds accumulator is the source of truth; hour and
//!   minute are always derived from it, never stored independently of it.
//! - Notification delivery is synchronous, in registration order, on the
//!   caller's stack. Ordering across a day boundary is a contract:
//!   `HourChanged` observers see the pre-rollover day, while
//!   `DayChanged`, `YearChanged`, `SeasonChanged`, and `SegmentChanged`
//!   observers see fully cascaded state.
//! - The clock has exactly one writer. It is constructed by the
//!   composition root and passed by mutable reference to the frame
//!   driver; there is no global instance.

use std::fmt;

use tracing::warn;

use solstice_types::{ClockEvent, ClockSnapshot, Season, TimeSegment};

use crate::config::TimeConfig;

/// Minutes in one in-game day.
const MINUTES_PER_DAY: f64 = 1440.0;

/// Errors that can occur during clock construction.
#[derive(Debug, thiserror::Error)]
pub enum ClockError {
    /// Invalid time configuration (e.g. non-positive day length).
    #[error("invalid time configuration: {reason}")]
    InvalidConfig {
        /// Explanation of what is wrong with the configuration.
        reason: String,
    },
}

/// An observer of clock change notifications.
///
/// Observers are invoked synchronously from within `advance`,
/// `set_time`, and `set_season`, in registration order. A missing or
/// never-registered observer is not an error; notifications with zero
/// observers are simply dropped.
pub trait ClockObserver {
    /// Called for every [`ClockEvent`] the clock emits.
    fn on_event(&mut self, event: &ClockEvent);
}

/// The calendar clock.
///
/// Constructed once from a validated [`TimeConfig`], advanced every
/// simulation frame by exactly one caller, and read by everything else
/// through [`ClockSnapshot`] or [`ClockEvent`] notifications.
pub struct Clock {
    /// Seconds accumulated within the current day cycle.
    /// Invariant: `0 <= elapsed_seconds < seconds_per_day`.
    elapsed_seconds: f64,

    /// Configured real-time duration of one in-game day.
    seconds_per_day: f64,

    /// Hour at which the calendar day rolls over.
    day_start_hour: u8,

    /// Configured number of days in each season.
    days_per_season: u32,

    /// Derived hour of the day, 0-23.
    hour: u8,

    /// Derived minute of the hour, 0-59.
    minute: u8,

    /// Day within the current season, 1-based.
    day: u32,

    /// Current season.
    season: Season,

    /// Current year, 1-based.
    year: u32,

    /// Segment classification of the current hour.
    segment: TimeSegment,

    /// Last hour for which `HourChanged` fired. `None` until the first
    /// update so that the first update always fires.
    last_fired_hour: Option<u8>,

    /// Last minute for which `MinuteChanged` fired. `None` until the
    /// first update.
    last_fired_minute: Option<u8>,

    /// Whether `advance` is currently a no-op.
    paused: bool,

    /// Registered observers, invoked in registration order.
    observers: Vec<Box<dyn ClockObserver>>,
}

impl Clock {
    /// Create a new clock from a time configuration.
    ///
    /// The clock starts at `day_start_hour:00` on day 1 of Spring, year
    /// 1. `seconds_per_day` must be positive and finite,
    /// `days_per_season` at least 1, and `day_start_hour` at most 23.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::InvalidConfig`] if the configuration is
    /// invalid. A clock is never usable in a misconfigured state.
    pub fn new(config: &TimeConfig) -> Result<Self, ClockError> {
        if !config.seconds_per_day.is_finite() || config.seconds_per_day <= 0.0 {
            return Err(ClockError::InvalidConfig {
                reason: format!(
                    "seconds_per_day must be positive and finite, got {}",
                    config.seconds_per_day
                ),
            });
        }
        if config.days_per_season == 0 {
            return Err(ClockError::InvalidConfig {
                reason: "days_per_season must be at least 1".to_owned(),
            });
        }
        if config.day_start_hour > 23 {
            return Err(ClockError::InvalidConfig {
                reason: format!("day_start_hour must be 0-23, got {}", config.day_start_hour),
            });
        }

        let elapsed_seconds = f64::from(config.day_start_hour) / 24.0 * config.seconds_per_day;

        Ok(Self {
            elapsed_seconds,
            seconds_per_day: config.seconds_per_day,
            day_start_hour: config.day_start_hour,
            days_per_season: config.days_per_season,
            hour: config.day_start_hour,
            minute: 0,
            day: 1,
            season: Season::Spring,
            year: 1,
            segment: TimeSegment::from_hour(config.day_start_hour),
            last_fired_hour: None,
            last_fired_minute: None,
            paused: false,
            observers: Vec::new(),
        })
    }

    /// Register an observer. Delivery order follows registration order.
    pub fn subscribe(&mut self, observer: Box<dyn ClockObserver>) {
        self.observers.push(observer);
    }

    /// Advance the clock by `delta_seconds` of real time.
    ///
    /// No-op while paused. Negative or non-finite deltas are rejected
    /// as a no-op (logged at warn) so a misbehaving caller cannot
    /// corrupt the accumulator. A single wraparound per call is
    /// performed when the day boundary is reached; deltas larger than a
    /// full day are documented misuse and are not compensated for.
    pub fn advance(&mut self, delta_seconds: f64) {
        if self.paused {
            return;
        }
        if !delta_seconds.is_finite() || delta_seconds < 0.0 {
            warn!(delta_seconds, "rejected invalid advance delta");
            return;
        }

        self.elapsed_seconds += delta_seconds;
        if self.elapsed_seconds >= self.seconds_per_day {
            self.elapsed_seconds -= self.seconds_per_day;
        }

        self.run_update(false);
    }

    /// Reset the time of day to the given hour and minute.
    ///
    /// Out-of-range values are clamped (hour to 23, minute to 59). The
    /// update pipeline runs as a forced update: `MinuteChanged` and
    /// `HourChanged` fire even when the clamped values equal the
    /// previously fired ones, and the day rollover is never triggered.
    pub fn set_time(&mut self, hour: u8, minute: u8) {
        let hour = hour.min(23);
        let minute = minute.min(59);
        let total_minutes = u32::from(hour)
            .saturating_mul(60)
            .saturating_add(u32::from(minute));
        self.elapsed_seconds = f64::from(total_minutes) / MINUTES_PER_DAY * self.seconds_per_day;
        self.run_update(true);
    }

    /// Override the current season.
    ///
    /// Manual override: `day`, `year`, and the time segment are left
    /// untouched, and setting Winter then Spring by hand never counts
    /// as a year rollover. Emits `SeasonChanged` unconditionally.
    pub fn set_season(&mut self, season: Season) {
        self.season = season;
        self.emit(ClockEvent::SeasonChanged { season });
    }

    /// Suspend time advancement. `advance` becomes a no-op.
    pub const fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume time advancement exactly where it left off.
    pub const fn resume(&mut self) {
        self.paused = false;
    }

    /// Whether the clock is currently paused.
    pub const fn is_paused(&self) -> bool {
        self.paused
    }

    /// Normalized time of day in `[0, 1)`.
    pub fn time_of_day01(&self) -> f64 {
        self.elapsed_seconds / self.seconds_per_day
    }

    /// Current hour of the day, 0-23.
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    /// Current minute of the hour, 0-59.
    pub const fn minute(&self) -> u8 {
        self.minute
    }

    /// Day within the current season, 1-based.
    pub const fn day(&self) -> u32 {
        self.day
    }

    /// Current season.
    pub const fn season(&self) -> Season {
        self.season
    }

    /// Current year, 1-based.
    pub const fn year(&self) -> u32 {
        self.year
    }

    /// Segment classification of the current hour.
    pub const fn segment(&self) -> TimeSegment {
        self.segment
    }

    /// Configured real-time duration of one in-game day.
    pub const fn seconds_per_day(&self) -> f64 {
        self.seconds_per_day
    }

    /// Return an immutable copy of all derived public fields.
    pub fn snapshot(&self) -> ClockSnapshot {
        ClockSnapshot {
            time_of_day01: self.time_of_day01(),
            hour: self.hour,
            minute: self.minute,
            day: self.day,
            season: self.season,
            year: self.year,
            segment: self.segment,
        }
    }

    /// The update pipeline, run after every mutation of the accumulator.
    ///
    /// 1. Recompute hour and minute from the accumulator.
    /// 2. Always emit `TimeOfDayChanged`.
    /// 3. Emit `MinuteChanged` on a genuine change or a forced update.
    /// 4. Emit `HourChanged` on a genuine change or a forced update;
    ///    only a genuine crossing of `day_start_hour` triggers the day
    ///    rollover; the segment is then reclassified.
    fn run_update(&mut self, force_update: bool) {
        let (hour, minute) = self.derive_hour_minute();
        self.hour = hour;
        self.minute = minute;

        self.emit(ClockEvent::TimeOfDayChanged);

        if force_update || self.last_fired_minute != Some(minute) {
            self.emit(ClockEvent::MinuteChanged { minute });
            self.last_fired_minute = Some(minute);
        }

        if force_update || self.last_fired_hour != Some(hour) {
            self.emit(ClockEvent::HourChanged { hour });

            // A rollover needs a genuine hour-boundary crossing into the
            // day-start hour; forced updates (set_time) never qualify.
            if !force_update
                && hour == self.day_start_hour
                && self.last_fired_hour != Some(self.day_start_hour)
            {
                self.roll_day();
            }

            let segment = TimeSegment::from_hour(hour);
            if segment != self.segment {
                self.segment = segment;
                self.emit(ClockEvent::SegmentChanged { segment });
            }

            self.last_fired_hour = Some(hour);
        }
    }

    /// Derive hour and minute from the accumulator.
    fn derive_hour_minute(&self) -> (u8, u8) {
        let total_minutes = self.time_of_day01() * MINUTES_PER_DAY;
        // The accumulator invariant bounds total_minutes below 1440, so
        // the casts only drop the fractional part.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let hour = (((total_minutes / 60.0).floor() as u32) % 24) as u8;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let minute = (total_minutes % 60.0).floor() as u8;
        (hour, minute)
    }

    /// Advance the day counter, cascading into season and year rollovers.
    fn roll_day(&mut self) {
        self.day = self.day.saturating_add(1);
        self.emit(ClockEvent::DayChanged { day: self.day });
        if self.day > self.days_per_season {
            self.day = 1;
            self.roll_season();
        }
    }

    /// Advance the season in cycle order, incrementing the year when
    /// Winter wraps to Spring. `YearChanged` fires before the
    /// unconditional `SeasonChanged`.
    fn roll_season(&mut self) {
        if self.season.is_last() {
            self.season = Season::Spring;
            self.year = self.year.saturating_add(1);
            let year = self.year;
            self.emit(ClockEvent::YearChanged { year });
        } else {
            self.season = self.season.next();
        }
        let season = self.season;
        self.emit(ClockEvent::SeasonChanged { season });
    }

    /// Deliver an event to every observer, in registration order.
    fn emit(&mut self, event: ClockEvent) {
        for observer in &mut self.observers {
            observer.on_event(&event);
        }
    }
}

impl fmt::Debug for Clock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Clock")
            .field("elapsed_seconds", &self.elapsed_seconds)
            .field("seconds_per_day", &self.seconds_per_day)
            .field("day_start_hour", &self.day_start_hour)
            .field("days_per_season", &self.days_per_season)
            .field("hour", &self.hour)
            .field("minute", &self.minute)
            .field("day", &self.day)
            .field("season", &self.season)
            .field("year", &self.year)
            .field("segment", &self.segment)
            .field("paused", &self.paused)
            .field("observer_count", &self.observers.len())
            .finish()
    }
}
