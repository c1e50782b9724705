//! Consumer-side observer that reports calendar changes to the log.
//!
//! This stands in for the visual atmosphere systems (sun rotation,
//! color grading, ambient audio) that subscribe to the clock in a full
//! client. It demonstrates the notification contract: discrete boundary
//! events are logged at increasing severity, while the per-frame
//! `TimeOfDayChanged` signal is deliberately ignored here because
//! continuous consumers poll the snapshot instead.

use tracing::{debug, info, trace};

use solstice_core::clock::ClockObserver;
use solstice_types::ClockEvent;

/// Observer that logs every discrete calendar change.
#[derive(Debug, Default)]
pub struct AtmosphereLog;

impl ClockObserver for AtmosphereLog {
    fn on_event(&mut self, event: &ClockEvent) {
        match *event {
            // Per-frame interpolation signal; too hot to log.
            ClockEvent::TimeOfDayChanged => {}
            ClockEvent::MinuteChanged { minute } => trace!(minute, "Minute changed"),
            ClockEvent::HourChanged { hour } => debug!(hour, "Hour changed"),
            ClockEvent::DayChanged { day } => info!(day, "Day began"),
            ClockEvent::SeasonChanged { season } => info!(%season, "Season changed"),
            ClockEvent::YearChanged { year } => info!(year, "Year changed"),
            ClockEvent::SegmentChanged { segment } => info!(%segment, "Segment changed"),
        }
    }
}
