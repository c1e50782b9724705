//! Frame driver: the real-time loop that advances the clock.
//!
//! The driver is the clock's only writer. Each frame it advances the
//! clock by a fixed simulated step (`frame_interval_ms * time_scale`),
//! which keeps the simulation deterministic regardless of scheduler
//! jitter; the tokio interval only paces delivery. The loop stops when
//! a configured bound is reached or on Ctrl-C.

use std::time::Instant;

use tokio::time::{Duration, MissedTickBehavior};
use tracing::info;

use solstice_core::clock::Clock;
use solstice_core::config::EngineConfig;
use solstice_types::ClockSnapshot;

/// The reason a driver run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunEndReason {
    /// The configured number of day rollovers was reached.
    MaxDaysReached,
    /// The configured wall-clock budget elapsed.
    MaxRealTimeReached,
    /// Ctrl-C was received.
    Interrupted,
}

/// Result of a driver run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    /// Why the run ended.
    pub end_reason: RunEndReason,
    /// Total frames executed.
    pub frames: u64,
    /// Number of day rollovers observed during the run.
    pub days_elapsed: u32,
    /// The clock state at the end of the run.
    pub final_snapshot: ClockSnapshot,
}

/// Run the frame loop until a termination condition is met.
///
/// Borrowing the clock mutably for the whole run makes the
/// single-writer rule a borrow-checker fact: no other code can mutate
/// or read the clock while the driver owns it.
pub async fn run(clock: &mut Clock, config: &EngineConfig) -> RunSummary {
    let frame_ms = config.frame_interval_ms.max(1);
    let step_seconds = duration_to_secs(frame_ms) * config.time_scale;
    let started = Instant::now();

    let mut interval = tokio::time::interval(Duration::from_millis(frame_ms));
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut frames: u64 = 0;
    let mut days_elapsed: u32 = 0;
    let mut last_day = clock.day();

    info!(
        frame_interval_ms = frame_ms,
        time_scale = config.time_scale,
        max_days = config.max_days,
        max_real_time_seconds = config.max_real_time_seconds,
        "Driver starting"
    );

    loop {
        tokio::select! {
            _ = interval.tick() => {}
            _ = tokio::signal::ctrl_c() => {
                info!("Ctrl-C received, stopping");
                return summarize(clock, RunEndReason::Interrupted, frames, days_elapsed);
            }
        }

        clock.advance(step_seconds);
        frames = frames.saturating_add(1);

        // Day rollovers always move the day counter (30 wraps to 1).
        if clock.day() != last_day {
            last_day = clock.day();
            days_elapsed = days_elapsed.saturating_add(1);
        }

        if config.max_days > 0 && days_elapsed >= config.max_days {
            info!(days_elapsed, "Day limit reached");
            return summarize(clock, RunEndReason::MaxDaysReached, frames, days_elapsed);
        }

        if config.max_real_time_seconds > 0
            && started.elapsed().as_secs() >= config.max_real_time_seconds
        {
            info!(
                max_seconds = config.max_real_time_seconds,
                "Real-time limit reached"
            );
            return summarize(clock, RunEndReason::MaxRealTimeReached, frames, days_elapsed);
        }
    }
}

/// Log the end of a run.
pub fn log_run_end(summary: &RunSummary) {
    info!(
        reason = ?summary.end_reason,
        frames = summary.frames,
        days_elapsed = summary.days_elapsed,
        day = summary.final_snapshot.day,
        season = %summary.final_snapshot.season,
        year = summary.final_snapshot.year,
        segment = %summary.final_snapshot.segment,
        "Run ended"
    );
}

fn summarize(clock: &Clock, end_reason: RunEndReason, frames: u64, days_elapsed: u32) -> RunSummary {
    RunSummary {
        end_reason,
        frames,
        days_elapsed,
        final_snapshot: clock.snapshot(),
    }
}

/// Milliseconds to fractional seconds, routed through `Duration` to
/// avoid a lossy integer-to-float cast.
fn duration_to_secs(ms: u64) -> f64 {
    Duration::from_millis(ms).as_secs_f64()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use solstice_core::clock::Clock;
    use solstice_core::config::{EngineConfig, TimeConfig};
    use solstice_types::Season;

    use super::*;

    fn fast_clock() -> Clock {
        // One simulated second per in-game hour.
        let config = TimeConfig {
            seconds_per_day: 24.0,
            day_start_hour: 0,
            days_per_season: 30,
        };
        Clock::new(&config).unwrap()
    }

    #[tokio::test]
    async fn bounded_by_max_days() {
        let mut clock = fast_clock();
        let config = EngineConfig {
            frame_interval_ms: 1,
            // 1 ms frames advance 1 simulated second = 1 in-game hour.
            time_scale: 1000.0,
            max_days: 2,
            max_real_time_seconds: 0,
        };

        let summary = run(&mut clock, &config).await;

        assert_eq!(summary.end_reason, RunEndReason::MaxDaysReached);
        assert_eq!(summary.days_elapsed, 2);
        assert_eq!(summary.final_snapshot.day, 3);
        assert_eq!(summary.final_snapshot.season, Season::Spring);
        // 24 frames per full day, two days.
        assert_eq!(summary.frames, 48);
    }

    #[tokio::test]
    async fn bounded_by_real_time() {
        let mut clock = fast_clock();
        clock.pause();
        let config = EngineConfig {
            frame_interval_ms: 1,
            time_scale: 1000.0,
            max_days: 0,
            max_real_time_seconds: 1,
        };

        let summary = run(&mut clock, &config).await;

        // The clock is paused, so only the wall-clock bound can fire.
        assert_eq!(summary.end_reason, RunEndReason::MaxRealTimeReached);
        assert_eq!(summary.days_elapsed, 0);
        assert_eq!(summary.final_snapshot.day, 1);
    }
}
