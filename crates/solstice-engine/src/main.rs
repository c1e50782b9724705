//! Engine binary for the Solstice calendar simulation.
//!
//! This is the composition root: it loads configuration, constructs the
//! clock, wires up the atmosphere observer, and runs the frame driver
//! until a termination condition is met.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `solstice-config.yaml`
//! 2. Initialize structured logging (tracing)
//! 3. Create the clock from the time config
//! 4. Subscribe the atmosphere logging observer
//! 5. Run the frame driver
//! 6. Log the result

mod atmosphere;
mod driver;
mod error;

use std::path::PathBuf;

use tracing::info;
use tracing_subscriber::EnvFilter;

use solstice_core::clock::Clock;
use solstice_core::config::SimulationConfig;

use crate::atmosphere::AtmosphereLog;
use crate::error::EngineError;

/// Default configuration file, relative to the working directory.
const CONFIG_FILE: &str = "solstice-config.yaml";

/// Application entry point for the engine.
///
/// # Errors
///
/// Returns an error if configuration loading or clock construction
/// fails.
#[tokio::main]
async fn main() -> Result<(), EngineError> {
    // 1. Load configuration. A missing file means defaults, so the
    //    binary runs out of the box.
    let config = load_config()?;

    // 2. Initialize structured logging. RUST_LOG overrides the
    //    configured level.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .init();

    info!("solstice-engine starting");
    info!(
        seconds_per_day = config.time.seconds_per_day,
        day_start_hour = config.time.day_start_hour,
        days_per_season = config.time.days_per_season,
        "Configuration loaded"
    );

    // 3. Create the clock.
    let mut clock = Clock::new(&config.time)?;
    info!(
        hour = clock.hour(),
        day = clock.day(),
        season = %clock.season(),
        year = clock.year(),
        segment = %clock.segment(),
        "Clock initialized"
    );

    // 4. Subscribe the atmosphere observer.
    clock.subscribe(Box::new(AtmosphereLog));

    // 5. Run the frame driver.
    let summary = driver::run(&mut clock, &config.engine).await;

    // 6. Log the result.
    driver::log_run_end(&summary);

    Ok(())
}

/// Locate and load the configuration file.
///
/// `SOLSTICE_CONFIG` overrides the default path. A missing file is not
/// an error: the defaults describe a runnable simulation.
fn load_config() -> Result<SimulationConfig, EngineError> {
    let path = std::env::var("SOLSTICE_CONFIG")
        .map_or_else(|_| PathBuf::from(CONFIG_FILE), PathBuf::from);

    if path.exists() {
        Ok(SimulationConfig::from_file(&path)?)
    } else {
        Ok(SimulationConfig::default())
    }
}
