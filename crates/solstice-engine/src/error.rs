//! Error types for the engine binary.

use solstice_core::clock::ClockError;
use solstice_core::config::ConfigError;

/// Errors that can occur while starting or running the engine.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration could not be loaded.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: ConfigError,
    },

    /// The clock rejected its configuration.
    #[error("clock error: {source}")]
    Clock {
        /// The underlying clock error.
        #[from]
        source: ClockError,
    },
}
