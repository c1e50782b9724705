//! Calendar clock and configuration for the Solstice simulation.
//!
//! This crate owns the deterministic in-game calendar: a wrapping
//! time-of-day accumulator that derives hour, minute, day, season, and
//! year, classifies the current moment into a named time segment, and
//! notifies observers exactly once per boundary crossing.
//!
//! # Modules
//!
//! - [`clock`] -- The [`Clock`] component, its update pipeline, and the
//!   [`ClockObserver`] notification contract.
//! - [`config`] -- Configuration loading from `solstice-config.yaml`
//!   into strongly-typed structs.
//!
//! [`Clock`]: clock::Clock
//! [`ClockObserver`]: clock::ClockObserver

pub mod clock;
pub mod config;
