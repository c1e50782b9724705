//! Shared type definitions for the Solstice calendar simulation.
//!
//! This crate is the single source of truth for the types that cross the
//! boundary between the clock and its consumers (lighting, atmosphere,
//! UI). Everything here is serde-serializable so hosts can forward
//! snapshots and notifications to logs or presentation layers.
//!
//! # Modules
//!
//! - [`enums`] -- `Season` cycle and the `TimeSegment` hour classifier
//! - [`events`] -- [`ClockEvent`] change notifications
//! - [`structs`] -- [`ClockSnapshot`] for pull-based consumers

pub mod enums;
pub mod events;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{Season, TimeSegment};
pub use events::ClockEvent;
pub use structs::ClockSnapshot;
