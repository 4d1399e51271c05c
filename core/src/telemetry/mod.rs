//! telemetry/mod.rs
//! Counters, timers, and immutable snapshots for codec runs.
//!
//! Every stream API call returns a `TelemetrySnapshot`; the binaries print it
//! as JSON on stderr when asked to.

pub mod counters;
pub mod timers;
pub mod snapshot;

pub use counters::*;
pub use timers::*;
pub use snapshot::*;
