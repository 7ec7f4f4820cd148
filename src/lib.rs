//! `clapsense` - clap-gesture detection from a proximity sensor stream
//!
//! Detects a far-to-close transition ("clap") in a noisy proximity-distance
//! stream and dispatches audio, haptic, and visual feedback exactly once per
//! gesture. Uses a multi-threaded event-driven architecture with
//! `SensorMonitor` polling the sensor, `GestureController` running the
//! detection loop, and `FeedbackController` fanning out feedback channels.
//!
//! The host supplies the sensor (`ProximitySensor`), the feedback sinks
//! (`AudioSink`, `HapticSink`), and drives suspend/resume through a
//! `LifecycleGate`. The host reads back a `DisplayState` snapshot for
//! rendering.

// Module declarations
pub mod config;
pub mod controller;
pub mod detector;
pub mod error;
pub mod feedback;
pub mod monitor;
pub mod utils;

// Re-export commonly used types
pub use error::{ClapSenseError, Result};
