//! Sensor monitoring module
//!
//! This module provides the reading stream side of the pipeline: polling a
//! proximity sensor on a background thread and gating delivery on the
//! host's lifecycle.
//!
//! # Architecture
//!
//! - `SensorMonitor`: background thread that polls a [`ProximitySensor`]
//! - `LifecycleGate`: pauses/resumes delivery on host activate/deactivate
//! - `PipelineEvent`: readings and lifecycle transitions on one channel,
//!   so they reach the controller in a total order
//!
//! # Ordering guarantee
//!
//! [`LifecycleGate::activate`] enqueues `Activated` before resuming the
//! sensor thread, so the controller always resets detector state before it
//! sees the first reading of a new session. A reading in flight at
//! deactivation time may still be delivered; the controller drops readings
//! while inactive.

pub mod lifecycle;
pub mod sensor_monitor;

pub use lifecycle::LifecycleGate;
pub use sensor_monitor::{PipelineEvent, ProximitySensor, Reading, Sample, SensorHandle, SensorMonitor};
