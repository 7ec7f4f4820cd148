//! Host lifecycle gate
//!
//! Bridges the host's activate/deactivate callbacks into the pipeline.
//! Activation enqueues [`PipelineEvent::Activated`] *before* resuming the
//! sensor, so the controller resets detector state before any reading of
//! the new session is processed. This prevents a stale previous distance
//! carried across a suspend/resume boundary from producing a spurious edge.

use crate::monitor::sensor_monitor::{PipelineEvent, SensorHandle};
use std::sync::mpsc;
use tracing::{info, warn};

/// Starts/stops reading delivery on host lifecycle transitions
pub struct LifecycleGate {
    handle: SensorHandle,
    event_sender: mpsc::SyncSender<PipelineEvent>,
}

impl LifecycleGate {
    /// Create a gate for the given sensor handle and pipeline channel
    pub fn new(handle: SensorHandle, event_sender: mpsc::SyncSender<PipelineEvent>) -> Self {
        Self {
            handle,
            event_sender,
        }
    }

    /// Host became active: reset detector state, then resume the sensor
    pub fn activate(&self) {
        info!("Lifecycle: activated");
        if self.event_sender.send(PipelineEvent::Activated).is_err() {
            warn!("Pipeline receiver dropped, activation not delivered");
            return;
        }
        // Ordering matters: readings only resume after the reset event is queued
        self.handle.start();
    }

    /// Host went to background: pause the sensor, then notify the pipeline
    pub fn deactivate(&self) {
        info!("Lifecycle: deactivated");
        self.handle.stop();
        if self.event_sender.send(PipelineEvent::Deactivated).is_err() {
            warn!("Pipeline receiver dropped, deactivation not delivered");
        }
    }
}
