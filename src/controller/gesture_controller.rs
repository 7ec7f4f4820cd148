//! Pipeline controller
//!
//! The single consumer of the pipeline channel. Runs readings through the
//! edge detector and hands detections to the feedback controller.

use crate::detector::EdgeDetector;
use crate::feedback::FeedbackController;
use crate::monitor::{PipelineEvent, Reading};
use std::sync::mpsc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Status line shown while the pipeline is active
const STATUS_ACTIVE: &str = "Sensor ready. Wave your hand near the sensor.";
/// Status line shown while the host is in the background
const STATUS_PAUSED: &str = "Paused.";

/// Drives detection from the pipeline event stream
///
/// Owns the [`EdgeDetector`] exclusively; all detector mutation happens on
/// the thread running [`GestureController::run`], so there is a single
/// writer by construction.
pub struct GestureController {
    detector: EdgeDetector,
    feedback: FeedbackController,
    /// Pipeline receiver (taken when the event loop starts)
    event_receiver: Option<mpsc::Receiver<PipelineEvent>>,
    /// Readings are dropped while the host is inactive
    active: bool,
}

impl GestureController {
    /// Create a controller consuming the given pipeline channel
    pub fn new(
        detector: EdgeDetector,
        feedback: FeedbackController,
        event_receiver: mpsc::Receiver<PipelineEvent>,
    ) -> Self {
        Self {
            detector,
            feedback,
            event_receiver: Some(event_receiver),
            active: false,
        }
    }

    /// Run the event loop until the pipeline channel disconnects
    pub fn run(&mut self) {
        use std::sync::mpsc::RecvTimeoutError;

        let Some(event_receiver) = self.event_receiver.take() else {
            warn!("Event loop already running; run() call ignored");
            return;
        };

        info!("Entering pipeline event loop");
        loop {
            match event_receiver.recv_timeout(Duration::from_millis(100)) {
                Ok(event) => self.handle_event(event),
                Err(RecvTimeoutError::Timeout) => {
                    // Timeout is normal; keep waiting for events
                }
                Err(RecvTimeoutError::Disconnected) => {
                    warn!("Pipeline channel disconnected, exiting event loop");
                    break;
                }
            }
        }
        info!("Pipeline event loop exited");
    }

    /// Handle one pipeline event
    fn handle_event(&mut self, event: PipelineEvent) {
        match event {
            PipelineEvent::Reading(reading) => self.handle_reading(&reading),
            PipelineEvent::Activated => {
                info!("Activated: resetting detector state");
                self.detector.reset();
                self.active = true;
                self.feedback.set_status(STATUS_ACTIVE);
            }
            PipelineEvent::Deactivated => {
                info!("Deactivated: dropping readings until reactivation");
                self.active = false;
                self.feedback.set_status(STATUS_PAUSED);
            }
        }
    }

    /// Run one reading through the detector and dispatch feedback on a hit
    fn handle_reading(&mut self, reading: &Reading) {
        if !self.active {
            debug!("Dropping reading delivered while inactive");
            return;
        }

        self.feedback.update_proximity(reading.distance);

        if self.detector.process(reading) {
            info!("Clap detected (distance: {:?})", reading.distance);
            self.feedback.on_gesture();
        }
    }
}
