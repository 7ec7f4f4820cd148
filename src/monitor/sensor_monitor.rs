//! Proximity sensor polling
//!
//! Polls a [`ProximitySensor`] on a background thread and forwards readings
//! into the pipeline channel. Delivery is gated by a shared running flag so
//! the host's lifecycle can pause and resume the stream without tearing the
//! thread down, matching a register/unregister-listener model.

use crate::error::{ClapSenseError, Result};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use tracing::{debug, trace, warn};

/// One timestamped distance sample from the sensor stream
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    /// Measured distance in sensor units (cm). `None` means the sensor
    /// reported nothing in range, which is treated as a large distance.
    pub distance: Option<f32>,
    /// When the sample was taken
    pub timestamp: Instant,
}

impl Reading {
    /// Create a reading taken now
    pub fn new(distance: Option<f32>) -> Self {
        Self {
            distance,
            timestamp: Instant::now(),
        }
    }
}

/// One poll result from a [`ProximitySensor`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sample {
    /// A distance measurement in sensor units (cm)
    Distance(f32),
    /// Nothing within the sensor's range
    OutOfRange,
    /// The sensor stream has ended and will produce no further samples
    Exhausted,
}

/// A live source of proximity distance samples
///
/// Implementations are supplied by the host (real hardware, a replay file,
/// stdin). The stream is infinite and non-restartable: once `sample`
/// returns [`Sample::Exhausted`] the monitor thread exits.
pub trait ProximitySensor: Send {
    /// Take one sample. May block until a sample is available.
    fn sample(&mut self) -> Sample;

    /// The largest distance this sensor can report, in sensor units (cm)
    fn max_range(&self) -> f32 {
        5.0
    }
}

/// Events flowing through the single processing queue
///
/// Readings and lifecycle transitions share one channel so they are totally
/// ordered: an `Activated` enqueued before the sensor resumes is guaranteed
/// to be handled before the first reading of the new session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PipelineEvent {
    /// A proximity reading to run through the edge detector
    Reading(Reading),
    /// The host became active; detector state must be reset before the next reading
    Activated,
    /// The host went to background; readings stop until reactivation
    Deactivated,
}

/// Pause/resume handle for the sensor delivery thread
#[derive(Debug, Clone)]
pub struct SensorHandle {
    running: Arc<AtomicBool>,
}

impl SensorHandle {
    /// Resume sampling and delivery
    pub fn start(&self) {
        self.running.store(true, Ordering::SeqCst);
    }

    /// Pause sampling; no further readings are delivered until `start`
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    /// Whether delivery is currently enabled
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }
}

/// Sensor monitor that polls a proximity sensor at a fixed interval
///
/// Created paused; call [`SensorMonitor::handle`] to obtain the
/// [`SensorHandle`] used by the lifecycle gate, then [`SensorMonitor::start`]
/// to spawn the polling thread.
pub struct SensorMonitor {
    sensor: Box<dyn ProximitySensor>,
    event_sender: mpsc::SyncSender<PipelineEvent>,
    interval: Duration,
    running: Arc<AtomicBool>,
}

impl SensorMonitor {
    /// Create a new sensor monitor with the specified polling interval
    pub fn new(
        sensor: Box<dyn ProximitySensor>,
        interval: Duration,
        event_sender: mpsc::SyncSender<PipelineEvent>,
    ) -> Self {
        Self {
            sensor,
            event_sender,
            interval,
            running: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Create a monitor from a host's sensor lookup result
    ///
    /// Hosts look up their proximity sensor and may come up empty; that
    /// surfaces here as [`ClapSenseError::SensorUnavailable`], which the
    /// shell turns into a status message. Detection never runs in that
    /// case because no monitor exists to feed the pipeline.
    pub fn try_new(
        sensor: Option<Box<dyn ProximitySensor>>,
        interval: Duration,
        event_sender: mpsc::SyncSender<PipelineEvent>,
    ) -> Result<Self> {
        match sensor {
            Some(sensor) => Ok(Self::new(sensor, interval, event_sender)),
            None => Err(ClapSenseError::SensorUnavailable),
        }
    }

    /// Get the pause/resume handle shared with the lifecycle gate
    pub fn handle(&self) -> SensorHandle {
        SensorHandle {
            running: Arc::clone(&self.running),
        }
    }

    /// Start the polling thread
    ///
    /// The thread exits when the sensor is exhausted or the pipeline
    /// receiver is dropped.
    pub fn start(mut self) -> JoinHandle<()> {
        thread::spawn(move || {
            loop {
                if !self.running.load(Ordering::SeqCst) {
                    thread::sleep(self.interval);
                    continue;
                }

                let reading = match self.sensor.sample() {
                    Sample::Distance(d) => Reading::new(Some(d)),
                    Sample::OutOfRange => Reading::new(None),
                    Sample::Exhausted => {
                        debug!("Sensor stream exhausted, stopping monitor thread");
                        break;
                    }
                };

                trace!("Sensor reading: {:?}", reading.distance);

                if self.event_sender.send(PipelineEvent::Reading(reading)).is_err() {
                    warn!("Pipeline receiver dropped, stopping monitor thread");
                    break;
                }

                thread::sleep(self.interval);
            }
        })
    }
}
