//! `clapsense` - interactive shell for the clap detection pipeline
//!
//! Wires the pipeline to a stdin-backed proximity sensor: type one distance
//! per line (in cm), `-` or an empty line for "out of range", EOF to quit.
//! A far-to-close transition rings the terminal bell, logs a haptic pulse,
//! and flips the visual indicator for the configured revert window.

use anyhow::{Context, Result};
use clapsense::{
    config::ConfigManager,
    controller::GestureController,
    detector::EdgeDetector,
    error::status_message,
    feedback::{FeedbackController, LogHaptic, TerminalBellAudio, VisualMode},
    monitor::{LifecycleGate, ProximitySensor, Sample, SensorMonitor},
    utils,
};
use std::io::BufRead;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::{info, warn};

/// Proximity sensor that reads one distance per stdin line
///
/// Blocks in `sample` until a line is available; EOF exhausts the stream.
struct StdinSensor {
    lines: std::io::Lines<std::io::BufReader<std::io::Stdin>>,
}

impl StdinSensor {
    fn new() -> Self {
        Self {
            lines: std::io::BufReader::new(std::io::stdin()).lines(),
        }
    }
}

impl ProximitySensor for StdinSensor {
    fn sample(&mut self) -> Sample {
        match self.lines.next() {
            Some(Ok(line)) => {
                let line = line.trim();
                if line.is_empty() || line == "-" {
                    return Sample::OutOfRange;
                }
                match line.parse::<f32>() {
                    Ok(distance) => Sample::Distance(distance),
                    Err(_) => {
                        warn!("Unparsable distance {:?}, treating as out of range", line);
                        Sample::OutOfRange
                    }
                }
            }
            Some(Err(e)) => {
                warn!("Failed to read from stdin: {}", e);
                Sample::Exhausted
            }
            None => Sample::Exhausted,
        }
    }
}

/// Look up the host's proximity sensor
///
/// The terminal shell always has stdin to read from, so this never comes up
/// empty here; a hardware host would return `None` when the device lacks the
/// sensor, and the shell then surfaces the unavailable status instead of
/// starting the pipeline.
fn detect_sensor() -> Option<Box<dyn ProximitySensor>> {
    Some(Box::new(StdinSensor::new()))
}

fn main() -> Result<()> {
    utils::init_logging().context("Failed to initialize logging system")?;

    let config = ConfigManager::load().context("Failed to load configuration")?;
    info!(
        "Detection threshold: {} cm, revert window: {} ms",
        config.detector.close_threshold_cm, config.feedback.visual_revert_ms
    );

    let feedback = FeedbackController::new(
        Arc::new(TerminalBellAudio),
        Arc::new(LogHaptic),
        Duration::from_millis(config.feedback.haptic_pulse_ms),
        Duration::from_millis(config.feedback.visual_revert_ms),
    );

    let (event_tx, event_rx) = mpsc::sync_channel(32);

    let monitor = match SensorMonitor::try_new(
        detect_sensor(),
        Duration::from_millis(config.sensor.poll_interval_ms),
        event_tx.clone(),
    ) {
        Ok(monitor) => monitor,
        Err(e) => {
            let message = status_message(&e);
            warn!("No proximity sensor, detection disabled: {}", e);
            feedback.set_status(message.as_str());
            println!("{message}");
            return Ok(());
        }
    };
    let sensor_handle = monitor.handle();

    let detector = EdgeDetector::new(config.detector.close_threshold_cm);
    let mut controller = GestureController::new(detector, feedback.clone(), event_rx);

    let monitor_join = monitor.start();

    let gate = LifecycleGate::new(sensor_handle, event_tx);
    gate.activate();
    // Dropping the gate releases its channel sender so the pipeline shuts
    // down once the sensor stream is exhausted
    drop(gate);

    let render_stop = Arc::new(AtomicBool::new(false));
    let render_join = spawn_render_loop(feedback, Arc::clone(&render_stop));

    println!("Enter a distance in cm per line ('-' for out of range, Ctrl-D to quit):");

    controller.run();

    render_stop.store(true, Ordering::SeqCst);
    if render_join.join().is_err() {
        warn!("Render loop thread panicked");
    }

    monitor_join
        .join()
        .map_err(|_| anyhow::anyhow!("Sensor monitor thread panicked"))?;
    info!("Shutting down");
    Ok(())
}

/// Print display state transitions, the way a host UI would render them
///
/// Runs until `stop` is set, then exits on the next poll tick.
fn spawn_render_loop(feedback: FeedbackController, stop: Arc<AtomicBool>) -> JoinHandle<()> {
    thread::spawn(move || {
        let mut last = feedback.current_state();
        while !stop.load(Ordering::SeqCst) {
            thread::sleep(Duration::from_millis(50));
            let state = feedback.current_state();
            if state != last {
                let indicator = match state.visual_mode {
                    VisualMode::Triggered => "*CLAP*",
                    VisualMode::Idle => "      ",
                };
                println!("[{indicator}] {} | {}", state.status_text, state.proximity_text);
                last = state;
            }
        }
    })
}
