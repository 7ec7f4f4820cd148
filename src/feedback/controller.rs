//! Feedback orchestration
//!
//! Fans a gesture out to the audio, haptic, and visual channels. Each
//! channel dispatches on its own thread so a slow or failing sink never
//! delays the others or the caller. The visual channel flips to
//! `Triggered` synchronously and reverts to `Idle` on a one-shot timer;
//! a generation counter ensures the last-scheduled timer wins when
//! gestures arrive faster than the revert duration.

use crate::feedback::sinks::{AudioSink, HapticSink};
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;
use std::time::Duration;
use tracing::{debug, warn};

/// Visual indicator state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualMode {
    /// Resting state
    Idle,
    /// A gesture fired within the last revert window
    Triggered,
}

/// Snapshot of everything the shell renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayState {
    /// One-line status for the user
    pub status_text: String,
    /// Latest formatted proximity value
    pub proximity_text: String,
    /// Visual indicator state
    pub visual_mode: VisualMode,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            status_text: "Initializing...".to_string(),
            proximity_text: "Proximity: -".to_string(),
            visual_mode: VisualMode::Idle,
        }
    }
}

/// Dispatches gesture feedback and owns the display state
///
/// Cheap to clone; clones share the same display state and revert
/// generation, so the shell can hold one for rendering while the pipeline
/// holds another.
#[derive(Clone)]
pub struct FeedbackController {
    audio: Arc<dyn AudioSink>,
    haptic: Arc<dyn HapticSink>,
    display: Arc<Mutex<DisplayState>>,
    /// Bumped on every gesture; a revert thread only applies `Idle` if its
    /// captured generation is still current
    revert_generation: Arc<AtomicU64>,
    haptic_pulse: Duration,
    visual_revert: Duration,
}

impl FeedbackController {
    /// Create a controller over the given sinks and timings
    pub fn new(
        audio: Arc<dyn AudioSink>,
        haptic: Arc<dyn HapticSink>,
        haptic_pulse: Duration,
        visual_revert: Duration,
    ) -> Self {
        Self {
            audio,
            haptic,
            display: Arc::new(Mutex::new(DisplayState::default())),
            revert_generation: Arc::new(AtomicU64::new(0)),
            haptic_pulse,
            visual_revert,
        }
    }

    /// Handle one detected gesture
    ///
    /// Returns immediately; audio, haptic, and the revert timer each run on
    /// their own thread. Sink failures are logged and swallowed.
    pub fn on_gesture(&self) {
        debug!("Dispatching gesture feedback");

        let audio = Arc::clone(&self.audio);
        thread::spawn(move || {
            if let Err(e) = audio.play() {
                warn!("Audio dispatch failed: {}", e);
            }
        });

        let haptic = Arc::clone(&self.haptic);
        let pulse = self.haptic_pulse;
        thread::spawn(move || {
            if let Err(e) = haptic.pulse(pulse) {
                warn!("Haptic dispatch failed: {}", e);
            }
        });

        // Visible to the very next current_state() call
        self.display.lock().visual_mode = VisualMode::Triggered;

        // Supersede any in-flight revert timer before scheduling a new one
        let generation = self.revert_generation.fetch_add(1, Ordering::SeqCst) + 1;
        let generation_ref = Arc::clone(&self.revert_generation);
        let display = Arc::clone(&self.display);
        let revert = self.visual_revert;
        thread::spawn(move || {
            thread::sleep(revert);
            if generation_ref.load(Ordering::SeqCst) == generation {
                display.lock().visual_mode = VisualMode::Idle;
            }
            // A stale generation means a newer gesture re-triggered; leave
            // its timer to do the revert
        });
    }

    /// Replace the status line
    pub fn set_status(&self, status: impl Into<String>) {
        self.display.lock().status_text = status.into();
    }

    /// Publish the latest proximity value to the display
    pub fn update_proximity(&self, distance: Option<f32>) {
        let text = match distance {
            Some(d) if d.is_nan() => "Proximity: invalid".to_string(),
            Some(d) => format!("Proximity: {d:.1} cm"),
            None => "Proximity: out of range".to_string(),
        };
        self.display.lock().proximity_text = text;
    }

    /// Snapshot the current display state
    pub fn current_state(&self) -> DisplayState {
        self.display.lock().clone()
    }
}
