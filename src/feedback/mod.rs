//! Feedback module
//!
//! Orchestrates the audio, haptic, and visual feedback channels and owns
//! the display state the shell renders from.

pub mod controller;
pub mod sinks;

pub use controller::{DisplayState, FeedbackController, VisualMode};
pub use sinks::{AudioSink, HapticSink, LogHaptic, TerminalBellAudio};
