//! Feedback sink interfaces and default implementations
//!
//! Sinks are fire-and-forget primitives supplied by the host. They may fail
//! independently; the controller logs and swallows failures, so a broken
//! channel never affects detection or the other channels.

use crate::error::Result;
use std::io::Write;
use std::time::Duration;
use tracing::info;

/// Plays the clap sound
pub trait AudioSink: Send + Sync {
    /// Dispatch one playback of the clap sound
    fn play(&self) -> Result<()>;
}

/// Drives the vibration motor
pub trait HapticSink: Send + Sync {
    /// Dispatch one vibration pulse of the given duration
    fn pulse(&self, duration: Duration) -> Result<()>;
}

/// Audio sink that rings the terminal bell
///
/// The closest thing a terminal shell has to a clap sound.
#[derive(Debug, Default)]
pub struct TerminalBellAudio;

impl AudioSink for TerminalBellAudio {
    fn play(&self) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(b"\x07")?;
        stdout.flush()?;
        Ok(())
    }
}

/// Haptic sink for hosts without a vibration motor; logs the pulse
#[derive(Debug, Default)]
pub struct LogHaptic;

impl HapticSink for LogHaptic {
    fn pulse(&self, duration: Duration) -> Result<()> {
        info!("Haptic pulse for {} ms", duration.as_millis());
        Ok(())
    }
}
