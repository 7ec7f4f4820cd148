//! Configuration data models
//!
//! This module defines the data structures used for application configuration.

use serde::{Deserialize, Serialize};

/// Edge-detector settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectorSettings {
    /// Distance at or below which a reading counts as "close", in sensor units (cm).
    /// Most proximity sensors report 0.0 when an object is directly in front.
    pub close_threshold_cm: f32,
}

/// Feedback channel settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackSettings {
    /// Duration of the haptic pulse in milliseconds
    pub haptic_pulse_ms: u64,
    /// How long the visual indicator stays in the triggered state before
    /// reverting to idle, in milliseconds
    pub visual_revert_ms: u64,
}

/// Sensor polling settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensorSettings {
    /// Sensor polling interval in milliseconds
    pub poll_interval_ms: u64,
}

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Edge-detector settings
    pub detector: DetectorSettings,
    /// Feedback channel settings
    pub feedback: FeedbackSettings,
    /// Sensor polling settings
    pub sensor: SensorSettings,
}

impl Default for DetectorSettings {
    fn default() -> Self {
        Self {
            close_threshold_cm: 0.0,
        }
    }
}

impl Default for FeedbackSettings {
    fn default() -> Self {
        Self {
            haptic_pulse_ms: 50,
            visual_revert_ms: 200,
        }
    }
}

impl Default for SensorSettings {
    fn default() -> Self {
        Self {
            poll_interval_ms: 200,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.detector.close_threshold_cm, 0.0);
        assert_eq!(config.feedback.haptic_pulse_ms, 50);
        assert_eq!(config.feedback.visual_revert_ms, 200);
        assert_eq!(config.sensor.poll_interval_ms, 200);
    }

    #[test]
    fn test_serialization() {
        let config = AppConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(
            config.feedback.visual_revert_ms,
            deserialized.feedback.visual_revert_ms
        );
        assert_eq!(
            config.detector.close_threshold_cm,
            deserialized.detector.close_threshold_cm
        );
    }
}
