//! Configuration module
//!
//! Data models for detector, feedback, and sensor settings, plus a manager
//! that persists them as JSON with atomic writes.

pub mod manager;
pub mod models;

pub use manager::ConfigManager;
pub use models::{AppConfig, DetectorSettings, FeedbackSettings, SensorSettings};
