//! Gesture detection module
//!
//! Strict far→close edge detection over the proximity reading stream.

pub mod edge_detector;

pub use edge_detector::EdgeDetector;
