//! Pipeline controller module
//!
//! The event loop that ties the sensor stream, edge detector, and feedback
//! channels together.

pub mod gesture_controller;

pub use gesture_controller::GestureController;
