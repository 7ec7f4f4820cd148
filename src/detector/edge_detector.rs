//! Far-to-close edge detection
//!
//! The detector keeps exactly one value of memory: the previous reading's
//! distance. A gesture is the strict far→close transition; consecutive
//! close readings never re-emit, and rapid oscillation across the threshold
//! re-triggers on every flip (no cooldown, deliberately).

use crate::monitor::Reading;
use tracing::trace;

/// Stateful edge detector over a proximity reading stream
///
/// Owns its state exclusively: `previous_distance` is mutated only by
/// [`EdgeDetector::process`] and cleared only by [`EdgeDetector::reset`].
/// The lifecycle gate calls `reset` on every (re)activation so a stale
/// value never leaks across a suspend/resume boundary.
#[derive(Debug)]
pub struct EdgeDetector {
    /// Distance from the previous processed reading; `None` until the first
    /// reading after construction or `reset`, and never itself "close"
    previous_distance: Option<f32>,
    /// Readings at or below this distance count as "close"
    close_threshold: f32,
}

impl EdgeDetector {
    /// Create a detector with the given close threshold in sensor units (cm)
    pub fn new(close_threshold: f32) -> Self {
        Self {
            previous_distance: None,
            close_threshold,
        }
    }

    /// The configured close threshold
    pub fn close_threshold(&self) -> f32 {
        self.close_threshold
    }

    /// Clear the previous-distance memory
    ///
    /// After a reset the very first close reading emits a gesture even
    /// though no "far" reading was observed in the new session. This is
    /// intentional: a gesture that begins while the host is inactive is
    /// not missed.
    pub fn reset(&mut self) {
        self.previous_distance = None;
    }

    /// Process one reading; returns true iff a gesture was detected
    ///
    /// The transition check uses the *prior* call's value, so the previous
    /// distance is recorded only after evaluation. Out-of-range readings
    /// are recorded as `f32::INFINITY` so they always compare as far.
    /// Malformed distances (NaN, negative infinity) are never close: they
    /// fail open on the current reading and compare as far once recorded.
    pub fn process(&mut self, reading: &Reading) -> bool {
        let is_close = reading
            .distance
            .is_some_and(|d| Self::is_close(d, self.close_threshold));
        let was_close = self
            .previous_distance
            .is_some_and(|d| Self::is_close(d, self.close_threshold));

        let detected = is_close && !was_close;
        if detected {
            trace!("Far-to-close edge at distance {:?}", reading.distance);
        }

        self.previous_distance = Some(reading.distance.unwrap_or(f32::INFINITY));
        detected
    }

    /// Non-finite distances are malformed and never count as close
    fn is_close(distance: f32, threshold: f32) -> bool {
        distance.is_finite() && distance <= threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(detector: &mut EdgeDetector, distances: &[f32]) -> Vec<usize> {
        distances
            .iter()
            .enumerate()
            .filter(|&(_, &d)| detector.process(&Reading::new(Some(d))))
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn test_far_close_sequence_fires_at_transitions_only() {
        let mut detector = EdgeDetector::new(0.0);
        let events = run(&mut detector, &[5.0, 0.0, 0.0, 5.0, 0.0]);
        assert_eq!(events, vec![1, 4]);
    }

    #[test]
    fn test_first_close_reading_after_reset_emits() {
        let mut detector = EdgeDetector::new(0.0);
        assert!(detector.process(&Reading::new(Some(0.0))));
    }

    #[test]
    fn test_reset_then_single_close_always_emits_once() {
        let mut detector = EdgeDetector::new(0.0);
        // Arbitrary history
        run(&mut detector, &[0.0, 0.0, 5.0, 0.0]);

        detector.reset();
        assert!(detector.process(&Reading::new(Some(0.0))));
        assert!(!detector.process(&Reading::new(Some(0.0))));
    }

    #[test]
    fn test_consecutive_close_readings_emit_once() {
        let mut detector = EdgeDetector::new(0.0);
        detector.process(&Reading::new(Some(5.0)));
        let events = run(&mut detector, &[0.0, 0.0]);
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_oscillation_retriggers_without_cooldown() {
        let mut detector = EdgeDetector::new(0.0);
        let events = run(&mut detector, &[5.0, 0.0, 5.0, 0.0]);
        assert_eq!(events, vec![1, 3]);
    }

    #[test]
    fn test_nonzero_threshold() {
        let mut detector = EdgeDetector::new(1.0);
        let events = run(&mut detector, &[5.0, 1.0, 0.5, 2.0, 0.9]);
        assert_eq!(events, vec![1, 4]);
    }

    #[test]
    fn test_out_of_range_is_far() {
        let mut detector = EdgeDetector::new(0.0);
        assert!(!detector.process(&Reading::new(None)));
        assert!(detector.process(&Reading::new(Some(0.0))));
        assert!(!detector.process(&Reading::new(None)));
        assert!(detector.process(&Reading::new(Some(0.0))));
    }

    #[test]
    fn test_nan_never_emits_and_counts_as_far() {
        let mut detector = EdgeDetector::new(0.0);
        // NaN itself never triggers
        assert!(!detector.process(&Reading::new(Some(f32::NAN))));
        // A recorded NaN compares as far, so the next close reading triggers
        assert!(detector.process(&Reading::new(Some(0.0))));

        // NaN between two close readings: close -> NaN -> close re-triggers,
        // because NaN was treated as far
        assert!(!detector.process(&Reading::new(Some(f32::NAN))));
        assert!(detector.process(&Reading::new(Some(0.0))));
    }

    #[test]
    fn test_negative_infinity_is_far() {
        // Malformed reading: fails open like NaN, never emits
        let mut detector = EdgeDetector::new(0.0);
        detector.process(&Reading::new(Some(5.0)));
        assert!(!detector.process(&Reading::new(Some(f32::NEG_INFINITY))));
        // Recorded as far, so the next close reading still triggers
        assert!(detector.process(&Reading::new(Some(0.0))));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Events fire exactly at indices where the reading is close and
            /// the preceding reading was not (or there is no preceding
            /// reading, after a reset).
            #[test]
            fn events_match_strict_transition_indices(
                distances in prop::collection::vec(0.0f32..10.0, 1..50),
                threshold in 0.0f32..5.0,
            ) {
                let mut detector = EdgeDetector::new(threshold);
                let expected: Vec<usize> = distances
                    .iter()
                    .enumerate()
                    .filter(|&(i, &d)| {
                        d <= threshold && (i == 0 || distances[i - 1] > threshold)
                    })
                    .map(|(i, _)| i)
                    .collect();

                let actual: Vec<usize> = distances
                    .iter()
                    .enumerate()
                    .filter(|&(_, &d)| detector.process(&Reading::new(Some(d))))
                    .map(|(i, _)| i)
                    .collect();

                prop_assert_eq!(actual, expected);
            }

            /// Reset followed by a single close reading emits exactly once,
            /// regardless of prior history.
            #[test]
            fn reset_is_idempotent_over_history(
                history in prop::collection::vec(0.0f32..10.0, 0..30),
                threshold in 0.0f32..5.0,
            ) {
                let mut detector = EdgeDetector::new(threshold);
                for d in &history {
                    detector.process(&Reading::new(Some(*d)));
                }

                detector.reset();
                prop_assert!(detector.process(&Reading::new(Some(threshold))));
            }
        }
    }
}
