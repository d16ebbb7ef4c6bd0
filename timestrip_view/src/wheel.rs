// Copyright 2025 the Timestrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::ZoomStep;

/// Turns continuous wheel deltas into discrete zoom steps.
///
/// Deltas are summed; once the magnitude of the sum reaches the threshold a
/// single step is emitted and the sum resets to zero. A negative sum (wheel
/// up) zooms in, a positive one zooms out.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WheelAccumulator {
    accumulated: f64,
    threshold: f64,
}

impl WheelAccumulator {
    /// Creates an accumulator with the given snap threshold.
    ///
    /// The threshold is taken by magnitude.
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self {
            accumulated: 0.0,
            threshold: threshold.abs(),
        }
    }

    /// Adds a wheel delta, returning a step if the threshold was reached.
    ///
    /// Non-finite deltas are dropped.
    pub fn feed(&mut self, delta_y: f64) -> Option<ZoomStep> {
        if !delta_y.is_finite() {
            return None;
        }
        self.accumulated += delta_y;
        if self.accumulated.abs() < self.threshold {
            return None;
        }
        let step = if self.accumulated < 0.0 {
            ZoomStep::In
        } else {
            ZoomStep::Out
        };
        self.accumulated = 0.0;
        Some(step)
    }

    /// Delta accumulated since the last emitted step.
    #[must_use]
    pub fn pending(&self) -> f64 {
        self.accumulated
    }

    /// The snap threshold.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Discards any accumulated delta.
    pub fn reset(&mut self) {
        self.accumulated = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::WheelAccumulator;
    use crate::ZoomStep;

    #[test]
    fn below_threshold_emits_nothing() {
        let mut wheel = WheelAccumulator::new(30.0);
        assert_eq!(wheel.feed(10.0), None);
        assert_eq!(wheel.feed(19.0), None);
        assert_eq!(wheel.pending(), 29.0);
    }

    #[test]
    fn exact_threshold_emits_one_step_and_resets() {
        let mut wheel = WheelAccumulator::new(30.0);
        assert_eq!(wheel.feed(-10.0), None);
        assert_eq!(wheel.feed(-20.0), Some(ZoomStep::In));
        assert_eq!(wheel.pending(), 0.0);
        assert_eq!(wheel.feed(30.0), Some(ZoomStep::Out));
    }

    #[test]
    fn large_delta_is_still_one_step() {
        let mut wheel = WheelAccumulator::new(30.0);
        assert_eq!(wheel.feed(-300.0), Some(ZoomStep::In));
        assert_eq!(wheel.pending(), 0.0);
    }

    #[test]
    fn opposite_deltas_cancel() {
        let mut wheel = WheelAccumulator::new(30.0);
        assert_eq!(wheel.feed(25.0), None);
        assert_eq!(wheel.feed(-25.0), None);
        assert_eq!(wheel.feed(f64::NAN), None);
        assert_eq!(wheel.pending(), 0.0);
        wheel.feed(12.0);
        wheel.reset();
        assert_eq!(wheel.pending(), 0.0);
    }
}
