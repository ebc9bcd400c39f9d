/* taylorcircle | decompose.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/* Angular sweep decomposition into independent work units */

/******************************************************************************/

use core::ops::Range;

/******************************************************************************/

/// Full sweep, in degrees
pub const SWEEP_DEGREES: f64 = 360.0;

/// Discretisation of the sweep `[0°, 360°)` into equally spaced angle steps
///
/// Step `i` maps to the angle `i * step_size` degrees. The mapping is stateless: two ranges built
/// from the same step size always agree.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AngleRange {
    step_size: f64,
    num_steps: usize,
}

impl AngleRange {
    /// Computes `floor(360 / step_size)` steps
    ///
    /// The step size is assumed to be positive and finite; [`crate::SeriesConfig`] enforces this.
    pub fn new(step_size: f64) -> Self {
        Self {
            step_size,
            num_steps: step_count(step_size),
        }
    }

    /// Angular distance between two consecutive steps, in degrees
    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    /// Number of work units in the sweep
    pub fn num_steps(&self) -> usize {
        self.num_steps
    }

    /// Angle of a given step, in degrees
    pub fn angle_deg(&self, index: usize) -> f64 {
        index as f64 * self.step_size
    }

    /// All step indices, in ascending order
    pub fn indices(&self) -> Range<usize> {
        0..self.num_steps
    }

    /// Static partition of the steps into `workers` contiguous ranges
    ///
    /// Every range holds `num_steps / workers` steps, and the first `num_steps % workers` ranges
    /// hold one more. The ranges are ordered, disjoint and cover every step exactly once; some of
    /// them are empty when there are more workers than steps.
    pub fn partition(&self, workers: usize) -> Vec<Range<usize>> {
        let workers = workers.max(1);
        let base = self.num_steps / workers;
        let remainder = self.num_steps % workers;

        let mut ranges = Vec::with_capacity(workers);
        let mut start = 0;
        for worker in 0..workers {
            let len = base + usize::from(worker < remainder);
            ranges.push(start..start + len);
            start += len;
        }
        ranges
    }
}

/// Number of steps a step size produces over the full sweep
pub fn step_count(step_size: f64) -> usize {
    (SWEEP_DEGREES / step_size).floor() as usize
}

/******************************************************************************/
