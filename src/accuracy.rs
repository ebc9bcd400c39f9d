/* taylorcircle | accuracy.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/******************************************************************************/

use core::f64::consts::PI;

use crate::series;

/******************************************************************************/

/// Largest absolute truncation error observed for each series
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeriesError {
    pub sin: f64,
    pub cos: f64,
}

impl SeriesError {
    pub fn max(&self) -> f64 {
        self.sin.max(self.cos)
    }
}

/// Measures the truncation error of a term count against the platform `sin` / `cos`
///
/// Samples `samples` evenly spaced angles of `[-π, π]`, both ends included.
pub fn max_error(terms: usize, samples: usize) -> SeriesError {
    let samples = samples.max(2);
    let mut error = SeriesError { sin: 0.0, cos: 0.0 };

    for i in 0..samples {
        let x = -PI + 2.0 * PI * i as f64 / (samples - 1) as f64;
        let (sin, cos) = series::sin_cos(x, terms);
        error.sin = error.sin.max((sin - x.sin()).abs());
        error.cos = error.cos.max((cos - x.cos()).abs());
    }

    error
}

/******************************************************************************/

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_single_term_error() {
        // Worst cases sit at ±π: |π - 0| and |1 - (-1)|
        let error = max_error(1, 101);
        assert_abs_diff_eq!(error.sin, PI, epsilon = 1e-12);
        assert_abs_diff_eq!(error.cos, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_convergence() {
        // The two-term cosine overshoots at ±π, so the decrease starts at two terms
        let mut previous = max_error(2, 4001).max();
        for terms in 3..=12 {
            let current = max_error(terms, 4001).max();
            assert!(current < previous, "{terms} terms: {current} >= {previous}");
            previous = current;
        }
    }

    #[test]
    fn test_sine_converges_from_one_term() {
        let mut previous = max_error(1, 4001).sin;
        for terms in 2..=12 {
            let current = max_error(terms, 4001).sin;
            assert!(current < previous);
            previous = current;
        }
    }

    #[test]
    fn test_production_term_counts() {
        assert!(max_error(10, 4001).max() < 1e-8);
        assert!(max_error(100, 4001).max() < 1e-14);
    }
}
