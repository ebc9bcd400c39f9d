/* taylorcircle | series.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/* Truncated Maclaurin series for sine and cosine */

/******************************************************************************/

use core::f64::consts::{PI, TAU};

include!(concat!(env!("OUT_DIR"), "/series_tables.rs"));

/******************************************************************************/

/// Clamps a term count to the generated tables
///
/// Past `MAX_TERMS`, every further term of a reduced argument underflows to zero.
const fn table_terms(terms: usize) -> usize {
    if terms > MAX_TERMS {
        MAX_TERMS
    } else {
        terms
    }
}

/// Approximates `sin(x)` with the first `terms` terms of its Maclaurin series
///
/// `x` is expected to be range-reduced (see [`reduce_angle()`]). A term count of 0 or 1 yields
/// `x` itself.
pub const fn sin(x: f64, terms: usize) -> f64 {
    let neg_x2 = -(x * x);
    let n_max = table_terms(terms);
    let mut term = x;
    let mut sum = x;

    let mut n = 1;
    while n < n_max {
        term *= neg_x2 / SIN_DENOMINATORS[n];
        sum += term;
        n += 1;
    }

    sum
}

/// Approximates `cos(x)` with the first `terms` terms of its Maclaurin series
///
/// `x` is expected to be range-reduced (see [`reduce_angle()`]). A term count of 0 or 1 yields
/// exactly `1.0`.
pub const fn cos(x: f64, terms: usize) -> f64 {
    let neg_x2 = -(x * x);
    let n_max = table_terms(terms);
    let mut term = 1.0;
    let mut sum = 1.0;

    let mut n = 1;
    while n < n_max {
        term *= neg_x2 / COS_DENOMINATORS[n];
        sum += term;
        n += 1;
    }

    sum
}

/// Evaluates both series in a single pass, as a pair of lanes
///
/// Each lane performs the same operations in the same order as [`sin()`] and [`cos()`], so the
/// returned `(sin, cos)` pair is bit-identical to calling them separately.
pub const fn sin_cos(x: f64, terms: usize) -> (f64, f64) {
    let neg_x2 = -(x * x);
    let n_max = table_terms(terms);
    let mut term = [x, 1.0];
    let mut sum = [x, 1.0];

    let mut n = 1;
    while n < n_max {
        term[0] *= neg_x2 / SIN_DENOMINATORS[n];
        term[1] *= neg_x2 / COS_DENOMINATORS[n];
        sum[0] += term[0];
        sum[1] += term[1];
        n += 1;
    }

    (sum[0], sum[1])
}

/******************************************************************************/

/// Converts degrees to radians
pub const fn to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Maps an angle in radians into `[-π, π)` with `((x + π) mod 2π) − π`
///
/// The series converge fastest close to zero, so this must run once per angle before either
/// series is evaluated.
pub fn reduce_angle(radians: f64) -> f64 {
    (radians + PI).rem_euclid(TAU) - PI
}

/******************************************************************************/
