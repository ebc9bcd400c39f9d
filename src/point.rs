/* taylorcircle | point.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/******************************************************************************/

use core::ops::Deref;

use crate::config::SeriesConfig;
use crate::decompose::AngleRange;
use crate::series;

/******************************************************************************/

/// Integer pixel coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Places a `(cos, sin)` pair on the configured circle, rounding to the nearest pixel
    pub fn on_circle(config: &SeriesConfig, cos: f64, sin: f64) -> Self {
        let radius = config.radius() as f64;
        let (center_x, center_y) = config.center();
        Self {
            x: (radius * cos + center_x as f64).round() as i32,
            y: (radius * sin + center_y as f64).round() as i32,
        }
    }
}

/// Reduced angle, in radians, of a sweep step
pub fn reduced_angle(range: &AngleRange, index: usize) -> f64 {
    series::reduce_angle(series::to_radians(range.angle_deg(index)))
}

/// Reference mapping from an angle in degrees to its pixel
///
/// Both generators must agree with this function bit for bit.
pub fn point_at_angle(config: &SeriesConfig, angle_deg: f64) -> Point {
    let x = series::reduce_angle(series::to_radians(angle_deg));
    let terms = config.term_count();
    Point::on_circle(config, series::cos(x, terms), series::sin(x, terms))
}

/******************************************************************************/

/// Angle-ordered points of one generation run
///
/// Index `i` holds the point of the angle `i * step_size`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PointSequence {
    points: Vec<Point>,
}

impl PointSequence {
    pub fn into_inner(self) -> Vec<Point> {
        self.points
    }
}

impl From<Vec<Point>> for PointSequence {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

impl Deref for PointSequence {
    type Target = [Point];

    fn deref(&self) -> &[Point] {
        &self.points
    }
}

impl<'a> IntoIterator for &'a PointSequence {
    type Item = &'a Point;
    type IntoIter = core::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/******************************************************************************/

/// A strategy mapping every step of the sweep to a pixel
pub trait PointGenerator {
    /// Human-readable name used in timing reports
    fn label(&self) -> &'static str;

    fn config(&self) -> &SeriesConfig;

    /// Computes the full, angle-ordered sequence
    fn generate(&self) -> PointSequence;

    fn num_steps(&self) -> usize {
        AngleRange::new(self.config().step_size()).num_steps()
    }
}

/******************************************************************************/
