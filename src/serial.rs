/* taylorcircle | serial.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/* Single-threaded baseline */

/******************************************************************************/

use crate::config::SeriesConfig;
use crate::decompose::AngleRange;
use crate::point::{reduced_angle, Point, PointGenerator, PointSequence};
use crate::series;

/******************************************************************************/

/// Reference generator: walks the steps in ascending order on the calling thread
///
/// Its output is the oracle the parallel generator is checked against.
#[derive(Clone, Debug)]
pub struct SerialPointGenerator {
    config: SeriesConfig,
}

impl SerialPointGenerator {
    pub fn new(config: SeriesConfig) -> Self {
        Self { config }
    }
}

impl PointGenerator for SerialPointGenerator {
    fn label(&self) -> &'static str {
        "serial"
    }

    fn config(&self) -> &SeriesConfig {
        &self.config
    }

    fn generate(&self) -> PointSequence {
        let range = AngleRange::new(self.config.step_size());
        let terms = self.config.term_count();
        tracing::debug!(num_steps = range.num_steps(), terms, "serial generation");

        let mut points = Vec::with_capacity(range.num_steps());
        for index in range.indices() {
            let x = reduced_angle(&range, index);
            let cos = series::cos(x, terms);
            let sin = series::sin(x, terms);
            points.push(Point::on_circle(&self.config, cos, sin));
        }
        PointSequence::from(points)
    }
}

/******************************************************************************/
