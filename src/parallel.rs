/* taylorcircle | parallel.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/* Two-level parallel generator */

/******************************************************************************/

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::config::{InnerFanOut, SeriesConfig, ThreadPoolConfig};
use crate::decompose::AngleRange;
use crate::error::Result;
use crate::point::{reduced_angle, Point, PointGenerator, PointSequence};
use crate::series;

/******************************************************************************/

/// Parallel generator
///
/// The outer level statically partitions the steps into one contiguous chunk per worker. The
/// inner level evaluates the sine / cosine pair of every step according to [`InnerFanOut`].
///
/// The output buffer is allocated at full size before any task starts and split into disjoint
/// mutable chunks, so each slot is written exactly once, by exactly one task, without locking.
pub struct ParallelPointGenerator {
    config: SeriesConfig,
    pool_config: ThreadPoolConfig,
    pool: ThreadPool,
}

impl ParallelPointGenerator {
    /// Builds the worker pool
    ///
    /// The pool is sized to exactly `worker_count` threads, even beyond the host concurrency.
    pub fn new(config: SeriesConfig, pool_config: ThreadPoolConfig) -> Result<Self> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(pool_config.worker_count())
            .thread_name(|i| format!("taylorcircle-worker-{}", i))
            .build()?;
        tracing::debug!(
            workers = pool_config.worker_count(),
            inner = ?pool_config.inner(),
            "worker pool ready"
        );

        Ok(Self {
            config,
            pool_config,
            pool,
        })
    }

    pub fn pool_config(&self) -> &ThreadPoolConfig {
        &self.pool_config
    }

    /// Evaluates a single work unit
    fn point_at(&self, range: &AngleRange, index: usize) -> Point {
        let x = reduced_angle(range, index);
        let terms = self.config.term_count();

        let (cos, sin) = match self.pool_config.inner() {
            InnerFanOut::Join => rayon::join(|| series::cos(x, terms), || series::sin(x, terms)),
            InnerFanOut::Paired => {
                let (sin, cos) = series::sin_cos(x, terms);
                (cos, sin)
            }
            InnerFanOut::Sequential => (series::cos(x, terms), series::sin(x, terms)),
        };

        Point::on_circle(&self.config, cos, sin)
    }
}

impl PointGenerator for ParallelPointGenerator {
    fn label(&self) -> &'static str {
        "two-level parallelism"
    }

    fn config(&self) -> &SeriesConfig {
        &self.config
    }

    fn generate(&self) -> PointSequence {
        let range = AngleRange::new(self.config.step_size());
        let partition = range.partition(self.pool_config.worker_count());
        tracing::debug!(
            num_steps = range.num_steps(),
            chunks = partition.len(),
            chunk_len = partition.first().map_or(0, |r| r.len()),
            "parallel generation"
        );

        let mut points = vec![Point::default(); range.num_steps()];

        // One disjoint chunk per worker, tagged with its first step
        let mut chunks = Vec::with_capacity(partition.len());
        let mut remaining = points.as_mut_slice();
        for steps in &partition {
            let (chunk, rest) = remaining.split_at_mut(steps.len());
            if !chunk.is_empty() {
                chunks.push((steps.start, chunk));
            }
            remaining = rest;
        }

        self.pool.install(|| {
            chunks.into_par_iter().for_each(|(start, chunk)| {
                for (offset, slot) in chunk.iter_mut().enumerate() {
                    *slot = self.point_at(&range, start + offset);
                }
            });
        });

        PointSequence::from(points)
    }
}

/******************************************************************************/
