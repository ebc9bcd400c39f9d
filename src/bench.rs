/* taylorcircle | bench.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/* Wall-clock timing of generation passes */

/******************************************************************************/

use std::time::{Duration, Instant};

use crate::point::{PointGenerator, PointSequence};

/******************************************************************************/

/// Output of a timed closure, with its monotonic elapsed time
#[derive(Clone, Debug)]
pub struct Measurement<T> {
    pub output: T,
    pub elapsed: Duration,
}

pub fn measure<T>(f: impl FnOnce() -> T) -> Measurement<T> {
    let start = Instant::now();
    let output = f();
    let elapsed = start.elapsed();
    Measurement { output, elapsed }
}

/// Line printed for every timed pass
pub fn report_line(label: &str, elapsed: Duration) -> String {
    format!(
        "Circle computation time ({}): {} seconds",
        label,
        elapsed.as_secs_f64()
    )
}

/// One timed generation pass, presentation excluded
pub fn run<G: PointGenerator + ?Sized>(generator: &G) -> Measurement<PointSequence> {
    let measurement = measure(|| generator.generate());
    tracing::info!(
        generator = generator.label(),
        num_steps = measurement.output.len(),
        elapsed_s = measurement.elapsed.as_secs_f64(),
        "generation pass"
    );
    measurement
}

/******************************************************************************/

/// Repeated timing of a generator
#[derive(Clone, Copy, Debug)]
pub struct Benchmark {
    /// Untimed passes run first
    pub warmup: usize,
    pub iterations: usize,
}

impl Default for Benchmark {
    fn default() -> Self {
        Self {
            warmup: 1,
            iterations: 5,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Summary {
    pub num_steps: usize,
    pub iterations: usize,
    pub min: Duration,
    pub mean: Duration,
    pub max: Duration,
}

/// Average of `iterations` passes, `iterations` being at least 1
fn mean(total: Duration, iterations: usize) -> Duration {
    Duration::from_secs_f64(total.as_secs_f64() / iterations as f64)
}

impl Benchmark {
    pub fn run<G: PointGenerator + ?Sized>(&self, generator: &G) -> Summary {
        for _ in 0..self.warmup {
            generator.generate();
        }

        let iterations = self.iterations.max(1);
        let mut num_steps = 0;
        let mut total = Duration::ZERO;
        let mut min = Duration::MAX;
        let mut max = Duration::ZERO;
        for _ in 0..iterations {
            let Measurement { output, elapsed } = measure(|| generator.generate());
            num_steps = output.len();
            total += elapsed;
            min = min.min(elapsed);
            max = max.max(elapsed);
        }

        let summary = Summary {
            num_steps,
            iterations,
            min,
            mean: mean(total, iterations),
            max,
        };
        tracing::info!(
            generator = generator.label(),
            num_steps,
            iterations,
            min_s = min.as_secs_f64(),
            mean_s = summary.mean.as_secs_f64(),
            max_s = max.as_secs_f64(),
            "benchmark"
        );
        summary
    }
}

/******************************************************************************/

/// Side-by-side timing of a baseline and a candidate generator
#[derive(Clone, Debug)]
pub struct Comparison {
    pub baseline: Measurement<PointSequence>,
    pub candidate: Measurement<PointSequence>,
}

impl Comparison {
    /// Element-for-element equality of both outputs
    pub fn identical(&self) -> bool {
        self.baseline.output == self.candidate.output
    }

    /// Index of the first diverging point, if any
    pub fn first_mismatch(&self) -> Option<usize> {
        let (a, b) = (&self.baseline.output, &self.candidate.output);
        a.iter()
            .zip(b.iter())
            .position(|(p, q)| p != q)
            .or_else(|| (a.len() != b.len()).then(|| a.len().min(b.len())))
    }

    /// Baseline time over candidate time
    pub fn speedup(&self) -> f64 {
        let candidate = self.candidate.elapsed.as_secs_f64();
        if candidate == 0.0 {
            return f64::INFINITY;
        }
        self.baseline.elapsed.as_secs_f64() / candidate
    }
}

pub fn compare<B, C>(baseline: &B, candidate: &C) -> Comparison
where
    B: PointGenerator + ?Sized,
    C: PointGenerator + ?Sized,
{
    let comparison = Comparison {
        baseline: run(baseline),
        candidate: run(candidate),
    };
    match comparison.first_mismatch() {
        None => tracing::info!(
            baseline = baseline.label(),
            candidate = candidate.label(),
            speedup = comparison.speedup(),
            "outputs identical"
        ),
        Some(index) => tracing::warn!(
            baseline = baseline.label(),
            candidate = candidate.label(),
            index,
            "outputs diverge"
        ),
    }
    comparison
}

/******************************************************************************/

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{InnerFanOut, SeriesConfig, ThreadPoolConfig};
    use crate::parallel::ParallelPointGenerator;
    use crate::point::Point;
    use crate::serial::SerialPointGenerator;

    fn config() -> SeriesConfig {
        SeriesConfig::new(10, 0.1, 200, (400, 300)).unwrap()
    }

    #[test]
    fn test_measure() {
        let m = measure(|| {
            std::thread::sleep(Duration::from_millis(5));
            42
        });
        assert_eq!(m.output, 42);
        assert!(m.elapsed >= Duration::from_millis(5));
    }

    #[test]
    fn test_report_line() {
        assert_eq!(
            report_line("serial", Duration::from_millis(1500)),
            "Circle computation time (serial): 1.5 seconds"
        );
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(Duration::from_millis(30), 3), Duration::from_millis(10));
        // Counts past u32 must neither truncate nor divide by zero
        let count = 1usize << 32;
        assert_eq!(mean(Duration::from_secs(1 << 32), count), Duration::from_secs(1));
        assert_eq!(mean(Duration::ZERO, count), Duration::ZERO);
    }

    #[test]
    fn test_run_returns_points() {
        let m = run(&SerialPointGenerator::new(config()));
        assert_eq!(m.output.len(), 3600);
    }

    #[test]
    fn test_benchmark_summary() {
        let summary = Benchmark {
            warmup: 0,
            iterations: 3,
        }
        .run(&SerialPointGenerator::new(config()));
        assert_eq!(summary.num_steps, 3600);
        assert_eq!(summary.iterations, 3);
        assert!(summary.min <= summary.mean && summary.mean <= summary.max);
    }

    #[test]
    fn test_compare_identical() {
        let serial = SerialPointGenerator::new(config());
        let pool = ThreadPoolConfig::new(4, InnerFanOut::Join).unwrap();
        let parallel = ParallelPointGenerator::new(config(), pool).unwrap();
        let comparison = compare(&serial, &parallel);
        assert!(comparison.identical());
        assert_eq!(comparison.first_mismatch(), None);
        assert!(comparison.speedup() > 0.0);
    }

    #[test]
    fn test_first_mismatch() {
        let measured = |points: Vec<Point>| Measurement {
            output: PointSequence::from(points),
            elapsed: Duration::from_millis(1),
        };
        let comparison = Comparison {
            baseline: measured(vec![Point::new(0, 0), Point::new(1, 1)]),
            candidate: measured(vec![Point::new(0, 0), Point::new(1, 2)]),
        };
        assert!(!comparison.identical());
        assert_eq!(comparison.first_mismatch(), Some(1));

        let truncated = Comparison {
            baseline: measured(vec![Point::new(0, 0), Point::new(1, 1)]),
            candidate: measured(vec![Point::new(0, 0)]),
        };
        assert_eq!(truncated.first_mismatch(), Some(1));
    }
}
