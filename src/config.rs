/* taylorcircle | config.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/******************************************************************************/

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::decompose::step_count;
use crate::series::MAX_TERMS;

/******************************************************************************/

/// Largest number of angle steps a configuration may request
pub const MAX_STEPS: usize = 100_000_000;

/// Bound on `|sin|` and `|cos|` for every term count
const SERIES_BOUND: i64 = 12;

/// Location of the configuration file loaded by [`Config::load_default()`]
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Term count must be at least 1")]
    ZeroTermCount,

    #[error("Term count {requested} exceeds the supported maximum of {max}")]
    TooManyTerms { requested: usize, max: usize },

    #[error("Step size must be positive and finite, got {0}")]
    InvalidStepSize(f64),

    #[error("Step size {0} produces no step over 360 degrees")]
    NoSteps(f64),

    #[error("Step size {step_size} produces {requested} steps, the maximum is {max}")]
    TooManySteps {
        step_size: f64,
        requested: usize,
        max: usize,
    },

    #[error("Radius must be at least 1")]
    ZeroRadius,

    #[error("A circle of radius {radius} around {center:?} leaves the pixel coordinate range")]
    CenterOutOfRange { center: (i32, i32), radius: u32 },

    #[error("Worker count must be at least 1")]
    ZeroWorkers,

    #[error("Screen dimensions are zero")]
    ZeroScreen,

    #[error("Could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid configuration file: {0}")]
    Parse(#[from] toml::de::Error),
}

/******************************************************************************/

/// Immutable parameters of one generation run
///
/// Only obtainable through [`SeriesConfig::new()`], so every instance satisfies the generation
/// preconditions. Shared read-only by all workers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeriesConfig {
    term_count: usize,
    step_size: f64,
    radius: u32,
    center: (i32, i32),
}

impl SeriesConfig {
    pub fn new(
        term_count: usize,
        step_size: f64,
        radius: u32,
        center: (i32, i32),
    ) -> Result<Self, ConfigError> {
        if term_count == 0 {
            return Err(ConfigError::ZeroTermCount);
        }
        if term_count > MAX_TERMS {
            return Err(ConfigError::TooManyTerms {
                requested: term_count,
                max: MAX_TERMS,
            });
        }
        if !step_size.is_finite() || step_size <= 0.0 {
            return Err(ConfigError::InvalidStepSize(step_size));
        }
        // Saturates for tiny steps
        let steps = step_count(step_size);
        if steps > MAX_STEPS {
            return Err(ConfigError::TooManySteps {
                step_size,
                requested: steps,
                max: MAX_STEPS,
            });
        }
        if steps == 0 {
            return Err(ConfigError::NoSteps(step_size));
        }
        if radius == 0 {
            return Err(ConfigError::ZeroRadius);
        }
        // Any truncation of either series stays below cosh(π) < 12 in magnitude on [-π, π]
        let fits = |c: i32| {
            let (c, r) = (i64::from(c), SERIES_BOUND * i64::from(radius));
            c - r > i64::from(i32::MIN) && c + r < i64::from(i32::MAX)
        };
        if !fits(center.0) || !fits(center.1) {
            return Err(ConfigError::CenterOutOfRange { center, radius });
        }

        Ok(Self {
            term_count,
            step_size,
            radius,
            center,
        })
    }

    /// Series truncation depth
    pub fn term_count(&self) -> usize {
        self.term_count
    }

    /// Angular resolution, in degrees
    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    /// Circle radius, in pixels
    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Circle center, in pixels
    pub fn center(&self) -> (i32, i32) {
        self.center
    }
}

/// How the sine / cosine pair of a single work unit is evaluated
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum InnerFanOut {
    /// Two tasks forked and joined on the pool
    Join,
    /// One pass over a two-lane accumulator
    #[default]
    Paired,
    /// Cosine then sine on the same worker
    Sequential,
}

/// Shape of the outer worker pool
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThreadPoolConfig {
    worker_count: usize,
    inner: InnerFanOut,
}

impl ThreadPoolConfig {
    pub fn new(worker_count: usize, inner: InnerFanOut) -> Result<Self, ConfigError> {
        if worker_count == 0 {
            return Err(ConfigError::ZeroWorkers);
        }
        Ok(Self {
            worker_count,
            inner,
        })
    }

    pub fn worker_count(&self) -> usize {
        self.worker_count
    }

    pub fn inner(&self) -> InnerFanOut {
        self.inner
    }
}

/******************************************************************************/

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Config {
    pub screen: ScreenConfig,
    pub circle: CircleConfig,
    pub series: SeriesSection,
    pub parallel: ParallelConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ScreenConfig {
    pub width: u32,
    pub height: u32,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CircleConfig {
    pub radius: u32,
    // Screen middle when absent
    pub center: Option<[i32; 2]>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SeriesSection {
    pub term_count: usize,
    pub step_size: f64,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ParallelConfig {
    pub worker_count: usize,
    #[serde(default)]
    pub inner: InnerFanOut,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "info".to_string(),
        }
    }
}

impl Config {
    // Load config from file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    // Load default config
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::from_file(DEFAULT_CONFIG_PATH)
    }

    /// Circle center, falling back to the middle of the screen
    pub fn center(&self) -> (i32, i32) {
        match self.circle.center {
            Some([x, y]) => (x, y),
            None => (
                (self.screen.width / 2) as i32,
                (self.screen.height / 2) as i32,
            ),
        }
    }

    /// Screen size, checked to be non-empty
    pub fn screen(&self) -> Result<(u32, u32), ConfigError> {
        if self.screen.width == 0 || self.screen.height == 0 {
            return Err(ConfigError::ZeroScreen);
        }
        Ok((self.screen.width, self.screen.height))
    }

    pub fn series(&self) -> Result<SeriesConfig, ConfigError> {
        SeriesConfig::new(
            self.series.term_count,
            self.series.step_size,
            self.circle.radius,
            self.center(),
        )
    }

    pub fn thread_pool(&self) -> Result<ThreadPoolConfig, ConfigError> {
        ThreadPoolConfig::new(self.parallel.worker_count, self.parallel.inner)
    }
}

// Default config in memory if file doesn't exist
impl Default for Config {
    fn default() -> Self {
        Config {
            screen: ScreenConfig {
                width: 800,
                height: 600,
            },
            circle: CircleConfig {
                radius: 200,
                center: None,
            },
            series: SeriesSection {
                term_count: 10,
                step_size: 0.0006,
            },
            parallel: ParallelConfig {
                worker_count: 8,
                inner: InnerFanOut::Paired,
            },
            logging: LoggingConfig::default(),
        }
    }
}

/******************************************************************************/

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = Config::default();
        let series = config.series().unwrap();
        assert_eq!(series.term_count(), 10);
        assert_eq!(series.step_size(), 0.0006);
        assert_eq!(series.radius(), 200);
        assert_eq!(series.center(), (400, 300));
        let pool = config.thread_pool().unwrap();
        assert_eq!(pool.worker_count(), 8);
        assert_eq!(pool.inner(), InnerFanOut::Paired);
        assert_eq!(InnerFanOut::default(), InnerFanOut::Paired);
        assert_eq!(config.screen().unwrap(), (800, 600));
    }

    #[test]
    fn test_rejects_degenerate_series() {
        assert!(matches!(
            SeriesConfig::new(0, 1.0, 10, (0, 0)),
            Err(ConfigError::ZeroTermCount)
        ));
        assert!(matches!(
            SeriesConfig::new(MAX_TERMS + 1, 1.0, 10, (0, 0)),
            Err(ConfigError::TooManyTerms { .. })
        ));
        assert!(matches!(
            SeriesConfig::new(10, 0.0, 10, (0, 0)),
            Err(ConfigError::InvalidStepSize(_))
        ));
        assert!(matches!(
            SeriesConfig::new(10, -0.5, 10, (0, 0)),
            Err(ConfigError::InvalidStepSize(_))
        ));
        assert!(matches!(
            SeriesConfig::new(10, f64::NAN, 10, (0, 0)),
            Err(ConfigError::InvalidStepSize(_))
        ));
        assert!(matches!(
            SeriesConfig::new(10, f64::INFINITY, 10, (0, 0)),
            Err(ConfigError::InvalidStepSize(_))
        ));
        assert!(matches!(
            SeriesConfig::new(10, 361.0, 10, (0, 0)),
            Err(ConfigError::NoSteps(_))
        ));
        assert!(matches!(
            SeriesConfig::new(10, 1e-12, 10, (0, 0)),
            Err(ConfigError::TooManySteps { .. })
        ));
        assert!(matches!(
            SeriesConfig::new(10, 1.0, 0, (0, 0)),
            Err(ConfigError::ZeroRadius)
        ));
    }

    #[test]
    fn test_rejects_center_past_pixel_range() {
        assert!(matches!(
            SeriesConfig::new(10, 1.0, 1, (i32::MAX, 0)),
            Err(ConfigError::CenterOutOfRange { .. })
        ));
        assert!(matches!(
            SeriesConfig::new(10, 1.0, 200, (0, i32::MIN + 100)),
            Err(ConfigError::CenterOutOfRange { .. })
        ));
        assert!(matches!(
            SeriesConfig::new(10, 1.0, u32::MAX, (0, 0)),
            Err(ConfigError::CenterOutOfRange { .. })
        ));
        assert!(matches!(
            SeriesConfig::new(2, 1.0, 200, (i32::MAX - 201, 0)),
            Err(ConfigError::CenterOutOfRange { .. })
        ));
        let margin = 12 * 200 + 1;
        assert!(SeriesConfig::new(10, 1.0, 200, (i32::MAX - margin, i32::MIN + margin)).is_ok());
    }

    #[test]
    fn test_accepts_boundaries() {
        assert!(SeriesConfig::new(1, 360.0, 1, (0, 0)).is_ok());
        assert!(SeriesConfig::new(MAX_TERMS, 0.0006, 1, (-5, 5)).is_ok());
    }

    #[test]
    fn test_rejects_zero_workers() {
        assert!(matches!(
            ThreadPoolConfig::new(0, InnerFanOut::Join),
            Err(ConfigError::ZeroWorkers)
        ));
    }

    #[test]
    fn test_parse_toml() {
        let config = Config::from_toml(
            r#"
            [screen]
            width = 640
            height = 480

            [circle]
            radius = 100

            [series]
            term_count = 100
            step_size = 0.5

            [parallel]
            worker_count = 3
            inner = "paired"
            "#,
        )
        .unwrap();

        assert_eq!(config.center(), (320, 240));
        assert_eq!(config.logging.level, "info");
        let pool = config.thread_pool().unwrap();
        assert_eq!(pool.worker_count(), 3);
        assert_eq!(pool.inner(), InnerFanOut::Paired);
        assert_eq!(config.series().unwrap().term_count(), 100);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Config::from_toml("[screen]\nwidth = \"wide\""),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            Config::from_file("/nonexistent/taylorcircle.toml"),
            Err(ConfigError::Read { .. })
        ));
    }

    #[test]
    fn test_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("circle.toml");
        let mut config = Config::default();
        config.circle.center = Some([10, -20]);
        config.parallel.inner = InnerFanOut::Sequential;
        fs::write(&path, toml::to_string(&config).unwrap()).unwrap();

        let loaded = Config::from_file(&path).unwrap();
        assert_eq!(loaded.center(), (10, -20));
        assert_eq!(loaded.parallel.inner, InnerFanOut::Sequential);
    }

    #[test]
    fn test_zero_screen() {
        let mut config = Config::default();
        config.screen.height = 0;
        assert!(matches!(config.screen(), Err(ConfigError::ZeroScreen)));
    }
}
