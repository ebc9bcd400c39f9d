/* taylorcircle | lib.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/* Circle rasterisation from truncated Taylor series */

/******************************************************************************/

#![doc = include_str!("../README.md")]

/******************************************************************************/

pub mod accuracy;
pub mod bench;
pub mod config;
pub mod decompose;
pub mod error;
pub mod parallel;
pub mod point;
pub mod present;
pub mod serial;
pub mod series;

/******************************************************************************/

pub use config::{Config, ConfigError, InnerFanOut, SeriesConfig, ThreadPoolConfig};
pub use decompose::AngleRange;
pub use error::{Error, Result};
pub use parallel::ParallelPointGenerator;
pub use point::{Point, PointGenerator, PointSequence};
pub use present::{Presenter, RasterPresenter};
pub use serial::SerialPointGenerator;
