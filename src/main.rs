/* taylorcircle | main.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/******************************************************************************/

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use taylorcircle::bench::{self, Benchmark, Measurement};
use taylorcircle::config::DEFAULT_CONFIG_PATH;
use taylorcircle::{
    accuracy, Config, InnerFanOut, ParallelPointGenerator, PointGenerator, PointSequence,
    Presenter, RasterPresenter, SerialPointGenerator,
};

/******************************************************************************/

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    Serial,
    Parallel,
    Both,
}

/// Draws a circle from truncated Taylor series and times the computation
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Which generator(s) to run
    #[arg(short, long, value_enum, default_value_t = Mode::Both)]
    mode: Mode,

    /// Series truncation depth
    #[arg(short, long)]
    terms: Option<usize>,

    /// Angular step, in degrees
    #[arg(short, long)]
    step: Option<f64>,

    /// Outer worker count
    #[arg(short, long)]
    workers: Option<usize>,

    /// Sine / cosine evaluation inside each step
    #[arg(long, value_enum)]
    inner: Option<InnerFanOut>,

    /// Timed passes per generator; above 1, min / mean / max are reported
    #[arg(short, long, default_value_t = 1)]
    iterations: usize,

    /// Render the circle to this PNG file
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::load_default().unwrap_or_else(|e| {
            eprintln!("Could not load {}: {}", DEFAULT_CONFIG_PATH, e);
            eprintln!("Using default configuration");
            Config::default()
        }),
    };

    if let Some(terms) = cli.terms {
        config.series.term_count = terms;
    }
    if let Some(step) = cli.step {
        config.series.step_size = step;
    }
    if let Some(workers) = cli.workers {
        config.parallel.worker_count = workers;
    }
    if let Some(inner) = cli.inner {
        config.parallel.inner = inner;
    }
    Ok(config)
}

fn time(generator: &dyn PointGenerator, iterations: usize) -> PointSequence {
    let Measurement { output, elapsed } = bench::run(generator);
    println!("{}", bench::report_line(generator.label(), elapsed));

    if iterations > 1 {
        let summary = Benchmark {
            warmup: 0,
            iterations,
        }
        .run(generator);
        println!(
            "  {} passes: min {:.6} s, mean {:.6} s, max {:.6} s",
            summary.iterations,
            summary.min.as_secs_f64(),
            summary.mean.as_secs_f64(),
            summary.max.as_secs_f64()
        );
    }
    output
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(&config.logging.level))
                .context("invalid log level")?,
        )
        .init();

    let series = config.series()?;
    let pool = config.thread_pool()?;
    let (width, height) = config.screen()?;
    tracing::info!(
        terms = series.term_count(),
        step_size = series.step_size(),
        workers = pool.worker_count(),
        inner = ?pool.inner(),
        "configuration loaded"
    );

    let error = accuracy::max_error(series.term_count(), 10_001);
    tracing::info!(sin = error.sin, cos = error.cos, "series truncation error");

    let serial = matches!(cli.mode, Mode::Serial | Mode::Both)
        .then(|| time(&SerialPointGenerator::new(series), cli.iterations));
    let parallel = match cli.mode {
        Mode::Parallel | Mode::Both => {
            let generator = ParallelPointGenerator::new(series, pool)?;
            tracing::info!(
                workers = generator.pool_config().worker_count(),
                inner = ?generator.pool_config().inner(),
                "parallel generator ready"
            );
            Some(time(&generator, cli.iterations))
        }
        Mode::Serial => None,
    };

    if let (Some(serial), Some(parallel)) = (&serial, &parallel) {
        if serial == parallel {
            println!("Serial and parallel outputs are identical ({} points)", serial.len());
        } else {
            anyhow::bail!("serial and parallel outputs differ");
        }
    }

    if let Some(path) = cli.output {
        let points = parallel.or(serial).unwrap_or_default();
        RasterPresenter::new(width, height, path).present(&points)?;
    }

    Ok(())
}
