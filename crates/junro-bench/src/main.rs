//! junro-bench: CLI tool for route-ordering experimentation and diagnostics.
//!
//! Runs the greedy planner on a JSON file of waypoints or segments and
//! prints before/after travel distance and wall-clock timing. Useful for:
//!
//! - Checking how much a given job gains from reordering
//! - Comparing runs with and without a fixed starting point
//! - Measuring planner duration on realistic input sizes
//!
//! # Usage
//!
//! ```text
//! cargo run --release --bin junro-bench -- [OPTIONS] <INPUT_PATH>
//! ```
//!
//! Waypoint files are JSON arrays of `{"x": .., "y": ..}` objects;
//! segment files are arrays of `{"a": {..}, "b": {..}}` objects.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use junro_route::{Point, Segment, order_points, order_segments, point_travel, segment_travel};
use serde::Serialize;

/// Route-ordering experimentation and diagnostics for junro.
///
/// Loads a waypoint or segment file, runs the greedy planner, and
/// prints travel-distance and timing diagnostics.
#[derive(Parser)]
#[command(name = "junro-bench", version)]
struct Cli {
    /// Path to the input JSON file.
    input_path: PathBuf,

    /// Whether the input holds waypoints or segments.
    #[arg(long, value_enum, default_value_t = Mode::Points)]
    mode: Mode,

    /// X coordinate of a fixed starting point (requires --start-y).
    #[arg(long, requires = "start_y")]
    start_x: Option<i64>,

    /// Y coordinate of a fixed starting point (requires --start-x).
    #[arg(long, requires = "start_x")]
    start_y: Option<i64>,

    /// Emit a machine-readable JSON report instead of formatted text.
    #[arg(long)]
    json: bool,
}

/// Input interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// A flat list of waypoints.
    Points,
    /// A list of drawable segments.
    Segments,
}

/// Errors that can occur while loading bench input.
#[derive(Debug, thiserror::Error)]
enum BenchError {
    /// The input file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The input file was not valid JSON for the selected mode.
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Machine-readable run report, printed with `--json`.
#[derive(Serialize)]
struct BenchReport {
    mode: &'static str,
    count: usize,
    travel_before: f32,
    travel_after: f32,
    duration_ms: f64,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), BenchError> {
    let start = match (cli.start_x, cli.start_y) {
        (Some(x), Some(y)) => Some(Point::new(x, y)),
        _ => None,
    };

    let report = match cli.mode {
        Mode::Points => {
            let points: Vec<Point> = load(&cli.input_path)?;
            let before = point_travel(&points);
            let timer = Instant::now();
            let route = order_points(&points, start);
            let duration = timer.elapsed();
            BenchReport {
                mode: "points",
                count: route.len(),
                travel_before: before,
                travel_after: point_travel(&route),
                duration_ms: duration.as_secs_f64() * 1000.0,
            }
        }
        Mode::Segments => {
            let segments: Vec<Segment> = load(&cli.input_path)?;
            let before = segment_travel(&segments);
            let timer = Instant::now();
            let route = order_segments(&segments, start);
            let duration = timer.elapsed();
            BenchReport {
                mode: "segments",
                count: route.len(),
                travel_before: before,
                travel_after: segment_travel(&route),
                duration_ms: duration.as_secs_f64() * 1000.0,
            }
        }
    };

    if cli.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("Error serializing report: {e}"),
        }
    } else {
        print_report(&report);
    }

    Ok(())
}

/// Read and deserialize a JSON input file.
fn load<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Vec<T>, BenchError> {
    let contents = std::fs::read_to_string(path).map_err(|source| BenchError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| BenchError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Print a formatted text report to stdout.
fn print_report(report: &BenchReport) {
    println!("Mode:           {}", report.mode);
    println!("Units placed:   {}", report.count);
    println!("Travel before:  {:.1}", report.travel_before);
    println!("Travel after:   {:.1}", report.travel_after);

    if report.travel_before > 0.0 {
        let saved = 100.0 * (1.0 - report.travel_after / report.travel_before);
        println!("Improvement:    {saved:.1}%");
    }

    println!("Duration:       {:.3}ms", report.duration_ms);
}
