// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use flipgraph::geometry::random_points;
use flipgraph::io::{parse_point_list, write_wkt};
use flipgraph::{
    ConcurrentFlipGraph, ExplorationConfig, FlipGraph, FlipGraphError, InputError, PointSet,
    Triangulation, TriangulationError,
};

/// Triangulate a planar point set and print its flip graph
#[derive(Parser, Debug)]
#[command(name = "flipgraph", version, about)]
struct Cli {
    /// Point coordinates, e.g. "0 0, 1 0, 0 1" (commas, spaces and brackets separate)
    #[arg(value_name = "POINTS", allow_negative_numbers = true)]
    points: Vec<String>,

    /// Generate N uniformly random points instead of reading POINTS
    #[arg(long, value_name = "N", conflicts_with = "points")]
    random: Option<usize>,

    /// Seed for --random
    #[arg(long, requires = "random")]
    seed: Option<u64>,

    /// Coordinate range for --random
    #[arg(
        long,
        num_args = 2,
        value_names = ["LO", "HI"],
        default_values_t = [0.0, 1.0],
        allow_negative_numbers = true
    )]
    range: Vec<f64>,

    /// Worker threads for concurrent exploration (defaults to available parallelism)
    #[arg(long, value_name = "N")]
    threads: Option<usize>,

    /// Explore on the main thread only
    #[arg(long, conflicts_with = "threads")]
    sequential: bool,

    /// Stop after expanding N triangulations
    #[arg(long, value_name = "N")]
    max_expansions: Option<usize>,

    /// Print node and edge counts instead of the graph
    #[arg(long)]
    summary: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("no points given; pass POINTS or --random N")]
    NoPoints,
    #[error("invalid --range: {lo} must be below {hi}")]
    EmptyRange { lo: f64, hi: f64 },
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Triangulation(#[from] TriangulationError),
    #[error(transparent)]
    FlipGraph(#[from] FlipGraphError),
    #[error("failed to write output")]
    Io(#[from] io::Error),
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn load_points(cli: &Cli) -> Result<PointSet<f64>, CliError> {
    if let Some(n) = cli.random {
        let (lo, hi) = (cli.range[0], cli.range[1]);
        if lo.is_nan() || hi.is_nan() || lo >= hi {
            return Err(CliError::EmptyRange { lo, hi });
        }
        let mut rng = match cli.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        return Ok(PointSet::new(random_points(&mut rng, n, lo, hi))?);
    }
    if cli.points.is_empty() {
        return Err(CliError::NoPoints);
    }
    let points = parse_point_list::<f64>(&cli.points.join(" "))?;
    Ok(PointSet::new(points)?)
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let points = Arc::new(load_points(cli)?);
    debug!(points = points.len(), "point set ready");

    let initial = Triangulation::build(points)?;
    let graph = if cli.sequential {
        FlipGraph::generate_bounded(initial, cli.max_expansions)
    } else {
        let mut config = ExplorationConfig::default().with_max_expansions(cli.max_expansions);
        if let Some(threads) = cli.threads {
            config = config.with_workers(threads);
        }
        ConcurrentFlipGraph::new(config).generate(initial)?
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if cli.summary {
        writeln!(
            out,
            "nodes: {}\nedges: {}\ncomplete: {}",
            graph.node_count(),
            graph.edge_count(),
            graph.is_complete()
        )?;
    } else {
        for node in graph.nodes() {
            write_wkt(&mut out, node)?;
        }
        for pair in graph.sorted_edges() {
            writeln!(out, "{pair}")?;
        }
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_range_and_random() {
        let cli = Cli::try_parse_from(["flipgraph", "--random", "5", "--range", "-1", "1"]).unwrap();
        assert_eq!(cli.random, Some(5));
        assert_eq!(cli.range, vec![-1.0, 1.0]);
        assert_eq!(load_points(&cli).unwrap().len(), 5);
    }

    #[test]
    fn positional_points_are_joined() {
        let cli = Cli::try_parse_from(["flipgraph", "0", "0,", "1", "0,", "0", "1"]).unwrap();
        assert_eq!(load_points(&cli).unwrap().len(), 3);
    }

    #[test]
    fn odd_coordinates_fail() {
        let cli = Cli::try_parse_from(["flipgraph", "0 0, 1"]).unwrap();
        assert!(matches!(
            load_points(&cli),
            Err(CliError::Input(InputError::OddCoordinateCount { count: 3 }))
        ));
    }
}
