//! nearpair - Find the closest pair of points in a 2D point set.
//!
//! `nearpair solve` reads a point file and reports the minimum distance and
//! the pair achieving it. `nearpair bench` times both solvers on random
//! point sets of increasing size and writes a plain-text report.

mod bench;
mod points;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use nearpair_core::{Algorithm, ClosestPair, Point, SolverParams, solve};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use bench::{BenchParams, DEFAULT_SIZES, run_bench};
use points::load_points;

/// Which solver(s) `solve` runs.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum AlgorithmChoice {
    /// O(n^2) pairwise scan
    Brute,
    /// O(n log n) divide and conquer (default)
    #[default]
    Divide,
    /// Run both and check they agree
    Both,
}

impl AlgorithmChoice {
    fn algorithms(self) -> &'static [Algorithm] {
        match self {
            Self::Brute => &[Algorithm::BruteForce],
            Self::Divide => &[Algorithm::DivideAndConquer],
            Self::Both => &Algorithm::ALL,
        }
    }
}

/// Closest pair of points: brute force and divide and conquer.
#[derive(Parser, Debug)]
#[command(name = "nearpair")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Use debug logging level
    #[arg(short = 'd', long, global = true, action = ArgAction::SetTrue)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find the closest pair in a point file
    Solve {
        /// Point file ("x,y" or "x y" per line, or a .json array of [x, y]); "-" for stdin
        file: PathBuf,

        /// Solver to run
        #[arg(short = 'a', long, value_enum, default_value = "divide")]
        algorithm: AlgorithmChoice,

        /// Largest range solved by brute force inside divide and conquer
        #[arg(long = "leaf-size", default_value_t = nearpair_core::params::DEFAULT_LEAF_SIZE)]
        leaf_size: usize,

        /// Print results as JSON
        #[arg(long, action = ArgAction::SetTrue)]
        json: bool,
    },

    /// Time both solvers on random unique point sets
    Bench {
        /// Comma-separated dataset sizes
        #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_SIZES.to_vec())]
        sizes: Vec<usize>,

        /// Runs per dataset size
        #[arg(short = 'i', long, default_value = "10")]
        iterations: usize,

        /// Coordinates are drawn from [0, range)
        #[arg(long, default_value = "1000000")]
        range: f64,

        /// Random seed
        #[arg(long, default_value_t = 0xC0FFEE)]
        seed: u64,

        /// Largest range solved by brute force inside divide and conquer
        #[arg(long = "leaf-size", default_value_t = nearpair_core::params::DEFAULT_LEAF_SIZE)]
        leaf_size: usize,

        /// Report file, or "-" to print only
        #[arg(short = 'o', long, default_value = "results.txt")]
        outfile: String,
    },
}

#[derive(Debug, Serialize)]
struct SolveOutput {
    #[serde(skip)]
    kind: Algorithm,
    algorithm: &'static str,
    distance: f64,
    i: usize,
    j: usize,
    p1: [f64; 2],
    p2: [f64; 2],
}

impl SolveOutput {
    fn new(algorithm: Algorithm, best: &ClosestPair, points: &[Point]) -> Self {
        let (a, b) = (points[best.i], points[best.j]);
        Self {
            kind: algorithm,
            algorithm: algorithm.name(),
            distance: best.distance,
            i: best.i,
            j: best.j,
            p1: [a.x, a.y],
            p2: [b.x, b.y],
        }
    }
}

fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run_solve(
    file: &Path,
    choice: AlgorithmChoice,
    leaf_size: usize,
    json: bool,
) -> Result<()> {
    let points = load_points(file)?;
    let params = SolverParams::new(leaf_size)?;
    tracing::debug!(n = points.len(), file = %file.display(), "loaded points");

    let mut outputs = Vec::new();
    for &algorithm in choice.algorithms() {
        let best = solve(algorithm, &points, &params)
            .with_context(|| format!("{} failed on {}", algorithm.label(), file.display()))?;
        outputs.push(SolveOutput::new(algorithm, &best, &points));
    }

    if let [first, second] = outputs.as_slice() {
        if first.distance != second.distance {
            tracing::warn!(
                brute = first.distance,
                divide = second.distance,
                "solvers disagree"
            );
        }
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if json {
        serde_json::to_writer_pretty(&mut out, &outputs)?;
        writeln!(out)?;
    } else {
        for o in &outputs {
            writeln!(out, "{}: distance {}", o.kind.label(), o.distance)?;
            writeln!(
                out,
                "  pair: #{} ({}, {}) - #{} ({}, {})",
                o.i, o.p1[0], o.p1[1], o.j, o.p2[0], o.p2[1]
            )?;
        }
    }
    out.flush()?;
    Ok(())
}

fn run_bench_command(params: BenchParams, outfile: &str) -> Result<()> {
    let mut file = if outfile == "-" {
        None
    } else {
        let f = File::create(outfile)
            .with_context(|| format!("failed to create output file {}", outfile))?;
        Some(BufWriter::new(f))
    };

    let stdout = io::stdout();
    let reports = run_bench(&params, |report| {
        let block = report.render();
        let mut out = stdout.lock();
        out.write_all(block.as_bytes())?;
        out.flush()?;
        if let Some(f) = file.as_mut() {
            f.write_all(block.as_bytes())?;
        }
        Ok(())
    })?;

    if let Some(mut f) = file {
        f.flush()?;
    }

    let mismatched: usize = reports.iter().map(|r| r.mismatches).sum();
    if mismatched > 0 {
        bail!("solvers disagreed on {} run(s)", mismatched);
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.debug);

    match args.command {
        Command::Solve {
            file,
            algorithm,
            leaf_size,
            json,
        } => run_solve(&file, algorithm, leaf_size, json),
        Command::Bench {
            sizes,
            iterations,
            range,
            seed,
            leaf_size,
            outfile,
        } => {
            let params = BenchParams {
                sizes,
                iterations,
                range,
                seed,
                solver: SolverParams::new(leaf_size)?,
            };
            run_bench_command(params, &outfile)
        }
    }
}
