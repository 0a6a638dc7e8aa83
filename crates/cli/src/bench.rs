//! Timing harness comparing both solvers over growing point sets.
//!
//! For each size, every iteration generates a fresh set of unique random
//! points, times brute force and divide and conquer on it, and checks that
//! the two agree on the distance. Averages are reported per size.

use std::fmt::Write as _;
use std::time::{Duration, Instant};

use anyhow::Result;
use nearpair_core::{
    Algorithm, ClosestPair, PairError, Point, SolverParams, closest_pair_brute_force,
    closest_pair_divide_and_conquer_with,
};
use tracing::{debug, info, warn};

use crate::points::{XorShift64, unique_random_points};

/// Dataset sizes used when none are given.
pub const DEFAULT_SIZES: [usize; 10] = [
    10_000, 20_000, 30_000, 40_000, 50_000, 60_000, 70_000, 80_000, 90_000, 100_000,
];

const SEPARATOR: &str = "--------------------------------------------";

/// Settings for one benchmark run.
#[derive(Debug, Clone)]
pub struct BenchParams {
    pub sizes: Vec<usize>,
    pub iterations: usize,
    pub range: f64,
    pub seed: u64,
    pub solver: SolverParams,
}

impl Default for BenchParams {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            iterations: 10,
            range: 1_000_000.0,
            seed: 0xC0FFEE,
            solver: SolverParams::default(),
        }
    }
}

/// Averaged timings for one dataset size.
#[derive(Debug, Clone, PartialEq)]
pub struct SizeReport {
    pub size: usize,
    pub avg_brute_ms: f64,
    pub avg_divide_ms: f64,
    pub mismatches: usize,
}

impl SizeReport {
    /// The plain-text block written for this size.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Final Results for n = {}", self.size);
        let _ = writeln!(
            out,
            "Avg {} RT: {} ms",
            Algorithm::BruteForce.label(),
            self.avg_brute_ms
        );
        let _ = writeln!(
            out,
            "Avg {} RT: {} ms",
            Algorithm::DivideAndConquer.label(),
            self.avg_divide_ms
        );
        let _ = writeln!(out, "{}", SEPARATOR);
        out
    }
}

/// Run every size in `params`, calling `on_report` as each one finishes.
///
/// Sizes the solvers reject (fewer than two points) are logged and skipped.
pub fn run_bench<F>(params: &BenchParams, mut on_report: F) -> Result<Vec<SizeReport>>
where
    F: FnMut(&SizeReport) -> Result<()>,
{
    let mut rng = XorShift64::new(params.seed);
    let mut reports = Vec::with_capacity(params.sizes.len());
    let iterations = params.iterations.max(1);

    for &size in &params.sizes {
        match bench_size(&mut rng, size, iterations, params) {
            Ok(report) => {
                on_report(&report)?;
                reports.push(report);
            }
            Err(err) => {
                if !matches!(
                    err.downcast_ref::<PairError>(),
                    Some(PairError::InvalidInput { .. })
                ) {
                    return Err(err);
                }
                warn!(size, error = %err, "skipping dataset size");
            }
        }
    }
    Ok(reports)
}

fn bench_size(
    rng: &mut XorShift64,
    size: usize,
    iterations: usize,
    params: &BenchParams,
) -> Result<SizeReport> {
    info!(size, iterations, "benchmarking");
    let mut total_brute = Duration::ZERO;
    let mut total_divide = Duration::ZERO;
    let mut mismatches = 0;

    for iteration in 0..iterations {
        let points = unique_random_points(rng, size, params.range)?;

        let (brute, elapsed) = timed(|| closest_pair_brute_force(&points))?;
        total_brute += elapsed;
        let (divide, elapsed) =
            timed(|| closest_pair_divide_and_conquer_with(&points, &params.solver))?;
        total_divide += elapsed;

        if !agree(&points, &brute, &divide) {
            mismatches += 1;
            warn!(
                size,
                iteration,
                brute = brute.distance,
                divide = divide.distance,
                "solvers disagree"
            );
        }
        debug!(size, iteration, distance = brute.distance, "iteration done");
    }

    let n = iterations as f64;
    Ok(SizeReport {
        size,
        avg_brute_ms: total_brute.as_secs_f64() * 1e3 / n,
        avg_divide_ms: total_divide.as_secs_f64() * 1e3 / n,
        mismatches,
    })
}

fn timed<F>(solve: F) -> Result<(ClosestPair, Duration)>
where
    F: FnOnce() -> nearpair_core::Result<ClosestPair>,
{
    let start = Instant::now();
    let best = solve()?;
    Ok((best, start.elapsed()))
}

/// Same distance, and both index pairs really are at that distance.
fn agree(points: &[Point], brute: &ClosestPair, divide: &ClosestPair) -> bool {
    let at = |pair: &ClosestPair| {
        pair.points(points)
            .map(|(a, b)| a.distance_to(&b))
            .unwrap_or(f64::NAN)
    };
    brute.distance == divide.distance && at(brute) == brute.distance && at(divide) == divide.distance
}
