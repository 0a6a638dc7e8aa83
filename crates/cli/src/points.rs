//! Loading and generating point sets for the command line tool.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use nearpair_core::Point;
use nearpair_core::input::parse_points;
use rustc_hash::FxHashSet;

/// Read points from `path`, or from stdin when `path` is `-`.
///
/// Files ending in `.json` hold an array of `[x, y]` pairs; anything else is
/// the one-point-per-line text format.
pub fn load_points(path: &Path) -> Result<Vec<Point>> {
    let text = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read points from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?
    };

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        let pairs: Vec<[f64; 2]> = serde_json::from_str(&text)
            .with_context(|| format!("invalid JSON point list in {}", path.display()))?;
        Ok(pairs.into_iter().map(Point::from).collect())
    } else {
        parse_points(&text).with_context(|| format!("invalid point list in {}", path.display()))
    }
}

/// Xorshift generator producing uniform doubles in `[0, 1)`.
#[derive(Debug, Clone)]
pub struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    pub fn new(seed: u64) -> Self {
        Self { state: seed.max(1) }
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1_u64 << 53) as f64
    }
}

/// Generate `n` distinct points with both coordinates in `[0, range)`.
pub fn unique_random_points(rng: &mut XorShift64, n: usize, range: f64) -> Result<Vec<Point>> {
    if !(range.is_finite() && range > 0.0) {
        bail!("coordinate range must be a positive finite number, got {}", range);
    }
    let mut seen = FxHashSet::with_capacity_and_hasher(n, Default::default());
    let mut points = Vec::with_capacity(n);
    while points.len() < n {
        let p = Point::new(rng.next_f64() * range, rng.next_f64() * range);
        if seen.insert((p.x.to_bits(), p.y.to_bits())) {
            points.push(p);
        }
    }
    Ok(points)
}
