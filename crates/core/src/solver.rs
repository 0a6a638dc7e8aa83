//! Algorithm selection.

use std::fmt;
use std::str::FromStr;

use crate::brute::closest_pair_brute_force;
use crate::divide::closest_pair_divide_and_conquer_with;
use crate::error::{PairError, Result};
use crate::geometry::Point;
use crate::pair::ClosestPair;
use crate::params::SolverParams;

/// Which solver to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    BruteForce,
    #[default]
    DivideAndConquer,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::BruteForce, Algorithm::DivideAndConquer];

    /// Short name used in reports and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::BruteForce => "brute",
            Self::DivideAndConquer => "divide",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::BruteForce => "Brute Force",
            Self::DivideAndConquer => "Divide & Conquer",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = PairError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "brute" | "brute-force" | "bruteforce" => Ok(Self::BruteForce),
            "divide" | "divide-and-conquer" | "dc" => Ok(Self::DivideAndConquer),
            other => Err(PairError::InvalidParams(format!(
                "unknown algorithm: {}",
                other
            ))),
        }
    }
}

/// Run `algorithm` over `points`. `params` only affects divide and conquer.
pub fn solve(algorithm: Algorithm, points: &[Point], params: &SolverParams) -> Result<ClosestPair> {
    match algorithm {
        Algorithm::BruteForce => closest_pair_brute_force(points),
        Algorithm::DivideAndConquer => closest_pair_divide_and_conquer_with(points, params),
    }
}
