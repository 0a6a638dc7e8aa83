//! nearpair - Closest pair of points in the plane.
//!
//! Two solvers answer the same batch query, "what is the minimum Euclidean
//! distance between any two points of this set":
//!
//! - [`closest_pair_brute_force`] scans every unordered pair in O(n^2).
//! - [`closest_pair_divide_and_conquer`] sorts once by x and recurses,
//!   combining halves with a y-ordered strip scan in O(n log n).
//!
//! Both return a [`ClosestPair`] whose indices refer to the caller's slice.

pub mod brute;
pub mod divide;
pub mod error;
pub mod geometry;
pub mod input;
pub mod pair;
pub mod params;
pub mod solver;
pub mod sort;

pub use brute::closest_pair_brute_force;
pub use divide::{closest_pair_divide_and_conquer, closest_pair_divide_and_conquer_with};
pub use error::{PairError, Result};
pub use geometry::{Point, distance};
pub use pair::ClosestPair;
pub use params::SolverParams;
pub use solver::{Algorithm, solve};
