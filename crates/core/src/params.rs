//! Solver parameters.
//!
//! Contains SolverParams for controlling divide-and-conquer behavior.

use crate::error::{PairError, Result};

/// Default leaf size: sub-ranges of at most this many points are solved by
/// brute force.
pub const DEFAULT_LEAF_SIZE: usize = 4;

/// Smallest leaf size for which every split leaves two or more points on
/// each side.
pub const MIN_LEAF_SIZE: usize = 3;

/// Parameters for the divide-and-conquer solver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverParams {
    /// Sub-ranges with at most this many points are handed to brute force.
    pub leaf_size: usize,
}

impl Default for SolverParams {
    fn default() -> Self {
        Self {
            leaf_size: DEFAULT_LEAF_SIZE,
        }
    }
}

impl SolverParams {
    /// Creates parameters with the given leaf size.
    ///
    /// Fails with [`PairError::InvalidParams`] when `leaf_size` is below
    /// [`MIN_LEAF_SIZE`]: a leaf of 2 would let a split of 3 points produce
    /// a single-point half.
    pub fn new(leaf_size: usize) -> Result<Self> {
        if leaf_size < MIN_LEAF_SIZE {
            return Err(PairError::InvalidParams(format!(
                "leaf_size must be at least {}, got {}",
                MIN_LEAF_SIZE, leaf_size
            )));
        }
        Ok(Self { leaf_size })
    }
}
