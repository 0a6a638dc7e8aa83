//! The solver result type.

use crate::geometry::Point;

/// The closest pair found by a solver.
///
/// `i < j` always holds, and both indices refer to positions in the slice
/// the caller passed in, whatever reordering the solver did internally.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosestPair {
    pub distance: f64,
    pub i: usize,
    pub j: usize,
}

impl ClosestPair {
    /// Build a result from two indices in either order.
    #[inline]
    pub fn new(distance: f64, a: usize, b: usize) -> Self {
        debug_assert_ne!(a, b);
        let (i, j) = if a < b { (a, b) } else { (b, a) };
        Self { distance, i, j }
    }

    #[inline]
    pub fn indices(&self) -> (usize, usize) {
        (self.i, self.j)
    }

    /// Look the pair up in the slice the solver was called with.
    pub fn points(&self, points: &[Point]) -> Option<(Point, Point)> {
        Some((*points.get(self.i)?, *points.get(self.j)?))
    }

    /// Keep `self` unless `other` is strictly closer.
    #[inline]
    pub fn closer(self, other: ClosestPair) -> ClosestPair {
        if other.distance < self.distance {
            other
        } else {
            self
        }
    }
}
