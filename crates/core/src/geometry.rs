//! Geometric primitives: the 2D point and Euclidean distance.

use crate::error::{PairError, Result};

/// A point in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance_to(&self, other: &Point) -> f64 {
        distance(*self, *other)
    }

    /// True if neither coordinate is NaN or infinite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

/// A point tagged with its position in the caller's slice.
///
/// Solvers reorder these freely; `index` is what gets reported.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct IndexedPoint {
    pub point: Point,
    pub index: usize,
}

impl IndexedPoint {
    pub(crate) fn tag_all(points: &[Point]) -> Vec<IndexedPoint> {
        points
            .iter()
            .enumerate()
            .map(|(index, &point)| IndexedPoint { point, index })
            .collect()
    }
}

/// Euclidean distance between two points.
///
/// Always the full `sqrt(dx^2 + dy^2)`: both solvers compare unsquared
/// distances, so a squared shortcut here would change their results.
#[inline]
pub fn distance(p1: Point, p2: Point) -> f64 {
    let dx = p1.x - p2.x;
    let dy = p1.y - p2.y;
    (dx * dx + dy * dy).sqrt()
}

/// Check the shared solver preconditions: at least two points, all finite.
pub(crate) fn validate(points: &[Point]) -> Result<()> {
    if points.len() < 2 {
        return Err(PairError::InvalidInput { len: points.len() });
    }
    if let Some(index) = points.iter().position(|p| !p.is_finite()) {
        return Err(PairError::NonFiniteCoordinate { index });
    }
    Ok(())
}
