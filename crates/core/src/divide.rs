//! Divide-and-conquer closest pair search in O(n log n).
//!
//! The input is tagged with original indices and sorted by x once. Each
//! recursive call then:
//!
//! 1. solves ranges of at most `leaf_size` points by brute force,
//! 2. otherwise splits at `mid = (n - 1) / 2` and solves both halves,
//! 3. merges the halves (each left in y order by its own call) into y order,
//! 4. scans the strip of points within `d` of the split line, comparing each
//!    point only with later strip points whose y is less than `d` above it.
//!
//! Step 3 is why no call re-sorts its strip: the y order falls out of the
//! merge. The strip scan is linear per call because, with every same-side
//! pair at least `d` apart, only a constant number of points fit in a
//! `d x 2d` box.
//!
//! Recursion depth is [`recursion_depth_bound`]`(n, leaf_size)`, about
//! `log2(n / leaf_size) + 1`: 16 for 100,000 points at the default leaf size.

use tracing::{debug, trace};

use crate::brute::{brute_force_indexed, closest_pair_brute_force};
use crate::error::{PairError, Result};
use crate::geometry::{IndexedPoint, Point, distance, validate};
use crate::pair::ClosestPair;
use crate::params::{MIN_LEAF_SIZE, SolverParams};
use crate::sort::{merge_by, merge_sort_with_scratch};

/// Find the closest pair with default [`SolverParams`].
///
/// The caller's slice is not reordered; the reported indices refer to it.
/// Distances always agree with [`closest_pair_brute_force`]. Index pairs
/// agree for inputs of at most `leaf_size` points; above that, when several
/// pairs share the minimum distance, either solver may report a different
/// one of them.
///
/// # Errors
/// Same preconditions as [`closest_pair_brute_force`].
pub fn closest_pair_divide_and_conquer(points: &[Point]) -> Result<ClosestPair> {
    closest_pair_divide_and_conquer_with(points, &SolverParams::default())
}

/// Find the closest pair with explicit solver parameters.
pub fn closest_pair_divide_and_conquer_with(
    points: &[Point],
    params: &SolverParams,
) -> Result<ClosestPair> {
    validate(points)?;
    if params.leaf_size < MIN_LEAF_SIZE {
        return Err(PairError::InvalidParams(format!(
            "leaf_size must be at least {}, got {}",
            MIN_LEAF_SIZE, params.leaf_size
        )));
    }
    if points.len() <= params.leaf_size {
        return closest_pair_brute_force(points);
    }

    let (best, depth) = solve_indexed(points, params.leaf_size);
    debug!(
        n = points.len(),
        depth,
        distance = best.distance,
        i = best.i,
        j = best.j,
        "divide and conquer done"
    );
    Ok(best)
}

/// Maximum recursion depth for `n` points, counting the top call as 1.
pub fn recursion_depth_bound(n: usize, leaf_size: usize) -> usize {
    let leaf_size = leaf_size.max(1);
    let mut depth = 1;
    let mut size = n;
    while size > leaf_size {
        size = size.div_ceil(2);
        depth += 1;
    }
    depth
}

/// Sort, recurse, and report the deepest level reached.
fn solve_indexed(points: &[Point], leaf_size: usize) -> (ClosestPair, usize) {
    let mut items = IndexedPoint::tag_all(points);
    let mut scratch = items.clone();
    merge_sort_with_scratch(&mut items, &mut scratch, &by_x);

    let mut recursion = Recursion {
        leaf_size,
        max_depth: 0,
    };
    let best = recursion.solve(&mut items, &mut scratch, 1);
    debug_assert!(recursion.max_depth <= recursion_depth_bound(points.len(), leaf_size));
    (best, recursion.max_depth)
}

fn by_x(a: &IndexedPoint, b: &IndexedPoint) -> bool {
    a.point.x <= b.point.x
}

fn by_y(a: &IndexedPoint, b: &IndexedPoint) -> bool {
    a.point.y <= b.point.y
}

struct Recursion {
    leaf_size: usize,
    max_depth: usize,
}

impl Recursion {
    /// Solve an x-sorted range, leaving it sorted by y on return.
    ///
    /// `scratch` must be the same length as `items`.
    fn solve(
        &mut self,
        items: &mut [IndexedPoint],
        scratch: &mut [IndexedPoint],
        depth: usize,
    ) -> ClosestPair {
        self.max_depth = self.max_depth.max(depth);
        let n = items.len();
        if n <= self.leaf_size {
            let best = brute_force_indexed(items);
            merge_sort_with_scratch(items, scratch, &by_y);
            return best;
        }

        let mid = (n - 1) / 2;
        let mid_x = items[mid].point.x;
        let best = {
            let (left, right) = items.split_at_mut(mid + 1);
            let (scratch_left, scratch_right) = scratch.split_at_mut(mid + 1);
            let left_best = self.solve(left, scratch_left, depth + 1);
            let right_best = self.solve(right, scratch_right, depth + 1);
            left_best.closer(right_best)
        };

        {
            let (left, right) = items.split_at(mid + 1);
            merge_by(left, right, scratch, &by_y);
        }
        items.copy_from_slice(scratch);

        let width = collect_strip(items, mid_x, best.distance, scratch);
        trace!(n, depth, strip = width, "combine");
        scan_strip(&scratch[..width], best)
    }
}

/// Copy the y-ordered points with `|x - mid_x| < d` into `out`; returns how
/// many were copied.
fn collect_strip(items: &[IndexedPoint], mid_x: f64, d: f64, out: &mut [IndexedPoint]) -> usize {
    let mut width = 0;
    for item in items {
        if (item.point.x - mid_x).abs() < d {
            out[width] = *item;
            width += 1;
        }
    }
    width
}

/// Improve `best` from a y-ordered strip.
fn scan_strip(strip: &[IndexedPoint], mut best: ClosestPair) -> ClosestPair {
    for (a, lower) in strip.iter().enumerate() {
        for upper in &strip[a + 1..] {
            if upper.point.y - lower.point.y >= best.distance {
                break;
            }
            let dist = distance(lower.point, upper.point);
            if dist < best.distance {
                best = ClosestPair::new(dist, lower.index, upper.index);
            }
        }
    }
    best
}
