//! Exhaustive O(n^2) closest pair search.
//!
//! Serves as the standalone baseline and as the leaf solver of the
//! divide-and-conquer recursion.

use tracing::debug;

use crate::error::Result;
use crate::geometry::{IndexedPoint, Point, distance, validate};
use crate::pair::ClosestPair;

/// Find the closest pair by comparing every unordered pair `(i, j)`, `i < j`.
///
/// The first pair in `(i, j)` lexicographic order that reaches the minimum
/// is reported; later ties do not replace it.
///
/// # Errors
/// [`PairError::InvalidInput`](crate::PairError::InvalidInput) for fewer than
/// two points, [`PairError::NonFiniteCoordinate`](crate::PairError::NonFiniteCoordinate)
/// for NaN or infinite coordinates.
pub fn closest_pair_brute_force(points: &[Point]) -> Result<ClosestPair> {
    validate(points)?;
    let best = scan(points, |p| *p, |k, _| k);
    debug!(
        n = points.len(),
        distance = best.distance,
        i = best.i,
        j = best.j,
        "brute force done"
    );
    Ok(best)
}

/// Brute force over a reordered sub-range, reporting original indices.
pub(crate) fn brute_force_indexed(items: &[IndexedPoint]) -> ClosestPair {
    scan(items, |ip| ip.point, |_, ip| ip.index)
}

/// Shared nested scan. `items` must hold at least two elements.
fn scan<T, P, I>(items: &[T], pos: P, id: I) -> ClosestPair
where
    P: Fn(&T) -> Point,
    I: Fn(usize, &T) -> usize,
{
    debug_assert!(items.len() >= 2);
    let mut best = ClosestPair::new(
        distance(pos(&items[0]), pos(&items[1])),
        id(0, &items[0]),
        id(1, &items[1]),
    );
    for (a, item_a) in items.iter().enumerate() {
        let pa = pos(item_a);
        for (b, item_b) in items.iter().enumerate().skip(a + 1) {
            let dist = distance(pa, pos(item_b));
            if dist < best.distance {
                best = ClosestPair::new(dist, id(a, item_a), id(b, item_b));
            }
        }
    }
    best
}
