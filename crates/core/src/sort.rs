//! Sort stage: top-down stable merge sort.
//!
//! The divide-and-conquer solver sorts by x exactly once before recursing,
//! then reuses [`merge_by`] during the combine step to keep every sub-range
//! ordered by y. One scratch buffer the size of the input serves the whole
//! sort.

use crate::geometry::Point;

/// Sort points by x-coordinate in place, keeping equal-x points in input
/// order.
pub fn sort_by_x(points: &mut [Point]) {
    merge_sort_by(points, |a, b| a.x <= b.x);
}

/// Returns true if `points` is in non-decreasing x order.
pub fn is_sorted_by_x(points: &[Point]) -> bool {
    points.windows(2).all(|w| w[0].x <= w[1].x)
}

/// Stable merge sort of `items` under the `le` ("less or equal") relation.
pub(crate) fn merge_sort_by<T, F>(items: &mut [T], le: F)
where
    T: Copy,
    F: Fn(&T, &T) -> bool,
{
    if items.len() < 2 {
        return;
    }
    let mut scratch = items.to_vec();
    merge_sort_with_scratch(items, &mut scratch, &le);
}

/// Merge sort using caller-provided scratch space of the same length.
pub(crate) fn merge_sort_with_scratch<T, F>(items: &mut [T], scratch: &mut [T], le: &F)
where
    T: Copy,
    F: Fn(&T, &T) -> bool,
{
    let n = items.len();
    debug_assert_eq!(scratch.len(), n);
    if n < 2 {
        return;
    }

    let mid = n.div_ceil(2);
    {
        let (left, right) = items.split_at_mut(mid);
        let (scratch_left, scratch_right) = scratch.split_at_mut(mid);
        merge_sort_with_scratch(left, scratch_left, le);
        merge_sort_with_scratch(right, scratch_right, le);
    }

    let (left, right) = items.split_at(mid);
    merge_by(left, right, scratch, le);
    items.copy_from_slice(scratch);
}

/// Merge two sorted runs into `out`, which must hold exactly both.
///
/// On ties the element from `left` goes first, which is what makes the
/// sort stable.
pub(crate) fn merge_by<T, F>(left: &[T], right: &[T], out: &mut [T], le: &F)
where
    T: Copy,
    F: Fn(&T, &T) -> bool,
{
    debug_assert_eq!(out.len(), left.len() + right.len());
    let (mut a, mut b) = (0, 0);
    for slot in out.iter_mut() {
        if b >= right.len() || (a < left.len() && le(&left[a], &right[b])) {
            *slot = left[a];
            a += 1;
        } else {
            *slot = right[b];
            b += 1;
        }
    }
}
