// File: crates/chart-core/src/bisect.rs
// Summary: Binary search helpers over ascending slices.

use std::cmp::Ordering;

/// First index `i` such that `sorted[i] >= x` (insertion point on the left).
pub fn bisect_left<T: PartialOrd>(sorted: &[T], x: &T) -> usize {
    sorted.partition_point(|v| v.partial_cmp(x) == Some(Ordering::Less))
}

/// Index of the element closest to `x`, using `delta(a, b) = a - b` as the distance.
///
/// Ties resolve to the later element. Returns `None` for an empty slice.
pub fn bisect_center_by<T, F>(sorted: &[T], x: &T, delta: F) -> Option<usize>
where
    T: PartialOrd,
    F: Fn(&T, &T) -> f64,
{
    if sorted.is_empty() {
        return None;
    }
    // Search all but the last element so `i` stays a valid index.
    let i = bisect_left(&sorted[..sorted.len() - 1], x);
    if i > 0 && delta(&sorted[i - 1], x) > -delta(&sorted[i], x) {
        Some(i - 1)
    } else {
        Some(i)
    }
}

/// [`bisect_center_by`] for plain numbers.
pub fn bisect_center(sorted: &[f64], x: f64) -> Option<usize> {
    bisect_center_by(sorted, &x, |a, b| a - b)
}
