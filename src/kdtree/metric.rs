//! Distance metrics for spatial queries.
//!
//! A [`KdTree`][crate::kdtree::KdTree] stores one [`DistanceFn`] at
//! construction time and applies it uniformly in every distance-based query.
//! Range search is purely coordinate-wise and never consults the metric.

use crate::r#type::CoordFloat;

/// Signature of a pluggable distance function over `K`-dimensional points.
///
/// Implementations must be non-negative; they need not be metrics in the
/// mathematical sense. The default is [`squared_euclidean`].
pub type DistanceFn<N, const K: usize> = fn(&[N; K], &[N; K]) -> N;

/// Squared Euclidean distance.
///
/// Skipping the square root preserves ordering and keeps comparisons cheap.
#[inline]
pub fn squared_euclidean<N: CoordFloat, const K: usize>(a: &[N; K], b: &[N; K]) -> N {
    let mut acc = N::zero();
    for i in 0..K {
        let d = a[i] - b[i];
        acc = acc + d * d;
    }
    acc
}

/// Manhattan (taxicab) distance: the sum of absolute per-axis differences.
#[inline]
pub fn manhattan<N: CoordFloat, const K: usize>(a: &[N; K], b: &[N; K]) -> N {
    let mut acc = N::zero();
    for i in 0..K {
        acc = acc + (a[i] - b[i]).abs();
    }
    acc
}
