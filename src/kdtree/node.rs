use std::cmp::Ordering;

use crate::r#type::CoordFloat;

/// A single tree vertex. Children are exclusively owned; every algorithm
/// walks top-down, so no parent links are kept.
#[derive(Debug, Clone)]
pub(crate) struct Node<N: CoordFloat, T, const K: usize> {
    pub(crate) point: [N; K],
    pub(crate) value: T,
    /// Split dimension in `[0, K)`, cycling with depth.
    pub(crate) axis: usize,
    pub(crate) left: Option<Box<Node<N, T, K>>>,
    pub(crate) right: Option<Box<Node<N, T, K>>>,
}

impl<N: CoordFloat, T, const K: usize> Node<N, T, K> {
    pub(crate) fn leaf(point: [N; K], value: T, axis: usize) -> Self {
        Self {
            point,
            value,
            axis,
            left: None,
            right: None,
        }
    }

    /// Recursive median-partition bulk build.
    ///
    /// At depth `depth` the split axis is `depth % K`. The partition is
    /// stable-sorted along that axis (tie order is not part of the
    /// contract), the element at `n / 2` becomes the subtree root, and the
    /// two halves recurse one level deeper. Every level re-sorts its
    /// partition, so the build is `O(n log^2 n)` with `O(log n)` height.
    ///
    /// Establishes the split invariant non-strictly on both sides: left
    /// subtree coordinates at `axis` are `<=` the root's, right subtree
    /// coordinates are `>=`.
    pub(crate) fn build(mut items: Vec<([N; K], T)>, depth: usize) -> Option<Box<Self>> {
        if items.is_empty() {
            return None;
        }
        let axis = depth % K;
        items.sort_by(|a, b| cmp_axis(&a.0, &b.0, axis));

        let median = items.len() / 2;
        let upper = items.split_off(median + 1);
        // `items` now holds [0, median]; its tail is the median element.
        let (point, value) = items.pop()?;

        Some(Box::new(Self {
            point,
            value,
            axis,
            left: Self::build(items, depth + 1),
            right: Self::build(upper, depth + 1),
        }))
    }

    /// Height of an optional subtree: 0 when absent.
    pub(crate) fn height(node: Option<&Self>) -> usize {
        match node {
            None => 0,
            Some(n) => 1 + Node::height(n.left.as_deref()).max(Node::height(n.right.as_deref())),
        }
    }
}

/// Order two points on one coordinate. NaN coordinates compare equal so the
/// sort stays total instead of panicking.
fn cmp_axis<N: CoordFloat, const K: usize>(a: &[N; K], b: &[N; K], axis: usize) -> Ordering {
    a[axis].partial_cmp(&b[axis]).unwrap_or(Ordering::Equal)
}
