use std::cmp::Ordering;

use crate::error::{PointIndexError, Result};
use crate::kdtree::node::Node;
use crate::kdtree::rect::HyperRect;
use crate::kdtree::KdTree;
use crate::r#type::CoordFloat;

/// One query result: a borrowed stored point, its value, and the distance
/// to the query point under the tree's active metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor<'a, N: CoordFloat, T, const K: usize> {
    /// The stored point.
    pub point: &'a [N; K],
    /// The value associated with the point at construction or insertion.
    pub value: &'a T,
    /// Distance from the query point under the tree's metric.
    pub distance: N,
}

impl<N: CoordFloat, T, const K: usize> KdTree<N, T, K> {
    /// Find the single closest stored point to `query`.
    ///
    /// Depth-first walk over an explicit stack. The child on the query's
    /// side of the splitting plane (ties toward the left) is always
    /// visited; the far child is visited only while the squared gap along
    /// the split axis is still under the best distance seen so far. The
    /// single stack gives no nearest-first ordering; correctness rests
    /// entirely on that shrinking bound.
    ///
    /// Returns `None` only for an empty tree, which the public constructors
    /// cannot produce.
    pub fn nearest(&self, query: &[N; K]) -> Option<Neighbor<'_, N, T, K>> {
        let root = self.root.as_deref()?;
        let mut best: Option<&Node<N, T, K>> = None;
        let mut best_dist = N::infinity();

        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            let dist = (self.metric)(query, &node.point);
            if dist < best_dist {
                best_dist = dist;
                best = Some(node);
            }

            let axis = node.axis;
            let (near, far) = if query[axis] <= node.point[axis] {
                (node.left.as_deref(), node.right.as_deref())
            } else {
                (node.right.as_deref(), node.left.as_deref())
            };
            if let Some(near) = near {
                stack.push(near);
            }
            let gap = query[axis] - node.point[axis];
            if gap * gap < best_dist {
                if let Some(far) = far {
                    stack.push(far);
                }
            }
        }

        best.map(|node| Neighbor {
            point: &node.point,
            value: &node.value,
            distance: best_dist,
        })
    }

    /// Find up to `k` closest stored points, ascending by distance.
    ///
    /// The result holds `min(k, len)` entries and its first entry matches
    /// [`nearest`][Self::nearest]. Candidates live in a bounded list kept
    /// ascending by linear insertion; once full, its worst entry is the
    /// pruning bound and is evicted by anything closer.
    ///
    /// Errors with [`PointIndexError::InvalidK`] when `k == 0`. Delegates
    /// to [`nearest`][Self::nearest] when `k == 1`.
    pub fn nearest_n(&self, query: &[N; K], k: usize) -> Result<Vec<Neighbor<'_, N, T, K>>> {
        if k == 0 {
            return Err(PointIndexError::InvalidK);
        }
        if k == 1 {
            return Ok(self.nearest(query).into_iter().collect());
        }
        let Some(root) = self.root.as_deref() else {
            return Ok(Vec::new());
        };

        let mut found: Vec<(N, &Node<N, T, K>)> = Vec::with_capacity(k + 1);
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            let bound = if found.len() == k {
                found[k - 1].0
            } else {
                N::infinity()
            };
            let dist = (self.metric)(query, &node.point);
            if dist < bound {
                let at = found
                    .iter()
                    .position(|(d, _)| dist < *d)
                    .unwrap_or(found.len());
                found.insert(at, (dist, node));
                found.truncate(k);
            }

            let bound = if found.len() == k {
                found[k - 1].0
            } else {
                N::infinity()
            };
            let axis = node.axis;
            // Near side chosen with a strict comparison here, unlike
            // `nearest`; at exact split-axis equality the two queries can
            // tie-break differently.
            let (near, far) = if query[axis] < node.point[axis] {
                (node.left.as_deref(), node.right.as_deref())
            } else {
                (node.right.as_deref(), node.left.as_deref())
            };
            if let Some(near) = near {
                stack.push(near);
            }
            let gap = query[axis] - node.point[axis];
            if gap * gap < bound {
                if let Some(far) = far {
                    stack.push(far);
                }
            }
        }

        Ok(found
            .into_iter()
            .map(|(distance, node)| Neighbor {
                point: &node.point,
                value: &node.value,
                distance,
            })
            .collect())
    }

    /// Find every stored point whose metric distance to `query` is within
    /// `radius`, in traversal order.
    ///
    /// A point qualifies when `metric(query, point) <= radius * radius`,
    /// while subtree pruning compares the raw per-axis gap against the raw
    /// `radius`. With the default squared Euclidean metric the two tests
    /// agree; with any other metric the caller must pre-square or otherwise
    /// adapt the radius argument to honor this contract.
    ///
    /// A non-positive radius yields an empty result immediately.
    pub fn within(&self, query: &[N; K], radius: N) -> Vec<Neighbor<'_, N, T, K>> {
        let mut found = Vec::new();
        if radius <= N::zero() {
            return found;
        }
        let Some(root) = self.root.as_deref() else {
            return found;
        };
        let r2 = radius * radius;

        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            let dist = (self.metric)(query, &node.point);
            if dist <= r2 {
                found.push(Neighbor {
                    point: &node.point,
                    value: &node.value,
                    distance: dist,
                });
            }

            let axis = node.axis;
            let (near, far) = if query[axis] <= node.point[axis] {
                (node.left.as_deref(), node.right.as_deref())
            } else {
                (node.right.as_deref(), node.left.as_deref())
            };
            if let Some(near) = near {
                stack.push(near);
            }
            if (query[axis] - node.point[axis]).abs() <= radius {
                if let Some(far) = far {
                    stack.push(far);
                }
            }
        }
        found
    }

    /// Like [`within`][Self::within], with the results sorted ascending by
    /// distance.
    pub fn within_sorted(&self, query: &[N; K], radius: N) -> Vec<Neighbor<'_, N, T, K>> {
        let mut found = self.within(query, radius);
        found.sort_by(|a, b| {
            a.distance
                .partial_cmp(&b.distance)
                .unwrap_or(Ordering::Equal)
        });
        found
    }

    /// Find every stored `(point, value)` pair inside `rect`, inclusive on
    /// both bounds of every axis, in traversal order.
    ///
    /// Purely coordinate-wise; the tree's distance function is never
    /// consulted. An ill-formed rectangle (any axis with `max <= min`)
    /// matches nothing and skips the traversal entirely.
    pub fn range(&self, rect: &HyperRect<N, K>) -> Vec<(&[N; K], &T)> {
        let mut found = Vec::new();
        if !rect.is_well_formed() {
            return found;
        }
        let Some(root) = self.root.as_deref() else {
            return found;
        };

        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            if rect.contains(&node.point) {
                found.push((&node.point, &node.value));
            }
            let axis = node.axis;
            if rect.min[axis] <= node.point[axis] {
                if let Some(left) = node.left.as_deref() {
                    stack.push(left);
                }
            }
            if rect.max[axis] >= node.point[axis] {
                if let Some(right) = node.right.as_deref() {
                    stack.push(right);
                }
            }
        }
        found
    }
}
