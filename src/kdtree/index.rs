use crate::error::{PointIndexError, Result};
use crate::kdtree::metric::{squared_euclidean, DistanceFn};
use crate::kdtree::node::Node;
use crate::r#type::CoordFloat;

/// A mutable k-d tree over `K`-dimensional points carrying opaque values.
///
/// Built in bulk via [`from_pairs`][Self::from_pairs] or
/// [`from_points`][Self::from_points], extended one point at a time with
/// [`insert`][Self::insert], and restored to a balanced shape with
/// [`rebalance`][Self::rebalance]. Queries never mutate the tree.
///
/// A single distance function, fixed at construction, serves every
/// distance-based query. The tree is not safe for concurrent mutation;
/// callers must serialize access to a given instance.
#[derive(Debug, Clone)]
pub struct KdTree<N: CoordFloat, T, const K: usize> {
    pub(crate) root: Option<Box<Node<N, T, K>>>,
    pub(crate) len: usize,
    pub(crate) metric: DistanceFn<N, K>,
}

impl<N: CoordFloat, T, const K: usize> KdTree<N, T, K> {
    /// Bulk-build from `(point, value)` pairs with the default
    /// [`squared_euclidean`] metric.
    ///
    /// Errors with [`PointIndexError::EmptyBuild`] on empty input; nothing
    /// is built in that case.
    pub fn from_pairs(pairs: Vec<([N; K], T)>) -> Result<Self> {
        Self::from_pairs_with_metric(pairs, squared_euclidean)
    }

    /// Bulk-build from `(point, value)` pairs with a caller-supplied metric.
    pub fn from_pairs_with_metric(
        pairs: Vec<([N; K], T)>,
        metric: DistanceFn<N, K>,
    ) -> Result<Self> {
        if pairs.is_empty() {
            return Err(PointIndexError::EmptyBuild);
        }
        let len = pairs.len();
        Ok(Self {
            root: Node::build(pairs, 0),
            len,
            metric,
        })
    }

    /// Bulk-build from parallel point and value sequences with the default
    /// [`squared_euclidean`] metric.
    ///
    /// Errors with [`PointIndexError::LengthMismatch`] when the sequences
    /// differ in length and [`PointIndexError::EmptyBuild`] when they are
    /// empty.
    pub fn from_points(points: Vec<[N; K]>, values: Vec<T>) -> Result<Self> {
        Self::from_points_with_metric(points, values, squared_euclidean)
    }

    /// Bulk-build from parallel sequences with a caller-supplied metric.
    pub fn from_points_with_metric(
        points: Vec<[N; K]>,
        values: Vec<T>,
        metric: DistanceFn<N, K>,
    ) -> Result<Self> {
        if points.len() != values.len() {
            return Err(PointIndexError::LengthMismatch {
                points: points.len(),
                values: values.len(),
            });
        }
        Self::from_pairs_with_metric(points.into_iter().zip(values).collect(), metric)
    }

    /// The number of points in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no points. The public constructors cannot
    /// produce an empty tree and nothing removes points, so this is false
    /// for any tree obtained through them.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert one `(point, value)` pair without rebuilding.
    ///
    /// Descends comparing the new point's coordinate at each node's split
    /// axis with `<=` (ties go left) and attaches at the first empty child
    /// slot, with the next axis in the cycle. Skewed insertion orders can
    /// undo the balance established by the bulk build; see
    /// [`rebalance`][Self::rebalance].
    pub fn insert(&mut self, point: [N; K], value: T) {
        let mut depth = 0usize;
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = if point[node.axis] <= node.point[node.axis] {
                &mut node.left
            } else {
                &mut node.right
            };
            depth += 1;
        }
        *slot = Some(Box::new(Node::leaf(point, value, depth % K)));
        self.len += 1;
    }

    /// Height of the tree: 0 when empty, 1 for a lone root.
    pub fn height(&self) -> usize {
        Node::height(self.root.as_deref())
    }

    /// Root-level imbalance: left subtree height minus right subtree height.
    ///
    /// Measured at the root's children only. A tree can report 0 here while
    /// deeper subtrees are badly skewed, so treat it as a cheap indicator
    /// rather than an AVL-style balance factor.
    pub fn balance(&self) -> isize {
        match self.root.as_deref() {
            None => 0,
            Some(root) => {
                Node::height(root.left.as_deref()) as isize
                    - Node::height(root.right.as_deref()) as isize
            }
        }
    }

    /// Collect every stored pair and rebuild the tree from scratch.
    ///
    /// The old node set is discarded wholesale; only the logical
    /// `(point, value)` pairs survive. Afterwards [`balance`][Self::balance]
    /// reports 0 and [`len`][Self::len] is unchanged.
    pub fn rebalance(&mut self) {
        let mut pairs = Vec::with_capacity(self.len);
        let mut stack = Vec::new();
        if let Some(root) = self.root.take() {
            stack.push(root);
        }
        while let Some(node) = stack.pop() {
            let Node {
                point,
                value,
                left,
                right,
                ..
            } = *node;
            if let Some(left) = left {
                stack.push(left);
            }
            if let Some(right) = right {
                stack.push(right);
            }
            pairs.push((point, value));
        }
        self.root = Node::build(pairs, 0);
    }
}
