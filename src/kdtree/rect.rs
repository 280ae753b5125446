use crate::r#type::CoordFloat;

/// An axis-aligned `K`-dimensional box described by its min and max corners.
///
/// A rectangle is well-formed iff `max[i] > min[i]` on every axis. Range
/// search treats an ill-formed rectangle as matching nothing rather than as
/// an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HyperRect<N: CoordFloat, const K: usize> {
    /// Minimum corner.
    pub min: [N; K],
    /// Maximum corner.
    pub max: [N; K],
}

impl<N: CoordFloat, const K: usize> HyperRect<N, K> {
    /// Create a rectangle from its two corners.
    pub fn new(min: [N; K], max: [N; K]) -> Self {
        Self { min, max }
    }

    /// Whether `max` strictly exceeds `min` on every axis.
    pub fn is_well_formed(&self) -> bool {
        (0..K).all(|i| self.max[i] > self.min[i])
    }

    /// Whether `point` lies within the box, inclusive on both bounds.
    pub(crate) fn contains(&self, point: &[N; K]) -> bool {
        (0..K).all(|i| self.min[i] <= point[i] && point[i] <= self.max[i])
    }
}
