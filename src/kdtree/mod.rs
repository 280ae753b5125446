//! A mutable, pointer-based k-d tree over fixed-dimensionality points.

#![warn(missing_docs)]

mod index;
pub mod metric;
mod node;
mod query;
mod rect;

pub use index::KdTree;
pub use metric::DistanceFn;
pub use query::Neighbor;
pub use rect::HyperRect;
