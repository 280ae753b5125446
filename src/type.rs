use std::fmt::Debug;

use num_traits::Float;

/// A trait for floating-point types usable as point coordinates.
///
/// Queries need `+infinity` as an initial pruning bound, so the bound is
/// [`num_traits::Float`] rather than a plain numeric trait. Blanket
/// implemented; `f32` and `f64` both qualify.
pub trait CoordFloat: Float + Debug + Send + Sync {}

impl<T: Float + Debug + Send + Sync> CoordFloat for T {}
