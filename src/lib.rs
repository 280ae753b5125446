#![doc = include_str!("../README.md")]

mod error;
pub mod kdtree;
mod r#type;

pub use error::{PointIndexError, Result};
pub use r#type::CoordFloat;
