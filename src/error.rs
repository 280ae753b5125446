use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PointIndexError {
    /// Bulk construction was handed an empty point set.
    #[error("cannot build an index from an empty point set")]
    EmptyBuild,

    /// Parallel point/value sequences of different lengths.
    #[error("mismatched input lengths: {points} points vs {values} values")]
    LengthMismatch {
        /// Number of points supplied.
        points: usize,
        /// Number of values supplied.
        values: usize,
    },

    /// A k-nearest-neighbours query with `k == 0`.
    #[error("k must be positive")]
    InvalidK,
}

pub type Result<T> = std::result::Result<T, PointIndexError>;
