pub mod format;
pub mod ops;
pub mod utils;
pub mod vector;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum VectorError {
    #[error("Index Error: index {index} out of range for dimension {dimension}")]
    IndexOutOfRange { index: usize, dimension: usize },
    #[error("Dimension Error: cannot combine dimension {left} with dimension {right}")]
    DimensionMismatch { left: usize, right: usize },
}

pub type Result<T> = std::result::Result<T, VectorError>;

// Re-export main types for convenience
pub use format::VectorInfo;
pub use utils::{euclidean_distance, generate_random_vectors};
pub use vector::Vector;
