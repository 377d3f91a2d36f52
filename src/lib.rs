pub mod ops;
pub mod utils;
pub mod vector;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum VectorError {
    #[error("Dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
    #[error("Index {index} out of range for vector of dimension {dimension}")]
    OutOfRange { index: usize, dimension: usize },
    #[error("Cannot normalize a vector with zero norm")]
    ZeroNorm,
}

pub type Result<T> = std::result::Result<T, VectorError>;

// Re-export main types for convenience
pub use utils::{cosine_similarity, euclidean_distance, manhattan_distance};
pub use vector::Vector;
