//! Dense vector in the seed-document space.

use serde::{Deserialize, Serialize};

/// A dense vector; coordinate `i` is the accumulated TF-IDF weight of the
/// vectorized tokens against seed document `i`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    /// The vector coordinates.
    pub data: Vec<f64>,
}

impl Vector {
    /// Create a new vector from its coordinates.
    pub fn new(data: Vec<f64>) -> Self {
        Self { data }
    }

    /// Create an all-zero vector of the given dimension.
    pub fn zeros(dimension: usize) -> Self {
        Self {
            data: vec![0.0; dimension],
        }
    }

    /// Get the dimensionality of this vector.
    pub fn dimension(&self) -> usize {
        self.data.len()
    }

    /// Calculate the L2 norm (magnitude) of this vector.
    pub fn norm(&self) -> f64 {
        self.data.iter().map(|x| x * x).sum::<f64>().sqrt()
    }

    /// Check whether every coordinate is zero.
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|x| *x == 0.0)
    }

    /// Borrow the coordinates.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}
