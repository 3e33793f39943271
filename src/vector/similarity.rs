//! Cosine similarity.

use crate::vector::dense::Vector;

/// Cosine similarity between two coordinate slices.
///
/// Returns 0 when either magnitude is zero (and for mismatched lengths), so
/// the result is never NaN.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() {
        return 0.0;
    }

    let dot_product: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let magnitude_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let magnitude_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if magnitude_a == 0.0 || magnitude_b == 0.0 {
        0.0
    } else {
        dot_product / (magnitude_a * magnitude_b)
    }
}

impl Vector {
    /// Cosine similarity with another vector.
    pub fn cosine_similarity(&self, other: &Vector) -> f64 {
        cosine_similarity(&self.data, &other.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_and_orthogonal() {
        let a = Vector::new(vec![1.0, 2.0, 0.0]);
        let b = Vector::new(vec![2.0, 4.0, 0.0]);
        let c = Vector::new(vec![0.0, 0.0, 5.0]);

        assert!((a.cosine_similarity(&b) - 1.0).abs() < 1e-12);
        assert_eq!(a.cosine_similarity(&c), 0.0);
    }

    #[test]
    fn test_zero_vector_is_zero_not_nan() {
        let zero = Vector::zeros(3);
        let any = Vector::new(vec![0.5, 1.5, 2.5]);

        let s = zero.cosine_similarity(&any);
        assert_eq!(s, 0.0);
        assert!(!s.is_nan());
        assert_eq!(cosine_similarity(&zero.data, &zero.data), 0.0);
    }

    #[test]
    fn test_known_angle() {
        let s = cosine_similarity(&[1.0, 0.0], &[1.0, 1.0]);
        assert!((s - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);
    }

    #[test]
    fn test_length_mismatch() {
        assert_eq!(cosine_similarity(&[1.0, 2.0], &[1.0]), 0.0);
    }
}
