use rand::Rng;

use crate::{vector::Vector, Result};

/// Norm of the difference between two vectors of equal dimension.
pub fn euclidean_distance(v1: &Vector, v2: &Vector) -> Result<f64> {
    Ok(v1.checked_sub(v2)?.euclidean_norm())
}

/// `num` vectors of dimension `dim` with magnitudes drawn uniformly from `[-1, 1)`.
pub fn generate_random_vectors(dim: usize, num: usize) -> Vec<Vector> {
    let mut rng = rand::thread_rng();

    (0..num)
        .map(|_| (0..dim).map(|_| rng.gen_range(-1.0..1.0)).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::VectorError;

    #[test]
    fn test_euclidean_distance() {
        let a = Vector::from([1.0, 1.0]);
        let b = Vector::from([4.0, 5.0]);
        assert_eq!(euclidean_distance(&a, &b), Ok(5.0));
        assert_eq!(euclidean_distance(&a, &a), Ok(0.0));
    }

    #[test]
    fn test_euclidean_distance_mismatch() {
        let result = euclidean_distance(&Vector::with_dimension(1), &Vector::with_dimension(2));
        assert!(matches!(result, Err(VectorError::DimensionMismatch { .. })));
    }

    #[test]
    fn test_random_vectors() {
        let vectors = generate_random_vectors(16, 5);
        assert_eq!(vectors.len(), 5);
        for v in &vectors {
            assert_eq!(v.dimension(), 16);
            assert!(v.iter().all(|m| (-1.0..1.0).contains(m)));
        }
    }
}
