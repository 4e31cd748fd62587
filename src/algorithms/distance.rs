use super::error::{NichingError, Result};

/// Scalar distance between two equal-dimension vectors.
pub trait DistanceMeasure {
    fn distance(&self, a: &[f64], b: &[f64]) -> Result<f64>;
}

/// Root of the sum of squared component differences.
#[derive(Debug, Clone, Copy, Default)]
pub struct EuclideanDistance;

impl DistanceMeasure for EuclideanDistance {
    fn distance(&self, a: &[f64], b: &[f64]) -> Result<f64> {
        if a.len() != b.len() {
            return Err(NichingError::DimensionMismatch {
                expected: a.len(),
                actual: b.len(),
            });
        }

        let sum: f64 = a
            .iter()
            .zip(b.iter())
            .map(|(x, y)| (x - y) * (x - y))
            .sum();

        Ok(sum.sqrt())
    }
}
