use super::error::{NichingError, Result};
use super::models::{Bounds, Domain};

/// Root-mean-square distance between two positions after rescaling each
/// component into the unit hypercube.
///
/// The rescaling range is taken from the domain's first declared dimension;
/// domains are assumed to use the same bounds in every dimension. Dividing
/// the Euclidean distance by the square root of the dimension makes the
/// merge threshold scale-invariant across problem domains.
pub fn normalized_distance(domain: &Domain, a: &[f64], b: &[f64]) -> Result<f64> {
    if a.len() != b.len() {
        return Err(NichingError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }

    let range = domain
        .bounds
        .first()
        .copied()
        .unwrap_or_else(|| Bounds::new(0.0, 0.0));
    let width = range.width();
    if width == 0.0 {
        return Err(NichingError::DegenerateDomain {
            lower: range.lower,
            upper: range.upper,
        });
    }

    if a.is_empty() {
        return Ok(0.0);
    }

    let mut sum = 0.0;
    for (x, y) in a.iter().zip(b.iter()) {
        let nx = (x - range.lower) / width;
        let ny = (y - range.lower) / width;
        sum += (nx - ny) * (nx - ny);
    }

    Ok((sum / a.len() as f64).sqrt())
}
