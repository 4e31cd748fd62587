use super::models::Domain;

/// A minimization problem over a bounded continuous domain.
/// Lower fitness is better.
pub trait OptimizationProblem {
    fn domain(&self) -> &Domain;
    fn evaluate(&self, position: &[f64]) -> f64;
}

/// One-dimensional equal-maxima benchmark on [0, 1], expressed as a
/// minimization of `1 - sin^6(5*pi*x)`. Five equal optima at
/// x = 0.1, 0.3, 0.5, 0.7, 0.9.
pub struct EqualMinima {
    domain: Domain,
}

impl EqualMinima {
    pub fn new() -> Self {
        EqualMinima {
            domain: Domain::uniform(1, 0.0, 1.0),
        }
    }
}

impl OptimizationProblem for EqualMinima {
    fn domain(&self) -> &Domain {
        &self.domain
    }

    fn evaluate(&self, position: &[f64]) -> f64 {
        let x = position.first().copied().unwrap_or(0.0);
        1.0 - (5.0 * std::f64::consts::PI * x).sin().powi(6)
    }
}

impl Default for EqualMinima {
    fn default() -> Self {
        EqualMinima::new()
    }
}

/// Himmelblau's function on [-6, 6]^2: four global minima of value 0 at
/// (3, 2), (-2.805, 3.131), (-3.779, -3.283) and (3.584, -1.848).
pub struct Himmelblau {
    domain: Domain,
}

impl Himmelblau {
    pub fn new() -> Self {
        Himmelblau {
            domain: Domain::uniform(2, -6.0, 6.0),
        }
    }
}

impl OptimizationProblem for Himmelblau {
    fn domain(&self) -> &Domain {
        &self.domain
    }

    fn evaluate(&self, position: &[f64]) -> f64 {
        let x = position.first().copied().unwrap_or(0.0);
        let y = position.get(1).copied().unwrap_or(0.0);
        let a = x * x + y - 11.0;
        let b = x + y * y - 7.0;
        a * a + b * b
    }
}

impl Default for Himmelblau {
    fn default() -> Self {
        Himmelblau::new()
    }
}
