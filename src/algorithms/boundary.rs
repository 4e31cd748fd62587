use rand::Rng;

use super::models::Domain;

/// Redraw only the out-of-bounds components of a position, each uniformly
/// within its own dimension's bounds. In-bounds components are left alone.
pub fn reinitialise(position: &mut [f64], domain: &Domain) {
    let mut rng = rand::rng();

    for (value, bounds) in position.iter_mut().zip(domain.bounds.iter()) {
        if !bounds.contains(*value) && bounds.width() > 0.0 {
            *value = rng.random_range(bounds.lower..bounds.upper);
        }
    }
}

/// Redraw every component uniformly within its dimension's bounds.
///
/// Used when a sub-swarm is scattered: the particle must leave its old niche
/// entirely, not merely be clamped back into the domain.
pub fn randomize_all(position: &mut [f64], domain: &Domain) {
    let mut rng = rand::rng();

    for (value, bounds) in position.iter_mut().zip(domain.bounds.iter()) {
        if bounds.width() > 0.0 {
            *value = rng.random_range(bounds.lower..bounds.upper);
        }
    }
}
