use super::distance::DistanceMeasure;
use super::error::Result;
use super::models::SubSwarm;

/// Component-wise mean of all member positions.
///
/// An empty sub-swarm yields an empty vector; callers that feed the result
/// into a distance computation must filter empty swarms out first.
pub fn average_position(swarm: &SubSwarm) -> Vec<f64> {
    let first = match swarm.particles.first() {
        Some(particle) => particle,
        None => return Vec::new(),
    };

    let mut sums = vec![0.0; first.position.len()];
    for particle in &swarm.particles {
        for (sum, component) in sums.iter_mut().zip(particle.position.iter()) {
            *sum += component;
        }
    }

    let count = swarm.len() as f64;
    for sum in &mut sums {
        *sum /= count;
    }
    sums
}

/// Maximum distance from the swarm's centroid to any member.
///
/// Empty and single-particle swarms have radius 0.
pub fn radius(swarm: &SubSwarm, measure: &dyn DistanceMeasure) -> Result<f64> {
    if swarm.len() < 2 {
        return Ok(0.0);
    }

    let centroid = average_position(swarm);
    let mut max = 0.0f64;
    for particle in &swarm.particles {
        let d = measure.distance(&particle.position, &centroid)?;
        max = max.max(d);
    }
    Ok(max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::control::ControlParameter;
    use crate::algorithms::distance::EuclideanDistance;
    use crate::algorithms::models::Particle;

    fn particle_at(position: Vec<f64>) -> Particle {
        Particle {
            velocity: vec![0.0; position.len()],
            pbest_position: position.clone(),
            pbest_fitness: 0.0,
            fitness: 0.0,
            social: ControlParameter::constant(1.0),
            position,
        }
    }

    #[test]
    fn average_of_two_particles() {
        let swarm = SubSwarm::new(vec![
            particle_at(vec![0.0, 2.0]),
            particle_at(vec![2.0, 4.0]),
        ]);
        assert_eq!(average_position(&swarm), vec![1.0, 3.0]);
    }

    #[test]
    fn average_of_empty_swarm_is_empty_vector() {
        assert!(average_position(&SubSwarm::default()).is_empty());
    }

    #[test]
    fn radius_of_empty_and_singleton_swarms_is_zero() {
        assert_eq!(radius(&SubSwarm::default(), &EuclideanDistance).unwrap(), 0.0);

        let singleton = SubSwarm::new(vec![particle_at(vec![3.0, -1.0])]);
        assert_eq!(radius(&singleton, &EuclideanDistance).unwrap(), 0.0);
    }

    #[test]
    fn radius_is_zero_iff_all_members_coincide() {
        let stacked = SubSwarm::new(vec![
            particle_at(vec![0.5, 0.5]),
            particle_at(vec![0.5, 0.5]),
            particle_at(vec![0.5, 0.5]),
        ]);
        assert_eq!(radius(&stacked, &EuclideanDistance).unwrap(), 0.0);

        let spread = SubSwarm::new(vec![
            particle_at(vec![0.0, 0.0]),
            particle_at(vec![1.0, 0.0]),
        ]);
        let r = radius(&spread, &EuclideanDistance).unwrap();
        assert!(r > 0.0);
        assert!((r - 0.5).abs() < 1e-12);
    }

    #[test]
    fn radius_is_max_distance_to_centroid() {
        // centroid of {0, 0.6, 0.9} is 0.5; the farthest member is at 0
        let swarm = SubSwarm::new(vec![
            particle_at(vec![0.0]),
            particle_at(vec![0.6]),
            particle_at(vec![0.9]),
        ]);
        let r = radius(&swarm, &EuclideanDistance).unwrap();
        assert!((r - 0.5).abs() < 1e-12);
    }
}
