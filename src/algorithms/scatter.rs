use log::debug;

use super::boundary;
use super::models::{MainSwarm, SubSwarm};

/// Dissolve a losing sub-swarm back into the main swarm.
///
/// Each particle, in its original order, has its social acceleration zeroed,
/// its position re-randomized across the whole domain, and its memory of the
/// old niche erased before it is appended to the main swarm. The sub-swarm is
/// left empty for the caller to discard.
pub fn scatter_swarm(main_swarm: &mut MainSwarm, losing: &mut SubSwarm) {
    debug!(
        "scattering sub-swarm of {} particles into main swarm of {}",
        losing.len(),
        main_swarm.len()
    );

    for mut particle in losing.particles.drain(..) {
        particle.social.set(0.0);
        boundary::randomize_all(&mut particle.position, &main_swarm.domain);
        particle.velocity.fill(0.0);
        particle.pbest_position = particle.position.clone();
        particle.pbest_fitness = f64::INFINITY;
        particle.fitness = f64::INFINITY;
        main_swarm.particles.push(particle);
    }
}
