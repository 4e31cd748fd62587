//! Merge/scatter controller for sub-swarms that have converged onto the
//! same optimum. When two sub-swarms are judged to occupy one niche, the one
//! whose best particle is worse is dissolved back into the main swarm.

use log::debug;

use super::control::ControlParameter;
use super::distance::{DistanceMeasure, EuclideanDistance};
use super::error::Result;
use super::models::{Domain, MainSwarm, SubSwarm};
use super::normalize::normalized_distance;
use super::scatter::scatter_swarm;
use super::stats;

/// Radius below which a sub-swarm counts as fully converged.
pub const NEAR_ZERO_EPSILON: f64 = 0.0001;

/// Absolute centroid-distance cutoff for the general (non-converged) branch.
pub const PROXIMITY_CUTOFF: f64 = 0.001;

/// Default merge threshold applied to the normalized distance between two
/// converged sub-swarms' best positions.
pub const DEFAULT_MERGE_THRESHOLD: f64 = 0.001;

pub struct MergeScatterController {
    threshold: ControlParameter,
    measure: EuclideanDistance,
}

impl MergeScatterController {
    pub fn new() -> Self {
        MergeScatterController {
            threshold: ControlParameter::constant(DEFAULT_MERGE_THRESHOLD),
            measure: EuclideanDistance,
        }
    }

    pub fn with_threshold(threshold: ControlParameter) -> Self {
        MergeScatterController {
            threshold,
            measure: EuclideanDistance,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold.value()
    }

    pub fn set_threshold(&mut self, threshold: ControlParameter) {
        self.threshold = threshold;
    }

    /// Run one full merge/scatter resolution over the current sub-swarm list.
    ///
    /// Sub-swarms are compared pairwise in list order, index `i` against every
    /// `j > i`. The first candidate pair found has its loser scattered into
    /// the main swarm and removed from the list, after which the scan restarts
    /// from the front; removal invalidates in-flight pair positions, and the
    /// reduced list must be rescanned against all remaining members. The call
    /// returns once a complete pass finds no candidate.
    ///
    /// Returns the number of sub-swarms scattered. Candidate validation is
    /// finished before any mutation, so a structural error leaves both the
    /// main swarm and the sub-swarm list untouched for the failing pair.
    pub fn merge(&self, main_swarm: &mut MainSwarm, sub_swarms: &mut Vec<SubSwarm>) -> Result<usize> {
        let mut scattered = 0;

        'rescan: loop {
            for i in 0..sub_swarms.len() {
                for j in (i + 1)..sub_swarms.len() {
                    if !self.is_candidate(&main_swarm.domain, &sub_swarms[i], &sub_swarms[j])? {
                        continue;
                    }

                    let loser = if self.first_loses(&sub_swarms[i], &sub_swarms[j]) {
                        i
                    } else {
                        j
                    };
                    debug!(
                        "merging sub-swarms {} and {}: scattering {}",
                        i, j, loser
                    );

                    let mut losing = sub_swarms.remove(loser);
                    scatter_swarm(main_swarm, &mut losing);
                    scattered += 1;
                    continue 'rescan;
                }
            }
            break;
        }

        Ok(scattered)
    }

    /// Decide whether two sub-swarms have converged onto the same optimum.
    ///
    /// Both converged (near-zero radius): compare their best positions by
    /// normalized distance against the configurable threshold. Otherwise:
    /// their centroids must be closer than the sum of the radii and closer
    /// than the absolute proximity cutoff.
    fn is_candidate(&self, domain: &Domain, a: &SubSwarm, b: &SubSwarm) -> Result<bool> {
        let (Some(best_a), Some(best_b)) = (a.best(), b.best()) else {
            // an empty sub-swarm holds no optimum to merge
            return Ok(false);
        };

        let radius_a = stats::radius(a, &self.measure)?;
        let radius_b = stats::radius(b, &self.measure)?;

        if radius_a < NEAR_ZERO_EPSILON && radius_b < NEAR_ZERO_EPSILON {
            let d = normalized_distance(domain, &best_a.position, &best_b.position)?;
            Ok(d < self.threshold.value())
        } else {
            let centroid_distance = self
                .measure
                .distance(&stats::average_position(a), &stats::average_position(b))?;
            Ok(centroid_distance < radius_a + radius_b && centroid_distance < PROXIMITY_CUTOFF)
        }
    }

    /// The sub-swarm with the strictly worse best fitness loses. On an exact
    /// tie the first-iterated sub-swarm is scattered.
    fn first_loses(&self, a: &SubSwarm, b: &SubSwarm) -> bool {
        match (a.best(), b.best()) {
            (Some(best_a), Some(best_b)) => !(best_a.fitness < best_b.fitness),
            _ => true,
        }
    }
}

impl Default for MergeScatterController {
    fn default() -> Self {
        MergeScatterController::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::models::Particle;

    fn particle(position: Vec<f64>, fitness: f64) -> Particle {
        Particle {
            velocity: vec![0.0; position.len()],
            pbest_position: position.clone(),
            pbest_fitness: fitness,
            fitness,
            social: ControlParameter::constant(1.0),
            position,
        }
    }

    fn singleton(position: Vec<f64>, fitness: f64) -> SubSwarm {
        SubSwarm::new(vec![particle(position, fitness)])
    }

    #[test]
    fn converged_pair_scatters_the_worse_swarm() {
        let mut main_swarm = MainSwarm::new(Domain::uniform(2, 0.0, 1.0));
        let mut subs = vec![
            singleton(vec![0.0, 0.0], 5.0),
            singleton(vec![0.0005, 0.0005], 3.0),
        ];

        let scattered = MergeScatterController::new()
            .merge(&mut main_swarm, &mut subs)
            .unwrap();

        assert_eq!(scattered, 1);
        assert_eq!(subs.len(), 1);
        assert_eq!(main_swarm.len(), 1);
        // the fitter sub-swarm survives
        assert_eq!(subs[0].best().unwrap().fitness, 3.0);
    }

    #[test]
    fn general_branch_requires_the_absolute_cutoff() {
        // radii 0.2 and 0.3 with centroids 0.1 apart overlap, but 0.1 is not
        // below the proximity cutoff, so no merge happens
        let mut main_swarm = MainSwarm::new(Domain::uniform(1, 0.0, 2.0));
        let mut subs = vec![
            SubSwarm::new(vec![particle(vec![0.4], 1.0), particle(vec![0.8], 2.0)]),
            SubSwarm::new(vec![particle(vec![0.4], 1.5), particle(vec![1.0], 2.5)]),
        ];

        let scattered = MergeScatterController::new()
            .merge(&mut main_swarm, &mut subs)
            .unwrap();

        assert_eq!(scattered, 0);
        assert_eq!(subs.len(), 2);
        assert!(main_swarm.is_empty());
    }

    #[test]
    fn distant_converged_swarms_stay_separate() {
        let mut main_swarm = MainSwarm::new(Domain::uniform(2, 0.0, 1.0));
        let mut subs = vec![
            singleton(vec![0.1, 0.1], 1.0),
            singleton(vec![0.9, 0.9], 2.0),
        ];

        let scattered = MergeScatterController::new()
            .merge(&mut main_swarm, &mut subs)
            .unwrap();

        assert_eq!(scattered, 0);
        assert_eq!(subs.len(), 2);
    }

    #[test]
    fn tie_scatters_the_first_swarm() {
        let mut main_swarm = MainSwarm::new(Domain::uniform(1, 0.0, 1.0));
        let mut subs = vec![
            singleton(vec![0.5000], 2.0),
            singleton(vec![0.5001], 2.0),
        ];

        MergeScatterController::new()
            .merge(&mut main_swarm, &mut subs)
            .unwrap();

        assert_eq!(subs.len(), 1);
        // the second swarm's best position survives untouched
        assert_eq!(subs[0].best().unwrap().position, vec![0.5001]);
    }

    #[test]
    fn empty_sub_swarm_is_never_a_candidate() {
        let mut main_swarm = MainSwarm::new(Domain::uniform(1, 0.0, 1.0));
        let mut subs = vec![SubSwarm::default(), singleton(vec![0.5], 1.0)];

        let scattered = MergeScatterController::new()
            .merge(&mut main_swarm, &mut subs)
            .unwrap();

        assert_eq!(scattered, 0);
        assert_eq!(subs.len(), 2);
    }

    #[test]
    fn degenerate_domain_surfaces_without_mutation() {
        let mut main_swarm = MainSwarm::new(Domain::uniform(1, 1.0, 1.0));
        let mut subs = vec![singleton(vec![1.0], 1.0), singleton(vec![1.0], 2.0)];

        let err = MergeScatterController::new()
            .merge(&mut main_swarm, &mut subs)
            .unwrap_err();

        assert!(matches!(err, crate::NichingError::DegenerateDomain { .. }));
        assert_eq!(subs.len(), 2);
        assert_eq!(subs[0].len() + subs[1].len(), 2);
        assert!(main_swarm.is_empty());
    }
}
