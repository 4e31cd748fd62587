use log::info;
use rayon::prelude::*;

use super::boundary;
use super::control::ControlParameter;
use super::error::Result;
use super::merge::MergeScatterController;
use super::models::{MainSwarm, NichingParameters, Particle, SubSwarm};
use super::problem::OptimizationProblem;

// ============================================================================
// NICHING PSO DRIVER
// ============================================================================

/// Drives the main swarm and a set of preformed sub-swarms through
/// optimization cycles, invoking the merge/scatter controller after each
/// cycle's particle updates. Sub-swarm formation happens upstream; this
/// driver only shrinks the list as niches collapse into each other.
pub struct NichingOptimizer<P: OptimizationProblem + Sync> {
    problem: P,
    parameters: NichingParameters,
    controller: MergeScatterController,
    inertia: ControlParameter,
    main_swarm: MainSwarm,
    sub_swarms: Vec<SubSwarm>,
}

impl<P: OptimizationProblem + Sync> NichingOptimizer<P> {
    pub fn new(problem: P, parameters: NichingParameters, sub_swarms: Vec<SubSwarm>) -> Self {
        let mut main_swarm = MainSwarm::new(problem.domain().clone());
        main_swarm.particles = (0..parameters.main_swarm_size)
            .map(|_| Particle::new(problem.domain(), parameters.social_weight))
            .collect();

        let controller = MergeScatterController::with_threshold(ControlParameter::constant(
            parameters.merge_threshold,
        ));

        NichingOptimizer {
            inertia: ControlParameter::constant(parameters.inertia_weight),
            problem,
            parameters,
            controller,
            main_swarm,
            sub_swarms,
        }
    }

    /// Replace the default constant inertia, e.g. with a linearly decreasing
    /// schedule over the run.
    pub fn set_inertia(&mut self, inertia: ControlParameter) {
        self.inertia = inertia;
    }

    pub fn main_swarm(&self) -> &MainSwarm {
        &self.main_swarm
    }

    pub fn sub_swarms(&self) -> &[SubSwarm] {
        &self.sub_swarms
    }

    /// Total particle count across the main swarm and all sub-swarms.
    pub fn population(&self) -> usize {
        self.main_swarm.len() + self.sub_swarms.iter().map(SubSwarm::len).sum::<usize>()
    }

    /// Run the full optimization and return the best position and fitness
    /// found anywhere in the population.
    pub fn optimize(&mut self) -> Result<(Vec<f64>, f64)> {
        for cycle in 0..self.parameters.max_cycles {
            let scattered = self.step()?;
            if scattered > 0 {
                info!(
                    "cycle {}: scattered {} sub-swarm(s), {} remaining",
                    cycle,
                    scattered,
                    self.sub_swarms.len()
                );
            }
        }

        Ok(self.best_solution())
    }

    /// One optimization cycle: evaluate, update bests, move particles, then
    /// resolve merges. Returns the number of sub-swarms scattered.
    pub fn step(&mut self) -> Result<usize> {
        let problem = &self.problem;
        Self::evaluate(problem, &mut self.main_swarm.particles);
        for swarm in &mut self.sub_swarms {
            Self::evaluate(problem, &mut swarm.particles);
        }

        let inertia_weight = self.inertia.value();
        let cognitive_weight = self.parameters.cognitive_weight;

        Self::move_particles(
            &mut self.main_swarm.particles,
            inertia_weight,
            cognitive_weight,
        );
        for swarm in &mut self.sub_swarms {
            Self::move_particles(&mut swarm.particles, inertia_weight, cognitive_weight);
        }

        // keep positions valid before any distance-based reasoning
        for particle in self
            .main_swarm
            .particles
            .iter_mut()
            .chain(self.sub_swarms.iter_mut().flat_map(|s| s.particles.iter_mut()))
        {
            boundary::reinitialise(&mut particle.position, self.problem.domain());
        }

        self.inertia.advance();

        self.controller
            .merge(&mut self.main_swarm, &mut self.sub_swarms)
    }

    /// Evaluate fitness for all particles in parallel.
    fn evaluate(problem: &P, particles: &mut [Particle]) {
        particles.par_iter_mut().for_each(|particle| {
            particle.fitness = problem.evaluate(&particle.position);
            particle.update_personal_best();
        });
    }

    /// Update velocities and positions against the swarm's own social best.
    fn move_particles(particles: &mut [Particle], inertia_weight: f64, cognitive_weight: f64) {
        let gbest = match particles
            .iter()
            .min_by(|a, b| a.pbest_fitness.total_cmp(&b.pbest_fitness))
        {
            Some(best) => best.pbest_position.clone(),
            None => return,
        };

        particles.par_iter_mut().for_each(|particle| {
            particle.update_velocity(&gbest, inertia_weight, cognitive_weight);
            particle.update_position();
        });
    }

    fn best_solution(&self) -> (Vec<f64>, f64) {
        let mut best_position = Vec::new();
        let mut best_fitness = f64::INFINITY;

        for particle in self.main_swarm.particles.iter().chain(
            self.sub_swarms
                .iter()
                .flat_map(|swarm| swarm.particles.iter()),
        ) {
            if particle.pbest_fitness < best_fitness {
                best_fitness = particle.pbest_fitness;
                best_position = particle.pbest_position.clone();
            }
        }

        (best_position, best_fitness)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::problem::EqualMinima;

    fn seeded_sub_swarm(center: f64, size: usize, problem: &EqualMinima) -> SubSwarm {
        let particles = (0..size)
            .map(|i| {
                let mut particle = Particle::new(problem.domain(), 1.49);
                particle.position = vec![center + 0.001 * i as f64];
                particle.pbest_position = particle.position.clone();
                particle
            })
            .collect();
        SubSwarm::new(particles)
    }

    #[test]
    fn population_is_conserved_across_a_run() {
        let problem = EqualMinima::new();
        let sub_swarms = vec![
            seeded_sub_swarm(0.1, 5, &problem),
            seeded_sub_swarm(0.102, 5, &problem),
            seeded_sub_swarm(0.7, 5, &problem),
        ];

        let parameters = NichingParameters {
            main_swarm_size: 10,
            max_cycles: 20,
            ..NichingParameters::default()
        };

        let mut optimizer = NichingOptimizer::new(problem, parameters, sub_swarms);
        let before = optimizer.population();
        assert_eq!(before, 25);

        optimizer.optimize().unwrap();
        assert_eq!(optimizer.population(), before);
    }

    #[test]
    fn optimize_finds_a_niche_optimum() {
        let problem = EqualMinima::new();
        let sub_swarms = vec![seeded_sub_swarm(0.69, 6, &problem)];
        let parameters = NichingParameters {
            main_swarm_size: 20,
            max_cycles: 100,
            ..NichingParameters::default()
        };

        let mut optimizer = NichingOptimizer::new(problem, parameters, sub_swarms);
        let (position, fitness) = optimizer.optimize().unwrap();

        assert_eq!(position.len(), 1);
        assert!(fitness.is_finite());
        assert!(fitness < 0.5);
    }

    #[test]
    fn sub_swarm_count_never_grows() {
        let problem = EqualMinima::new();
        let sub_swarms = vec![
            seeded_sub_swarm(0.3, 4, &problem),
            seeded_sub_swarm(0.3005, 4, &problem),
        ];
        let parameters = NichingParameters {
            main_swarm_size: 5,
            max_cycles: 1,
            ..NichingParameters::default()
        };

        let mut optimizer = NichingOptimizer::new(problem, parameters, sub_swarms);
        let mut previous = optimizer.sub_swarms().len();
        for _ in 0..10 {
            optimizer.step().unwrap();
            let current = optimizer.sub_swarms().len();
            assert!(current <= previous);
            previous = current;
        }
    }
}
