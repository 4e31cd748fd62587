use rand::Rng;

use super::control::ControlParameter;
use super::models::{Domain, Particle};

impl Particle {
    /// Create a new particle with a random position inside the domain and a
    /// small random velocity.
    pub fn new(domain: &Domain, social_weight: f64) -> Self {
        let mut rng = rand::rng();

        let position: Vec<f64> = domain
            .bounds
            .iter()
            .map(|b| {
                if b.width() > 0.0 {
                    rng.random_range(b.lower..b.upper)
                } else {
                    b.lower
                }
            })
            .collect();

        // Small random velocity for stable convergence
        let velocity: Vec<f64> = domain
            .bounds
            .iter()
            .map(|b| {
                let scale = 0.1 * b.width().max(f64::MIN_POSITIVE);
                rng.random_range(-scale..scale)
            })
            .collect();

        Particle {
            pbest_position: position.clone(),
            pbest_fitness: f64::INFINITY,
            fitness: f64::INFINITY,
            social: ControlParameter::constant(social_weight),
            position,
            velocity,
        }
    }

    /// Update velocity using the standard PSO formula. The social term uses
    /// this particle's own social acceleration parameter, which is zero for
    /// recently scattered particles.
    pub fn update_velocity(&mut self, gbest: &[f64], inertia_weight: f64, cognitive_weight: f64) {
        let mut rng = rand::rng();
        let social_weight = self.social.value();

        for i in 0..self.velocity.len() {
            let r1: f64 = rng.random();
            let r2: f64 = rng.random();

            let cognitive = cognitive_weight * r1 * (self.pbest_position[i] - self.position[i]);
            let social = social_weight * r2 * (gbest[i] - self.position[i]);

            self.velocity[i] = inertia_weight * self.velocity[i] + cognitive + social;
        }
    }

    pub fn update_position(&mut self) {
        for i in 0..self.position.len() {
            self.position[i] += self.velocity[i];
        }
    }

    pub fn update_personal_best(&mut self) {
        if self.fitness < self.pbest_fitness && !self.fitness.is_nan() {
            self.pbest_fitness = self.fitness;
            self.pbest_position = self.position.clone();
        }
    }
}
