use serde::{Deserialize, Serialize};

use super::control::ControlParameter;

/// Closed interval of valid values for one dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub lower: f64,
    pub upper: f64,
}

impl Bounds {
    pub fn new(lower: f64, upper: f64) -> Self {
        Bounds { lower, upper }
    }

    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
}

/// Per-dimension bounds of the search space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub bounds: Vec<Bounds>,
}

impl Domain {
    pub fn new(bounds: Vec<Bounds>) -> Self {
        Domain { bounds }
    }

    /// Same `[lower, upper]` range in every dimension.
    pub fn uniform(dimension: usize, lower: f64, upper: f64) -> Self {
        Domain {
            bounds: vec![Bounds::new(lower, upper); dimension],
        }
    }

    pub fn dimension(&self) -> usize {
        self.bounds.len()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub position: Vec<f64>,
    pub velocity: Vec<f64>,
    pub pbest_position: Vec<f64>,
    pub pbest_fitness: f64,
    pub fitness: f64,
    /// Social acceleration weight; zeroed when the particle is scattered so it
    /// does not immediately re-converge onto the niche it came from.
    pub social: ControlParameter,
}

/// An independently-iterating subset of particles exploring one niche.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubSwarm {
    pub particles: Vec<Particle>,
}

impl SubSwarm {
    pub fn new(particles: Vec<Particle>) -> Self {
        SubSwarm { particles }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Best member by current fitness (lower is better). Ties resolve to the
    /// earliest particle, so the result is deterministic.
    pub fn best(&self) -> Option<&Particle> {
        self.particles
            .iter()
            .min_by(|a, b| a.fitness.total_cmp(&b.fitness))
    }
}

/// The top-level population pool that absorbs scattered particles and owns
/// the problem domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MainSwarm {
    pub domain: Domain,
    pub particles: Vec<Particle>,
}

impl MainSwarm {
    pub fn new(domain: Domain) -> Self {
        MainSwarm {
            domain,
            particles: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NichingParameters {
    pub main_swarm_size: usize,
    pub max_cycles: usize,
    pub inertia_weight: f64,
    pub cognitive_weight: f64,
    pub social_weight: f64,
    pub merge_threshold: f64,
}

impl Default for NichingParameters {
    fn default() -> Self {
        NichingParameters {
            main_swarm_size: 30,
            max_cycles: 200,
            inertia_weight: 0.729844,
            cognitive_weight: 1.496180,
            social_weight: 1.496180,
            merge_threshold: super::merge::DEFAULT_MERGE_THRESHOLD,
        }
    }
}
