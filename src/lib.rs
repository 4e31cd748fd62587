//! Niching controller for multi-modal particle swarm optimization.
//!
//! A dynamic collection of sub-swarms searches a shared continuous domain.
//! Each cycle the [`MergeScatterController`] compares the sub-swarms
//! pairwise: two that have converged onto the same optimum are merged by
//! scattering the weaker one back into the main swarm with re-randomized
//! positions and no social pull.

pub mod algorithms;

pub use algorithms::control::ControlParameter;
pub use algorithms::distance::{DistanceMeasure, EuclideanDistance};
pub use algorithms::error::{NichingError, Result};
pub use algorithms::merge::MergeScatterController;
pub use algorithms::models::{
    Bounds, Domain, MainSwarm, NichingParameters, Particle, SubSwarm,
};
pub use algorithms::optimizer::NichingOptimizer;
pub use algorithms::problem::OptimizationProblem;
