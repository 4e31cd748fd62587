pub mod boundary;
pub mod control;
pub mod distance;
pub mod error;
pub mod merge;
pub mod models;
pub mod normalize;
pub mod optimizer;
pub mod particle;
pub mod problem;
pub mod scatter;
pub mod stats;
