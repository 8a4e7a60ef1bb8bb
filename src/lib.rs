//! # lineage
//!
//! A single-lineage genetic algorithm runner. One parent is mutated generation
//! after generation; fitter or equally fit children take its place, age
//! annealing decides what to do with worse ones, and the run ends when the
//! stopping criteria are met or the best fitness stagnates.
//!
//! A problem plugs in four strategies: a [`Generator`], a [`Fitness`], a
//! [`Mutation`] and a [`StoppingCriteria`].

pub mod annealing;
pub mod candidate;
pub mod error;
pub mod fitness;
pub mod generator;
pub mod mutation;
pub mod rng;
pub mod runner;
pub mod stagnation;
pub mod stopping;

// Re-export commonly used types for convenience
pub use candidate::Candidate;
pub use error::{GeneticError, Result};
pub use fitness::{Fitness, Ranked, RelativeFitness};
pub use generator::Generator;
pub use mutation::Mutation;
pub use rng::RandomNumberGenerator;
pub use runner::{
    Improvement, LogLevel, RunOutcome, Runner, RunnerBuilder, RunnerOptions, Termination,
};
pub use stopping::StoppingCriteria;
