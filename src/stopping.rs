//! # Stopping Criteria
//!
//! A `StoppingCriteria` decides when a candidate is good enough to end the run.
//! The runner asks on the initial candidate and on every child that beats its
//! parent.

use std::fmt::Debug;

use crate::{candidate::Candidate, error::Result, fitness::Fitness};

/// Predicate over a single candidate.
pub trait StoppingCriteria<G> {
    /// Returns `Ok(true)` when `candidate` is good enough.
    fn is_satisfied(&self, candidate: &Candidate<G>) -> Result<bool>;
}

/// Never satisfied. The run ends only through fitness stagnation, which suits
/// problems without a known optimum.
#[derive(Debug, Clone, Copy, Default)]
pub struct Never;

impl<G> StoppingCriteria<G> for Never {
    fn is_satisfied(&self, _candidate: &Candidate<G>) -> Result<bool> {
        Ok(false)
    }
}

/// Satisfied once the candidate's fitness reaches `target`.
///
/// ## Example
///
/// ```rust
/// use lineage::{
///     candidate::Candidate, error::Result, fitness::Fitness,
///     stopping::{FitnessTarget, StoppingCriteria},
/// };
///
/// struct CountOnes;
///
/// impl Fitness<String> for CountOnes {
///     type Value = usize;
///
///     fn evaluate(&self, candidate: &Candidate<String>) -> Result<usize> {
///         Ok(candidate.genes().chars().filter(|&c| c == '1').count())
///     }
/// }
///
/// let criteria = FitnessTarget::new(CountOnes, 3usize);
/// assert!(criteria.is_satisfied(&Candidate::new("111".to_string())).unwrap());
/// assert!(!criteria.is_satisfied(&Candidate::new("101".to_string())).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct FitnessTarget<F, V> {
    fitness: F,
    target: V,
}

impl<F, V> FitnessTarget<F, V> {
    pub fn new(fitness: F, target: V) -> Self {
        Self { fitness, target }
    }

    pub fn target(&self) -> &V {
        &self.target
    }
}

impl<G, F, V> StoppingCriteria<G> for FitnessTarget<F, V>
where
    F: Fitness<G, Value = V>,
    V: PartialOrd + Clone + Debug,
{
    fn is_satisfied(&self, candidate: &Candidate<G>) -> Result<bool> {
        let value = self.fitness.evaluate(candidate)?;
        Ok(value >= self.target)
    }
}
