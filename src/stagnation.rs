//! # Fitness Stagnation
//!
//! Ends a run when the best fitness has not improved for a given number of
//! consecutive generations.

use crate::{
    error::{GeneticError, Result},
    fitness::is_better,
};

/// Counts generations without improvement of the best fitness.
#[derive(Debug, Clone)]
pub struct FitnessStagnationDetector<V> {
    limit: Option<usize>,
    best: Option<V>,
    stagnant_generations: usize,
}

impl<V> FitnessStagnationDetector<V>
where
    V: PartialOrd + Clone,
{
    /// Creates a detector. `None` never reports stagnation.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `limit` is `Some(0)`.
    pub fn new(limit: Option<usize>) -> Result<Self> {
        if limit == Some(0) {
            return Err(GeneticError::Configuration(
                "Fitness stagnation limit must be greater than 0".to_string(),
            ));
        }

        Ok(Self {
            limit,
            best: None,
            stagnant_generations: 0,
        })
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Consecutive generations observed without improvement.
    pub fn stagnant_generations(&self) -> usize {
        self.stagnant_generations
    }

    /// Observes the best fitness at the end of a generation.
    ///
    /// An improvement over the last seen value resets the count; anything
    /// else extends it. Returns `true` once the count reaches the limit.
    pub fn observe(&mut self, best_fitness: &V) -> bool {
        match &self.best {
            Some(seen) if !is_better(best_fitness, seen) => {
                self.stagnant_generations += 1;
            }
            _ => {
                self.best = Some(best_fitness.clone());
                self.stagnant_generations = 0;
            }
        }

        matches!(self.limit, Some(limit) if self.stagnant_generations >= limit)
    }
}
