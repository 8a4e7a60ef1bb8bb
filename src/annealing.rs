//! # Age Annealing
//!
//! When a parent has gone `age_limit` generations without producing a fitter
//! child, the runner asks [`AgeAnnealing`] whether to take the next worse child
//! anyway or to abandon the lineage and restart from the best candidate.
//!
//! The decision uses the history of every fitness the best candidate has held.
//! With `p` the fraction of that history at or below the child's fitness, the
//! child is accepted when a uniform draw `r` in `[0, 1)` satisfies
//! `r < exp(-p)`.

use crate::{
    candidate::Candidate,
    fitness::{is_better, is_ordered},
    rng::RandomNumberGenerator,
};

/// Outcome of [`AgeAnnealing::consider`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnealDecision {
    /// Keep the (now older) parent and drop the child.
    RejectChild,
    /// Make the worse child the new parent.
    AcceptChild,
    /// Drop both and continue from the best candidate found so far.
    RevertToBest,
}

/// Age-based annealing policy and the sorted history of best fitnesses.
#[derive(Debug, Clone)]
pub struct AgeAnnealing<V> {
    age_limit: Option<usize>,
    history: Vec<V>,
}

impl<V> AgeAnnealing<V>
where
    V: PartialOrd + Clone,
{
    /// Creates a policy. `None` disables annealing: worse children are
    /// always rejected.
    pub fn new(age_limit: Option<usize>) -> Self {
        Self {
            age_limit,
            history: Vec::new(),
        }
    }

    pub fn age_limit(&self) -> Option<usize> {
        self.age_limit
    }

    /// Recorded best fitnesses, in ascending order.
    pub fn history(&self) -> &[V] {
        &self.history
    }

    /// Records a new best fitness, keeping the history sorted.
    ///
    /// A value that is not comparable with itself (a NaN score) is ignored.
    pub fn record(&mut self, value: V) {
        if !is_ordered(&value) {
            return;
        }
        let index = self.history.partition_point(|seen| !is_better(seen, &value));
        self.history.insert(index, value);
    }

    /// Fraction of recorded fitnesses that are at or below `value`.
    ///
    /// Returns 0 for an empty history.
    pub fn percentile(&self, value: &V) -> f64 {
        if self.history.is_empty() {
            return 0.0;
        }
        let at_or_below = self.history.partition_point(|seen| !is_better(seen, value));
        at_or_below as f64 / self.history.len() as f64
    }

    /// Probability of accepting a worse child with fitness `value`.
    pub fn acceptance_probability(&self, value: &V) -> f64 {
        (-self.percentile(value)).exp()
    }

    /// Handles a child that is worse than `parent`.
    ///
    /// The parent ages by one generation. Once its age reaches the limit a
    /// uniform number is drawn from `rng`; no draw happens before that.
    pub fn consider<G>(
        &self,
        parent: &mut Candidate<G>,
        child_fitness: &V,
        rng: &mut RandomNumberGenerator,
    ) -> AnnealDecision {
        parent.grow_older();

        let Some(age_limit) = self.age_limit else {
            return AnnealDecision::RejectChild;
        };

        if parent.age() < age_limit {
            return AnnealDecision::RejectChild;
        }

        let probability = self.acceptance_probability(child_fitness);
        if rng.uniform() < probability {
            AnnealDecision::AcceptChild
        } else {
            AnnealDecision::RevertToBest
        }
    }
}
