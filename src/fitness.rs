//! # Fitness
//!
//! Fitness decides whether a child is better than its parent. It comes in two
//! shapes, both expressed through the single [`Fitness`] trait:
//!
//! - **Absolute**: `Value` is a scalar (`usize`, `f64`, ...), computed
//!   independently for each candidate. Higher is better.
//! - **Relative**: `Value` only supports comparison. An ordered tuple gives a
//!   lexicographic tie-break chain for free, and [`Ranked`] turns a hand-written
//!   [`RelativeFitness::greater_than`] into an ordering.
//!
//! Whatever the shape, `Value` must behave as a strict weak ordering: two
//! values are equally preferred exactly when neither is greater.
//!
//! ## Example
//!
//! ```rust
//! use std::cmp::Reverse;
//!
//! use lineage::{candidate::Candidate, error::Result, fitness::{is_better, Fitness}};
//!
//! struct Item {
//!     value: u32,
//!     weight: u32,
//! }
//!
//! /// More value wins; on equal value the lighter load wins.
//! struct Packing;
//!
//! impl Fitness<Vec<Item>> for Packing {
//!     type Value = (u32, Reverse<u32>);
//!
//!     fn evaluate(&self, candidate: &Candidate<Vec<Item>>) -> Result<Self::Value> {
//!         let value = candidate.genes().iter().map(|i| i.value).sum();
//!         let weight = candidate.genes().iter().map(|i| i.weight).sum();
//!         Ok((value, Reverse(weight)))
//!     }
//! }
//!
//! let light = Candidate::new(vec![Item { value: 10, weight: 1 }]);
//! let heavy = Candidate::new(vec![Item { value: 10, weight: 5 }]);
//! let fitness = Packing;
//! assert!(is_better(
//!     &fitness.evaluate(&light).unwrap(),
//!     &fitness.evaluate(&heavy).unwrap()
//! ));
//! ```

use std::cmp::Ordering;
use std::fmt::Debug;

use crate::{candidate::Candidate, error::Result};

/// Scores a candidate.
pub trait Fitness<G> {
    /// The comparable score. Greater is fitter.
    ///
    /// Every value must be comparable with itself; a NaN score is reported
    /// by the runner as [`GeneticError::FitnessCalculation`].
    ///
    /// [`GeneticError::FitnessCalculation`]: crate::error::GeneticError::FitnessCalculation
    type Value: PartialOrd + Clone + Debug;

    /// Evaluates `candidate`. Must be deterministic for the candidate's genes
    /// and must not depend on its age, since the runner caches the parent's
    /// score between generations.
    fn evaluate(&self, candidate: &Candidate<G>) -> Result<Self::Value>;
}

/// A fitness that can only be compared pairwise.
pub trait RelativeFitness {
    /// Returns `true` if `self` is strictly preferred over `other`.
    fn greater_than(&self, other: &Self) -> bool;
}

/// Adapts a [`RelativeFitness`] into an ordered value usable as
/// [`Fitness::Value`].
#[derive(Debug, Clone)]
pub struct Ranked<T>(pub T);

impl<T> Ranked<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: RelativeFitness> PartialEq for Ranked<T> {
    fn eq(&self, other: &Self) -> bool {
        !self.0.greater_than(&other.0) && !other.0.greater_than(&self.0)
    }
}

impl<T: RelativeFitness> PartialOrd for Ranked<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.0.greater_than(&other.0) {
            Some(Ordering::Greater)
        } else if other.0.greater_than(&self.0) {
            Some(Ordering::Less)
        } else {
            Some(Ordering::Equal)
        }
    }
}

/// Returns `true` if `a` is strictly fitter than `b`.
pub fn is_better<V: PartialOrd>(a: &V, b: &V) -> bool {
    a > b
}

/// Returns `true` if neither value is fitter than the other.
pub fn is_equal<V: PartialOrd>(a: &V, b: &V) -> bool {
    !is_better(a, b) && !is_better(b, a)
}

/// Returns `false` for a value that cannot be compared with itself, such as
/// a NaN score. The runner treats such a value as a fitness error.
pub fn is_ordered<V: PartialOrd>(value: &V) -> bool {
    value.partial_cmp(value).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Shorter genes are better; at equal length more vowels win.
    #[derive(Debug, Clone)]
    struct ShortAndVowelled {
        length: usize,
        vowels: usize,
    }

    impl RelativeFitness for ShortAndVowelled {
        fn greater_than(&self, other: &Self) -> bool {
            if self.length == other.length {
                self.vowels > other.vowels
            } else {
                self.length < other.length
            }
        }
    }

    struct ShortAndVowelledFitness;

    impl Fitness<String> for ShortAndVowelledFitness {
        type Value = Ranked<ShortAndVowelled>;

        fn evaluate(&self, candidate: &Candidate<String>) -> Result<Self::Value> {
            let genes = candidate.genes();
            Ok(Ranked(ShortAndVowelled {
                length: genes.len(),
                vowels: genes.chars().filter(|c| "aeiou".contains(*c)).count(),
            }))
        }
    }

    fn rank(genes: &str) -> Ranked<ShortAndVowelled> {
        ShortAndVowelledFitness
            .evaluate(&Candidate::new(genes.to_string()))
            .unwrap()
    }

    #[test]
    fn test_ranked_ordering_follows_greater_than() {
        assert!(rank("abc") > rank("abcd"));
        assert!(rank("xyz") > rank("aeio"));
        assert!(rank("aec") > rank("abc"));
        assert!(rank("abcde") < rank("abcd"));
    }

    #[test]
    fn test_ranked_equality_when_neither_is_greater() {
        assert!(rank("abc") == rank("xyo"));
        assert!(is_equal(&rank("abc"), &rank("xyo")));
        assert!(!is_better(&rank("abc"), &rank("xyo")));
    }

    #[test]
    fn test_tuple_tie_break_chain() {
        use std::cmp::Reverse;

        let a = (10u32, Reverse(2.0f64), Reverse(1.0f64));
        let b = (10u32, Reverse(2.0f64), Reverse(3.0f64));
        let c = (9u32, Reverse(0.0f64), Reverse(0.0f64));

        assert!(is_better(&a, &b));
        assert!(is_better(&b, &c));
        assert!(is_equal(&a, &a.clone()));
    }

    #[test]
    fn test_nan_scores_are_not_ordered() {
        assert!(!is_better(&f64::NAN, &1.0));
        assert!(!is_better(&1.0, &f64::NAN));
        assert!(!is_ordered(&f64::NAN));
        assert!(!is_ordered(&(3u32, std::cmp::Reverse(f64::NAN))));
        assert!(is_ordered(&1.0f64));
        assert!(is_ordered(&rank("abc")));
    }
}
