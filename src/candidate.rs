//! # Candidate
//!
//! A `Candidate` is one point in the search space: the problem-defined genes
//! plus the number of generations it has survived without being replaced by a
//! strictly fitter descendant.
//!
//! Strategies only ever see candidates through shared references. A mutation
//! builds a new candidate instead of editing its parent, so the runner's
//! current parent and best candidate can never be changed behind its back.
//!
//! ## Example
//!
//! ```rust
//! use lineage::candidate::Candidate;
//!
//! let parent = Candidate::new(String::from("abc"));
//! assert_eq!(parent.age(), 0);
//!
//! let mut genes = parent.genes().clone();
//! genes.replace_range(0..1, "x");
//! let child = Candidate::new(genes);
//!
//! assert_eq!(parent.genes(), "abc");
//! assert_eq!(child.genes(), "xbc");
//! ```

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One individual of the lineage.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Candidate<G> {
    genes: G,
    age: usize,
}

impl<G> Candidate<G> {
    /// Creates a newborn candidate (age 0).
    pub fn new(genes: G) -> Self {
        Self { genes, age: 0 }
    }

    /// Creates a candidate with an explicit age.
    pub fn with_age(genes: G, age: usize) -> Self {
        Self { genes, age }
    }

    pub fn genes(&self) -> &G {
        &self.genes
    }

    pub fn age(&self) -> usize {
        self.age
    }

    /// Consumes the candidate and returns its genes.
    pub fn into_genes(self) -> G {
        self.genes
    }

    pub(crate) fn set_age(&mut self, age: usize) {
        self.age = age;
    }

    pub(crate) fn grow_older(&mut self) {
        self.age += 1;
    }
}

impl<G: fmt::Display> fmt::Display for Candidate<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (age {})", self.genes, self.age)
    }
}
