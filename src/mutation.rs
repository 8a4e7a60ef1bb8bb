//! # Mutation
//!
//! The `Mutation` trait derives a child from a parent. The parent is only
//! borrowed, so an operator has to build a fresh candidate; how far the child
//! strays from the parent is entirely up to the problem.

use crate::{candidate::Candidate, error::Result, rng::RandomNumberGenerator};

/// Produces a child candidate from a parent.
///
/// The child is normally newborn (`Candidate::new`); the runner assigns the
/// age it needs once the child has been compared with its parent.
///
/// ## Example
///
/// ```rust
/// use lineage::{
///     candidate::Candidate, error::Result, mutation::Mutation, rng::RandomNumberGenerator,
/// };
///
/// /// Flips one random bit.
/// struct FlipOne;
///
/// impl Mutation<Vec<bool>> for FlipOne {
///     fn mutate(
///         &self,
///         parent: &Candidate<Vec<bool>>,
///         rng: &mut RandomNumberGenerator,
///     ) -> Result<Candidate<Vec<bool>>> {
///         let mut genes = parent.genes().clone();
///         let index = rng.gen_range(0..genes.len());
///         genes[index] = !genes[index];
///         Ok(Candidate::new(genes))
///     }
/// }
///
/// let parent = Candidate::new(vec![false; 4]);
/// let mut rng = RandomNumberGenerator::from_seed(5);
/// let child = FlipOne.mutate(&parent, &mut rng).unwrap();
///
/// assert_eq!(parent.genes(), &vec![false; 4]);
/// assert_eq!(child.genes().iter().filter(|&&bit| bit).count(), 1);
/// ```
pub trait Mutation<G> {
    fn mutate(
        &self,
        parent: &Candidate<G>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Candidate<G>>;
}
