//! # Generator
//!
//! The `Generator` trait produces the first candidate of a run from the
//! problem's gene domain.

use crate::{candidate::Candidate, error::Result, rng::RandomNumberGenerator};

/// Produces a valid initial candidate.
///
/// Anything the generator needs (gene alphabet, target length, item catalogue)
/// is captured at construction; the only input at call time is the run's
/// random stream.
///
/// ## Example
///
/// ```rust
/// use lineage::{
///     candidate::Candidate, error::{GeneticError, Result}, generator::Generator,
///     rng::RandomNumberGenerator,
/// };
///
/// struct Bits {
///     length: usize,
/// }
///
/// impl Generator<Vec<bool>> for Bits {
///     fn generate(&self, rng: &mut RandomNumberGenerator) -> Result<Candidate<Vec<bool>>> {
///         Ok(Candidate::new((0..self.length).map(|_| rng.gen_bool(0.5)).collect()))
///     }
///
///     fn validate(&self, candidate: &Candidate<Vec<bool>>) -> Result<()> {
///         if candidate.genes().len() != self.length {
///             return Err(GeneticError::InvalidCandidate("wrong length".to_string()));
///         }
///         Ok(())
///     }
/// }
///
/// let generator = Bits { length: 8 };
/// let mut rng = RandomNumberGenerator::from_seed(1);
/// let candidate = generator.generate(&mut rng).unwrap();
/// assert!(generator.validate(&candidate).is_ok());
/// ```
pub trait Generator<G> {
    /// Generates the initial candidate.
    fn generate(&self, rng: &mut RandomNumberGenerator) -> Result<Candidate<G>>;

    /// Checks the problem's structural invariants on a generated candidate.
    ///
    /// The runner calls this on the initial candidate and aborts the run with
    /// the returned error, so a broken generator fails fast.
    fn validate(&self, _candidate: &Candidate<G>) -> Result<()> {
        Ok(())
    }
}
