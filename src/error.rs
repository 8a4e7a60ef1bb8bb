//! # Error Types
//!
//! This module defines the error type returned by the runner and by the
//! problem-specific strategies plugged into it.
//!
//! Reaching the stopping criteria or detecting fitness stagnation are normal
//! ways for a run to end and are reported through
//! [`Termination`](crate::runner::Termination), never through this type.
//!
//! ## Examples
//!
//! ```rust
//! use lineage::error::{GeneticError, Result};
//!
//! fn check_length(genes: &str, expected: usize) -> Result<()> {
//!     if genes.len() != expected {
//!         return Err(GeneticError::InvalidCandidate(format!(
//!             "expected {} genes, got {}",
//!             expected,
//!             genes.len()
//!         )));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_length("abc", 3).is_ok());
//! assert!(check_length("ab", 3).is_err());
//! ```

use thiserror::Error;

/// Represents errors that can occur while running the genetic algorithm.
#[derive(Error, Debug)]
pub enum GeneticError {
    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when a generator produces a candidate that breaks the
    /// problem's structural invariants.
    #[error("Invalid candidate: {0}")]
    InvalidCandidate(String),

    /// Error raised by a generator while producing the initial candidate.
    #[error("Generation error: {0}")]
    Generation(String),

    /// Error raised by a mutation operator.
    #[error("Mutation error: {0}")]
    Mutation(String),

    /// Error that occurs when a fitness calculation fails.
    #[error("Fitness calculation error: {0}")]
    FitnessCalculation(String),

    /// A generic error with a custom message.
    #[error("{0}")]
    Other(String),
}

/// A specialized Result type for runner and strategy operations.
pub type Result<T> = std::result::Result<T, GeneticError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = GeneticError::Configuration("limit must be positive".to_string());
        assert_eq!(err.to_string(), "Configuration error: limit must be positive");

        let err = GeneticError::InvalidCandidate("wrong length".to_string());
        assert_eq!(err.to_string(), "Invalid candidate: wrong length");

        let err = GeneticError::Other("boom".to_string());
        assert_eq!(err.to_string(), "boom");
    }
}
