//! # RunnerOptions
//!
//! The `RunnerOptions` struct holds the configuration of a run: how long a
//! parent may stagnate before age annealing kicks in, how many generations
//! without improvement end the run, the random seed and the logging level.
//!
//! ## Example
//!
//! ```rust
//! use lineage::runner::options::{LogLevel, RunnerOptions};
//!
//! // Annealing after 50 idle generations, give up after 1000.
//! let options = RunnerOptions::new(Some(50), Some(1000), LogLevel::Minimal);
//! assert_eq!(options.get_age_limit(), Some(50));
//!
//! // Nothing set: no annealing, no stagnation stop, entropy seed, silent.
//! let default_options = RunnerOptions::default();
//! assert_eq!(default_options.get_fitness_stagnation_limit(), None);
//! ```
//!
//! ## LogLevel
//!
//! - `Verbose`: every generation is traced, including annealing decisions.
//! - `Minimal`: run start, every improvement and the termination are logged.
//! - `None`: the runner emits no events.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LogLevel {
    Verbose,
    Minimal,
    None,
}

impl LogLevel {
    pub(crate) fn reports_progress(&self) -> bool {
        !matches!(self, LogLevel::None)
    }

    pub(crate) fn reports_generations(&self) -> bool {
        matches!(self, LogLevel::Verbose)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RunnerOptions {
    /// Generations a parent may go unimproved before annealing is considered.
    age_limit: Option<usize>,
    /// Generations without a new best before the run gives up.
    fitness_stagnation_limit: Option<usize>,
    /// Fixed seed for the run's random stream.
    seed: Option<u64>,
    log_level: LogLevel,
}

impl RunnerOptions {
    pub fn new(
        age_limit: Option<usize>,
        fitness_stagnation_limit: Option<usize>,
        log_level: LogLevel,
    ) -> Self {
        Self {
            age_limit,
            fitness_stagnation_limit,
            seed: None,
            log_level,
        }
    }

    pub fn get_age_limit(&self) -> Option<usize> {
        self.age_limit
    }

    pub fn get_fitness_stagnation_limit(&self) -> Option<usize> {
        self.fitness_stagnation_limit
    }

    pub fn get_seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn get_log_level(&self) -> &LogLevel {
        &self.log_level
    }

    /// Sets the age limit. `None` disables annealing.
    pub fn set_age_limit(&mut self, age_limit: Option<usize>) {
        self.age_limit = age_limit;
    }

    /// Sets the stagnation limit. `None` never stops on stagnation.
    pub fn set_fitness_stagnation_limit(&mut self, limit: Option<usize>) {
        self.fitness_stagnation_limit = limit;
    }

    /// Fixes the seed. `None` draws a fresh seed from entropy on every run.
    pub fn set_seed(&mut self, seed: Option<u64>) {
        self.seed = seed;
    }

    /// Sets the log level.
    pub fn set_log_level(&mut self, log_level: LogLevel) {
        self.log_level = log_level;
    }

    /// Returns a builder for creating a `RunnerOptions` instance.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lineage::runner::options::{LogLevel, RunnerOptions};
    ///
    /// let options = RunnerOptions::builder()
    ///     .age_limit(20)
    ///     .fitness_stagnation_limit(500)
    ///     .seed(42)
    ///     .log_level(LogLevel::Minimal)
    ///     .build();
    ///
    /// assert_eq!(options.get_seed(), Some(42));
    /// ```
    pub fn builder() -> RunnerOptionsBuilder {
        RunnerOptionsBuilder::default()
    }
}

impl Default for RunnerOptions {
    fn default() -> Self {
        Self {
            age_limit: None,
            fitness_stagnation_limit: None,
            seed: None,
            log_level: LogLevel::None,
        }
    }
}

/// Builder for `RunnerOptions`.
#[derive(Debug, Clone, Default)]
pub struct RunnerOptionsBuilder {
    age_limit: Option<usize>,
    fitness_stagnation_limit: Option<usize>,
    seed: Option<u64>,
    log_level: Option<LogLevel>,
}

impl RunnerOptionsBuilder {
    /// Enables age annealing with the given limit.
    pub fn age_limit(mut self, value: usize) -> Self {
        self.age_limit = Some(value);
        self
    }

    /// Stops the run after `value` generations without a new best.
    pub fn fitness_stagnation_limit(mut self, value: usize) -> Self {
        self.fitness_stagnation_limit = Some(value);
        self
    }

    pub fn seed(mut self, value: u64) -> Self {
        self.seed = Some(value);
        self
    }

    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    /// Builds the `RunnerOptions` instance.
    pub fn build(self) -> RunnerOptions {
        RunnerOptions {
            age_limit: self.age_limit,
            fitness_stagnation_limit: self.fitness_stagnation_limit,
            seed: self.seed,
            log_level: self.log_level.unwrap_or(LogLevel::None),
        }
    }
}
