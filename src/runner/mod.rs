pub mod builder;
pub mod engine;
pub mod options;

pub use builder::RunnerBuilder;
pub use engine::{Improvement, RunOutcome, Runner, Termination};
pub use options::{LogLevel, RunnerOptions, RunnerOptionsBuilder};
