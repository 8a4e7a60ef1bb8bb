use std::fmt::Debug;
use std::marker::PhantomData;
use std::time::{Duration, Instant};

use tracing::{debug, info, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::options::RunnerOptions;
use crate::{
    annealing::{AgeAnnealing, AnnealDecision},
    candidate::Candidate,
    error::{GeneticError, Result},
    fitness::{is_better, is_ordered, Fitness},
    generator::Generator,
    mutation::Mutation,
    rng::RandomNumberGenerator,
    stagnation::FitnessStagnationDetector,
    stopping::StoppingCriteria,
};

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Termination {
    /// A candidate satisfied the stopping criteria.
    StoppingCriteriaMet,
    /// The best fitness did not improve for the configured number of generations.
    FitnessStagnation,
}

/// Report handed to the observer for the initial candidate and for every new
/// best candidate.
#[derive(Debug)]
pub struct Improvement<'a, G, V> {
    pub candidate: &'a Candidate<G>,
    pub fitness: &'a V,
    /// Generation that produced the candidate; 0 for the initial one.
    pub generation: usize,
    /// Wall time since the run started.
    pub elapsed: Duration,
}

/// Represents the result of a run.
#[derive(Debug, Clone)]
pub struct RunOutcome<G, V> {
    /// The satisfying candidate, or the best one on stagnation.
    pub candidate: Candidate<G>,
    pub fitness: V,
    /// Number of generations (mutations) performed.
    pub generations: usize,
    /// Number of times the best candidate was replaced.
    pub improvements: usize,
    pub termination: Termination,
    pub elapsed: Duration,
}

enum Step {
    Continue,
    Terminate(Termination),
}

struct RunState<G, V> {
    parent: Candidate<G>,
    parent_fitness: V,
    best: Candidate<G>,
    best_fitness: V,
    annealing: AgeAnnealing<V>,
    stagnation: FitnessStagnationDetector<V>,
    rng: RandomNumberGenerator,
    generation: usize,
    improvements: usize,
    started: Instant,
}

/// Evolves a single lineage: one parent, one best-so-far, no population.
///
/// Each generation mutates the parent and compares the child against it. A
/// fitter child replaces the parent with age 0, an equally fit one replaces
/// it one generation older, and a worse one is handed to age annealing. The
/// run ends when a candidate satisfies the stopping criteria or the best
/// fitness stagnates; there is no generation cap.
#[derive(Debug, Clone)]
pub struct Runner<G, Gen, Fit, Mut, Stop> {
    generator: Gen,
    fitness: Fit,
    mutation: Mut,
    stopping: Stop,
    options: RunnerOptions,
    _marker: PhantomData<G>,
}

impl<G, Gen, Fit, Mut, Stop> Runner<G, Gen, Fit, Mut, Stop>
where
    G: Clone + Debug,
    Gen: Generator<G>,
    Fit: Fitness<G>,
    Mut: Mutation<G>,
    Stop: StoppingCriteria<G>,
{
    /// Creates a new `Runner` from the four problem strategies.
    pub fn new(
        generator: Gen,
        fitness: Fit,
        mutation: Mut,
        stopping: Stop,
        options: RunnerOptions,
    ) -> Self {
        Self {
            generator,
            fitness,
            mutation,
            stopping,
            options,
            _marker: PhantomData,
        }
    }

    pub fn options(&self) -> &RunnerOptions {
        &self.options
    }

    /// Runs the search until it terminates.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for a zero stagnation limit, the
    /// generator's validation error for a malformed initial candidate, and any
    /// error raised by a strategy, unchanged.
    pub fn run(&self) -> Result<RunOutcome<G, Fit::Value>> {
        self.run_with(|_| {})
    }

    /// Runs the search, calling `observer` for the initial candidate and then
    /// exactly once for every new best candidate.
    pub fn run_with<O>(&self, mut observer: O) -> Result<RunOutcome<G, Fit::Value>>
    where
        O: FnMut(&Improvement<'_, G, Fit::Value>),
    {
        let log_level = *self.options.get_log_level();
        let mut stagnation =
            FitnessStagnationDetector::new(self.options.get_fitness_stagnation_limit())?;

        let mut rng = match self.options.get_seed() {
            Some(seed) => RandomNumberGenerator::from_seed(seed),
            None => RandomNumberGenerator::new(),
        };

        if log_level.reports_progress() {
            info!(
                age_limit = ?self.options.get_age_limit(),
                fitness_stagnation_limit = ?self.options.get_fitness_stagnation_limit(),
                seed = ?self.options.get_seed(),
                "starting run"
            );
        }

        let started = Instant::now();
        let first = self.generator.generate(&mut rng)?;
        self.generator.validate(&first)?;
        let first_fitness = self.evaluate(&first)?;

        observer(&Improvement {
            candidate: &first,
            fitness: &first_fitness,
            generation: 0,
            elapsed: started.elapsed(),
        });

        if self.stopping.is_satisfied(&first)? {
            if log_level.reports_progress() {
                info!(fitness = ?first_fitness, "initial candidate satisfies the stopping criteria");
            }
            return Ok(RunOutcome {
                candidate: first,
                fitness: first_fitness,
                generations: 0,
                improvements: 0,
                termination: Termination::StoppingCriteriaMet,
                elapsed: started.elapsed(),
            });
        }

        let mut annealing = AgeAnnealing::new(self.options.get_age_limit());
        annealing.record(first_fitness.clone());
        stagnation.observe(&first_fitness);

        let mut state = RunState {
            parent: first.clone(),
            parent_fitness: first_fitness.clone(),
            best: first,
            best_fitness: first_fitness,
            annealing,
            stagnation,
            rng,
            generation: 0,
            improvements: 0,
            started,
        };

        loop {
            match self.step(&mut state, &mut observer)? {
                Step::Continue => {}
                Step::Terminate(termination) => return Ok(self.finish(state, termination)),
            }
        }
    }

    /// Scores `candidate`, rejecting a score that cannot be ranked.
    fn evaluate(&self, candidate: &Candidate<G>) -> Result<Fit::Value> {
        let value = self.fitness.evaluate(candidate)?;
        if !is_ordered(&value) {
            return Err(GeneticError::FitnessCalculation(format!(
                "fitness {:?} of {:?} cannot be ranked",
                value,
                candidate.genes()
            )));
        }
        Ok(value)
    }

    /// Runs one generation.
    fn step<O>(&self, state: &mut RunState<G, Fit::Value>, observer: &mut O) -> Result<Step>
    where
        O: FnMut(&Improvement<'_, G, Fit::Value>),
    {
        let verbose = self.options.get_log_level().reports_generations();
        state.generation += 1;

        let mut child = self.mutation.mutate(&state.parent, &mut state.rng)?;
        let child_fitness = self.evaluate(&child)?;

        if is_better(&state.parent_fitness, &child_fitness) {
            if state.stagnation.observe(&state.best_fitness) {
                return Ok(Step::Terminate(Termination::FitnessStagnation));
            }

            let decision =
                state
                    .annealing
                    .consider(&mut state.parent, &child_fitness, &mut state.rng);
            if verbose {
                trace!(
                    generation = state.generation,
                    parent_age = state.parent.age(),
                    ?decision,
                    "worse child"
                );
            }
            match decision {
                AnnealDecision::RejectChild => {}
                AnnealDecision::AcceptChild => {
                    state.parent = child;
                    state.parent_fitness = child_fitness;
                }
                AnnealDecision::RevertToBest => {
                    state.best.set_age(0);
                    state.parent = state.best.clone();
                    state.parent_fitness = state.best_fitness.clone();
                }
            }
            return Ok(Step::Continue);
        }

        if !is_better(&child_fitness, &state.parent_fitness) {
            child.set_age(state.parent.age() + 1);
            if verbose {
                trace!(
                    generation = state.generation,
                    age = child.age(),
                    "equally fit child"
                );
            }
            state.parent = child;
            state.parent_fitness = child_fitness;
            if state.stagnation.observe(&state.best_fitness) {
                return Ok(Step::Terminate(Termination::FitnessStagnation));
            }
            return Ok(Step::Continue);
        }

        child.set_age(0);
        state.parent = child;
        state.parent_fitness = child_fitness;

        let improved = is_better(&state.parent_fitness, &state.best_fitness);
        if improved {
            state.best = state.parent.clone();
            state.best_fitness = state.parent_fitness.clone();
            state.annealing.record(state.parent_fitness.clone());
            state.stagnation.observe(&state.best_fitness);
            state.improvements += 1;

            if self.options.get_log_level().reports_progress() {
                debug!(
                    generation = state.generation,
                    fitness = ?state.best_fitness,
                    candidate = ?state.best.genes(),
                    "new best candidate"
                );
            }
            observer(&Improvement {
                candidate: &state.best,
                fitness: &state.best_fitness,
                generation: state.generation,
                elapsed: state.started.elapsed(),
            });
        } else if verbose {
            trace!(generation = state.generation, "fitter child below best");
        }

        if self.stopping.is_satisfied(&state.parent)? {
            return Ok(Step::Terminate(Termination::StoppingCriteriaMet));
        }

        if !improved && state.stagnation.observe(&state.best_fitness) {
            return Ok(Step::Terminate(Termination::FitnessStagnation));
        }

        Ok(Step::Continue)
    }

    fn finish(
        &self,
        state: RunState<G, Fit::Value>,
        termination: Termination,
    ) -> RunOutcome<G, Fit::Value> {
        let (candidate, fitness) = match termination {
            Termination::StoppingCriteriaMet => (state.parent, state.parent_fitness),
            Termination::FitnessStagnation => (state.best, state.best_fitness),
        };

        if self.options.get_log_level().reports_progress() {
            info!(
                ?termination,
                generations = state.generation,
                improvements = state.improvements,
                fitness = ?fitness,
                "run finished"
            );
        }

        RunOutcome {
            candidate,
            fitness,
            generations: state.generation,
            improvements: state.improvements,
            termination,
            elapsed: state.started.elapsed(),
        }
    }
}
