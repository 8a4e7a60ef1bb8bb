use std::fmt::Debug;

use super::{options::RunnerOptions, Runner};
use crate::{
    error::{GeneticError, Result},
    fitness::Fitness,
    generator::Generator,
    mutation::Mutation,
    stopping::StoppingCriteria,
};

pub struct RunnerBuilder<Gen, Fit, Mut, Stop> {
    generator: Option<Gen>,
    fitness: Option<Fit>,
    mutation: Option<Mut>,
    stopping_criteria: Option<Stop>,
    options: RunnerOptions,
}

impl<Gen, Fit, Mut, Stop> RunnerBuilder<Gen, Fit, Mut, Stop> {
    pub fn new() -> Self {
        Self {
            generator: None,
            fitness: None,
            mutation: None,
            stopping_criteria: None,
            options: RunnerOptions::default(),
        }
    }

    pub fn with_generator(mut self, generator: Gen) -> Self {
        self.generator = Some(generator);
        self
    }

    pub fn with_fitness(mut self, fitness: Fit) -> Self {
        self.fitness = Some(fitness);
        self
    }

    pub fn with_mutation(mut self, mutation: Mut) -> Self {
        self.mutation = Some(mutation);
        self
    }

    pub fn with_stopping_criteria(mut self, stopping_criteria: Stop) -> Self {
        self.stopping_criteria = Some(stopping_criteria);
        self
    }

    pub fn with_options(mut self, options: RunnerOptions) -> Self {
        self.options = options;
        self
    }

    pub fn build<G>(self) -> Result<Runner<G, Gen, Fit, Mut, Stop>>
    where
        G: Clone + Debug,
        Gen: Generator<G>,
        Fit: Fitness<G>,
        Mut: Mutation<G>,
        Stop: StoppingCriteria<G>,
    {
        let generator = self
            .generator
            .ok_or_else(|| GeneticError::Configuration("Generator not specified".to_string()))?;

        let fitness = self
            .fitness
            .ok_or_else(|| GeneticError::Configuration("Fitness not specified".to_string()))?;

        let mutation = self
            .mutation
            .ok_or_else(|| GeneticError::Configuration("Mutation not specified".to_string()))?;

        let stopping_criteria = self.stopping_criteria.ok_or_else(|| {
            GeneticError::Configuration("Stopping criteria not specified".to_string())
        })?;

        if self.options.get_fitness_stagnation_limit() == Some(0) {
            return Err(GeneticError::Configuration(
                "Fitness stagnation limit must be greater than 0".to_string(),
            ));
        }

        Ok(Runner::new(
            generator,
            fitness,
            mutation,
            stopping_criteria,
            self.options,
        ))
    }
}

impl<Gen, Fit, Mut, Stop> Default for RunnerBuilder<Gen, Fit, Mut, Stop> {
    fn default() -> Self {
        Self::new()
    }
}
