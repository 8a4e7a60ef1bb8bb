use lineage::{
    candidate::Candidate,
    error::Result,
    fitness::Fitness,
    generator::Generator,
    mutation::Mutation,
    rng::RandomNumberGenerator,
    runner::{Runner, RunnerOptions, Termination},
    stopping::FitnessTarget,
};

struct BitGenerator {
    length: usize,
}

impl Generator<String> for BitGenerator {
    fn generate(&self, rng: &mut RandomNumberGenerator) -> Result<Candidate<String>> {
        let genes = (0..self.length)
            .map(|_| if rng.gen_bool(0.5) { '1' } else { '0' })
            .collect();
        Ok(Candidate::new(genes))
    }
}

#[derive(Clone)]
struct CountOnes;

impl Fitness<String> for CountOnes {
    type Value = usize;

    fn evaluate(&self, candidate: &Candidate<String>) -> Result<usize> {
        Ok(candidate.genes().chars().filter(|&bit| bit == '1').count())
    }
}

struct FlipOne;

impl Mutation<String> for FlipOne {
    fn mutate(
        &self,
        parent: &Candidate<String>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Candidate<String>> {
        let mut genes: Vec<char> = parent.genes().chars().collect();
        let index = rng.gen_range(0..genes.len());
        genes[index] = if genes[index] == '1' { '0' } else { '1' };
        Ok(Candidate::new(genes.into_iter().collect()))
    }
}

fn one_max(length: usize, options: RunnerOptions) -> Result<lineage::RunOutcome<String, usize>> {
    Runner::new(
        BitGenerator { length },
        CountOnes,
        FlipOne,
        FitnessTarget::new(CountOnes, length),
        options,
    )
    .run()
}

#[test]
fn test_one_max_ten_bits() {
    for seed in 0..10 {
        let outcome = one_max(10, RunnerOptions::builder().seed(seed).build()).unwrap();

        assert_eq!(outcome.candidate.genes(), "1111111111", "seed {}", seed);
        assert_eq!(outcome.termination, Termination::StoppingCriteriaMet);
    }
}

#[test]
fn test_one_max_hundred_bits() {
    let outcome = one_max(100, RunnerOptions::default()).unwrap();

    assert_eq!(outcome.fitness, 100);
    assert!(outcome.candidate.genes().chars().all(|bit| bit == '1'));
}
