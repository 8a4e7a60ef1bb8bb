use lineage::{
    candidate::Candidate,
    error::Result,
    fitness::{Fitness, Ranked, RelativeFitness},
    generator::Generator,
    mutation::Mutation,
    rng::RandomNumberGenerator,
    runner::{Runner, RunnerOptions, Termination},
    stopping::StoppingCriteria,
};

/// More ascending neighbours wins; on a tie, smaller total gaps win.
#[derive(Debug, Clone, PartialEq)]
struct SortScore {
    in_sequence: usize,
    total_gap: u32,
}

impl RelativeFitness for SortScore {
    fn greater_than(&self, other: &Self) -> bool {
        if self.in_sequence != other.in_sequence {
            return self.in_sequence > other.in_sequence;
        }
        self.total_gap < other.total_gap
    }
}

#[derive(Clone)]
struct SortFitness;

impl Fitness<Vec<u32>> for SortFitness {
    type Value = Ranked<SortScore>;

    fn evaluate(&self, candidate: &Candidate<Vec<u32>>) -> Result<Self::Value> {
        let genes = candidate.genes();
        let in_sequence = genes.windows(2).filter(|pair| pair[1] > pair[0]).count();
        let total_gap = genes.windows(2).map(|pair| pair[1].abs_diff(pair[0])).sum();
        Ok(Ranked(SortScore {
            in_sequence,
            total_gap,
        }))
    }
}

struct SortGenerator {
    length: usize,
}

impl Generator<Vec<u32>> for SortGenerator {
    fn generate(&self, rng: &mut RandomNumberGenerator) -> Result<Candidate<Vec<u32>>> {
        let mut genes: Vec<u32> = (0..self.length as u32).collect();
        rng.shuffle(&mut genes);
        Ok(Candidate::new(genes))
    }
}

struct SortMutation {
    length: usize,
}

impl Mutation<Vec<u32>> for SortMutation {
    fn mutate(
        &self,
        parent: &Candidate<Vec<u32>>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Candidate<Vec<u32>>> {
        let mut genes = parent.genes().clone();
        let index = rng.gen_range(0..genes.len());
        let picks = rng.sample_distinct(self.length, 2);
        let (new_gene, alternate) = (picks[0] as u32, picks[1] as u32);
        genes[index] = if genes[index] == new_gene {
            alternate
        } else {
            new_gene
        };
        // The ends of a sorted sequence are known.
        genes[0] = 0;
        genes[self.length - 1] = self.length as u32 - 1;
        Ok(Candidate::new(genes))
    }
}

struct FullySorted;

impl StoppingCriteria<Vec<u32>> for FullySorted {
    fn is_satisfied(&self, candidate: &Candidate<Vec<u32>>) -> Result<bool> {
        let score = SortFitness.evaluate(candidate)?.into_inner();
        Ok(score.in_sequence >= candidate.genes().len() - 1)
    }
}

#[test]
fn test_sort_ten_numbers() {
    let length = 10;
    for seed in 0..5 {
        let runner = Runner::new(
            SortGenerator { length },
            SortFitness,
            SortMutation { length },
            FullySorted,
            RunnerOptions::builder().seed(seed).build(),
        );

        let outcome = runner.run().unwrap();

        assert_eq!(outcome.termination, Termination::StoppingCriteriaMet);
        assert_eq!(outcome.candidate.genes(), &(0..10).collect::<Vec<u32>>());
        assert_eq!(
            outcome.fitness.into_inner(),
            SortScore {
                in_sequence: 9,
                total_gap: 9
            }
        );
    }
}

#[test]
fn test_relative_improvements_never_regress() {
    let length = 8;
    let runner = Runner::new(
        SortGenerator { length },
        SortFitness,
        SortMutation { length },
        FullySorted,
        RunnerOptions::builder().seed(77).build(),
    );

    let mut scores = Vec::new();
    runner
        .run_with(|report| scores.push(report.fitness.clone()))
        .unwrap();

    assert!(scores.windows(2).all(|pair| pair[1] > pair[0]));
}
