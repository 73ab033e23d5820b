use crate::error::{GeneticError, Result};
use crate::operators::Operators;
use crate::phenotype::Phenotype;
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::SelectionStrategy;

/// Pairwise competition between neighbours.
///
/// The population is walked in disjoint pairs `(i, i + 1)`. For every pair
/// `(a, b)`:
///
/// - `a` is copied unchanged into slot `i`,
/// - if `a` beats `b` (comparator, or `fitness(a) >= fitness(b)`), slot
///   `i + 1` receives `crossover(a, b)`, otherwise `b` unchanged,
/// - one uniform draw per pair decides whether slot `i + 1` is mutated.
///
/// With an odd population the last, unpaired individual is carried over
/// unchanged. Pairings come from the evolver's shuffle, so the strategy
/// itself is deterministic apart from the mutation draw.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompetitionSelection;

impl CompetitionSelection {
    pub fn new() -> Self {
        Self
    }
}

impl<P> SelectionStrategy<P> for CompetitionSelection
where
    P: Phenotype,
{
    /// Requires mutate and crossover, plus either a comparator or fitness.
    fn check(&self, operators: &Operators<P>) -> Result<()> {
        operators.mutate_fn()?;
        operators.crossover_fn()?;
        if !operators.has_does_a_beat_b() {
            operators.fitness_fn()?;
        }
        Ok(())
    }

    fn next_generation(
        &self,
        population: &[P],
        operators: &Operators<P>,
        mutation_rate: f32,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<P>> {
        if population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        let crossover = operators.crossover_fn()?;
        let mutate = operators.mutate_fn()?;

        let mut next_generation = Vec::with_capacity(population.len());
        let pairs = population.chunks_exact(2);
        let unpaired = pairs.remainder();

        for pair in pairs {
            let (a, b) = (&pair[0], &pair[1]);
            next_generation.push(a.clone());

            let mut offspring = if operators.a_beats_b(a, b)? {
                crossover(a, b)
            } else {
                b.clone()
            };

            if rng.uniform() < mutation_rate {
                offspring = mutate(&offspring);
            }

            next_generation.push(offspring);
        }

        next_generation.extend_from_slice(unpaired);

        Ok(next_generation)
    }
}
