use std::fmt::Debug;

use crate::error::Result;
use crate::operators::Operators;
use crate::phenotype::Phenotype;
use crate::rng::RandomNumberGenerator;

/// Trait for reproduction strategies.
///
/// A strategy turns the current population into the next generation: it
/// decides who reproduces, applies crossover and mutation through the
/// caller's [`Operators`], and returns a fresh sequence. The input slice is
/// never modified.
///
/// # Examples
///
/// ```
/// use genevolve::error::Result;
/// use genevolve::operators::Operators;
/// use genevolve::rng::RandomNumberGenerator;
/// use genevolve::selection::{CompetitionSelection, SelectionStrategy};
///
/// fn main() -> Result<()> {
///     let population = vec![10_i64, 5, 1, 9];
///     let ops = Operators::new()
///         .with_mutate(|x: &i64| x + 1)
///         .with_crossover(|a: &i64, b: &i64| a * 100 + b)
///         .with_fitness(|x: &i64| *x);
///     let mut rng = RandomNumberGenerator::from_seed(1);
///
///     let strategy = CompetitionSelection::new();
///     strategy.check(&ops)?;
///     let next = strategy.next_generation(&population, &ops, 0.0, &mut rng)?;
///
///     assert_eq!(next, vec![10, 1005, 1, 9]);
///     Ok(())
/// }
/// ```
pub trait SelectionStrategy<P>: Debug
where
    P: Phenotype,
{
    /// Verifies that every behavior function the strategy calls is configured.
    ///
    /// The default requires mutate, crossover and fitness.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::MissingBehavior`](crate::error::GeneticError::MissingBehavior)
    /// naming the first unset function.
    fn check(&self, operators: &Operators<P>) -> Result<()> {
        operators.mutate_fn()?;
        operators.crossover_fn()?;
        operators.fitness_fn()?;
        Ok(())
    }

    /// Produces the next generation from `population`.
    ///
    /// # Arguments
    ///
    /// * `population` - The current, already shuffled, population.
    /// * `operators` - The caller's behavior functions.
    /// * `mutation_rate` - Probability that an offspring is passed through mutate.
    /// * `rng` - Source of every random draw the strategy makes.
    ///
    /// # Returns
    ///
    /// A vector with as many phenotypes as `population`.
    ///
    /// # Errors
    ///
    /// Returns an error if the population is empty or a required behavior
    /// function is missing.
    fn next_generation(
        &self,
        population: &[P],
        operators: &Operators<P>,
        mutation_rate: f32,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<P>>;
}
