use crate::error::{GeneticError, Result};
use crate::operators::Operators;
use crate::phenotype::Phenotype;
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::SelectionStrategy;
use crate::selection::wheel::{self, Wheel};

/// A reproduction strategy that picks parents through roulette wheel selection.
///
/// Roulette wheel selection (also known as fitness proportionate selection)
/// picks a parent with probability proportional to its fitness.
///
/// Fitness is an `i64` and may be negative. When the lowest score is
/// negative, every score is shifted up by its magnitude so the worst
/// individual weighs zero. When all weights are zero the wheel is uniform.
///
/// Each offspring is `crossover(a, b)` of two independently drawn parents,
/// mutated with probability `mutation_rate`. With elitism the fittest
/// individual is copied unchanged into slot 0.
///
/// # Examples
///
/// ```
/// use genevolve::error::Result;
/// use genevolve::operators::Operators;
/// use genevolve::rng::RandomNumberGenerator;
/// use genevolve::selection::{RouletteWheelSelection, SelectionStrategy};
///
/// fn main() -> Result<()> {
///     // Only the individual scoring 5 has any weight on the wheel.
///     let population = vec![0_i64, 0, 5, 0];
///     let ops = Operators::new()
///         .with_mutate(|x: &i64| *x)
///         .with_crossover(|a: &i64, b: &i64| (a + b) / 2)
///         .with_fitness(|x: &i64| *x);
///     let mut rng = RandomNumberGenerator::new();
///
///     let selection = RouletteWheelSelection::new(false);
///     let next = selection.next_generation(&population, &ops, 0.0, &mut rng)?;
///
///     assert_eq!(next, vec![5, 5, 5, 5]);
///     Ok(())
/// }
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouletteWheelSelection {
    elitism: bool,
}

impl RouletteWheelSelection {
    pub fn new(elitism: bool) -> Self {
        Self { elitism }
    }

    pub fn elitism(&self) -> bool {
        self.elitism
    }

    /// Wheel weights in population order, shifted when any score is negative.
    fn weights(fitness: &[i64]) -> Vec<f64> {
        let offset = match fitness.iter().min() {
            Some(&min) if min < 0 => -(min as f64),
            _ => 0.0,
        };

        fitness.iter().map(|&f| f as f64 + offset).collect()
    }
}

impl Default for RouletteWheelSelection {
    fn default() -> Self {
        Self::new(true)
    }
}

impl<P> SelectionStrategy<P> for RouletteWheelSelection
where
    P: Phenotype,
{
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

        let fitness_fn = operators.fitness_fn()?;
        let fitness: Vec<i64> = population.iter().map(|p| fitness_fn(p)).collect();
        let wheel = Wheel::new(&Self::weights(&fitness));

        wheel::breed(
            population,
            &fitness,
            &wheel,
            self.elitism,
            operators,
            mutation_rate,
            rng,
        )
    }
}
