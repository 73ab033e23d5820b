use crate::error::{GeneticError, Result};
use crate::operators::Operators;
use crate::phenotype::Phenotype;
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::SelectionStrategy;
use crate::selection::wheel::{self, Wheel};

/// A reproduction strategy that picks parents by their rank in the population.
///
/// Individuals are sorted by fitness (worst first) and ranked from 0. Equal
/// scores share the average of the ranks they span, so equally fit
/// individuals are equally likely. Rank `r` out of `n` receives the linear
/// ranking probability
///
/// `P(r) = (2 - s) / n + 2·r·(s - 1) / (n·(n - 1))`
///
/// where `s` is the selection pressure in `[1.0, 2.0]`. At 1.0 every rank is
/// equally likely; at 2.0 a uniquely worst individual is never chosen. The
/// probability never decreases with rank.
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
/// use genevolve::selection::{RankBasedSelection, SelectionStrategy};
///
/// fn main() -> Result<()> {
///     let population = vec![1_i64, 2, 3, 4, 5];
///     let ops = Operators::new()
///         .with_mutate(|x: &i64| *x)
///         .with_crossover(|a: &i64, b: &i64| (a + b) / 2)
///         .with_fitness(|x: &i64| *x);
///     let mut rng = RandomNumberGenerator::from_seed(9);
///
///     let selection = RankBasedSelection::new(1.5, true)?;
///     let next = selection.next_generation(&population, &ops, 0.0, &mut rng)?;
///
///     assert_eq!(next.len(), 5);
///     assert_eq!(next[0], 5);
///     Ok(())
/// }
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct RankBasedSelection {
    /// Higher values increase selection pressure.
    selection_pressure: f64,
    elitism: bool,
}

impl RankBasedSelection {
    /// Creates a new RankBasedSelection strategy.
    ///
    /// # Errors
    ///
    /// Returns a `GeneticError::Configuration` error if `selection_pressure`
    /// is not in the range [1.0, 2.0].
    pub fn new(selection_pressure: f64, elitism: bool) -> Result<Self> {
        if !(1.0..=2.0).contains(&selection_pressure) {
            return Err(GeneticError::Configuration(
                "Selection pressure must be in the range [1.0, 2.0]".to_string(),
            ));
        }

        Ok(Self {
            selection_pressure,
            elitism,
        })
    }

    pub fn selection_pressure(&self) -> f64 {
        self.selection_pressure
    }

    pub fn elitism(&self) -> bool {
        self.elitism
    }

    /// Selection weight of every individual, in population order.
    fn rank_weights(&self, fitness: &[i64]) -> Vec<f64> {
        let n = fitness.len();
        if n == 1 {
            return vec![1.0];
        }

        let mut indices: Vec<usize> = (0..n).collect();
        indices.sort_by_key(|&i| fitness[i]);

        let mut rank_map = vec![0.0; n];
        let mut start = 0;
        while start < n {
            let score = fitness[indices[start]];
            let end = indices[start..]
                .iter()
                .position(|&i| fitness[i] != score)
                .map_or(n, |len| start + len);

            // Ties span ranks start..end.
            let rank = (start + end - 1) as f64 / 2.0;
            for &idx in &indices[start..end] {
                rank_map[idx] = rank;
            }
            start = end;
        }

        let n = n as f64;
        let s = self.selection_pressure;
        rank_map
            .into_iter()
            .map(|rank| (2.0 - s) / n + (2.0 * rank * (s - 1.0)) / (n * (n - 1.0)))
            .collect()
    }
}

impl Default for RankBasedSelection {
    fn default() -> Self {
        Self {
            selection_pressure: 1.5,
            elitism: true,
        }
    }
}

impl<P> SelectionStrategy<P> for RankBasedSelection
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
        let wheel = Wheel::new(&self.rank_weights(&fitness));

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
