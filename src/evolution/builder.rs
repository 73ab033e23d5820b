use crate::{
    error::{GeneticError, Result},
    operators::{BeatsFn, Operators},
    phenotype::Phenotype,
    rng::RandomNumberGenerator,
};

use super::{
    evolver::{CustomSelectionFn, Evolver},
    options::EvolutionOptions,
};

/// Fluent construction of an [`Evolver`].
///
/// # Examples
///
/// ```
/// use genevolve::evolution::{EvolutionOptions, EvolverBuilder, GeneticType};
///
/// let evolver = EvolverBuilder::new()
///     .population(vec![1_i64, 2, 3, 4])
///     .options(
///         EvolutionOptions::builder()
///             .genetic_type(GeneticType::Roulette)
///             .mutation_rate(0.1)
///             .build(),
///     )
///     .mutate(|x: &i64| x + 1)
///     .crossover(|a: &i64, b: &i64| *a.max(b))
///     .fitness(|x: &i64| *x)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// assert_eq!(evolver.pop_size(), 4);
/// assert_eq!(evolver.genetic_type(), GeneticType::Roulette);
/// ```
pub struct EvolverBuilder<P: Phenotype> {
    population: Option<Vec<P>>,
    options: Option<EvolutionOptions>,
    operators: Operators<P>,
    custom_selection: Option<CustomSelectionFn<P>>,
    rng: Option<RandomNumberGenerator>,
}

impl<P: Phenotype> EvolverBuilder<P> {
    pub fn new() -> Self {
        Self {
            population: None,
            options: None,
            operators: Operators::new(),
            custom_selection: None,
            rng: None,
        }
    }

    pub fn population(mut self, population: Vec<P>) -> Self {
        self.population = Some(population);
        self
    }

    pub fn options(mut self, options: EvolutionOptions) -> Self {
        self.options = Some(options);
        self
    }

    pub fn mutate(mut self, mutate: impl Fn(&P) -> P + 'static) -> Self {
        self.operators = self.operators.with_mutate(mutate);
        self
    }

    pub fn crossover(mut self, crossover: impl Fn(&P, &P) -> P + 'static) -> Self {
        self.operators = self.operators.with_crossover(crossover);
        self
    }

    pub fn fitness(mut self, fitness: impl Fn(&P) -> i64 + 'static) -> Self {
        self.operators = self.operators.with_fitness(fitness);
        self
    }

    pub fn does_a_beat_b(mut self, does_a_beat_b: impl Fn(&P, &P) -> bool + 'static) -> Self {
        let does_a_beat_b: BeatsFn<P> = Box::new(does_a_beat_b);
        self.operators.set_does_a_beat_b(Some(does_a_beat_b));
        self
    }

    pub fn custom_selection(
        mut self,
        custom_selection: impl Fn(&Evolver<P>) -> Option<Vec<P>> + 'static,
    ) -> Self {
        self.custom_selection = Some(Box::new(custom_selection));
        self
    }

    /// Uses a generator seeded with `seed`.
    pub fn seed(mut self, seed: u64) -> Self {
        self.rng = Some(RandomNumberGenerator::from_seed(seed));
        self
    }

    pub fn rng(mut self, rng: RandomNumberGenerator) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Builds the evolver.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::InvalidPopulation` if no population or an empty
    /// one was given, and `GeneticError::Configuration` if the options do not
    /// validate.
    pub fn build(self) -> Result<Evolver<P>> {
        let population = self
            .population
            .filter(|population| !population.is_empty())
            .ok_or(GeneticError::InvalidPopulation)?;

        let options = self.options.unwrap_or_default();
        options.validate()?;

        Ok(Evolver::from_parts(
            population,
            options,
            self.operators,
            self.custom_selection,
            self.rng.unwrap_or_default(),
        ))
    }
}

impl<P: Phenotype> Default for EvolverBuilder<P> {
    fn default() -> Self {
        Self::new()
    }
}
