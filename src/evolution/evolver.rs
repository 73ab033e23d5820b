use std::fmt;

use tracing::{debug, trace, warn};

use super::options::{EvolutionOptions, GeneticType};
use crate::{
    error::{GeneticError, OptionExt, Result},
    operators::{BeatsFn, CrossoverFn, FitnessFn, MutateFn, Operators},
    phenotype::Phenotype,
    rng::RandomNumberGenerator,
    selection::{
        CompetitionSelection, RankBasedSelection, RouletteWheelSelection, SelectionStrategy,
    },
};

/// Caller-supplied reproduction used by [`GeneticType::Custom`].
///
/// It sees the whole evolver (population, options, operators) and returns the
/// next generation, or `None` to keep the current one.
pub type CustomSelectionFn<P> = Box<dyn Fn(&Evolver<P>) -> Option<Vec<P>>>;

/// Owns a population and advances it one generation at a time.
///
/// Every generation the evolver shuffles the pairings with `pop_size` random
/// swaps, runs the configured [`GeneticType`] and replaces the population
/// with the result. The population length never changes except through
/// [`Evolver::change_pop_size`].
///
/// The evolver is single-threaded; share it across threads only behind
/// external synchronization.
///
/// # Examples
///
/// ```
/// use genevolve::evolution::{Evolver, GeneticType};
///
/// let mut evolver = Evolver::new(
///     vec![1_i64, 8, 3, 12, 5, 7],
///     0.2,
///     GeneticType::Competition,
///     |x: &i64| x + 1,
///     |a: &i64, b: &i64| (a + b) / 2,
///     |x: &i64| -(x - 10).abs(),
///     None,
/// )
/// .unwrap();
///
/// for _ in 0..10 {
///     evolver.evolve().unwrap();
/// }
///
/// assert_eq!(evolver.generation(), 10);
/// assert_eq!(evolver.pop_size(), 6);
/// ```
pub struct Evolver<P: Phenotype> {
    options: EvolutionOptions,
    generation: usize,
    operators: Operators<P>,
    custom_selection: Option<CustomSelectionFn<P>>,
    population: Vec<P>,
    rng: RandomNumberGenerator,
}

impl<P: Phenotype> Evolver<P> {
    /// Creates a placeholder evolver.
    ///
    /// The population holds a single `P::default()`, the strategy is
    /// [`GeneticType::Competition`] and no behavior function is set.
    /// [`Evolver::evolve`] fails with [`GeneticError::MissingBehavior`] until the
    /// required functions are configured.
    pub fn empty() -> Self {
        Self::from_parts(
            vec![P::default()],
            EvolutionOptions::default(),
            Operators::new(),
            None,
            RandomNumberGenerator::new(),
        )
    }

    /// Creates an evolver that owns `initial_population` as its first generation.
    ///
    /// # Arguments
    ///
    /// * `initial_population` - The first generation. Must not be empty.
    /// * `mutation_rate` - Probability that an offspring is mutated.
    /// * `genetic_type` - The reproduction strategy.
    /// * `mutate`, `crossover`, `fitness` - Behavior functions.
    /// * `does_a_beat_b` - Optional comparator that replaces fitness in
    ///   competition. It is taken already boxed so that `None` needs no type
    ///   annotation; pass `Some(Box::new(|a: &P, b: &P| ...))`, or use
    ///   [`EvolverBuilder::does_a_beat_b`](super::EvolverBuilder::does_a_beat_b),
    ///   which accepts a plain closure.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::InvalidPopulation`] if `initial_population` is
    /// empty, or [`GeneticError::Configuration`] if `mutation_rate` is NaN.
    pub fn new(
        initial_population: Vec<P>,
        mutation_rate: f32,
        genetic_type: GeneticType,
        mutate: impl Fn(&P) -> P + 'static,
        crossover: impl Fn(&P, &P) -> P + 'static,
        fitness: impl Fn(&P) -> i64 + 'static,
        does_a_beat_b: Option<BeatsFn<P>>,
    ) -> Result<Self> {
        if initial_population.is_empty() {
            return Err(GeneticError::InvalidPopulation);
        }

        let options = EvolutionOptions::new(mutation_rate, genetic_type);
        options.validate()?;

        let mut operators = Operators::new()
            .with_mutate(mutate)
            .with_crossover(crossover)
            .with_fitness(fitness);
        operators.set_does_a_beat_b(does_a_beat_b);

        Ok(Self::from_parts(
            initial_population,
            options,
            operators,
            None,
            RandomNumberGenerator::new(),
        ))
    }

    /// Assembles an evolver from validated parts; `population` is non-empty.
    pub(crate) fn from_parts(
        population: Vec<P>,
        options: EvolutionOptions,
        operators: Operators<P>,
        custom_selection: Option<CustomSelectionFn<P>>,
        rng: RandomNumberGenerator,
    ) -> Self {
        Self {
            options,
            generation: 0,
            operators,
            custom_selection,
            population,
            rng,
        }
    }

    /// Read-only view of the current population.
    pub fn population(&self) -> &[P] {
        &self.population
    }

    /// Mutable view of the current population.
    ///
    /// Edits go straight into the evolver's state and take part in the next
    /// generation. The slice cannot change the population length.
    pub fn population_mut(&mut self) -> &mut [P] {
        &mut self.population
    }

    pub fn pop_size(&self) -> usize {
        self.population.len()
    }

    /// Resizes the population.
    ///
    /// Shrinking drops the tail. Growing appends `P::default()` values, which
    /// the caller should overwrite before relying on them.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::InvalidSize`] if `new_size` is 0. The population
    /// is unchanged on error.
    pub fn change_pop_size(&mut self, new_size: usize) -> Result<()> {
        if new_size < 1 {
            return Err(GeneticError::InvalidSize(new_size));
        }
        if new_size == self.pop_size() {
            return Ok(());
        }

        debug!(from = self.pop_size(), to = new_size, "resizing population");
        self.population.resize_with(new_size, P::default);

        Ok(())
    }

    /// Number of completed generations.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Overrides the generation counter.
    pub fn set_generation(&mut self, generation: usize) {
        self.generation = generation;
    }

    pub fn genetic_type(&self) -> GeneticType {
        self.options.get_genetic_type()
    }

    pub fn set_genetic_type(&mut self, genetic_type: GeneticType) {
        self.options.set_genetic_type(genetic_type);
    }

    pub fn mutation_rate(&self) -> f32 {
        self.options.get_mutation_rate()
    }

    pub fn set_mutation_rate(&mut self, mutation_rate: f32) {
        self.options.set_mutation_rate(mutation_rate);
    }

    pub fn options(&self) -> &EvolutionOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut EvolutionOptions {
        &mut self.options
    }

    pub fn operators(&self) -> &Operators<P> {
        &self.operators
    }

    pub fn set_mutate(&mut self, mutate: impl Fn(&P) -> P + 'static) {
        let mutate: MutateFn<P> = Box::new(mutate);
        self.operators.set_mutate(Some(mutate));
    }

    pub fn set_crossover(&mut self, crossover: impl Fn(&P, &P) -> P + 'static) {
        let crossover: CrossoverFn<P> = Box::new(crossover);
        self.operators.set_crossover(Some(crossover));
    }

    pub fn set_fitness(&mut self, fitness: impl Fn(&P) -> i64 + 'static) {
        let fitness: FitnessFn<P> = Box::new(fitness);
        self.operators.set_fitness(Some(fitness));
    }

    /// Sets or clears the comparator used by competition selection.
    pub fn set_does_a_beat_b(&mut self, does_a_beat_b: Option<BeatsFn<P>>) {
        self.operators.set_does_a_beat_b(does_a_beat_b);
    }

    pub fn set_custom_selection(
        &mut self,
        custom_selection: impl Fn(&Evolver<P>) -> Option<Vec<P>> + 'static,
    ) {
        self.custom_selection = Some(Box::new(custom_selection));
    }

    /// Replaces the random number generator, e.g. with a seeded one.
    pub fn set_rng(&mut self, rng: RandomNumberGenerator) {
        self.rng = rng;
    }

    /// Swaps `times` random pairs of distinct individuals.
    pub(crate) fn randomize_population(&mut self, times: usize) {
        let size = self.pop_size();
        if size == 1 {
            return;
        }

        trace!(times, size, "shuffling pairings");
        for _ in 0..times {
            let a = self.rng.index(size);
            let mut b = self.rng.index(size);
            while a == b {
                b = self.rng.index(size);
            }
            self.population.swap(a, b);
        }
    }

    /// The built-in strategy for the configured type, `None` for custom.
    fn built_in_strategy(&self) -> Result<Option<Box<dyn SelectionStrategy<P>>>> {
        let elitism = self.options.get_elitism();
        let strategy: Box<dyn SelectionStrategy<P>> = match self.options.get_genetic_type() {
            GeneticType::Rank => Box::new(RankBasedSelection::new(
                self.options.get_selection_pressure(),
                elitism,
            )?),
            GeneticType::Roulette => Box::new(RouletteWheelSelection::new(elitism)),
            GeneticType::Competition => Box::new(CompetitionSelection::new()),
            GeneticType::Custom => return Ok(None),
        };
        Ok(Some(strategy))
    }

    fn custom_selection_fn(&self) -> Result<&CustomSelectionFn<P>> {
        self.custom_selection
            .as_ref()
            .ok_or_else_genetic(|| GeneticError::MissingBehavior("custom selection"))
    }

    /// Advances the population by one generation.
    ///
    /// 1. Checks that the strategy's behavior functions are configured.
    /// 2. Shuffles pairings with `pop_size` random swaps.
    /// 3. Runs the strategy for the configured [`GeneticType`].
    /// 4. Copies the result into a buffer of exactly `pop_size`: a longer
    ///    result is cut, a shorter one is padded with `P::default()`. A custom
    ///    selection returning `None` keeps the current population.
    /// 5. Increments the generation counter.
    ///
    /// # Returns
    ///
    /// The generation counter after this call.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::MissingBehavior`] if a required function is not
    /// set, or [`GeneticError::Configuration`] for an invalid selection
    /// pressure. Nothing is changed on error.
    pub fn evolve(&mut self) -> Result<usize> {
        let strategy = self.built_in_strategy()?;
        match &strategy {
            Some(strategy) => strategy.check(&self.operators)?,
            None => {
                self.custom_selection_fn()?;
            }
        }

        let times = self.pop_size();
        self.randomize_population(times);

        let next_generation = match strategy {
            Some(strategy) => Some(strategy.next_generation(
                &self.population,
                &self.operators,
                self.options.get_mutation_rate(),
                &mut self.rng,
            )?),
            None => {
                let select = self.custom_selection_fn()?;
                select(self)
            }
        };

        if let Some(next_generation) = next_generation {
            self.replace_population(next_generation);
        } else {
            debug!(generation = self.generation, "custom selection kept the population");
        }

        self.generation += 1;
        debug!(
            generation = self.generation,
            strategy = ?self.options.get_genetic_type(),
            size = self.pop_size(),
            "generation complete"
        );

        Ok(self.generation)
    }

    fn replace_population(&mut self, mut next_generation: Vec<P>) {
        let size = self.pop_size();
        if next_generation.len() != size {
            warn!(
                expected = size,
                actual = next_generation.len(),
                "next generation has the wrong size, fitting it to the population"
            );
            next_generation.resize_with(size, P::default);
        }
        self.population = next_generation;
    }
}

impl<P: Phenotype> Default for Evolver<P> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<P: Phenotype> fmt::Debug for Evolver<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Evolver")
            .field("options", &self.options)
            .field("generation", &self.generation)
            .field("operators", &self.operators)
            .field("custom_selection", &self.custom_selection.is_some())
            .field("population", &self.population)
            .finish_non_exhaustive()
    }
}
