//! # Operators
//!
//! The behavior functions a caller plugs into the evolver. They are plain
//! closures over phenotype references:
//!
//! - mutate: `Fn(&P) -> P`
//! - crossover: `Fn(&P, &P) -> P`
//! - fitness: `Fn(&P) -> i64`, higher is better
//! - does_a_beat_b: `Fn(&P, &P) -> bool`, optional; when set it replaces the
//!   fitness comparison in competition selection
//!
//! ## Example
//!
//! ```rust
//! use genevolve::operators::Operators;
//!
//! let ops = Operators::<i64>::new()
//!     .with_mutate(|x| x + 1)
//!     .with_crossover(|a, b| (a + b) / 2)
//!     .with_fitness(|x| -x.abs());
//!
//! assert_eq!(ops.crossover(&4, &8).unwrap(), 6);
//! assert!(ops.a_beats_b(&1, &-3).unwrap());
//! ```

use std::fmt;

use crate::error::{GeneticError, OptionExt, Result};
use crate::phenotype::Phenotype;

/// Replaces a phenotype with a perturbed copy.
pub type MutateFn<P> = Box<dyn Fn(&P) -> P>;
/// Combines two parents into one offspring.
pub type CrossoverFn<P> = Box<dyn Fn(&P, &P) -> P>;
/// Scores a phenotype; higher is better.
pub type FitnessFn<P> = Box<dyn Fn(&P) -> i64>;
/// Direct comparator: does the first phenotype beat the second?
pub type BeatsFn<P> = Box<dyn Fn(&P, &P) -> bool>;

/// The set of behavior functions shared by all selection strategies.
///
/// Each function is optional so an evolver can be created empty and
/// configured later. Strategies ask for what they need through the accessor
/// methods, which fail with [`GeneticError::MissingBehavior`] when a function
/// is unset.
pub struct Operators<P> {
    mutate: Option<MutateFn<P>>,
    crossover: Option<CrossoverFn<P>>,
    fitness: Option<FitnessFn<P>>,
    does_a_beat_b: Option<BeatsFn<P>>,
}

impl<P: Phenotype> Operators<P> {
    /// Creates an empty set of operators.
    pub fn new() -> Self {
        Self {
            mutate: None,
            crossover: None,
            fitness: None,
            does_a_beat_b: None,
        }
    }

    pub fn with_mutate(mut self, mutate: impl Fn(&P) -> P + 'static) -> Self {
        self.mutate = Some(Box::new(mutate));
        self
    }

    pub fn with_crossover(mut self, crossover: impl Fn(&P, &P) -> P + 'static) -> Self {
        self.crossover = Some(Box::new(crossover));
        self
    }

    pub fn with_fitness(mut self, fitness: impl Fn(&P) -> i64 + 'static) -> Self {
        self.fitness = Some(Box::new(fitness));
        self
    }

    pub fn with_does_a_beat_b(mut self, does_a_beat_b: impl Fn(&P, &P) -> bool + 'static) -> Self {
        self.does_a_beat_b = Some(Box::new(does_a_beat_b));
        self
    }

    pub fn set_mutate(&mut self, mutate: Option<MutateFn<P>>) {
        self.mutate = mutate;
    }

    pub fn set_crossover(&mut self, crossover: Option<CrossoverFn<P>>) {
        self.crossover = crossover;
    }

    pub fn set_fitness(&mut self, fitness: Option<FitnessFn<P>>) {
        self.fitness = fitness;
    }

    pub fn set_does_a_beat_b(&mut self, does_a_beat_b: Option<BeatsFn<P>>) {
        self.does_a_beat_b = does_a_beat_b;
    }

    pub fn has_mutate(&self) -> bool {
        self.mutate.is_some()
    }

    pub fn has_crossover(&self) -> bool {
        self.crossover.is_some()
    }

    pub fn has_fitness(&self) -> bool {
        self.fitness.is_some()
    }

    pub fn has_does_a_beat_b(&self) -> bool {
        self.does_a_beat_b.is_some()
    }

    /// Returns the mutation function.
    pub fn mutate_fn(&self) -> Result<&MutateFn<P>> {
        self.mutate
            .as_ref()
            .ok_or_else_genetic(|| GeneticError::MissingBehavior("mutate"))
    }

    /// Returns the crossover function.
    pub fn crossover_fn(&self) -> Result<&CrossoverFn<P>> {
        self.crossover
            .as_ref()
            .ok_or_else_genetic(|| GeneticError::MissingBehavior("crossover"))
    }

    /// Returns the fitness function.
    pub fn fitness_fn(&self) -> Result<&FitnessFn<P>> {
        self.fitness
            .as_ref()
            .ok_or_else_genetic(|| GeneticError::MissingBehavior("fitness"))
    }

    pub fn mutate(&self, phenotype: &P) -> Result<P> {
        Ok(self.mutate_fn()?(phenotype))
    }

    pub fn crossover(&self, a: &P, b: &P) -> Result<P> {
        Ok(self.crossover_fn()?(a, b))
    }

    pub fn fitness(&self, phenotype: &P) -> Result<i64> {
        Ok(self.fitness_fn()?(phenotype))
    }

    /// Decides whether `a` wins against `b`.
    ///
    /// The comparator decides when it is set. Otherwise `a` wins iff
    /// `fitness(a) >= fitness(b)`, so ties go to `a`.
    pub fn a_beats_b(&self, a: &P, b: &P) -> Result<bool> {
        if let Some(does_a_beat_b) = &self.does_a_beat_b {
            return Ok(does_a_beat_b(a, b));
        }

        let fitness = self.fitness_fn()?;
        Ok(fitness(a) >= fitness(b))
    }
}

impl<P: Phenotype> Default for Operators<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> fmt::Debug for Operators<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operators")
            .field("mutate", &self.mutate.is_some())
            .field("crossover", &self.crossover.is_some())
            .field("fitness", &self.fitness.is_some())
            .field("does_a_beat_b", &self.does_a_beat_b.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_behaviors() {
        let ops = Operators::<i64>::new();

        assert_eq!(ops.mutate(&1), Err(GeneticError::MissingBehavior("mutate")));
        assert_eq!(
            ops.crossover(&1, &2),
            Err(GeneticError::MissingBehavior("crossover"))
        );
        assert_eq!(ops.fitness(&1), Err(GeneticError::MissingBehavior("fitness")));
        assert_eq!(
            ops.a_beats_b(&1, &2),
            Err(GeneticError::MissingBehavior("fitness"))
        );
    }

    #[test]
    fn test_fitness_ties_favor_first() {
        let ops = Operators::<i64>::new().with_fitness(|x| x % 2);

        assert!(ops.a_beats_b(&2, &4).unwrap());
        assert!(ops.a_beats_b(&3, &4).unwrap());
        assert!(!ops.a_beats_b(&4, &3).unwrap());
    }

    #[test]
    fn test_comparator_overrides_fitness() {
        let ops = Operators::<i64>::new()
            .with_fitness(|x| *x)
            .with_does_a_beat_b(|a, b| a < b);

        assert!(ops.a_beats_b(&1, &10).unwrap());
        assert!(!ops.a_beats_b(&10, &1).unwrap());
    }

    #[test]
    fn test_comparator_without_fitness() {
        let ops = Operators::<i64>::new().with_does_a_beat_b(|_, _| true);
        assert!(ops.a_beats_b(&1, &2).unwrap());
    }

    #[test]
    fn test_setters_clear_and_replace() {
        let mut ops = Operators::<i64>::new().with_mutate(|x| x + 1);
        assert!(ops.has_mutate());

        ops.set_mutate(None);
        assert!(!ops.has_mutate());

        ops.set_mutate(Some(Box::new(|x: &i64| x * 10)));
        assert_eq!(ops.mutate(&3).unwrap(), 30);
    }

    #[test]
    fn test_debug_lists_configured_functions() {
        let ops = Operators::<i64>::new().with_crossover(|a, _| *a);
        let rendered = format!("{:?}", ops);
        assert!(rendered.contains("crossover: true"));
        assert!(rendered.contains("mutate: false"));
    }
}
