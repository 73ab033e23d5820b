//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct holds the tunable parameters of an
//! [`Evolver`](super::Evolver): the mutation rate, the reproduction strategy
//! and the knobs of the wheel-based strategies.
//!
//! ## Example
//!
//! ```rust
//! use genevolve::evolution::options::{EvolutionOptions, GeneticType};
//!
//! // Create a new EvolutionOptions instance with custom parameters
//! let custom_options = EvolutionOptions::new(0.05, GeneticType::Rank);
//!
//! // Create a new EvolutionOptions instance with default parameters
//! let default_options = EvolutionOptions::default();
//! assert_eq!(default_options.get_genetic_type(), GeneticType::Competition);
//! ```
//!
//! ## Fields
//!
//! - `mutation_rate`: Probability that an offspring is mutated. Not clamped;
//!   values at or below 0 disable mutation, values at or above 1 always mutate.
//! - `genetic_type`: Which reproduction strategy runs each generation.
//! - `selection_pressure`: Linear ranking pressure for `GeneticType::Rank`, in `[1.0, 2.0]`.
//! - `elitism`: Whether rank and roulette selection copy the fittest individual forward.

use crate::error::{GeneticError, Result};

/// Reproduction strategy run by [`Evolver::evolve`](super::Evolver::evolve).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GeneticType {
    /// Linear rank-based parent selection.
    Rank,
    /// Fitness-proportional parent selection.
    Roulette,
    /// Pairwise competition between shuffled neighbours.
    #[default]
    Competition,
    /// The caller's custom selection function.
    Custom,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionOptions {
    mutation_rate: f32,
    genetic_type: GeneticType,
    selection_pressure: f64,
    elitism: bool,
}

impl EvolutionOptions {
    pub fn new(mutation_rate: f32, genetic_type: GeneticType) -> Self {
        Self {
            mutation_rate,
            genetic_type,
            ..Self::default()
        }
    }

    pub fn get_mutation_rate(&self) -> f32 {
        self.mutation_rate
    }

    pub fn get_genetic_type(&self) -> GeneticType {
        self.genetic_type
    }

    pub fn get_selection_pressure(&self) -> f64 {
        self.selection_pressure
    }

    pub fn get_elitism(&self) -> bool {
        self.elitism
    }

    /// Sets the mutation rate.
    pub fn set_mutation_rate(&mut self, mutation_rate: f32) {
        self.mutation_rate = mutation_rate;
    }

    /// Sets the reproduction strategy.
    pub fn set_genetic_type(&mut self, genetic_type: GeneticType) {
        self.genetic_type = genetic_type;
    }

    /// Sets the rank selection pressure.
    pub fn set_selection_pressure(&mut self, selection_pressure: f64) {
        self.selection_pressure = selection_pressure;
    }

    /// Sets whether wheel-based strategies keep the fittest individual.
    pub fn set_elitism(&mut self, elitism: bool) {
        self.elitism = elitism;
    }

    /// Checks the options that have a valid range.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if the selection pressure is
    /// outside `[1.0, 2.0]` or the mutation rate is NaN.
    pub fn validate(&self) -> Result<()> {
        if !(1.0..=2.0).contains(&self.selection_pressure) {
            return Err(GeneticError::Configuration(format!(
                "Selection pressure must be in the range [1.0, 2.0], got {}",
                self.selection_pressure
            )));
        }

        if self.mutation_rate.is_nan() {
            return Err(GeneticError::Configuration(
                "Mutation rate cannot be NaN".to_string(),
            ));
        }

        Ok(())
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    ///
    /// # Example
    ///
    /// ```rust
    /// use genevolve::evolution::options::{EvolutionOptions, GeneticType};
    ///
    /// let options = EvolutionOptions::builder()
    ///     .mutation_rate(0.1)
    ///     .genetic_type(GeneticType::Roulette)
    ///     .elitism(false)
    ///     .build();
    ///
    /// assert!(!options.get_elitism());
    /// ```
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            mutation_rate: 0.0,
            genetic_type: GeneticType::Competition,
            selection_pressure: 1.5,
            elitism: true,
        }
    }
}

/// Builder for `EvolutionOptions`.
///
/// Provides a fluent interface for constructing `EvolutionOptions` instances.
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    mutation_rate: Option<f32>,
    genetic_type: Option<GeneticType>,
    selection_pressure: Option<f64>,
    elitism: Option<bool>,
}

impl EvolutionOptionsBuilder {
    pub fn mutation_rate(mut self, value: f32) -> Self {
        self.mutation_rate = Some(value);
        self
    }

    pub fn genetic_type(mut self, value: GeneticType) -> Self {
        self.genetic_type = Some(value);
        self
    }

    pub fn selection_pressure(mut self, value: f64) -> Self {
        self.selection_pressure = Some(value);
        self
    }

    pub fn elitism(mut self, value: bool) -> Self {
        self.elitism = Some(value);
        self
    }

    /// Builds the `EvolutionOptions` instance.
    pub fn build(self) -> EvolutionOptions {
        let defaults = EvolutionOptions::default();
        EvolutionOptions {
            mutation_rate: self.mutation_rate.unwrap_or(defaults.mutation_rate),
            genetic_type: self.genetic_type.unwrap_or(defaults.genetic_type),
            selection_pressure: self
                .selection_pressure
                .unwrap_or(defaults.selection_pressure),
            elitism: self.elitism.unwrap_or(defaults.elitism),
        }
    }
}
